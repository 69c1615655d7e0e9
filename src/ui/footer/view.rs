// SPDX-License-Identifier: MPL-2.0
//! Footer layout.

use super::{columns_for_width, copyright_line, form, Message, ViewContext, LEGAL_LINKS};
use crate::site::LinkRecord;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navigation::link;
use crate::ui::styles;
use crate::ui::{icons, theming::ColorScheme};
use iced::widget::{button, rule, text, Column, Container, Row, Space, Svg, Text};
use iced::{alignment, Element, Length, Theme};

pub const COMPANY_HEADING: &str = "Company";
pub const SUPPORT_HEADING: &str = "Support";

/// Icon and accessible label of each social link, in display order.
const SOCIAL_LINKS: [(fn() -> Svg<'static>, &str); 4] = [
    (icons::facebook, "Facebook page"),
    (icons::twitter, "Twitter page"),
    (icons::instagram, "Instagram page"),
    (icons::linkedin, "LinkedIn page"),
];

const SOCIAL_HREF: &str = "#";

/// Render the footer.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sections = vec![
        brand_section(&ctx),
        link_list(COMPANY_HEADING, &ctx.site.company_links),
        link_list(SUPPORT_HEADING, &ctx.site.support_links),
        form::section(ctx.email),
    ];

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(grid(sections, columns_for_width(ctx.width)))
        .push(rule::horizontal(1))
        .push(bottom_bar(&ctx));

    Container::new(content)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .style(styles::container::footer)
        .into()
}

/// Lays `sections` out in rows of `columns` equal-width cells.
fn grid(sections: Vec<Element<'_, Message>>, columns: usize) -> Element<'_, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::XL);
    let mut row = Row::new().spacing(spacing::XL);
    let mut filled = 0;

    for section in sections {
        row = row.push(Container::new(section).width(Length::FillPortion(1)));
        filled += 1;
        if filled == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::XL);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn brand_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let names = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.site.name.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.site.name_localized.as_str())
                .size(typography::BODY_SM)
                .style(muted_text),
        );

    let logo = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::logo(), sizing::ICON_LG))
        .push(names);

    let socials = SOCIAL_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, (icon, label)| {
            row.push(social_link(icon(), label))
        });

    Column::new()
        .spacing(spacing::MD)
        .push(link(logo, "/"))
        .push(
            Text::new(ctx.site.tagline.as_str())
                .size(typography::BODY_SM)
                .style(muted_text),
        )
        .push(socials)
        .into()
}

fn social_link(icon: Svg<'static>, label: &str) -> Element<'static, Message> {
    let icon = icons::sized(icon, sizing::ICON_MD).style(|theme: &Theme, status| {
        let scheme = ColorScheme::for_theme(theme);
        iced::widget::svg::Style {
            color: Some(match status {
                iced::widget::svg::Status::Hovered => scheme.brand_primary,
                iced::widget::svg::Status::Idle => scheme.text_muted,
            }),
        }
    });

    styles::tooltip::labeled(link(icon, SOCIAL_HREF), label.to_string()).into()
}

fn link_list<'a>(heading: &'a str, links: &'a [LinkRecord]) -> Element<'a, Message> {
    links.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(heading).size(typography::TITLE_SM)),
        |column, record| {
            column.push(link(
                Text::new(record.label.as_str()).size(typography::BODY_SM),
                &record.href,
            ))
        },
    )
    .into()
}

fn bottom_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let legal = LEGAL_LINKS
        .into_iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, (label, href))| {
            let row = if index > 0 {
                row.push(Text::new("|").size(typography::CAPTION).style(muted_text))
            } else {
                row
            };
            row.push(
                button(Text::new(label).size(typography::CAPTION))
                    .padding(0)
                    .style(styles::button::muted_link)
                    .on_press(Message::LinkPressed(href.to_string())),
            )
        })
        .align_y(alignment::Vertical::Center);

    let notice = Text::new(copyright_line(ctx.year, &ctx.site.name))
        .size(typography::CAPTION)
        .style(muted_text);

    if columns_for_width(ctx.width) == 1 {
        Column::new()
            .spacing(spacing::XS)
            .push(notice)
            .push(legal)
            .into()
    } else {
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(notice)
            .push(Space::new().width(Length::Fill))
            .push(legal)
            .into()
    }
}

fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteInfo;

    fn context(site: &SiteInfo, width: f32) -> ViewContext<'_> {
        ViewContext {
            site,
            email: "",
            year: 2026,
            width,
        }
    }

    #[test]
    fn view_builds_at_every_breakpoint() {
        let site = SiteInfo::default();
        for width in [360.0, 800.0, 1280.0] {
            let _element = view(context(&site, width));
        }
    }

    #[test]
    fn view_builds_with_empty_link_lists() {
        let site = SiteInfo {
            company_links: Vec::new(),
            support_links: Vec::new(),
            ..SiteInfo::default()
        };
        let _element = view(context(&site, 1280.0));
    }

    #[test]
    fn grid_tolerates_zero_columns() {
        let sections = vec![Text::new("a").into(), Text::new("b").into()];
        let _element: Element<'_, Message> = grid(sections, 0);
    }
}
