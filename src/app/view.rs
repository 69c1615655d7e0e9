// SPDX-License-Identifier: MPL-2.0
//! Top-level view: page area, footer and toast overlay.

use super::Message;
use crate::site::SiteInfo;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::footer;
use crate::ui::navigation::{Router, HOME};
use crate::ui::notifications::{Manager, Toast};
use chrono::Datelike;
use iced::widget::{button, responsive, scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Size};

const PAGE_AREA_HEIGHT: f32 = 320.0;

/// Contextual data needed to render the application.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub site: &'a SiteInfo,
    pub footer: &'a footer::State,
    pub router: &'a Router,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = responsive(move |size: Size| body(ctx, size.width));

    Stack::new()
        .push(body)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn body(ctx: ViewContext<'_>, width: f32) -> Element<'_, Message> {
    let footer = footer::view(footer::ViewContext {
        site: ctx.site,
        email: &ctx.footer.email,
        year: chrono::Local::now().year(),
        width,
    })
    .map(Message::Footer);

    let content = Column::new()
        .width(Length::Fill)
        .push(page_area(ctx.site, ctx.router))
        .push(footer);

    scrollable(content).height(Length::Fill).into()
}

fn page_area<'a>(site: &'a SiteInfo, router: &'a Router) -> Element<'a, Message> {
    let route = router.current();

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(page_title(site, route)).size(typography::TITLE_LG))
        .push(Text::new(route).size(typography::BODY_SM));

    if router.can_go_back() {
        column = column.push(
            button(Text::new("← Back").size(typography::BODY)).on_press(Message::Back),
        );
    }

    Container::new(column)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PAGE_AREA_HEIGHT))
        .padding(spacing::XL)
        .into()
}

/// Heading for `route`: the site name at home, else the matching link label.
pub fn page_title(site: &SiteInfo, route: &str) -> String {
    if route == HOME {
        return site.name.clone();
    }

    site.label_for(route)
        .or_else(|| {
            footer::LEGAL_LINKS
                .iter()
                .find(|(_, href)| *href == route)
                .map(|(label, _)| *label)
        })
        .map_or_else(|| route.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_title_is_site_name() {
        let site = SiteInfo::default();
        assert_eq!(page_title(&site, HOME), site.name);
    }

    #[test]
    fn link_routes_use_labels() {
        let site = SiteInfo::default();
        assert_eq!(page_title(&site, "/careers"), "Careers");
        assert_eq!(page_title(&site, "/privacy"), "Privacy Policy");
    }

    #[test]
    fn unknown_route_falls_back_to_path() {
        let site = SiteInfo::default();
        assert_eq!(page_title(&site, "/missing"), "/missing");
    }

    #[test]
    fn view_builds() {
        let site = SiteInfo::default();
        let state = footer::State::new();
        let router = Router::new();
        let manager = Manager::new();
        let _element = view(ViewContext {
            site: &site,
            footer: &state,
            router: &router,
            notifications: &manager,
        });
    }
}
