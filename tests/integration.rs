// SPDX-License-Identifier: MPL-2.0
use site_footer::app::{App, Flags, Message};
use site_footer::config::{self, Config, GeneralConfig, SiteConfig};
use site_footer::site::{LinkRecord, SiteInfo};
use site_footer::ui::footer::{self, Event};
use site_footer::ui::navigation::{Destination, Router};
use site_footer::ui::notifications::{Manager, Severity};
use site_footer::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

const INVALID: &str = "Invalid email. Only Thai, English letters, and numbers are allowed.";

#[test]
fn test_site_overrides_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
        },
        site: SiteConfig {
            name: Some("Hammer Hire".to_string()),
            name_localized: Some("เช่าค้อน".to_string()),
            company_links: Some(vec![LinkRecord::new("About Us", "/about")]),
            ..SiteConfig::default()
        },
    };
    let content = toml::to_string_pretty(&config).expect("Failed to serialize config");
    fs::write(&path, content).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let site = SiteInfo::from_config(&loaded.site);
    assert_eq!(site.name, "Hammer Hire");
    assert_eq!(site.name_localized, "เช่าค้อน");
    assert_eq!(site.company_links, vec![LinkRecord::new("About Us", "/about")]);
    // Untouched fields keep the built-in values.
    assert_eq!(site.tagline, SiteInfo::default().tagline);
    assert_eq!(site.support_links, SiteInfo::default().support_links);
}

#[test]
fn test_partial_settings_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[site]\ntagline = \"Rent it today.\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::System);

    let site = SiteInfo::from_config(&config.site);
    assert_eq!(site.tagline, "Rent it today.");
    assert_eq!(site.name, SiteInfo::default().name);
}

#[test]
fn test_invalid_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"sepia\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn test_subscription_sequence_on_footer_state() {
    let mut state = footer::State::new();
    let mut manager = Manager::new();

    let mut submit = |state: &mut footer::State| match footer::update(state, footer::Message::Submit) {
        Event::Notify(notification) => {
            let outcome = (notification.severity(), notification.title().to_string());
            manager.push(notification);
            outcome
        }
        other => panic!("expected Notify, got {other:?}"),
    };

    assert_eq!(
        submit(&mut state),
        (Severity::Error, "Email is required".to_string())
    );

    footer::update(&mut state, footer::Message::EmailChanged("test#1@mail.com".into()));
    assert_eq!(submit(&mut state), (Severity::Error, INVALID.to_string()));
    assert_eq!(state.email, "test#1@mail.com");

    footer::update(&mut state, footer::Message::EmailChanged("ทดสอบ@test.com".into()));
    assert_eq!(
        submit(&mut state),
        (Severity::Success, "Subscribed!".to_string())
    );
    assert_eq!(state.email, "");

    assert_eq!(
        submit(&mut state),
        (Severity::Error, "Email is required".to_string())
    );
}

#[test]
fn test_footer_links_drive_router() {
    let mut state = footer::State::new();
    let mut router = Router::new();

    for href in ["#", "/careers", "https://example.com", "/careers"] {
        if let Event::Navigate(destination) =
            footer::update(&mut state, footer::Message::LinkPressed(href.into()))
        {
            router.navigate(&destination);
        }
    }

    assert_eq!(router.current(), "/careers");
    assert!(router.back());
    assert_eq!(router.current(), "/");
    assert_eq!(Destination::parse("#"), Destination::Placeholder);
}

#[test]
fn test_app_boots_from_config_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[site]\nname = \"Drill Depot\"\n",
    )
    .expect("Failed to write config file");

    let (mut app, _task) = App::new(Flags {
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        theme: Some(ThemeMode::Light),
    });
    assert_eq!(app.site().name, "Drill Depot");
    assert_eq!(app.title(), "Drill Depot");
    assert_eq!(app.theme_mode(), ThemeMode::Light);

    let _ = app.update(Message::Footer(footer::Message::EmailChanged(
        "hello@drill.depot".into(),
    )));
    let _ = app.update(Message::Footer(footer::Message::Submit));

    let toast = app.notifications().visible().next().expect("toast");
    assert_eq!(
        toast.description(),
        Some("Email hello@drill.depot has been subscribed!")
    );
    assert!(app.footer().email.is_empty());
}
