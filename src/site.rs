// SPDX-License-Identifier: MPL-2.0
//! Static site identity and footer link lists.
//!
//! [`SiteInfo`] is built once at startup from the built-in defaults, with
//! any `[site]` overrides from `settings.toml` applied, and is then only
//! read.

use crate::app::config::{self, SiteConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub label: String,
    pub href: String,
}

impl LinkRecord {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Display data consumed by the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: String,
    pub name_localized: String,
    pub tagline: String,
    pub company_links: Vec<LinkRecord>,
    pub support_links: Vec<LinkRecord>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: config::DEFAULT_SITE_NAME.to_string(),
            name_localized: config::DEFAULT_SITE_NAME_LOCALIZED.to_string(),
            tagline: config::DEFAULT_TAGLINE.to_string(),
            company_links: links_from_pairs(config::DEFAULT_COMPANY_LINKS),
            support_links: links_from_pairs(config::DEFAULT_SUPPORT_LINKS),
        }
    }
}

impl SiteInfo {
    /// Applies config overrides on top of the defaults.
    ///
    /// Duplicate labels within a list are kept as-is and reported once
    /// through `tracing`.
    #[must_use]
    pub fn from_config(site: &SiteConfig) -> Self {
        let defaults = Self::default();
        let info = Self {
            name: site.name.clone().unwrap_or(defaults.name),
            name_localized: site.name_localized.clone().unwrap_or(defaults.name_localized),
            tagline: site.tagline.clone().unwrap_or(defaults.tagline),
            company_links: site.company_links.clone().unwrap_or(defaults.company_links),
            support_links: site.support_links.clone().unwrap_or(defaults.support_links),
        };

        for (list, links) in [("company", &info.company_links), ("support", &info.support_links)] {
            let duplicates = duplicate_labels(links);
            if !duplicates.is_empty() {
                tracing::warn!(list, ?duplicates, "footer link labels are not unique");
            }
        }

        info
    }

    /// Label of the first company or support link pointing at `href`.
    #[must_use]
    pub fn label_for(&self, href: &str) -> Option<&str> {
        self.company_links
            .iter()
            .chain(&self.support_links)
            .find(|link| link.href == href)
            .map(|link| link.label.as_str())
    }
}

fn links_from_pairs(pairs: &[(&str, &str)]) -> Vec<LinkRecord> {
    pairs
        .iter()
        .map(|(label, href)| LinkRecord::new(*label, *href))
        .collect()
}

/// Returns labels that appear more than once, in first-repeat order.
#[must_use]
pub fn duplicate_labels(links: &[LinkRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for link in links {
        let label = link.label.as_str();
        if !seen.insert(label) && !duplicates.contains(&label) {
            duplicates.push(label);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_for_searches_both_lists() {
        let info = SiteInfo::default();
        assert_eq!(info.label_for("/about"), Some("About Us"));
        assert_eq!(info.label_for("/faq"), Some("FAQ"));
        assert_eq!(info.label_for("/nowhere"), None);
    }

    #[test]
    fn default_site_uses_built_in_values() {
        let site = SiteInfo::default();
        assert_eq!(site.name, config::DEFAULT_SITE_NAME);
        assert_eq!(site.company_links.len(), config::DEFAULT_COMPANY_LINKS.len());
        assert_eq!(site.support_links[0].label, config::DEFAULT_SUPPORT_LINKS[0].0);
    }

    #[test]
    fn default_link_labels_are_unique() {
        let site = SiteInfo::default();
        assert!(duplicate_labels(&site.company_links).is_empty());
        assert!(duplicate_labels(&site.support_links).is_empty());
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let site = SiteInfo::from_config(&SiteConfig {
            name: Some("Hammer Hire".to_string()),
            support_links: Some(vec![LinkRecord::new("Status", "https://status.example.com")]),
            ..SiteConfig::default()
        });

        assert_eq!(site.name, "Hammer Hire");
        assert_eq!(site.name_localized, config::DEFAULT_SITE_NAME_LOCALIZED);
        assert_eq!(site.support_links, vec![LinkRecord::new("Status", "https://status.example.com")]);
        assert_eq!(site.company_links, SiteInfo::default().company_links);
    }

    #[test]
    fn empty_override_list_is_respected() {
        let site = SiteInfo::from_config(&SiteConfig {
            company_links: Some(Vec::new()),
            ..SiteConfig::default()
        });
        assert!(site.company_links.is_empty());
    }

    #[test]
    fn duplicate_labels_are_reported_once() {
        let links = vec![
            LinkRecord::new("FAQ", "/faq"),
            LinkRecord::new("Help", "/help"),
            LinkRecord::new("FAQ", "/faq-2"),
            LinkRecord::new("FAQ", "/faq-3"),
        ];
        assert_eq!(duplicate_labels(&links), vec!["FAQ"]);
    }

    #[test]
    fn duplicates_still_render_in_order() {
        let links = vec![LinkRecord::new("A", "/a"), LinkRecord::new("A", "/b")];
        let site = SiteInfo::from_config(&SiteConfig {
            company_links: Some(links.clone()),
            ..SiteConfig::default()
        });
        assert_eq!(site.company_links, links);
    }
}
