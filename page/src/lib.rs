//! # devhub-page
//!
//! Leptos SSR renderer for the DevHub landing page.
//!
//! The page is a hero heading, a call-to-action control and an optional
//! "Featured Events" list with one card per event. The event list is an
//! injected, validated [`EventCatalog`](types::EventCatalog); nothing is read
//! from ambient globals, so the page renders the same in tests as in
//! production.
//!
//! ## Quick Start
//!
//! ```rust
//! use devhub_page::render_page;
//! use devhub_page::types::{Event, EventCatalog, PageOptions};
//!
//! let catalog = EventCatalog::new(vec![
//!     Event::titled("DevFest"),
//!     Event::titled("HackNight"),
//! ])
//! .unwrap();
//!
//! let html = render_page(&catalog, &PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("DevFest"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Events, the catalog and page options
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - Catalog validation errors
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait. No reactive
//! runtime or hydration is involved - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;
pub mod styles;
pub mod types;

pub use error::PageError;

use components::{LandingDocument, LandingPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{EventCatalog, PageOptions};

/// Render the complete landing page document.
///
/// The output starts with `<!DOCTYPE html>` and is a pure function of its
/// inputs: rendering the same catalog and options twice yields identical
/// strings.
///
/// # Example
///
/// ```rust
/// use devhub_page::render_page;
/// use devhub_page::types::{EventCatalog, PageOptions};
///
/// let html = render_page(&EventCatalog::empty(), &PageOptions::default());
/// assert!(html.contains("The Hub for Every Dev"));
/// assert!(!html.contains("data-key="));
/// ```
pub fn render_page(catalog: &EventCatalog, options: &PageOptions) -> String {
    tracing::debug!(
        events = catalog.len(),
        show_featured = options.resolve_show_featured(catalog),
        "rendering landing document"
    );

    let doc = view! {
        <LandingDocument catalog=catalog.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the landing `<section>`, for embedding into another layout.
pub fn render_fragment(catalog: &EventCatalog, options: &PageOptions) -> String {
    tracing::debug!(events = catalog.len(), "rendering landing fragment");

    view! {
        <LandingPage catalog=catalog.clone() options=options.clone() />
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::Event;

    fn two_events() -> EventCatalog {
        EventCatalog::new(vec![Event::titled("DevFest"), Event::titled("HackNight")])
            .expect("valid catalog")
    }

    fn rendered_keys(html: &str) -> Vec<String> {
        html.split("data-key=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn renders_document_shell() {
        let html = render_page(&EventCatalog::builtin(), &PageOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>DevHub</title>"));
        assert!(html.contains("<main>"));
    }

    #[test]
    fn renders_cards_in_catalog_order() {
        let html = render_page(&two_events(), &PageOptions::default());

        assert_eq!(rendered_keys(&html), vec!["DevFest", "HackNight"]);
        assert!(html.contains("Featured Events"));
        let first = html.find("DevFest").expect("DevFest rendered");
        let second = html.find("HackNight").expect("HackNight rendered");
        assert!(first < second);
    }

    #[test]
    fn empty_catalog_omits_featured_section_by_default() {
        let html = render_page(&EventCatalog::empty(), &PageOptions::default());

        assert!(html.contains("The Hub for Every Dev"));
        assert!(html.contains("Hackathons, Meetups, and Conferences"));
        assert!(html.contains("id=\"explore-btn\""));
        assert!(!html.contains("Featured Events"));
        assert!(rendered_keys(&html).is_empty());
    }

    #[test]
    fn empty_catalog_with_forced_section_renders_zero_cards() {
        let options = PageOptions {
            show_featured_events: Some(true),
            ..Default::default()
        };
        let html = render_page(&EventCatalog::empty(), &options);

        assert!(html.contains("Featured Events"));
        assert!(html.contains("class=\"events\""));
        assert!(rendered_keys(&html).is_empty());
    }

    #[test]
    fn disabled_toggle_hides_non_empty_catalog() {
        let options = PageOptions {
            show_featured_events: Some(false),
            ..Default::default()
        };
        let html = render_page(&two_events(), &options);

        assert!(html.contains("The Hub for Every Dev"));
        assert!(!html.contains("Featured Events"));
        assert!(!html.contains("DevFest"));
    }

    #[test]
    fn hero_precedes_cta_precedes_featured() {
        let html = render_fragment(&two_events(), &PageOptions::default());

        let heading = html.find("<h1").expect("heading");
        let subtitle = html.find("class=\"text-center subtitle\"").expect("subtitle");
        let cta = html.find("id=\"explore-btn\"").expect("cta");
        let featured = html.find("Featured Events").expect("featured");
        assert!(heading < subtitle && subtitle < cta && cta < featured);
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = EventCatalog::builtin();
        let options = PageOptions::default();

        assert_eq!(render_page(&catalog, &options), render_page(&catalog, &options));
    }

    #[test]
    fn builtin_keys_are_unique_and_match_titles() {
        let catalog = EventCatalog::builtin();
        let html = render_fragment(&catalog, &PageOptions::default());
        let keys = rendered_keys(&html);

        assert_eq!(keys.len(), catalog.len());
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn card_renders_optional_attributes() {
        let catalog = EventCatalog::new(vec![Event {
            title: "DevFest".into(),
            image: "/images/devfest.png".into(),
            slug: "devfest-2025".into(),
            location: "Berlin, Germany".into(),
            date: "2025-10-04".into(),
            time: "10:00 AM".into(),
        }])
        .expect("valid catalog");
        let html = render_fragment(&catalog, &PageOptions::default());

        assert!(html.contains("href=\"/events/devfest-2025\""));
        assert!(html.contains("src=\"/images/devfest.png\""));
        assert!(html.contains("Berlin, Germany"));
        assert!(html.contains("2025-10-04"));
        assert!(html.contains("10:00 AM"));
    }

    #[test]
    fn card_skips_missing_attributes() {
        let html = render_fragment(&two_events(), &PageOptions::default());

        assert!(!html.contains("class=\"poster\""));
        assert!(!html.contains("meta location"));
        assert!(!html.contains("/events/"));
    }

    #[test]
    fn custom_copy_is_rendered() {
        let options = PageOptions {
            title_lead: "Every Rust Meetup".into(),
            title_tail: "In One Place".into(),
            cta_label: "Browse".into(),
            cta_target: "#upcoming".into(),
            featured_heading: "Upcoming".into(),
            ..Default::default()
        };
        let html = render_fragment(&two_events(), &options);

        assert!(html.contains("Every Rust Meetup"));
        assert!(html.contains("In One Place"));
        assert!(html.contains("href=\"#upcoming\""));
        assert!(html.contains("Upcoming"));
    }
}
