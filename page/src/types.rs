//! Page data types: events, the validated catalog and page options.
//!
//! These types define the data model for the landing page. They're designed to be:
//!
//! - **Serializable** - Load from TOML/JSON via serde
//! - **Read-only** - A catalog is validated once and never mutated
//! - **Default-able** - Create partial events with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use devhub_page::types::{Event, EventCatalog};
//!
//! let catalog = EventCatalog::new(vec![
//!     Event {
//!         title: "DevFest".into(),
//!         location: "Berlin, Germany".into(),
//!         ..Default::default()
//!     },
//!     Event::titled("HackNight"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.titles(), vec!["DevFest", "HackNight"]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// A single developer meetup, hackathon or conference entry.
///
/// Only `title` is required. The remaining fields are passed through to the
/// card and rendered when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Display title, also the rendering key (unique within a catalog)
    pub title: String,
    /// Poster image URL
    pub image: String,
    /// URL slug for the event detail page (`/events/{slug}`)
    pub slug: String,
    /// Human readable venue / city
    pub location: String,
    /// Event date as displayed
    pub date: String,
    /// Start time as displayed
    pub time: String,
}

impl Event {
    /// An event with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Detail page link, if the event has a slug.
    pub fn href(&self) -> Option<String> {
        let slug = self.slug.trim();
        (!slug.is_empty()).then(|| format!("/events/{}", slug))
    }
}

/// Check that every title is non-blank and unique.
///
/// Titles are compared exactly; `"DevFest"` and `"devfest"` are distinct keys.
pub fn validate_titles(events: &[Event]) -> Result<()> {
    let mut seen = HashSet::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        if event.title.trim().is_empty() {
            return Err(PageError::EmptyTitle { index });
        }
        if !seen.insert(event.title.as_str()) {
            return Err(PageError::DuplicateTitle {
                title: event.title.clone(),
            });
        }
    }
    Ok(())
}

/// Ordered, validated, read-only list of events.
///
/// Declaration order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Event>", into = "Vec<Event>")]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Validate `events` and wrap them in a catalog.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        validate_titles(&events)?;
        Ok(Self { events })
    }

    /// A catalog with no events.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The events the site ships with.
    pub fn builtin() -> Self {
        let events = BUILTIN_EVENTS
            .iter()
            .map(|e| Event {
                title: e.title.into(),
                image: e.image.into(),
                slug: e.slug.into(),
                location: e.location.into(),
                date: e.date.into(),
                time: e.time.into(),
            })
            .collect();
        Self { events }
    }

    /// Events in display order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Titles in display order.
    pub fn titles(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.title.as_str()).collect()
    }
}

impl TryFrom<Vec<Event>> for EventCatalog {
    type Error = PageError;

    fn try_from(events: Vec<Event>) -> Result<Self> {
        Self::new(events)
    }
}

impl From<EventCatalog> for Vec<Event> {
    fn from(catalog: EventCatalog) -> Self {
        catalog.events
    }
}

/// Keys the featured section assigns to its cards, in display order.
pub fn card_keys(catalog: &EventCatalog) -> Vec<&str> {
    catalog.titles()
}

/// Page copy and the featured-events toggle.
///
/// Every field has the site's default, so a config only needs to name what
/// it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Force the featured section on or off. Unset: shown iff the catalog is non-empty.
    pub show_featured_events: Option<bool>,
    /// First heading line
    pub title_lead: String,
    /// Second heading line
    pub title_tail: String,
    /// Paragraph under the heading
    pub subtitle: String,
    /// Call-to-action label
    pub cta_label: String,
    /// Call-to-action link target
    pub cta_target: String,
    /// Featured section heading
    pub featured_heading: String,
    /// Document `<title>`
    pub document_title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            show_featured_events: None,
            title_lead: "The Hub for Every Dev".into(),
            title_tail: "Event You Can't Miss".into(),
            subtitle: "Hackathons, Meetups, and Conferences, All in One Place".into(),
            cta_label: "Explore Events".into(),
            cta_target: "#events".into(),
            featured_heading: "Featured Events".into(),
            document_title: "DevHub".into(),
        }
    }
}

impl PageOptions {
    /// Whether the featured section renders for `catalog`.
    pub fn resolve_show_featured(&self, catalog: &EventCatalog) -> bool {
        self.show_featured_events.unwrap_or(!catalog.is_empty())
    }
}

struct BuiltinEvent {
    title: &'static str,
    image: &'static str,
    slug: &'static str,
    location: &'static str,
    date: &'static str,
    time: &'static str,
}

const BUILTIN_EVENTS: &[BuiltinEvent] = &[
    BuiltinEvent {
        title: "React Summit US 2025",
        image: "/images/event1.png",
        slug: "react-summit-us-2025",
        location: "San Francisco, CA, USA",
        date: "2025-11-07",
        time: "09:00 AM",
    },
    BuiltinEvent {
        title: "KubeCon + CloudNativeCon Europe 2026",
        image: "/images/event2.png",
        slug: "kubecon-cloudnativecon-eu-2026",
        location: "Vienna, Austria",
        date: "2026-03-18",
        time: "10:00 AM",
    },
    BuiltinEvent {
        title: "AWS re:Invent 2025",
        image: "/images/event3.png",
        slug: "aws-reinvent-2025",
        location: "Las Vegas, NV, USA",
        date: "2025-12-01",
        time: "08:30 AM",
    },
    BuiltinEvent {
        title: "Next.js Conf 2025",
        image: "/images/event4.png",
        slug: "nextjs-conf-2025",
        location: "San Francisco, CA, USA",
        date: "2025-11-12",
        time: "09:00 AM",
    },
    BuiltinEvent {
        title: "Google Cloud Next 2026",
        image: "/images/event5.png",
        slug: "google-cloud-next-2026",
        location: "Las Vegas, NV, USA",
        date: "2026-04-22",
        time: "09:00 AM",
    },
    BuiltinEvent {
        title: "ETHGlobal Hackathon: Lisbon 2026",
        image: "/images/event6.png",
        slug: "ethglobal-lisbon-2026",
        location: "Lisbon, Portugal",
        date: "2026-05-09",
        time: "10:00 AM",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = EventCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(validate_titles(catalog.events()).is_ok());
    }

    #[test]
    fn rejects_duplicate_titles() {
        let err = EventCatalog::new(vec![
            Event::titled("DevFest"),
            Event::titled("HackNight"),
            Event::titled("DevFest"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PageError::DuplicateTitle {
                title: "DevFest".into()
            }
        );
    }

    #[test]
    fn rejects_blank_title() {
        let err = EventCatalog::new(vec![Event::titled("DevFest"), Event::titled("   ")])
            .unwrap_err();
        assert_eq!(err, PageError::EmptyTitle { index: 1 });
    }

    #[test]
    fn titles_compare_exactly() {
        let catalog =
            EventCatalog::new(vec![Event::titled("DevFest"), Event::titled("devfest")]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn card_keys_follow_declaration_order() {
        let catalog =
            EventCatalog::new(vec![Event::titled("DevFest"), Event::titled("HackNight")]).unwrap();
        assert_eq!(card_keys(&catalog), vec!["DevFest", "HackNight"]);
    }

    #[test]
    fn featured_toggle_defaults_to_catalog_presence() {
        let options = PageOptions::default();
        assert!(options.resolve_show_featured(&EventCatalog::builtin()));
        assert!(!options.resolve_show_featured(&EventCatalog::empty()));
    }

    #[test]
    fn explicit_featured_toggle_wins() {
        let on = PageOptions {
            show_featured_events: Some(true),
            ..Default::default()
        };
        let off = PageOptions {
            show_featured_events: Some(false),
            ..Default::default()
        };
        assert!(on.resolve_show_featured(&EventCatalog::empty()));
        assert!(!off.resolve_show_featured(&EventCatalog::builtin()));
    }

    #[test]
    fn href_requires_slug() {
        let mut event = Event::titled("DevFest");
        assert_eq!(event.href(), None);
        event.slug = "devfest-2025".into();
        assert_eq!(event.href().as_deref(), Some("/events/devfest-2025"));
    }

    #[test]
    fn deserializing_catalog_validates() {
        let ok: EventCatalog =
            serde_json::from_str(r#"[{"title":"DevFest"},{"title":"HackNight","slug":"hn"}]"#)
                .unwrap();
        assert_eq!(ok.titles(), vec!["DevFest", "HackNight"]);
        assert_eq!(ok.events()[1].slug, "hn");

        let dup = serde_json::from_str::<EventCatalog>(r#"[{"title":"A"},{"title":"A"}]"#);
        assert!(dup.is_err());
    }
}
