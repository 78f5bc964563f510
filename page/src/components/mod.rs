//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered once through
//! SSR. There is no reactive state and no hydration.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingPage
//!     ├── Hero
//!     ├── ExploreBtn
//!     └── FeaturedEvents (optional)
//!         └── EventCard (per event, keyed by title)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be used
//! directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use devhub_page::components::{EventCard, FeaturedEvents};
//!
//! view! {
//!     <FeaturedEvents heading="Upcoming" events=catalog.events().to_vec() />
//! }
//! ```

mod document;
mod event_card;
mod explore_btn;
mod featured;
mod hero;
mod icons;
mod landing;

pub use document::LandingDocument;
pub use event_card::EventCard;
pub use explore_btn::ExploreBtn;
pub use featured::FeaturedEvents;
pub use hero::Hero;
pub use icons::*;
pub use landing::LandingPage;
