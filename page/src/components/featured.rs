//! Featured events section - one keyed card per catalog entry

use super::EventCard;
use crate::types::Event;
use leptos::prelude::*;

/// Labeled list of event cards in catalog order.
///
/// Each `<li>` carries `data-key` set to the event title. Titles are unique
/// because the catalog rejects duplicates on construction.
#[component]
pub fn FeaturedEvents(
    /// Section heading
    #[prop(into)]
    heading: String,
    /// Events in display order
    events: Vec<Event>,
) -> impl IntoView {
    view! {
        <div id="events" class="featured">
            <h3>{heading}</h3>
            <ul class="events">
                {events.into_iter().map(|event| {
                    let key = event.title.clone();
                    view! {
                        <li data-key=key>
                            <EventCard event=event />
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
