//! Event card - poster, location, title and schedule for one event

use super::{ICON_CALENDAR, ICON_CLOCK, ICON_MAP_PIN, Icon};
use crate::types::Event;
use leptos::prelude::*;

/// Self-contained card for one event.
///
/// Links to the detail page when the event has a slug. Optional attributes
/// are skipped when empty.
#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = event.href();
    let Event {
        title,
        image,
        location,
        date,
        time,
        ..
    } = event;

    let poster = (!image.is_empty()).then(|| {
        let alt = title.clone();
        view! { <img class="poster" src=image alt=alt /> }
    });
    let location = (!location.is_empty()).then(|| {
        view! {
            <p class="meta location">
                <Icon path=ICON_MAP_PIN size="14" />
                <span>{location}</span>
            </p>
        }
    });
    let schedule = (!date.is_empty() || !time.is_empty()).then(|| {
        view! {
            <div class="meta datetime">
                {(!date.is_empty()).then(|| view! {
                    <Icon path=ICON_CALENDAR size="14" />
                    <span class="date">{date}</span>
                })}
                {(!time.is_empty()).then(|| view! {
                    <Icon path=ICON_CLOCK size="14" />
                    <span class="time">{time}</span>
                })}
            </div>
        }
    });

    view! {
        <a class="event-card" href=href>
            {poster}
            {location}
            <p class="title">{title}</p>
            {schedule}
        </a>
    }
}
