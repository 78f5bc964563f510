//! Landing section - hero, call to action and the optional featured list

use super::{ExploreBtn, FeaturedEvents, Hero};
use crate::types::{EventCatalog, PageOptions};
use leptos::prelude::*;

/// The home view. The featured section renders only when
/// [`PageOptions::resolve_show_featured`] says so.
#[component]
pub fn LandingPage(catalog: EventCatalog, options: PageOptions) -> impl IntoView {
    let show_featured = options.resolve_show_featured(&catalog);
    let PageOptions {
        title_lead,
        title_tail,
        subtitle,
        cta_label,
        cta_target,
        featured_heading,
        ..
    } = options;

    view! {
        <section class="landing">
            <Hero lead=title_lead tail=title_tail subtitle=subtitle />
            <ExploreBtn label=cta_label target=cta_target />
            {show_featured.then(|| view! {
                <FeaturedEvents heading=featured_heading events=catalog.events().to_vec() />
            })}
        </section>
    }
}
