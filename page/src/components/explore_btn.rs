use super::{ICON_CARET_DOWN, Icon};
use leptos::prelude::*;

/// Call-to-action control pointing at the featured events
#[component]
pub fn ExploreBtn(
    /// Button label
    #[prop(into)]
    label: String,
    /// Link target, usually an in-page anchor
    #[prop(into)]
    target: String,
) -> impl IntoView {
    view! {
        <a id="explore-btn" class="btn" role="button" href=target>
            {label}
            <Icon path=ICON_CARET_DOWN size="20" />
        </a>
    }
}
