use leptos::prelude::*;

/// Two-line heading and the descriptive paragraph under it
#[component]
pub fn Hero(
    /// First heading line
    #[prop(into)]
    lead: String,
    /// Second heading line, after the break
    #[prop(into)]
    tail: String,
    /// Paragraph under the heading
    #[prop(into)]
    subtitle: String,
) -> impl IntoView {
    view! {
        <h1 class="text-center">
            {lead}
            <br />
            {tail}
        </h1>
        <p class="text-center subtitle">{subtitle}</p>
    }
}
