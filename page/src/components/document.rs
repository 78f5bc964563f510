//! Root document component - the complete HTML page

use super::LandingPage;
use crate::styles::{CSP, LANDING_CSS};
use crate::types::{EventCatalog, PageOptions};
use leptos::prelude::*;

/// The complete HTML document wrapping the landing page
#[component]
pub fn LandingDocument(catalog: EventCatalog, options: PageOptions) -> impl IntoView {
    let document_title = options.document_title.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{document_title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <main>
                    <LandingPage catalog=catalog options=options />
                </main>
            </body>
        </html>
    }
}
