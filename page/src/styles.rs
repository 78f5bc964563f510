//! CSS styles for the landing page.
//!
//! The stylesheet is inlined into the document head so the rendered file
//! works without a static asset server.
//!
//! # Customization
//!
//! ```rust
//! use devhub_page::styles::LANDING_CSS;
//!
//! let my_css = ".event-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```

/// Complete CSS for the landing page - dark theme, centered hero, card grid.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #030708;
    --bg-card: #0d161a;
    --border: #182830;
    --text: #e7f2ff;
    --text-dim: #bdbdbd;
    --accent: #59deca;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: "Schibsted Grotesk", system-ui, sans-serif;
}

main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 80px 24px;
}

.text-center { text-align: center; }

.landing h1 {
    font-size: clamp(2rem, 5vw, 3.75rem);
    font-weight: 600;
    line-height: 1.15;
    margin: 0;
}

.landing .subtitle {
    margin-top: 20px;
    color: var(--text-dim);
    font-size: 1.125rem;
}

#explore-btn {
    display: flex;
    width: fit-content;
    align-items: center;
    gap: 8px;
    margin: 28px auto 0;
    padding: 12px 28px;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: var(--bg-card);
    color: var(--text);
    text-decoration: none;
}

#explore-btn:hover { border-color: var(--accent); }

.featured {
    margin-top: 80px;
}

.featured h3 {
    font-size: 1.5rem;
    margin: 0 0 28px;
}

.events {
    list-style: none;
    margin: 0;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 40px 20px;
}

.event-card {
    display: flex;
    flex-direction: column;
    gap: 12px;
    color: inherit;
    text-decoration: none;
}

.event-card .poster {
    width: 100%;
    height: 300px;
    object-fit: cover;
    border-radius: 10px;
}

.event-card .title {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0;
}

.event-card .meta {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--text-dim);
    font-size: 0.875rem;
}

.event-card .meta svg { flex-shrink: 0; }
"#;

/// Content Security Policy for the static document (no scripts needed).
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'none'; font-src 'self' data:;";
