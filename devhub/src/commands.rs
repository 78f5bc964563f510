//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use devhub_page::types::{EventCatalog, PageOptions};
use devhub_page::{render_fragment, render_page};
use tracing::{info, warn};

use crate::config::SiteConfig;

fn load(config_path: Option<&Path>) -> Result<(EventCatalog, PageOptions)> {
    let config = SiteConfig::load(config_path).context("loading config")?;
    let catalog = config.catalog().context("building event catalog")?;
    Ok((catalog, config.page))
}

/// Render the page to `out`, or stdout.
///
/// `show_featured` overrides the config file's toggle when set.
pub fn render(
    config_path: Option<&Path>,
    out: Option<&Path>,
    show_featured: Option<bool>,
    fragment: bool,
) -> Result<()> {
    let (catalog, mut options) = load(config_path)?;
    if show_featured.is_some() {
        options.show_featured_events = show_featured;
    }
    if options.show_featured_events == Some(true) && catalog.is_empty() {
        warn!("featured section forced on with an empty catalog");
    }

    let html = if fragment {
        render_fragment(&catalog, &options)
    } else {
        render_page(&catalog, &options)
    };

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, &html)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(
                "Wrote {} bytes ({} events) to {}",
                html.len(),
                catalog.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Validate the catalog and report its size.
pub fn check(config_path: Option<&Path>) -> Result<()> {
    let (catalog, options) = load(config_path)?;
    let featured = if options.resolve_show_featured(&catalog) {
        "shown"
    } else {
        "hidden"
    };
    println!(
        "ok: {} events, featured section {}",
        catalog.len(),
        featured
    );
    Ok(())
}

/// Print events in display order.
pub fn events(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (catalog, _) = load(config_path)?;

    if json {
        let out = serde_json::to_string_pretty(&catalog).context("serializing catalog")?;
        println!("{}", out);
        return Ok(());
    }

    for (idx, event) in catalog.events().iter().enumerate() {
        let mut line = format!("{:>2}. {}", idx + 1, event.title);
        for detail in [&event.location, &event.date, &event.time] {
            if !detail.is_empty() {
                line.push_str(" | ");
                line.push_str(detail);
            }
        }
        println!("{}", line);
    }
    Ok(())
}
