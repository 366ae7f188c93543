//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `folio_core` linkage without a browser host.
//! - Print deterministic output for quick local sanity checks.

use folio_core::{filter_projects, Catalog, TAG_ALL};

fn main() {
    let query = std::env::args().nth(1).unwrap_or_default();
    let tag = std::env::args().nth(2).unwrap_or_else(|| TAG_ALL.to_string());

    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let catalog = Catalog::seed();
    let visible = filter_projects(catalog.records(), &query, &tag);
    println!(
        "folio_core projects={} visible={} query={:?} tag={}",
        catalog.len(),
        visible.len(),
        query,
        tag
    );
    for project in visible {
        println!("  {} ({})", project.title, project.year);
    }
}
