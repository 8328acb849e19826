//! Shared test utilities for the component-docs test suite.
//!
//! Provides a mutable copy of the fixture project plus lookup helpers and
//! bulk extractors for scan results and build reports.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let configs = scan(&tmp.path().join("src")).unwrap();
//!
//! let button = find_doc(&configs, "button");
//! assert_eq!(card_titles(button), vec!["Primary", "Disabled", "Raw"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::pipeline::BuildReport;
use crate::types::DocConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Fixture project plus a site configuration pointing into it.
///
/// The output directory exists but is empty.
pub fn fixture_site() -> (TempDir, SiteConfig) {
    let tmp = setup_fixtures();
    let root = tmp.path();
    let site = SiteConfig {
        project_name: "Test Kit".to_string(),
        src_path: root.join("src"),
        dest_docs_path: root.join("docs"),
        script_path: root.join("dist/app.min.js"),
        template_dir: root.join("docs-template"),
        assets_dir: root.join("docs-template/assets"),
        ..Default::default()
    };
    std::fs::create_dir_all(&site.dest_docs_path).unwrap();
    (tmp, site)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a configuration by id. Panics if not found.
pub fn find_doc<'a>(configs: &'a [DocConfig], id: &str) -> &'a DocConfig {
    configs.iter().find(|c| c.id == id).unwrap_or_else(|| {
        let ids = doc_ids(configs);
        panic!("doc '{id}' not found. Available: {ids:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All configuration ids in scan order.
pub fn doc_ids(configs: &[DocConfig]) -> Vec<&str> {
    configs.iter().map(|c| c.id.as_str()).collect()
}

/// Card titles in declared order.
pub fn card_titles(doc: &DocConfig) -> Vec<&str> {
    doc.cards.iter().map(|c| c.title.as_str()).collect()
}

/// Ids of the pages a build wrote, in discovery order.
pub fn page_ids(report: &BuildReport) -> Vec<&str> {
    report.pages.iter().map(|p| p.id.as_str()).collect()
}
