//! CLI output formatting.
//!
//! Every entity leads with its positional index and display name; paths and
//! details follow on indented context lines.
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Button <my-button> [components]
//!     Source: src/buttons/docs/
//!     001 Primary
//!         Source: primary.html
//!     002 Raw
//!         Source: raw.html (missing)
//!
//! 3 pages, 5 cards
//! ```
//!
//! ## Build
//!
//! ```text
//! Assets: 4 files, script → docs/js/app.min.js
//! 001 Button <my-button> → docs/button.html (3 cards, 1 without example)
//! 002 Widget <my-widget> → docs/widget.html (1 card)
//!
//! Failed
//!     card-stack: could not read .../stack.html: No such file or directory
//!
//! Generated 2 pages, 1 failed in 0.04s
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` wrappers write
//! them to stdout.

use crate::pipeline::BuildReport;
use crate::types::DocConfig;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// `Title <tag-name>`, or just the title when the tag is empty.
fn display_name(title: &str, tag_name: &str) -> String {
    if tag_name.is_empty() {
        title.to_string()
    } else {
        format!("{title} <{tag_name}>")
    }
}

/// Show `path` relative to `base` when possible.
fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// Check
// ============================================================================

/// Format discovered pages and their cards, flagging missing content files.
pub fn format_scan_output(docs: &[DocConfig], source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    let root = std::path::absolute(source_root).unwrap_or_else(|_| source_root.to_path_buf());

    for (i, doc) in docs.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(i + 1),
            display_name(&doc.title, &doc.tag_name),
            doc.category
        ));
        lines.push(format!(
            "    Source: {}/",
            relative_display(&doc.docs_path, &root)
        ));
        for (j, card) in doc.cards.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), card.title));
            let missing = if doc.docs_path.join(&card.contents).is_file() {
                ""
            } else {
                " (missing)"
            };
            lines.push(format!("        Source: {}{}", card.contents, missing));
        }
    }

    let cards: usize = docs.iter().map(|d| d.cards.len()).sum();
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        plural(docs.len(), "page"),
        plural(cards, "card")
    ));
    lines
}

/// Print check output to stdout.
pub fn print_scan_output(docs: &[DocConfig], source_root: &Path) {
    for line in format_scan_output(docs, source_root) {
        println!("{}", line);
    }
}

/// Card content files referenced by `docs` that do not exist.
pub fn missing_contents(docs: &[DocConfig]) -> Vec<std::path::PathBuf> {
    docs.iter()
        .flat_map(|doc| {
            doc.cards
                .iter()
                .map(|card| doc.docs_path.join(&card.contents))
        })
        .filter(|path| !path.is_file())
        .collect()
}

// ============================================================================
// Build
// ============================================================================

/// Format the build report: assets, generated pages, failures, summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    match (&report.assets, &report.asset_error) {
        (Some(summary), _) => lines.push(format!(
            "Assets: {}, script \u{2192} {}",
            plural(summary.asset_files, "file"),
            summary.script.display()
        )),
        (None, Some(err)) => lines.push(format!("Assets: failed ({err})")),
        (None, None) => {}
    }

    for (i, page) in report.pages.iter().enumerate() {
        let mut detail = plural(page.cards, "card");
        if page.hidden_examples > 0 {
            detail.push_str(&format!(", {} without example", page.hidden_examples));
        }
        lines.push(format!(
            "{} {} \u{2192} {} ({})",
            format_index(i + 1),
            display_name(&page.title, &page.tag_name),
            page.output.display(),
            detail
        ));
    }

    if !report.failures.is_empty() {
        lines.push(String::new());
        lines.push("Failed".to_string());
        for failure in &report.failures {
            lines.push(format!("    {}: {}", failure.id, failure.error));
        }
    }

    lines.push(String::new());
    let mut summary = format!("Generated {}", plural(report.pages.len(), "page"));
    if !report.failures.is_empty() {
        summary.push_str(&format!(", {} failed", report.failures.len()));
    }
    summary.push_str(&format!(" in {:.2}s", report.elapsed.as_secs_f64()));
    lines.push(summary);
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
