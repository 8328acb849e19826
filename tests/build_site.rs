//! End-to-end builds against the fixture project.

use component_docs::config::SiteConfig;
use component_docs::dom::Document;
use component_docs::pipeline;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Mirrors `setup_fixtures` / `fixture_site` in src/test_helpers.rs, which is
// not visible from integration tests. Keep the two in sync.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn project() -> (TempDir, SiteConfig) {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
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
    (tmp, site)
}

fn html_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".html"))
        .collect();
    names.sort();
    names
}

fn read_page(site: &SiteConfig, id: &str) -> Document {
    let path: PathBuf = site.dest_docs_path.join(format!("{id}.html"));
    Document::parse(&fs::read_to_string(path).unwrap())
}

#[test]
fn one_page_per_configuration_with_id() {
    let (_tmp, site) = project();

    let report = pipeline::run(&site).unwrap();

    assert!(report.is_clean(), "failures: {:?}", report.failures);
    assert_eq!(
        html_files(&site.dest_docs_path),
        vec!["button.html", "card-stack.html", "widget.html"]
    );
}

#[test]
fn widget_page_shows_escaped_markup_and_live_preview() {
    let (_tmp, site) = project();

    pipeline::run(&site).unwrap();

    let page = read_page(&site, "widget");
    assert_eq!(
        page.query("title").unwrap().text(),
        "Test Kit - Widget <my-widget>"
    );
    let cards = page.query_all("div#cards_container > div.card");
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.query("h4.card-title").unwrap().text(), "Basic");
    assert_eq!(
        card.query("div.example-preview").unwrap().inner_html().unwrap(),
        "Hi"
    );
    assert_eq!(
        card.query("div.example-markup").unwrap().inner_html().unwrap(),
        "&lt;b&gt;Hi&lt;/b&gt;"
    );
    assert_eq!(
        card.query("div.example-container").unwrap().attribute("style"),
        None
    );

    let raw = fs::read_to_string(site.dest_docs_path.join("widget.html")).unwrap();
    assert!(raw.contains("&lt;b&gt;Hi&lt;/b&gt;"));
}

#[test]
fn every_page_has_full_menu_and_one_active_entry() {
    let (_tmp, site) = project();

    pipeline::run(&site).unwrap();

    for id in ["button", "card-stack", "widget"] {
        let page = read_page(&site, id);
        let entries: Vec<String> = page
            .query_all("ul.submenu > li")
            .iter()
            .filter_map(|li| li.attribute("id"))
            .collect();
        assert_eq!(entries, vec!["button", "widget", "card-stack"], "menu on {id}");

        let active: Vec<String> = page
            .query_all("ul.submenu > li.active")
            .iter()
            .filter_map(|li| li.attribute("id"))
            .collect();
        assert_eq!(active, vec![id.to_string()]);
    }
}

#[test]
fn category_entry_is_marked_active() {
    let (_tmp, site) = project();

    pipeline::run(&site).unwrap();

    let stack = read_page(&site, "card-stack");
    assert!(stack.query("li#layout").unwrap().has_class("active"));
    assert!(!stack.query("li#components").unwrap().has_class("active"));
}

#[test]
fn card_without_preview_hides_example() {
    let (_tmp, site) = project();

    pipeline::run(&site).unwrap();

    let page = read_page(&site, "button");
    let cards = page.query_all("div#cards_container > div.card");
    let hidden: Vec<String> = cards
        .iter()
        .filter(|card| {
            card.query("div.example-container")
                .unwrap()
                .attribute("style")
                .is_some_and(|s| s.contains("display: none"))
        })
        .map(|card| card.query("h4.card-title").unwrap().text())
        .collect();
    assert_eq!(hidden, vec!["Raw"]);
}

#[test]
fn stale_output_is_replaced() {
    let (_tmp, site) = project();
    fs::create_dir_all(site.dest_docs_path.join("old")).unwrap();
    fs::write(site.dest_docs_path.join("removed.html"), "stale").unwrap();
    fs::write(site.dest_docs_path.join("old/leftover.css"), "stale").unwrap();

    pipeline::run(&site).unwrap();

    assert!(!site.dest_docs_path.join("removed.html").exists());
    assert!(!site.dest_docs_path.join("old").exists());
    assert!(site.dest_docs_path.join("css/docs.css").is_file());
    assert!(site.dest_docs_path.join("js/app.min.js").is_file());
    assert!(site.dest_docs_path.join("widget.html").is_file());
}

#[test]
fn rebuilding_unchanged_project_is_byte_identical() {
    let (_tmp, site) = project();

    pipeline::run(&site).unwrap();
    let first: Vec<String> = ["button", "card-stack", "widget"]
        .iter()
        .map(|id| fs::read_to_string(site.dest_docs_path.join(format!("{id}.html"))).unwrap())
        .collect();

    pipeline::run(&site).unwrap();
    let second: Vec<String> = ["button", "card-stack", "widget"]
        .iter()
        .map(|id| fs::read_to_string(site.dest_docs_path.join(format!("{id}.html"))).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn duplicate_ids_write_a_single_file() {
    let (tmp, site) = project();
    let copy = tmp.path().join("src/zz-widget-copy/docs");
    fs::create_dir_all(&copy).unwrap();
    fs::copy(
        tmp.path().join("src/widgets/docs/configuration.json"),
        copy.join("configuration.json"),
    )
    .unwrap();
    fs::copy(
        tmp.path().join("src/widgets/docs/basic.html"),
        copy.join("basic.html"),
    )
    .unwrap();

    let report = pipeline::run(&site).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.pages.iter().filter(|p| p.id == "widget").count(), 2);
    assert_eq!(
        html_files(&site.dest_docs_path),
        vec!["button.html", "card-stack.html", "widget.html"]
    );
}

#[test]
fn configuration_without_id_is_skipped() {
    let (_tmp, site) = project();

    let report = pipeline::run(&site).unwrap();

    assert!(report.pages.iter().all(|p| p.title != "Draft"));
    let page = read_page(&site, "button");
    assert!(!page.query("nav").unwrap().text().contains("Draft"));
}
