//! Page generation.
//!
//! Each discovered [`DocConfig`] becomes one `{id}.html` file, built by
//! filling a fresh copy of `page_template.html`:
//!
//! | Template element | Filled with |
//! |------------------|-------------|
//! | `title` | `"{project} - {title} <{tagName}>"` |
//! | `a#main_header_link` | `"{project} Documentation"` |
//! | `ul#{category}_menu` | one `<li>` per discovered page whose category it is |
//! | `li#{category}` | gains the `active` class for the current page's category |
//! | `h1#content_title` | title plus `<code>&lt;tagName&gt;</code>` |
//! | `small#content_subtitle` | subtitle (HTML) |
//! | `div#cards_container` | one rendered card per card entry, in order |
//!
//! ## Navigation
//!
//! The menu is rebuilt from the full configuration list for every page, so
//! all pages carry the same entries. Only the entry for the page being
//! rendered gets the `active` class.
//!
//! Fragments inserted into the template (nav items, the content title) are
//! rendered with [maud](https://maud.lambda.xyz/), so titles and tag names are
//! escaped.

use crate::card::{CardError, generate_card};
use crate::config::SiteConfig;
use crate::dom::{Document, DomError};
use crate::types::DocConfig;
use maud::{Markup, html};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Class marking the navigation entry of the page being viewed.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("could not read template {path}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Card(#[from] CardError),
}

/// A successfully written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub id: String,
    pub title: String,
    pub tag_name: String,
    pub output: PathBuf,
    pub cards: usize,
    /// Cards whose example container was hidden (missing preview or markup).
    pub hidden_examples: usize,
}

/// Render `all[index]` and write it to `{dest_docs_path}/{id}.html`.
pub fn generate_page(
    all: &[DocConfig],
    index: usize,
    site: &SiteConfig,
) -> Result<GeneratedPage, GenerateError> {
    let doc = &all[index];
    let page = render_page(all, index, site)?;

    let output = site.dest_docs_path.join(doc.output_filename());
    fs::write(&output, page.html).map_err(|source| GenerateError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(GeneratedPage {
        id: doc.id.clone(),
        title: doc.title.clone(),
        tag_name: doc.tag_name.clone(),
        output,
        cards: doc.cards.len(),
        hidden_examples: page.hidden_examples,
    })
}

struct RenderedPage {
    html: String,
    hidden_examples: usize,
}

fn render_page(
    all: &[DocConfig],
    index: usize,
    site: &SiteConfig,
) -> Result<RenderedPage, GenerateError> {
    let doc = &all[index];
    let template_path = site.page_template_path();
    let template = fs::read_to_string(&template_path).map_err(|source| {
        GenerateError::Template {
            path: template_path.clone(),
            source,
        }
    })?;
    let page = Document::parse(&template);

    page.query("title")?.set_text(&page_title(&site.project_name, doc));
    page.query("a#main_header_link")?.set_text(&format!("{} Documentation", site.project_name));

    for (i, entry) in all.iter().enumerate() {
        let menu = page.query(&format!("ul#{}_menu", entry.category))?;
        menu.append_html(&nav_item(entry, i == index).into_string());
    }
    page.query(&format!("li#{}", doc.category))?.add_class(ACTIVE_CLASS);

    page.query("h1#content_title")?.set_inner_html(&content_title(doc).into_string());
    page.query("small#content_subtitle")?.set_inner_html(&doc.subtitle);

    let container = page.query("div#cards_container")?;
    let card_template = site.card_template_path();
    let mut hidden_examples = 0;
    for entry in &doc.cards {
        let card = generate_card(entry, &doc.docs_path, &card_template)?;
        if !card.has_example {
            hidden_examples += 1;
        }
        container.append(card.root());
    }

    Ok(RenderedPage {
        html: page.serialize()?,
        hidden_examples,
    })
}

/// Browser tab title, e.g. `Kit - Widget <my-widget>`.
pub fn page_title(project_name: &str, doc: &DocConfig) -> String {
    format!("{} - {} <{}>", project_name, doc.title, doc.tag_name)
}

/// One navigation entry linking to a page.
pub fn nav_item(doc: &DocConfig, active: bool) -> Markup {
    html! {
        li id=(doc.id) class=(if active { ACTIVE_CLASS } else { "" }) {
            a href={ (doc.id) ".html" } {
                (doc.title) " " code { "<" (doc.tag_name) ">" }
            }
        }
    }
}

fn content_title(doc: &DocConfig) -> Markup {
    html! {
        (doc.title) " " code { "<" (doc.tag_name) ">" }
    }
}
