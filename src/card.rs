//! Card rendering.
//!
//! A card shows one example: a live preview, the markup that produced it as
//! readable source, and optional notes. The card shell comes from
//! `card_template.html`; the example comes from a content fragment file named
//! by the card entry, which may contain any of:
//!
//! ```html
//! <div id="preview"><my-button>Go</my-button></div>          <!-- rendered live -->
//! <div id="markup"><my-button>Go</my-button></div>           <!-- shown as source -->
//! <div id="additional_info"><p>Accepts any text.</p></div>  <!-- notes -->
//! ```
//!
//! | Template slot | Filled from |
//! |---------------|-------------|
//! | `h4.card-title` | entry title (text) |
//! | `h6.card-subtitle` | entry subtitle (HTML) |
//! | `div.example-preview` | `#preview` inner HTML, verbatim |
//! | `div.example-markup` | `#markup` inner HTML, as text |
//! | `div#additional_info` | `#additional_info` inner HTML, else template default |
//!
//! Unless both `#preview` and `#markup` exist, the whole
//! `div.example-container` is hidden.

use crate::dom::{Document, DomError, Element};
use crate::types::CardEntry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const HIDDEN_STYLE: &str = "display: none;";

#[derive(Error, Debug)]
pub enum CardError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("card '{title}': {source}")]
    Template { title: String, source: DomError },
}

/// A filled card, not yet attached to any page.
pub struct RenderedCard {
    root: Element,
    /// Whether the example container is visible.
    pub has_example: bool,
}

impl RenderedCard {
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Render one card entry using the card template at `template_path`.
///
/// `docs_path` is the documentation folder the entry's `contents` file is
/// relative to.
pub fn generate_card(
    entry: &CardEntry,
    docs_path: &Path,
    template_path: &Path,
) -> Result<RenderedCard, CardError> {
    let template = Document::parse(&read(template_path)?);
    let fragment = Document::parse(&read(&docs_path.join(&entry.contents))?);

    let (root, has_example) =
        fill_card(entry, &template, &fragment).map_err(|source| CardError::Template {
            title: entry.title.clone(),
            source,
        })?;

    Ok(RenderedCard { root, has_example })
}

/// Fill the template's card root from `fragment`. Returns the root and
/// whether the example container stayed visible.
fn fill_card(
    entry: &CardEntry,
    template: &Document,
    fragment: &Document,
) -> Result<(Element, bool), DomError> {
    let root = template.first_body_element()?;

    root.query("h4.card-title")?.set_text(&entry.title);
    root.query("h6.card-subtitle")?.set_inner_html(&entry.subtitle);

    let has_example = match (fragment.find("#preview"), fragment.find("#markup")) {
        (Some(preview), Some(markup)) => {
            root.query("div.example-preview")?.set_inner_html(&preview.inner_html()?);
            root.query("div.example-markup")?.set_text(&markup.inner_html()?);
            true
        }
        _ => {
            root.query("div.example-container")?.set_attribute("style", HIDDEN_STYLE);
            false
        }
    };

    if let Some(info) = fragment.find("#additional_info") {
        root.query("div#additional_info")?.set_inner_html(&info.inner_html()?);
    }

    Ok((root, has_example))
}

fn read(path: &Path) -> Result<String, CardError> {
    fs::read_to_string(path).map_err(|source| CardError::Io {
        path: path.to_path_buf(),
        source,
    })
}
