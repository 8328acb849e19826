//! # Component Docs
//!
//! A static documentation site generator for web component libraries. The
//! project's source tree is the data source: every folder named `docs` with a
//! `configuration.json` becomes one page, and the HTML fragments next to that
//! configuration become the example cards on it.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Publish   docs-template/assets + dist/app.min.js  →  docs/       (reset + copy)
//! 2. Scan      src/                                    →  Vec<DocConfig>
//! 3. Generate  Vec<DocConfig> + templates              →  docs/{id}.html
//! ```
//!
//! Publishing runs first because it wipes the output directory. Generation
//! runs every page as one parallel batch on the rayon pool; a page that fails
//! is logged and reported without stopping its siblings.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source tree for `docs` folders and parses their `configuration.json` |
//! | [`publish`] | Resets the output directory, copies static assets and the project script |
//! | [`generate`] | Fills `page_template.html` for one configuration: title, nav menu, cards |
//! | [`card`] | Fills `card_template.html` from one content fragment |
//! | [`pipeline`] | Runs the three stages and collects a [`pipeline::BuildReport`] |
//! | [`dom`] | Parse/query/mutate/serialize adapter over an HTML document tree |
//! | [`config`] | Layered `component-docs.toml` loading, CLI overrides, validation |
//! | [`types`] | `configuration.json` data model (`DocConfig`, `CardEntry`) |
//! | [`logging`] | `tracing` subscriber setup (human or JSON, stderr) |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Templates Stay HTML
//!
//! Page and card templates are ordinary HTML files owned by the documentation
//! site, not by this crate. The generator only relies on a fixed set of ids
//! and classes inside them and fills those through a real document tree, so
//! designers can restyle the site without touching Rust.
//!
//! ## Maud For Generated Fragments
//!
//! The few pieces of markup the generator creates itself (navigation entries,
//! the content heading) are written with [Maud](https://maud.lambda.xyz/), so
//! titles and tag names coming from JSON are escaped on the way in.
//!
//! ## Fresh Templates Per Task
//!
//! Each page and each card re-reads its template from disk. Document trees are
//! not shared between tasks, so concurrent pages never observe each other's
//! edits.

pub mod card;
pub mod config;
pub mod dom;
pub mod generate;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod publish;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
