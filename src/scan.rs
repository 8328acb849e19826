//! Documentation folder discovery.
//!
//! Walks the project source tree looking for directories named `docs`
//! (case-insensitive). Each one describes a single page through its
//! `configuration.json`:
//!
//! ```text
//! src/
//! ├── widgets/
//! │   ├── widget.js
//! │   └── docs/                    # Documentation folder
//! │       ├── configuration.json   # One page: id, title, cards, ...
//! │       └── basic.html           # Card content fragment
//! └── layout/
//!     └── grid/
//!         └── docs/
//!             └── configuration.json
//! ```
//!
//! ## Rules
//!
//! - A `docs` directory is never descended into; nested `docs` folders inside
//!   it are content, not pages.
//! - Every other directory is recursed into. Files are ignored.
//! - Siblings are visited in file-name order, so the resulting list (and the
//!   navigation menu built from it) is stable across runs.
//! - Configurations with an empty, missing, `null` or non-string `id` are
//!   dropped.
//!
//! A missing or malformed `configuration.json` is an error for the whole
//! scan: one bad folder stops the build.

use crate::types::{CONFIG_FILENAME, DocConfig};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Directory name that marks a documentation folder.
pub const DOCS_DIR_NAME: &str = "docs";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Discover every documentation folder under `root`.
///
/// Returns the configurations in walk order, each annotated with the absolute
/// path of its folder, keeping only entries with a non-empty `id`.
pub fn scan(root: &Path) -> Result<Vec<DocConfig>, ScanError> {
    let mut configs = Vec::new();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if is_docs_dir(entry.path()) {
            walker.skip_current_dir();
            configs.push(load_doc_config(entry.path())?);
        }
    }

    let found = configs.len();
    let configs: Vec<DocConfig> = configs.into_iter().filter(|c| !c.id.is_empty()).collect();
    debug!(
        found,
        kept = configs.len(),
        root = %root.display(),
        "scanned documentation folders"
    );
    Ok(configs)
}

/// Read and parse `configuration.json` from a documentation folder.
pub fn load_doc_config(docs_dir: &Path) -> Result<DocConfig, ScanError> {
    let config_path = docs_dir.join(CONFIG_FILENAME);
    let content = fs::read_to_string(&config_path).map_err(|source| ScanError::Io {
        path: config_path.clone(),
        source,
    })?;
    let mut config: DocConfig =
        serde_json::from_str(&content).map_err(|source| ScanError::Json {
            path: config_path.clone(),
            source,
        })?;
    config.docs_path = std::path::absolute(docs_dir).map_err(|source| ScanError::Io {
        path: docs_dir.to_path_buf(),
        source,
    })?;
    debug!(id = %config.id, path = %config.docs_path.display(), "found documentation folder");
    Ok(config)
}

fn is_docs_dir(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().eq_ignore_ascii_case(DOCS_DIR_NAME))
}
