//! Asset publishing: reset the output directory and copy static files in.
//!
//! ```text
//! docs/                    # dest_docs_path, emptied first
//! ├── css/docs.css         # everything under assets_dir, copied as-is
//! ├── img/logo.svg
//! └── js/app.min.js        # the compiled project script
//! ```
//!
//! Publishing is destructive: anything already in the destination is removed.
//! The pipeline treats a publishing failure as non-fatal; it logs the error
//! and still generates pages.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use walkdir::WalkDir;

/// Location of the embedded script inside the destination.
pub const SCRIPT_DEST: &str = "js/app.min.js";

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("could not reset {path}: {source}")]
    Reset {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read assets: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What [`publish_assets`] copied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    pub asset_files: usize,
    pub script: PathBuf,
}

/// Replace `dest_dir` with a fresh copy of `assets_dir` plus the project
/// script at `js/app.min.js`.
pub fn publish_assets(
    dest_dir: &Path,
    assets_dir: &Path,
    script_path: &Path,
) -> Result<PublishSummary, PublishError> {
    reset_dir(dest_dir)?;
    let asset_files = copy_dir_recursive(assets_dir, dest_dir)?;

    let script = dest_dir.join(SCRIPT_DEST);
    if let Some(parent) = script.parent() {
        fs::create_dir_all(parent).map_err(|source| PublishError::Reset {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::copy(script_path, &script).map_err(|source| PublishError::Copy {
        from: script_path.to_path_buf(),
        to: script.clone(),
        source,
    })?;

    info!(
        assets = asset_files,
        dest = %dest_dir.display(),
        "published site assets"
    );
    Ok(PublishSummary {
        asset_files,
        script,
    })
}

fn reset_dir(dir: &Path) -> Result<(), PublishError> {
    let reset = |source| PublishError::Reset {
        path: dir.to_path_buf(),
        source,
    };
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(reset)?;
    }
    fs::create_dir_all(dir).map_err(reset)
}

/// Copy the contents of `src` into `dst`, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, PublishError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        // strip_prefix cannot fail: every entry lives under `src`.
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        let copy_err = |source| PublishError::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(copy_err)?;
        } else {
            fs::copy(entry.path(), &target).map_err(copy_err)?;
            copied += 1;
        }
    }
    Ok(copied)
}
