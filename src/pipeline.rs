//! Build orchestration.
//!
//! ```text
//! 1. Publish   assets_dir + script   →  dest_docs_path/   (best effort)
//! 2. Scan      src_path              →  Vec<DocConfig>    (fatal on error)
//! 3. Generate  each DocConfig        →  {id}.html         (parallel, isolated)
//! ```
//!
//! Asset and page failures are logged and recorded in the [`BuildReport`];
//! only a scan failure aborts the run. Pages are generated as one unordered
//! parallel batch on the rayon pool. Two configurations sharing an `id` write
//! the same file and whichever finishes last wins.

use crate::config::SiteConfig;
use crate::generate::{GeneratedPage, generate_page};
use crate::publish::{PublishSummary, publish_assets};
use crate::scan::{ScanError, scan};
use crate::types::DocConfig;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
}

/// A page that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub id: String,
    pub error: String,
}

/// Outcome of a full build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Set when publishing succeeded.
    pub assets: Option<PublishSummary>,
    /// Set when publishing failed; the build carried on without assets.
    pub asset_error: Option<String>,
    /// Pages written, in discovery order.
    pub pages: Vec<GeneratedPage>,
    pub failures: Vec<PageFailure>,
    pub elapsed: Duration,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.asset_error.is_none() && self.failures.is_empty()
    }
}

/// Run the whole pipeline with the given configuration.
pub fn run(site: &SiteConfig) -> Result<BuildReport, PipelineError> {
    let started = Instant::now();
    if site.project_name.is_empty() {
        warn!("project_name is not set; page titles will start with \" - \"");
    }

    let mut report = BuildReport::default();
    match publish_assets(&site.dest_docs_path, &site.assets_dir, &site.script_path) {
        Ok(summary) => report.assets = Some(summary),
        Err(err) => {
            error!(error = %err, "asset publishing failed");
            report.asset_error = Some(err.to_string());
        }
    }

    let docs = scan(&site.src_path)?;
    info!(pages = docs.len(), "discovered documentation folders");

    for (doc, outcome) in docs.iter().zip(generate_all(&docs, site)) {
        match outcome {
            Ok(page) => report.pages.push(page),
            Err(err) => report.failures.push(PageFailure {
                id: doc.id.clone(),
                error: err,
            }),
        }
    }

    report.elapsed = started.elapsed();
    info!(
        generated = report.pages.len(),
        failed = report.failures.len(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "build finished"
    );
    Ok(report)
}

/// Generate every page in parallel. Results come back in `docs` order.
fn generate_all(docs: &[DocConfig], site: &SiteConfig) -> Vec<Result<GeneratedPage, String>> {
    (0..docs.len())
        .into_par_iter()
        .map(|index| {
            let id = &docs[index].id;
            match generate_page(docs, index, site) {
                Ok(page) => {
                    info!(id = %id, output = %page.output.display(), "generated page");
                    Ok(page)
                }
                Err(err) => {
                    error!(id = %id, error = %err, "page generation failed");
                    Err(err.to_string())
                }
            }
        })
        .collect()
}
