//! Run configuration.
//!
//! Every path and name the pipeline needs is gathered once at startup into an
//! immutable [`SiteConfig`] and passed by reference to each stage. Values come
//! from three layers, later layers winning:
//!
//! ```text
//! stock defaults  →  component-docs.toml  →  command-line flags
//! ```
//!
//! Layers are merged as TOML tables ([`merge_toml`]) before deserializing, so
//! a config file or a flag only needs to mention the keys it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! project_name = ""                     # Shown in page titles and the header
//! src_path = "src"                      # Tree scanned for docs/ folders
//! dest_docs_path = "docs"               # Output directory (wiped every build)
//! script_path = "dist/app.min.js"       # Copied to <dest>/js/app.min.js
//! template_dir = "docs-template"        # page_template.html, card_template.html
//! assets_dir = "docs-template/assets"   # Copied verbatim into <dest>
//!
//! [processing]
//! max_processes = 4                     # Parallel page workers (omit = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "component-docs.toml";

pub const PAGE_TEMPLATE: &str = "page_template.html";
pub const CARD_TEMPLATE: &str = "card_template.html";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Immutable run configuration shared by every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Display name used in page titles and the main header link.
    pub project_name: String,
    /// Project source root scanned for documentation folders.
    pub src_path: PathBuf,
    /// Output website directory. Its previous contents are deleted on build.
    pub dest_docs_path: PathBuf,
    /// Compiled project script embedded as `js/app.min.js`.
    pub script_path: PathBuf,
    /// Directory holding the page and card templates.
    pub template_dir: PathBuf,
    /// Static site assets copied into the output directory.
    pub assets_dir: PathBuf,
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            src_path: PathBuf::from("src"),
            dest_docs_path: PathBuf::from("docs"),
            script_path: PathBuf::from("dist/app.min.js"),
            template_dir: PathBuf::from("docs-template"),
            assets_dir: PathBuf::from("docs-template/assets"),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dest_docs_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "dest_docs_path must not be empty".into(),
            ));
        }
        if self.dest_docs_path == self.src_path {
            return Err(ConfigError::Validation(
                "dest_docs_path must differ from src_path (it is wiped on every build)".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn page_template_path(&self) -> PathBuf {
        self.template_dir.join(PAGE_TEMPLATE)
    }

    pub fn card_template_path(&self) -> PathBuf {
        self.template_dir.join(CARD_TEMPLATE)
    }
}

/// Parallel page generation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page generation workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective worker count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Layer loading and merging
// =============================================================================

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// A missing file is not an error when `required` is false: the file layer is
/// simply skipped. An explicitly requested file must exist.
pub fn load_raw_config(path: &Path, required: bool) -> Result<Option<toml::Value>, ConfigError> {
    if !required && !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge every layer onto the stock defaults, deserialize, and validate.
pub fn resolve_config(layers: Vec<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let merged = layers
        .into_iter()
        .fold(stock_defaults_value()?, merge_toml);
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project_name: Option<String>,
    pub src_path: Option<PathBuf>,
    pub dest_docs_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Only the keys that were actually given, as a TOML table.
    pub fn to_toml(&self) -> toml::Value {
        let mut table = toml::map::Map::new();
        if let Some(name) = &self.project_name {
            table.insert("project_name".into(), toml::Value::String(name.clone()));
        }
        let paths = [
            ("src_path", &self.src_path),
            ("dest_docs_path", &self.dest_docs_path),
            ("script_path", &self.script_path),
            ("template_dir", &self.template_dir),
            ("assets_dir", &self.assets_dir),
        ];
        for (key, value) in paths {
            if let Some(path) = value {
                table.insert(
                    key.into(),
                    toml::Value::String(path.to_string_lossy().into_owned()),
                );
            }
        }
        toml::Value::Table(table)
    }
}

/// Load the run configuration: defaults, then the config file, then flags.
///
/// `config_file` is the `--config` argument; when absent,
/// [`DEFAULT_CONFIG_FILE`] in the working directory is used if it exists.
pub fn load_config(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SiteConfig, ConfigError> {
    let file_layer = match config_file {
        Some(path) => load_raw_config(path, true)?,
        None => load_raw_config(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    let mut layers: Vec<toml::Value> = file_layer.into_iter().collect();
    layers.push(overrides.to_toml());
    resolve_config(layers)
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# component-docs configuration
# =============================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Display name used in page titles ("<name> - Title <tag>") and the header.
project_name = ""

# Project source root. Every folder named "docs" below it that holds a
# configuration.json becomes one page.
src_path = "src"

# Output website directory. WARNING: its contents are deleted on every build.
dest_docs_path = "docs"

# Compiled project script, copied to <dest_docs_path>/js/app.min.js.
script_path = "dist/app.min.js"

# Directory holding page_template.html and card_template.html.
template_dir = "docs-template"

# Static assets (css, images, fonts) copied verbatim into the output.
assets_dir = "docs-template/assets"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page generation workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
