//! Shared types read by every pipeline stage.
//!
//! A [`DocConfig`] is parsed from a `configuration.json` file by the scanner
//! and then borrowed read-only by every page generation task.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Name of the per-folder configuration file.
pub const CONFIG_FILENAME: &str = "configuration.json";

/// One documentation page, described by `docs/configuration.json`.
///
/// Every field is optional in the JSON file and `null` reads as absent. An
/// `id` that is not a string reads as empty. Entries whose `id` ends up empty
/// are dropped by the scanner, so anything past [`crate::scan`] can rely on a
/// non-empty id.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocConfig {
    /// Output filename stem and navigation anchor id.
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Custom element name, shown as `<tag-name>` next to the title.
    #[serde(deserialize_with = "null_as_default")]
    pub tag_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    /// Navigation submenu this page is listed under (`ul#{category}_menu`).
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cards: Vec<CardEntry>,
    /// Absolute path of the folder holding `configuration.json`.
    /// Attached by the scanner; never read from the file.
    #[serde(skip)]
    pub docs_path: PathBuf,
}

impl DocConfig {
    /// Filename of the generated page, e.g. `widget.html`.
    pub fn output_filename(&self) -> String {
        format!("{}.html", self.id)
    }
}

/// One example card inside a page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CardEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    /// Content fragment filename, relative to the owning `docs_path`.
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any non-string `id` reads as empty so the scanner drops the entry.
fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        _ => Ok(String::new()),
    }
}
