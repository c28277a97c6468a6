//! JSON document describing a generated fixture

use crate::core::types::{FixtureError, FixtureResult};
use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Description of one table in the metadata document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub description: String,
    pub columns: Vec<String>,
    pub row_count: u64,
    /// Peer column this table is meant to be joined against, federated fixture only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key_reference: Option<String>,
}

/// Top-level metadata document consumed by the query server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub server_name: String,
    pub database_path: String,
    pub description: String,
    pub business_use_cases: Vec<String>,
    pub tables: IndexMap<String, TableMetadata>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub notes: IndexMap<String, String>,
    pub last_updated: String,
}

impl MetadataDocument {
    /// Current time in the document's ISO-8601 form
    pub fn timestamp_now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Reads a document written by [`MetadataDocument::write`]
    pub fn read(path: &Path) -> FixtureResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the document, replacing any previous one.
    ///
    /// The JSON goes to a sibling temp file first and is renamed into place,
    /// so readers never observe a half-written document.
    pub fn write(&self, path: &Path) -> FixtureResult<()> {
        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');

        let tmp = temp_path(path);
        fs::write(&tmp, contents).map_err(|err| FixtureError::write_metadata(path, err))?;
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(FixtureError::write_metadata(path, err));
        }
        Ok(())
    }

    pub fn total_rows(&self) -> u64 {
        self.tables.values().map(|t| t.row_count).sum()
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "metadata.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
