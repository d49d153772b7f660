//! # Health Catalogue
//!
//! Static condition-descriptor lookup.
//!
//! The catalogue is a JSON document of health condition records (symptoms,
//! prevention, treatment). Lookup is an exact case-insensitive match on the
//! condition name. Loading and lookup are separate stages so the match logic
//! can be tested without touching the filesystem, and rendering is a pure
//! function of the outcome.

pub mod render;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Literal message shown when no condition matches the search term.
pub const NOT_FOUND_MESSAGE: &str = "Condition not found.";

/// Literal message shown when the catalogue document cannot be read or parsed.
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data.";

/// Errors that can occur while loading the catalogue document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("failed to read conditions file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to parse conditions file: {0}")]
    Parse(serde_json::Error),
}

pub type CatalogueResult<T> = std::result::Result<T, CatalogueError>;

/// One descriptive record for a health condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// Display name, also the lookup key.
    pub name: String,
    pub symptoms: Vec<String>,
    pub prevention: Vec<String>,
    pub treatment: String,
    /// Illustration path; optional in the document.
    #[serde(default)]
    pub imagesrc: String,
}

/// The full set of condition records from one catalogue document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    conditions: Vec<ConditionRecord>,
}

impl Catalogue {
    /// Parses a catalogue from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Parse` if the document does not match the
    /// expected `{ "conditions": [...] }` shape.
    pub fn from_json(json: &str) -> CatalogueResult<Self> {
        serde_json::from_str(json).map_err(CatalogueError::Parse)
    }

    /// Reads and parses a catalogue document from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::FileRead` if the file cannot be read, or
    /// `CatalogueError::Parse` if its content is not a valid catalogue.
    pub fn load(path: impl AsRef<Path>) -> CatalogueResult<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(CatalogueError::FileRead)?;
        Self::from_json(&text)
    }

    /// Resolves a search term to a condition record.
    ///
    /// The match is exact on the record name, ignoring case. Returns `None`
    /// when no record matches; the caller decides how to surface that.
    pub fn find(&self, name: &str) -> Option<&ConditionRecord> {
        let needle = name.trim().to_lowercase();
        self.conditions
            .iter()
            .find(|record| record.name.to_lowercase() == needle)
    }

    /// All records, in document order.
    pub fn conditions(&self) -> &[ConditionRecord] {
        &self.conditions
    }
}
