//! Occupation reference table: delimited-text loading, theme-string
//! normalization, and a load-once cache the matcher itself never sees.

mod normalizer;
mod parser;
mod store;

pub use store::{CachedCatalog, CatalogSource, FileCatalogSource, StaticCatalogSource};

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One reference occupation and its normalized theme string (e.g. "RIC").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationRow {
    pub occupation: String,
    pub theme: String,
}

/// Immutable set of occupation rows for the lifetime of a cache entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupationCatalog {
    rows: Vec<OccupationRow>,
}

impl OccupationCatalog {
    /// Build a catalog from in-memory rows, applying the same normalization
    /// and drop rules as the text loader.
    pub fn from_rows(rows: Vec<OccupationRow>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|row| {
                let occupation = row.occupation.trim().to_string();
                let theme = normalizer::normalize_theme(&row.theme);
                if occupation.is_empty() || theme.is_empty() {
                    return None;
                }
                Some(OccupationRow { occupation, theme })
            })
            .collect();

        Self { rows }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self {
            rows: parser::parse_rows(reader)?,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_reader(File::open(path)?)
    }

    pub fn rows(&self) -> &[OccupationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read occupation catalog: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid occupation catalog data: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
