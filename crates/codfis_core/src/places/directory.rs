//! Ordered place lookup.
//!
//! # Responsibility
//! - Resolve birthplace text to a place code for encoding.
//! - Resolve an embedded place code to a record for decoding.
//!
//! # Invariants
//! - Name matching compares slugs, never raw text.
//! - Lookup sources are tried in order and stop at the first match.

use crate::model::place::{is_place_code, PlaceRecord};
use crate::normalize::slug;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Which reference table a record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceSource {
    Municipalities,
    Countries,
}

impl PlaceSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Municipalities => "municipalities",
            Self::Countries => "countries",
        }
    }
}

/// Error raised while loading reference tables.
#[derive(Debug)]
pub enum PlaceDataError {
    Io {
        path: PathBuf,
        err: std::io::Error,
    },
    Json(serde_json::Error),
    /// A record has an empty name or a code not shaped like `F205`.
    InvalidRecord {
        source: PlaceSource,
        index: usize,
        code: String,
    },
    /// Process-wide tables were requested before installation.
    NotInstalled,
    /// Different process-wide tables are already installed.
    AlreadyInstalled,
}

impl Display for PlaceDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, err } => {
                write!(f, "failed to read place table `{}`: {err}", path.display())
            }
            Self::Json(err) => write!(f, "invalid place table json: {err}"),
            Self::InvalidRecord {
                source,
                index,
                code,
            } => write!(
                f,
                "invalid place record #{index} in {}: code `{code}`",
                source.as_str()
            ),
            Self::NotInstalled => write!(f, "place tables are not installed"),
            Self::AlreadyInstalled => {
                write!(f, "different place tables are already installed")
            }
        }
    }
}

impl Error for PlaceDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PlaceDataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Municipalities and countries, searched in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceDirectory {
    municipalities: Vec<PlaceRecord>,
    countries: Vec<PlaceRecord>,
}

impl PlaceDirectory {
    /// Creates a directory from in-memory tables.
    ///
    /// Codes are upper-cased; record order is preserved.
    pub fn new(municipalities: Vec<PlaceRecord>, countries: Vec<PlaceRecord>) -> Self {
        Self {
            municipalities: municipalities.into_iter().map(uppercase_code).collect(),
            countries: countries.into_iter().map(uppercase_code).collect(),
        }
    }

    /// Parses both tables from JSON arrays of `{ "name", "code" }` objects.
    ///
    /// # Errors
    /// - `Json` when either document is not a record array.
    /// - `InvalidRecord` when a record has a blank name or malformed code.
    pub fn from_json(municipalities: &str, countries: &str) -> Result<Self, PlaceDataError> {
        let municipalities = parse_table(municipalities, PlaceSource::Municipalities)?;
        let countries = parse_table(countries, PlaceSource::Countries)?;
        Ok(Self::new(municipalities, countries))
    }

    /// Reads both tables from JSON files, as [`PlaceDirectory::from_json`].
    pub fn from_json_files(
        municipalities: &Path,
        countries: &Path,
    ) -> Result<Self, PlaceDataError> {
        let municipalities = read_table_file(municipalities)?;
        let countries = read_table_file(countries)?;
        Self::from_json(&municipalities, &countries)
    }

    pub fn municipalities(&self) -> &[PlaceRecord] {
        &self.municipalities
    }

    pub fn countries(&self) -> &[PlaceRecord] {
        &self.countries
    }

    /// Resolves a birthplace (name or code) to its place code.
    ///
    /// Input shaped like a place code is matched by code, anything else by
    /// name slug.
    pub fn find_code(&self, birthplace: &str) -> Option<&str> {
        let trimmed = birthplace.trim();
        let by_code = is_place_code(trimmed);
        let wanted = slug(trimmed);

        for source in [PlaceSource::Municipalities, PlaceSource::Countries] {
            let found = self.table(source).iter().find(|record| {
                let key = if by_code { &record.code } else { &record.name };
                slug(key) == wanted
            });
            if let Some(record) = found {
                debug!(
                    "event=place_lookup module=places status=ok source={} by_code={}",
                    source.as_str(),
                    by_code
                );
                return Some(record.code.as_str());
            }
        }

        debug!(
            "event=place_lookup module=places status=miss by_code={}",
            by_code
        );
        None
    }

    /// Resolves an exact place code to a single record.
    ///
    /// Sources are tried in lookup order. Within one source, when several
    /// records share the code, the first one not marked soppresso wins; if
    /// all are marked, the last one is used. The marker is stripped from the
    /// returned name.
    pub fn resolve_code(&self, code: &str) -> Option<PlaceRecord> {
        for source in [PlaceSource::Municipalities, PlaceSource::Countries] {
            let matches: Vec<&PlaceRecord> = self
                .table(source)
                .iter()
                .filter(|record| record.code == code)
                .collect();

            let chosen = matches
                .iter()
                .find(|record| !record.is_soppresso())
                .or_else(|| matches.last());
            if let Some(record) = chosen {
                debug!(
                    "event=place_resolve module=places status=ok source={}",
                    source.as_str()
                );
                return Some(record.without_soppresso_marker());
            }
        }

        debug!("event=place_resolve module=places status=miss");
        None
    }

    fn table(&self, source: PlaceSource) -> &[PlaceRecord] {
        match source {
            PlaceSource::Municipalities => &self.municipalities,
            PlaceSource::Countries => &self.countries,
        }
    }
}

fn uppercase_code(record: PlaceRecord) -> PlaceRecord {
    PlaceRecord {
        code: record.code.trim().to_ascii_uppercase(),
        name: record.name,
    }
}

fn read_table_file(path: &Path) -> Result<String, PlaceDataError> {
    std::fs::read_to_string(path).map_err(|err| PlaceDataError::Io {
        path: path.to_path_buf(),
        err,
    })
}

fn parse_table(json: &str, source: PlaceSource) -> Result<Vec<PlaceRecord>, PlaceDataError> {
    let records: Vec<PlaceRecord> = serde_json::from_str(json)?;
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() || !is_place_code(record.code.trim()) {
            return Err(PlaceDataError::InvalidRecord {
                source,
                index,
                code: record.code.clone(),
            });
        }
    }
    Ok(records)
}
