//! Genre catalog — immutable dance-genre records and lookup.
//!
//! The catalog is built once at startup (either the builtin set or a YAML
//! file supplied on the command line) and never mutated afterwards. Lookup
//! misses are not errors; callers suppress genre-specific rendering instead.

mod builtin;

use std::path::Path;

use serde::Deserialize;

/// Tempo boundaries for a genre, in BPM. `min <= optimal <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TempoRange {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl TempoRange {
    /// Whether the range ordering invariant holds.
    pub fn is_valid(&self) -> bool {
        self.min <= self.optimal && self.optimal <= self.max
    }
}

/// A single dance genre: identity, practice material, and tempo boundaries.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreRecord {
    pub id: String,
    pub name: String,
    pub suggested_moves: Vec<String>,
    pub cultural_context: String,
    pub emotional_expression: String,
    pub technical_elements: Vec<String>,
    pub music_style: String,
    pub tempo_range: TempoRange,
}

/// Catalog errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    Io(std::io::Error),
    /// Failed to parse the YAML document.
    Parse(String),
    /// The catalog contains no genres.
    Empty,
    /// Two records share the same id.
    DuplicateId(String),
    /// A record violates `min <= optimal <= max`.
    InvalidTempoRange(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog read error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Empty => write!(f, "catalog contains no genres"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate genre id: {id}"),
            CatalogError::InvalidTempoRange(id) => {
                write!(f, "genre {id}: tempo range must satisfy min <= optimal <= max")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

/// An immutable, ordered collection of genre records.
#[derive(Debug, Clone)]
pub struct Catalog {
    genres: Vec<GenreRecord>,
}

impl Catalog {
    /// The builtin four-genre catalog.
    pub fn builtin() -> Self {
        Self {
            genres: builtin::genres(),
        }
    }

    /// Build a catalog from records, validating ids and tempo ranges.
    pub fn from_records(genres: Vec<GenreRecord>) -> Result<Self, CatalogError> {
        if genres.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, genre) in genres.iter().enumerate() {
            if !genre.tempo_range.is_valid() {
                return Err(CatalogError::InvalidTempoRange(genre.id.clone()));
            }
            if genres[..i].iter().any(|g| g.id == genre.id) {
                return Err(CatalogError::DuplicateId(genre.id.clone()));
            }
        }
        Ok(Self { genres })
    }

    /// Load a catalog from a YAML file (a top-level sequence of records).
    pub fn load_yaml(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let genres: Vec<GenreRecord> =
            serde_yaml::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_records(genres)
    }

    /// All genres in catalog order.
    pub fn genres(&self) -> &[GenreRecord] {
        &self.genres
    }

    /// Number of genres.
    pub fn len(&self) -> usize {
        self.genres.len()
    }

    /// Whether the catalog is empty. Constructors reject empty catalogs,
    /// so this is false in practice.
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Look up a genre by id. A miss is a defined "not found", not an error.
    pub fn find(&self, id: &str) -> Option<&GenreRecord> {
        self.genres.iter().find(|g| g.id == id)
    }

    /// Genre at a catalog position, for cycling through selections.
    pub fn at(&self, index: usize) -> Option<&GenreRecord> {
        self.genres.get(index)
    }

    /// Position of a genre id in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.genres.iter().position(|g| g.id == id)
    }
}
