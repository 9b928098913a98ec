//! Store module for the marquee catalogue engine.
//!
//! The [`Store`] owns a single JSON file mapping movie titles to their
//! record fields and exposes load/save plus the three mutating operations
//! (add, update, delete).
//!
//! # Design
//!
//! Every mutating call is its own read-modify-write cycle against the
//! persisted file: it reloads the latest state, applies the change, and
//! rewrites the whole catalogue. No in-memory cache spans calls, so
//! subsequent reads through the same API always observe completed writes.
//!
//! Writes go to a sibling temp file which is then atomically renamed over
//! the target, so a failed or interrupted save leaves the previous
//! catalogue intact rather than a truncated file.
//!
//! # Consistency
//!
//! The store assumes a single writer. Two interleaved load/save cycles
//! race on the file and the later save silently wins (lost update). Uses
//! that need concurrent writers must wrap each mutation in an external
//! exclusive lock; the store itself takes none.
//!
//! # File Layout
//!
//! ```text
//! movies.json        <- pretty-printed JSON object, title -> {year, rating}
//! movies.json.tmp    <- transient, only present mid-save
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use marquee::Store;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new("movies.json");
//!
//! store.add("Titanic", 1997, 7.9)?;
//! store.update("Titanic", 8.1)?;
//!
//! let catalog = store.load()?;
//! for (title, movie) in &catalog {
//!     println!("{title} ({}): {}", movie.year, movie.rating);
//! }
//!
//! store.delete("Titanic")?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MarqueeError, Result, StorageError};
use crate::movie::{Catalog, Movie};

/// Extension appended to the catalogue path for the temp file used by
/// atomic saves.
const TMP_EXTENSION: &str = "tmp";

/// Handle to a persisted movie catalogue file.
///
/// Holds only the file path; all state lives on disk. Constructing a store
/// performs no I/O, so a store pointed at a nonexistent file is valid and
/// simply loads as empty.
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the catalogue JSON file.
    path: PathBuf,
}

impl Store {
    /// Creates a store handle for the catalogue file at `path`.
    ///
    /// No I/O happens here; the file is created on the first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the catalogue file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current catalogue snapshot.
    ///
    /// A missing file is the empty catalogue (first run), not an error.
    ///
    /// # Errors
    ///
    /// - [`StorageError::ReadFailed`] if the file exists but cannot be read
    /// - [`StorageError::Corrupted`] if the file exists but does not parse
    ///   as a title→movie map
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Ok(Catalog::new());
        }

        let data = fs::read_to_string(&self.path).map_err(|e| StorageError::ReadFailed {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let catalog = serde_json::from_str(&data).map_err(|e| StorageError::Corrupted {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(catalog)
    }

    /// Replaces the entire persisted catalogue with `catalog`.
    ///
    /// The JSON is written to a sibling temp file and renamed over the
    /// target, so from the caller's perspective the save is all-or-nothing:
    /// on failure the previously persisted catalogue is untouched.
    ///
    /// # Errors
    ///
    /// - [`StorageError::SerializeFailed`] if JSON encoding fails
    /// - [`StorageError::WriteFailed`] if the temp file cannot be written
    ///   or renamed into place
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| MarqueeError::Storage(StorageError::SerializeFailed(e)))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| StorageError::WriteFailed {
            path: tmp_path.display().to_string(),
            source: e,
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::WriteFailed {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Adds a movie, overwriting any existing entry with the same title.
    ///
    /// Loads the catalogue, inserts, and saves. Idempotent on identical
    /// inputs. Year and rating ranges are not validated here; that is the
    /// calling layer's job.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorageError`] from the load/save cycle.
    pub fn add(&self, title: &str, year: i32, rating: f64) -> Result<()> {
        let mut catalog = self.load()?;
        catalog.insert(title.to_string(), Movie::new(year, rating));
        self.save(&catalog)
    }

    /// Replaces the rating of an existing movie, leaving its year untouched.
    ///
    /// # Errors
    ///
    /// - [`MarqueeError::NotFound`] if `title` is not in the catalogue
    /// - any [`StorageError`] from the load/save cycle
    pub fn update(&self, title: &str, rating: f64) -> Result<()> {
        let mut catalog = self.load()?;

        match catalog.get_mut(title) {
            Some(movie) => movie.rating = rating,
            None => {
                return Err(MarqueeError::NotFound {
                    title: title.to_string(),
                });
            }
        }

        self.save(&catalog)
    }

    /// Removes a movie from the catalogue.
    ///
    /// # Errors
    ///
    /// - [`MarqueeError::NotFound`] if `title` is not in the catalogue
    /// - any [`StorageError`] from the load/save cycle
    pub fn delete(&self, title: &str) -> Result<()> {
        let mut catalog = self.load()?;

        if catalog.remove(title).is_none() {
            return Err(MarqueeError::NotFound {
                title: title.to_string(),
            });
        }

        self.save(&catalog)
    }

    /// Path of the temp file used during an atomic save.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".");
        name.push(TMP_EXTENSION);
        PathBuf::from(name)
    }
}
