//! # marquee
//!
//! Flat-file movie catalogue store with fuzzy search and analytics.
//!
//! marquee keeps a small personal catalogue of movies (title, release year,
//! rating) in a single human-readable JSON file and answers queries over
//! it: exact and fuzzy title search, sorting, range filtering, summary
//! statistics, random selection, and rating-histogram bucketing.
//!
//! ## Key Properties
//!
//! - One JSON file, no daemon — titles map to `{year, rating}` records
//! - Every mutation is a full load-modify-save cycle; no cached state
//!   spans calls, so reads always observe completed writes
//! - Atomic saves via temp-file-and-rename; a failed save never truncates
//!   the existing catalogue
//! - Queries are pure functions over a loaded snapshot
//! - Pluggable similarity scoring for fuzzy search
//! - Single-writer by design; concurrent writers race and the later save
//!   wins
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marquee::{IndelScorer, SearchOutcome, Store};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new("movies.json");
//!
//! store.add("The Shawshank Redemption", 1994, 9.3)?;
//! store.add("Titanic", 1997, 7.9)?;
//!
//! let catalog = store.load()?;
//!
//! // Fuzzy search tolerates typos
//! if let SearchOutcome::Suggestions(hits) =
//!     marquee::query::search(&catalog, "Shwshank", &IndelScorer)
//! {
//!     for hit in hits {
//!         println!("did you mean {} (score {:.0})?", hit.title, hit.score);
//!     }
//! }
//!
//! // Summary statistics
//! if let Some(stats) = marquee::query::statistics(&catalog) {
//!     println!("best: {} ({:.1})", stats.best.0, stats.best.1.rating);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`Store`] — owns the catalogue file; load, save, add, update, delete
//! - [`Catalog`] — a title→[`Movie`] snapshot handed to the query layer
//! - [`query`] — pure search/sort/filter/statistics/random-pick functions
//! - [`Scorer`] — pluggable similarity capability, [`IndelScorer`] default
//! - [`Histogram`] — rating bins for an external plotting collaborator
//!
//! ## Modules
//!
//! For lower-level access, the individual modules are also public:
//!
//! - [`store`] — catalogue persistence and mutation
//! - [`movie`] — record and snapshot types
//! - [`query`] — search, sort, filter, statistics, random pick
//! - [`similarity`] — similarity scoring trait and default scorer
//! - [`histogram`] — rating-distribution bucketing
//! - [`error`] — error types

pub mod error;
pub mod histogram;
pub mod movie;
pub mod query;
pub mod similarity;
pub mod store;

// Re-export primary API types at crate root for convenience.
pub use error::{MarqueeError, Result, StorageError};
pub use histogram::{Histogram, DEFAULT_BIN_COUNT};
pub use movie::{Catalog, Movie};
pub use query::{RatingFilter, SearchOutcome, Stats, Suggestion};
pub use similarity::{IndelScorer, Scorer};
pub use store::Store;
