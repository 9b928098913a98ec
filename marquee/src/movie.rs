//! The movie record and catalogue snapshot types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single movie's stored fields.
///
/// The title is not part of the record; it is the key in the [`Catalog`]
/// map, which makes title uniqueness structural — inserting an existing
/// title overwrites, it never duplicates.
///
/// The store does not validate either field. By convention of the producing
/// layer, `year` is a 4-digit calendar year and `rating` lies in
/// [0.0, 10.0], but any values of these types are accepted and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Release year.
    pub year: i32,
    /// Rating, conventionally in [0.0, 10.0].
    pub rating: f64,
}

impl Movie {
    /// Creates a movie record.
    pub fn new(year: i32, rating: f64) -> Self {
        Self { year, rating }
    }
}

/// A point-in-time snapshot of the full catalogue: title → movie.
///
/// `BTreeMap` gives a deterministic, stable enumeration order
/// (title-lexicographic). Everything downstream that appeals to "snapshot
/// order" — filter output order, sort-tie stability, first-encountered
/// best/worst selection, fuzzy-ranking ties — means this order.
///
/// Callers receive independent snapshots from [`Store::load`]; no live
/// reference into the store survives across calls.
///
/// [`Store::load`]: crate::store::Store::load
pub type Catalog = BTreeMap<String, Movie>;
