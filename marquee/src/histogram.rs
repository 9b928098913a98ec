//! Rating-distribution bucketing.
//!
//! The core's contract ends at bin edges and counts; turning them into an
//! image is the external plotting collaborator's job. Keeping the domain
//! and bucketing rules here means every renderer draws the same chart.
//!
//! Bins span the fixed rating convention domain [0, 10] rather than the
//! observed range, so charts stay comparable across catalogues of any
//! shape. Each bin is half-open `[lo, hi)` except the last, which also
//! includes its upper edge so a perfect 10 is counted.

use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};
use crate::movie::Catalog;

/// Lower edge of the rating domain.
pub const DOMAIN_MIN: f64 = 0.0;

/// Upper edge of the rating domain.
pub const DOMAIN_MAX: f64 = 10.0;

/// Bin count used when the caller has no preference.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// Equal-width rating bins with their counts.
///
/// `edges` has one more element than `counts`; bin `i` covers
/// `edges[i] .. edges[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin boundaries, ascending, `counts.len() + 1` of them.
    pub edges: Vec<f64>,
    /// Number of ratings landing in each bin.
    pub counts: Vec<u64>,
}

/// Buckets every rating in the catalogue into `bin_count` equal-width bins
/// over the [0, 10] domain.
///
/// Ratings outside the domain (the store does not enforce it) are clamped
/// into the nearest edge bin, so every record is counted exactly once. An
/// empty catalogue yields all-zero counts, which renders as an empty chart.
///
/// # Errors
///
/// Returns [`MarqueeError::InvalidInput`] if `bin_count` is zero.
pub fn bucket_ratings(catalog: &Catalog, bin_count: usize) -> Result<Histogram> {
    if bin_count == 0 {
        return Err(MarqueeError::InvalidInput {
            what: "bin count".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    #[allow(clippy::cast_precision_loss)] // bin counts are tiny
    let width = (DOMAIN_MAX - DOMAIN_MIN) / bin_count as f64;

    #[allow(clippy::cast_precision_loss)]
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| DOMAIN_MIN + i as f64 * width)
        .collect();

    let mut counts = vec![0u64; bin_count];
    for movie in catalog.values() {
        counts[bin_index(movie.rating, width, bin_count)] += 1;
    }

    Ok(Histogram { edges, counts })
}

/// Maps a rating to its bin, clamping out-of-domain values to the edge
/// bins. `DOMAIN_MAX` itself lands in the final bin (inclusive upper edge).
fn bin_index(rating: f64, width: f64, bin_count: usize) -> usize {
    let offset = (rating - DOMAIN_MIN) / width;
    if offset <= 0.0 {
        return 0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // offset is non-negative and bin counts are tiny
    let index = offset.floor() as usize;
    index.min(bin_count - 1)
}
