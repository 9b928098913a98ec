//! Pure query functions over a catalogue snapshot.
//!
//! Every function here takes a [`Catalog`] obtained from
//! [`Store::load`](crate::store::Store::load) and computes a result without
//! touching persistence. Empty-catalogue cases come back as sentinel values
//! ([`SearchOutcome::NoMatch`], `None`) rather than errors, so callers
//! branch instead of handling failures.
//!
//! All ordering guarantees are stated relative to snapshot order, which for
//! [`Catalog`] is title-lexicographic: stable sorts keep it for equal keys,
//! filtering preserves it outright, and best/worst selection breaks rating
//! ties by first encounter in it.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use marquee::{IndelScorer, SearchOutcome, Store};
//! use marquee::query::{search, sort_by_rating, statistics};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Store::new("movies.json").load()?;
//!
//! match search(&catalog, "Shwshank", &IndelScorer) {
//!     SearchOutcome::Exact(title, movie) => println!("{title}: {}", movie.rating),
//!     SearchOutcome::Suggestions(s) => println!("did you mean one of {} titles?", s.len()),
//!     SearchOutcome::NoMatch => println!("no similar movies"),
//! }
//!
//! for (title, movie) in sort_by_rating(&catalog, true) {
//!     println!("{title}: {}", movie.rating);
//! }
//!
//! if let Some(stats) = statistics(&catalog) {
//!     println!("mean rating {:.1}", stats.mean);
//! }
//! # Ok(())
//! # }
//! ```

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::movie::{Catalog, Movie};
use crate::similarity::Scorer;

/// Maximum number of fuzzy suggestions returned by [`search`].
pub const SUGGESTION_LIMIT: usize = 5;

/// Minimum similarity score a fuzzy suggestion must reach to be kept.
pub const MIN_SUGGESTION_SCORE: f64 = 50.0;

/// Outcome of a title search.
///
/// The three cases are deliberately distinct so the caller can render an
/// exact hit, a "did you mean" list, and a miss differently.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The term matched a title exactly.
    Exact(String, Movie),
    /// No exact match; ranked fuzzy candidates that cleared the threshold.
    Suggestions(Vec<Suggestion>),
    /// No exact match and no candidate scored high enough.
    NoMatch,
}

/// A fuzzy-search candidate with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The candidate title.
    pub title: String,
    /// The candidate's record.
    pub movie: Movie,
    /// Similarity score in [0.0, 100.0].
    pub score: f64,
}

/// Optional bounds for [`filter`]. Absent bounds are unconstrained;
/// present bounds are inclusive and ANDed together.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingFilter {
    /// Keep entries with `rating >= min_rating`.
    pub min_rating: Option<f64>,
    /// Keep entries with `year >= start_year`.
    pub start_year: Option<i32>,
    /// Keep entries with `year <= end_year`.
    pub end_year: Option<i32>,
}

/// Summary statistics over a non-empty catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Arithmetic mean of all ratings.
    pub mean: f64,
    /// Upper median: the element at index ⌊n/2⌋ of the ascending-sorted
    /// rating list. For even n this is the upper of the two middle values,
    /// not their average.
    pub median: f64,
    /// First entry in snapshot order holding the maximum rating.
    pub best: (String, Movie),
    /// First entry in snapshot order holding the minimum rating.
    pub worst: (String, Movie),
}

/// Searches for `term`, exactly first, then fuzzily.
///
/// An exact key match short-circuits to [`SearchOutcome::Exact`]. Otherwise
/// every title is scored with `scorer`, the top [`SUGGESTION_LIMIT`] by
/// score are taken, and those below [`MIN_SUGGESTION_SCORE`] are dropped.
/// The ranking sort is stable, so equal scores keep snapshot order.
pub fn search(catalog: &Catalog, term: &str, scorer: &impl Scorer) -> SearchOutcome {
    if let Some(movie) = catalog.get(term) {
        return SearchOutcome::Exact(term.to_string(), *movie);
    }

    let mut candidates: Vec<Suggestion> = catalog
        .iter()
        .map(|(title, movie)| Suggestion {
            title: title.clone(),
            movie: *movie,
            score: scorer.similarity(term, title),
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(SUGGESTION_LIMIT);
    candidates.retain(|s| s.score >= MIN_SUGGESTION_SCORE);

    if candidates.is_empty() {
        SearchOutcome::NoMatch
    } else {
        SearchOutcome::Suggestions(candidates)
    }
}

/// Returns all entries sorted by rating.
///
/// The sort is stable: entries with equal ratings keep their snapshot
/// order. `descending = true` (the usual presentation) puts the highest
/// rating first.
pub fn sort_by_rating(catalog: &Catalog, descending: bool) -> Vec<(String, Movie)> {
    let mut entries = to_entries(catalog);
    entries.sort_by(|a, b| {
        if descending {
            b.1.rating.total_cmp(&a.1.rating)
        } else {
            a.1.rating.total_cmp(&b.1.rating)
        }
    });
    entries
}

/// Returns all entries sorted by release year.
///
/// Stable, like [`sort_by_rating`]. `latest_first = true` puts the most
/// recent year first.
pub fn sort_by_year(catalog: &Catalog, latest_first: bool) -> Vec<(String, Movie)> {
    let mut entries = to_entries(catalog);
    entries.sort_by(|a, b| {
        if latest_first {
            b.1.year.cmp(&a.1.year)
        } else {
            a.1.year.cmp(&b.1.year)
        }
    });
    entries
}

/// Returns the entries passing all bounds of `filter`, in snapshot order.
pub fn filter(catalog: &Catalog, bounds: &RatingFilter) -> Vec<(String, Movie)> {
    catalog
        .iter()
        .filter(|(_, movie)| {
            if bounds.min_rating.is_some_and(|min| movie.rating < min) {
                return false;
            }
            if bounds.start_year.is_some_and(|start| movie.year < start) {
                return false;
            }
            if bounds.end_year.is_some_and(|end| movie.year > end) {
                return false;
            }
            true
        })
        .map(|(title, movie)| (title.clone(), *movie))
        .collect()
}

/// Computes summary statistics, or `None` for an empty catalogue.
pub fn statistics(catalog: &Catalog) -> Option<Stats> {
    if catalog.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = catalog.values().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);

    #[allow(clippy::cast_precision_loss)] // catalogue sizes are tiny
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let median = ratings[ratings.len() / 2];

    // Strict comparisons keep the first entry encountered on ties.
    let mut iter = catalog.iter();
    let first = iter.next()?;
    let mut best = first;
    let mut worst = first;
    for entry in iter {
        if entry.1.rating > best.1.rating {
            best = entry;
        }
        if entry.1.rating < worst.1.rating {
            worst = entry;
        }
    }

    Some(Stats {
        mean,
        median,
        best: (best.0.clone(), *best.1),
        worst: (worst.0.clone(), *worst.1),
    })
}

/// Uniformly picks one entry, or `None` for an empty catalogue.
pub fn pick_random<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Option<(&'a String, &'a Movie)> {
    catalog.iter().choose(rng)
}

/// Clones the catalogue into an owned entry list in snapshot order.
fn to_entries(catalog: &Catalog) -> Vec<(String, Movie)> {
    catalog
        .iter()
        .map(|(title, movie)| (title.clone(), *movie))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::IndelScorer;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn catalog(entries: &[(&str, i32, f64)]) -> Catalog {
        entries
            .iter()
            .map(|&(title, year, rating)| (title.to_string(), Movie::new(year, rating)))
            .collect()
    }

    #[test]
    fn test_exact_search_returns_single_record() {
        let cat = catalog(&[("Titanic", 1997, 7.9), ("Heat", 1995, 8.2)]);

        let outcome = search(&cat, "Titanic", &IndelScorer);
        assert_eq!(
            outcome,
            SearchOutcome::Exact("Titanic".to_string(), Movie::new(1997, 7.9))
        );
    }

    #[test]
    fn test_fuzzy_search_suggests_close_title() {
        let cat = catalog(&[
            ("The Shawshank Redemption", 1994, 9.3),
            ("Heat", 1995, 8.2),
        ]);

        let outcome = search(&cat, "Shwshank", &IndelScorer);
        match outcome {
            SearchOutcome::Suggestions(suggestions) => {
                assert!(suggestions
                    .iter()
                    .any(|s| s.title == "The Shawshank Redemption" && s.score >= 50.0));
            }
            other => panic!("expected suggestions, got: {other:?}"),
        }
    }

    #[test]
    fn test_fuzzy_search_no_match() {
        let cat = catalog(&[("Titanic", 1997, 7.9)]);

        let outcome = search(&cat, "zzzzzzzz", &IndelScorer);
        assert_eq!(outcome, SearchOutcome::NoMatch);
    }

    #[test]
    fn test_fuzzy_search_caps_suggestions() {
        // Six near-identical titles; only five suggestions may survive.
        let cat = catalog(&[
            ("Rocky", 1976, 8.1),
            ("Rocky II", 1979, 7.3),
            ("Rocky III", 1982, 6.8),
            ("Rocky IV", 1985, 6.9),
            ("Rocky V", 1990, 5.3),
            ("Rocky Balboa", 2006, 7.1),
        ]);

        match search(&cat, "Rocku", &IndelScorer) {
            SearchOutcome::Suggestions(suggestions) => {
                assert!(suggestions.len() <= SUGGESTION_LIMIT);
            }
            other => panic!("expected suggestions, got: {other:?}"),
        }
    }

    #[test]
    fn test_search_empty_catalog_is_no_match() {
        let cat = Catalog::new();
        assert_eq!(search(&cat, "anything", &IndelScorer), SearchOutcome::NoMatch);
    }

    #[test]
    fn test_sort_by_rating_descending_is_stable() {
        let cat = catalog(&[("A", 2000, 8.0), ("B", 2001, 9.0), ("C", 2002, 9.0)]);

        let sorted = sort_by_rating(&cat, true);
        let titles: Vec<&str> = sorted.iter().map(|(t, _)| t.as_str()).collect();

        // B and C tie at 9.0; B precedes C in snapshot order.
        assert_eq!(titles, ["B", "C", "A"]);
    }

    #[test]
    fn test_sort_by_rating_ascending() {
        let cat = catalog(&[("A", 2000, 8.0), ("B", 2001, 9.0)]);

        let sorted = sort_by_rating(&cat, false);
        let titles: Vec<&str> = sorted.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_sort_by_year_both_directions() {
        let cat = catalog(&[("Old", 1950, 7.0), ("Mid", 1990, 7.0), ("New", 2020, 7.0)]);

        let latest = sort_by_year(&cat, true);
        assert_eq!(latest[0].0, "New");
        assert_eq!(latest[2].0, "Old");

        let oldest = sort_by_year(&cat, false);
        assert_eq!(oldest[0].0, "Old");
        assert_eq!(oldest[2].0, "New");
    }

    #[test]
    fn test_sort_by_year_equal_years_keep_snapshot_order() {
        let cat = catalog(&[("A", 1999, 5.0), ("B", 1999, 6.0), ("C", 1980, 7.0)]);

        let sorted = sort_by_year(&cat, false);
        let titles: Vec<&str> = sorted.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn test_filter_min_rating() {
        let cat = catalog(&[("A", 2000, 9.5), ("B", 2001, 8.0)]);

        let result = filter(
            &cat,
            &RatingFilter {
                min_rating: Some(9.0),
                ..RatingFilter::default()
            },
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "A");
    }

    #[test]
    fn test_filter_bounds_are_inclusive_and_anded() {
        let cat = catalog(&[
            ("A", 1990, 7.0),
            ("B", 1995, 8.0),
            ("C", 2000, 9.0),
            ("D", 2005, 6.0),
        ]);

        let result = filter(
            &cat,
            &RatingFilter {
                min_rating: Some(7.0),
                start_year: Some(1990),
                end_year: Some(2000),
            },
        );

        let titles: Vec<&str> = result.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_filter_no_bounds_passes_everything() {
        let cat = catalog(&[("A", 1990, 7.0), ("B", 1995, 8.0)]);

        let result = filter(&cat, &RatingFilter::default());
        assert_eq!(result.len(), 2);
        // Snapshot order preserved.
        assert_eq!(result[0].0, "A");
    }

    #[test]
    fn test_statistics_mean_and_upper_median() {
        let cat = catalog(&[("A", 2000, 9.0), ("B", 2001, 3.0)]);

        let stats = statistics(&cat).unwrap();
        assert_eq!(stats.mean, 6.0);
        // Sorted ascending [3.0, 9.0]; index 1 is the upper median.
        assert_eq!(stats.median, 9.0);
        assert_eq!(stats.best.0, "A");
        assert_eq!(stats.worst.0, "B");
    }

    #[test]
    fn test_statistics_ties_keep_first_in_snapshot_order() {
        let cat = catalog(&[("A", 2000, 9.0), ("B", 2001, 9.0), ("C", 2002, 9.0)]);

        let stats = statistics(&cat).unwrap();
        assert_eq!(stats.best.0, "A");
        assert_eq!(stats.worst.0, "A");
    }

    #[test]
    fn test_statistics_empty_catalog_is_none() {
        assert_eq!(statistics(&Catalog::new()), None);
    }

    #[test]
    fn test_pick_random_empty_catalog_is_none() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(pick_random(&Catalog::new(), &mut rng), None);
    }

    #[test]
    fn test_pick_random_returns_a_member() {
        let cat = catalog(&[("A", 2000, 9.0), ("B", 2001, 3.0)]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let (title, _) = pick_random(&cat, &mut rng).unwrap();
            assert!(cat.contains_key(title));
        }
    }
}
