//! CLI for the marquee movie catalogue store.
//!
//! The shell layer in front of the core: validates user input, drives the
//! store and query engine, and renders results. The core never validates
//! rating/year ranges; that happens here, before any store call.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use marquee::error::Result;
use marquee::query::{self, RatingFilter, SearchOutcome};
use marquee::{histogram, Histogram, IndelScorer, MarqueeError, Movie, Store};

/// marquee — flat-file movie catalogue with fuzzy search and analytics.
#[derive(Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// Path to the catalogue JSON file.
    #[arg(long, global = true, default_value = "movies.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List all movies with year and rating.
    List,

    /// Add a movie (overwrites an existing entry with the same title).
    Add {
        /// Movie title.
        title: String,
        /// Release year (four digits).
        year: i32,
        /// Rating in [0.0, 10.0].
        rating: f64,
    },

    /// Delete a movie by title.
    Delete {
        /// Movie title.
        title: String,
    },

    /// Update an existing movie's rating.
    Update {
        /// Movie title.
        title: String,
        /// New rating in [0.0, 10.0].
        rating: f64,
    },

    /// Show average, median, best and worst movie.
    Stats,

    /// Pick a random movie.
    Random,

    /// Search by title, exactly first, then fuzzily.
    Search {
        /// Full or partial title.
        term: String,
    },

    /// List movies sorted by rating.
    SortRating {
        /// Lowest rating first instead of highest.
        #[arg(long)]
        ascending: bool,
    },

    /// List movies sorted by release year.
    SortYear {
        /// Most recent year first.
        #[arg(long)]
        latest_first: bool,
    },

    /// List movies passing rating/year bounds (all optional, inclusive).
    Filter {
        /// Keep movies rated at least this much.
        #[arg(long)]
        min_rating: Option<f64>,
        /// Keep movies released in or after this year.
        #[arg(long)]
        start_year: Option<i32>,
        /// Keep movies released in or before this year.
        #[arg(long)]
        end_year: Option<i32>,
    },

    /// Emit rating-distribution bin edges and counts.
    ///
    /// Produces the data for a histogram; rendering it to an image is left
    /// to external plotting tools.
    Histogram {
        /// Number of equal-width bins over the [0, 10] rating domain.
        #[arg(long, default_value_t = marquee::DEFAULT_BIN_COUNT)]
        bins: usize,

        /// Output format.
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for histogram data.
#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable bin table with bars.
    Text,
    /// JSON object with `edges` and `counts` arrays.
    Json,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = Store::new(&cli.data);

    let result = match cli.command {
        Commands::List => cmd_list(&store),
        Commands::Add {
            title,
            year,
            rating,
        } => cmd_add(&store, &title, year, rating),
        Commands::Delete { title } => cmd_delete(&store, &title),
        Commands::Update { title, rating } => cmd_update(&store, &title, rating),
        Commands::Stats => cmd_stats(&store),
        Commands::Random => cmd_random(&store),
        Commands::Search { term } => cmd_search(&store, &term),
        Commands::SortRating { ascending } => cmd_sort_rating(&store, !ascending),
        Commands::SortYear { latest_first } => cmd_sort_year(&store, latest_first),
        Commands::Filter {
            min_rating,
            start_year,
            end_year,
        } => cmd_filter(&store, min_rating, start_year, end_year),
        Commands::Histogram { bins, format } => cmd_histogram(&store, bins, &format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Implements `marquee list`.
fn cmd_list(store: &Store) -> Result<()> {
    let catalog = store.load()?;

    println!("{} movies in total", catalog.len());
    for (title, movie) in &catalog {
        print_movie(title, movie);
    }
    Ok(())
}

/// Implements `marquee add <title> <year> <rating>`.
fn cmd_add(store: &Store, title: &str, year: i32, rating: f64) -> Result<()> {
    let title = validate_title(title)?;
    validate_year(year)?;
    validate_rating(rating)?;

    store.add(title, year, rating)?;
    tracing::info!(title, year, rating, "movie added");
    println!("{title} ({year}) added with rating {rating}");
    Ok(())
}

/// Implements `marquee delete <title>`.
fn cmd_delete(store: &Store, title: &str) -> Result<()> {
    let title = validate_title(title)?;

    store.delete(title)?;
    tracing::info!(title, "movie deleted");
    println!("{title} successfully deleted");
    Ok(())
}

/// Implements `marquee update <title> <rating>`.
fn cmd_update(store: &Store, title: &str, rating: f64) -> Result<()> {
    let title = validate_title(title)?;
    validate_rating(rating)?;

    store.update(title, rating)?;
    tracing::info!(title, rating, "rating updated");
    println!("{title} rating updated to {rating}");
    Ok(())
}

/// Implements `marquee stats`.
fn cmd_stats(store: &Store) -> Result<()> {
    let catalog = store.load()?;

    let Some(stats) = query::statistics(&catalog) else {
        println!("No movies in the catalogue.");
        return Ok(());
    };

    println!("Average rating: {:.1}", stats.mean);
    println!("Median rating : {:.1}", stats.median);
    println!(
        "Best movie    : {} ({}) - {}",
        stats.best.0, stats.best.1.year, stats.best.1.rating
    );
    println!(
        "Worst movie   : {} ({}) - {}",
        stats.worst.0, stats.worst.1.year, stats.worst.1.rating
    );
    Ok(())
}

/// Implements `marquee random`.
fn cmd_random(store: &Store) -> Result<()> {
    let catalog = store.load()?;

    match query::pick_random(&catalog, &mut rand::thread_rng()) {
        Some((title, movie)) => {
            println!("Your movie for tonight: {title} ({}) - {}", movie.year, movie.rating);
        }
        None => println!("No movies in the catalogue."),
    }
    Ok(())
}

/// Implements `marquee search <term>`.
fn cmd_search(store: &Store, term: &str) -> Result<()> {
    let term = validate_title(term)?;
    let catalog = store.load()?;

    match query::search(&catalog, term, &IndelScorer) {
        SearchOutcome::Exact(title, movie) => {
            println!("Found: {title} ({}) - {}", movie.year, movie.rating);
        }
        SearchOutcome::Suggestions(suggestions) => {
            println!("No exact match. Did you mean:");
            for s in suggestions {
                println!("  {} ({}) - {}", s.title, s.movie.year, s.movie.rating);
            }
        }
        SearchOutcome::NoMatch => println!("No similar movies found."),
    }
    Ok(())
}

/// Implements `marquee sort-rating`.
fn cmd_sort_rating(store: &Store, descending: bool) -> Result<()> {
    let catalog = store.load()?;

    println!("Movies sorted by rating:");
    for (title, movie) in query::sort_by_rating(&catalog, descending) {
        print_movie(&title, &movie);
    }
    Ok(())
}

/// Implements `marquee sort-year`.
fn cmd_sort_year(store: &Store, latest_first: bool) -> Result<()> {
    let catalog = store.load()?;

    let order = if latest_first { "latest first" } else { "oldest first" };
    println!("Movies sorted by year ({order}):");
    for (title, movie) in query::sort_by_year(&catalog, latest_first) {
        print_movie(&title, &movie);
    }
    Ok(())
}

/// Implements `marquee filter`.
fn cmd_filter(
    store: &Store,
    min_rating: Option<f64>,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Result<()> {
    if let Some(rating) = min_rating {
        validate_rating(rating)?;
    }
    if let Some(year) = start_year {
        validate_year(year)?;
    }
    if let Some(year) = end_year {
        validate_year(year)?;
    }

    let catalog = store.load()?;
    let bounds = RatingFilter {
        min_rating,
        start_year,
        end_year,
    };

    let matches = query::filter(&catalog, &bounds);
    if matches.is_empty() {
        println!("No movies match the criteria.");
        return Ok(());
    }

    println!("Filtered movies:");
    for (title, movie) in matches {
        print_movie(&title, &movie);
    }
    Ok(())
}

/// Implements `marquee histogram`.
fn cmd_histogram(store: &Store, bins: usize, format: &OutputFormat) -> Result<()> {
    let catalog = store.load()?;
    let hist = histogram::bucket_ratings(&catalog, bins)?;

    match format {
        OutputFormat::Text => print_histogram(&hist),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "edges": hist.edges,
                "counts": hist.counts,
            });
            let rendered = serde_json::to_string_pretty(&output)
                .map_err(|e| MarqueeError::Storage(marquee::StorageError::SerializeFailed(e)))?;
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Renders a histogram as an aligned bin table with bars.
fn print_histogram(hist: &Histogram) {
    let max = hist.counts.iter().copied().max().unwrap_or(0);

    println!("Rating histogram:");
    for (i, &count) in hist.counts.iter().enumerate() {
        let lo = hist.edges[i];
        let hi = hist.edges[i + 1];
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar_len = if max == 0 {
            0
        } else {
            // Bar lengths are capped at 40 chars.
            ((count * 40).div_ceil(max)) as usize
        };
        println!("  [{lo:>4.1}, {hi:>4.1}) {count:>4} {}", "#".repeat(bar_len));
    }
}

/// One movie line in the shared list format.
fn print_movie(title: &str, movie: &Movie) {
    println!("{title} ({}): {}", movie.year, movie.rating);
}

/// Rejects empty (or all-whitespace) titles and trims the rest.
fn validate_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(MarqueeError::InvalidInput {
            what: "title".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed)
}

/// Rejects ratings outside the [0.0, 10.0] convention.
fn validate_rating(rating: f64) -> Result<()> {
    if !(0.0..=10.0).contains(&rating) || rating.is_nan() {
        return Err(MarqueeError::InvalidInput {
            what: "rating".to_string(),
            reason: format!("{rating} is not between 0.0 and 10.0"),
        });
    }
    Ok(())
}

/// Rejects years that are not four-digit calendar years.
fn validate_year(year: i32) -> Result<()> {
    if !(1000..=9999).contains(&year) {
        return Err(MarqueeError::InvalidInput {
            what: "year".to_string(),
            reason: format!("{year} is not a four-digit year"),
        });
    }
    Ok(())
}
