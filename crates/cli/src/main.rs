mod seed;

use anyhow::{anyhow, Context, Result};
use catalog::{
    DirectorFilter, FilterChain, GenreFilter, MinimumRatingFilter, Movie, MovieCatalog, MovieStats,
    TitleKeywordFilter,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Movie Catalog - in-memory movie catalog demo
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Add, rate and query movies in an in-memory catalog", long_about = None)]
struct Cli {
    /// JSON file of movies to load instead of the built-in set
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Seed for id generation, makes ids reproducible across runs
    #[arg(long)]
    id_seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through adding, rating, querying and removing movies
    Demo,

    /// List rated movies, highest average first
    Top,

    /// List movies in a genre (case-insensitive)
    Genre { genre: String },

    /// List movies by a director (case-insensitive)
    Director { director: String },

    /// Search movie titles for a keyword (case-insensitive substring match)
    Search { keyword: String },

    /// Show a single movie by id
    Show { id: String },

    /// Show rating statistics for every movie
    Stats,

    /// Combine several filters; a movie must match all of them
    Query {
        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        director: Option<String>,

        #[arg(long)]
        keyword: Option<String>,

        /// Minimum average rating (unrated movies never match)
        #[arg(long)]
        min_rating: Option<f64>,
    },
}

/// One line of `stats` output
#[derive(Serialize)]
struct StatsRow<'a> {
    #[serde(flatten)]
    movie: &'a Movie,
    stats: Option<MovieStats>,
}

/// Everything the demo walkthrough produces, step by step
#[derive(Debug, Serialize)]
struct DemoReport {
    inception_average: Option<f64>,
    top_rated: Vec<Movie>,
    sci_fi: Vec<Movie>,
    by_director: Vec<Movie>,
    keyword_dark: Vec<Movie>,
    found: Option<Movie>,
    removed: Movie,
    after_removal: Vec<Movie>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stay quiet by default so results are readable
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    if let Commands::Demo = cli.command {
        return run_demo(cli.id_seed, cli.json);
    }

    let movies = match &cli.seed {
        Some(path) => seed::read_seed_file(path)?,
        None => seed::builtin_movies(),
    };
    let catalog = seed::build_catalog(movies, cli.id_seed)?;

    // Dispatch to appropriate command handler
    match cli.command {
        // Handled before the catalog is loaded
        Commands::Demo => {}
        Commands::Top => print_movies("Top rated movies", &catalog.top_rated_movies(), cli.json)?,
        Commands::Genre { genre } => print_movies(
            &format!("Movies in genre {}", genre),
            &catalog.movies_by_genre(&genre),
            cli.json,
        )?,
        Commands::Director { director } => print_movies(
            &format!("Movies by director {}", director),
            &catalog.movies_by_director(&director),
            cli.json,
        )?,
        Commands::Search { keyword } => print_movies(
            &format!("Movies with keyword {}", keyword),
            &catalog.search_by_keyword(&keyword),
            cli.json,
        )?,
        Commands::Show { id } => handle_show(&catalog, &id, cli.json)?,
        Commands::Stats => handle_stats(&catalog, cli.json)?,
        Commands::Query {
            genre,
            director,
            keyword,
            min_rating,
        } => {
            let chain = build_filter_chain(genre, director, keyword, min_rating);
            let title = format!("Movies matching [{}]", chain.filter_names().join(", "));
            print_movies(&title, &catalog.filter(&chain), cli.json)?
        }
    }

    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &MovieCatalog, id: &str, json: bool) -> Result<()> {
    let movie = catalog
        .get_movie(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(movie)?);
        return Ok(());
    }

    let heading = format!("{} ({})", movie.title, movie.release_year);
    println!("{}", heading.bold().blue());
    println!("{}Id: {}", "• ".green(), movie.id);
    println!("{}Director: {}", "• ".green(), movie.director);
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Ratings: {:?}", "• ".cyan(), movie.ratings());
    println!("{}Average rating: {}", "• ".cyan(), format_average(movie));
    Ok(())
}

fn stats_rows(catalog: &MovieCatalog) -> Vec<StatsRow<'_>> {
    catalog
        .movies()
        .iter()
        .map(|movie| StatsRow {
            movie,
            stats: movie.stats(),
        })
        .collect()
}

/// Handle the 'stats' command
fn handle_stats(catalog: &MovieCatalog, json: bool) -> Result<()> {
    let rows = stats_rows(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Rating statistics:".bold().blue());
    for row in rows {
        let count = row.stats.map(|s| s.rating_count).unwrap_or(0);
        println!(
            "  {} {}: avg {} ({} ratings)",
            row.movie.id.dimmed(),
            row.movie.title,
            format_average(row.movie),
            count
        );
    }
    Ok(())
}

/// Run the scripted walkthrough on a fresh catalog and collect each result
fn build_demo_report(id_seed: Option<u64>) -> Result<DemoReport> {
    let mut catalog = seed::build_catalog(Vec::new(), id_seed)?;

    let inception = catalog.add_movie("Inception", "Christopher Nolan", 2010, "Sci-Fi");
    let dark_knight = catalog.add_movie("The Dark Knight", "Christopher Nolan", 2008, "Action");
    let interstellar = catalog.add_movie("Interstellar", "Christopher Nolan", 2014, "Sci-Fi");

    let demo_ratings = [
        (&inception, 5),
        (&inception, 4),
        (&dark_knight, 5),
        (&interstellar, 4),
    ];
    for (id, rating) in demo_ratings {
        catalog
            .rate_movie(id, rating)
            .with_context(|| format!("Demo rating of movie {} failed", id))?;
    }

    let inception_average = catalog.average_rating(&inception);
    let top_rated = owned(catalog.top_rated_movies());
    let sci_fi = owned(catalog.movies_by_genre("Sci-Fi"));
    let by_director = owned(catalog.movies_by_director("Christopher Nolan"));
    let keyword_dark = owned(catalog.search_by_keyword("Dark"));
    let found = catalog.get_movie(&inception).cloned();
    let removed = catalog.remove_movie(&inception)?;
    let after_removal = owned(catalog.movies_by_director("Christopher Nolan"));

    Ok(DemoReport {
        inception_average,
        top_rated,
        sci_fi,
        by_director,
        keyword_dark,
        found,
        removed,
        after_removal,
    })
}

/// Handle the 'demo' command
fn run_demo(id_seed: Option<u64>, json: bool) -> Result<()> {
    let report = build_demo_report(id_seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} Added and rated 3 movies", "✓".green());
    let average = report
        .inception_average
        .map(|avg| avg.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    println!("Average rating of Inception: {}", average);

    print_movie_list("Top rated movies", &borrowed(&report.top_rated));
    print_movie_list("Movies in genre Sci-Fi", &borrowed(&report.sci_fi));
    print_movie_list(
        "Movies by director Christopher Nolan",
        &borrowed(&report.by_director),
    );
    print_movie_list("Movies with keyword Dark", &borrowed(&report.keyword_dark));
    let found: Vec<&Movie> = report.found.iter().collect();
    print_movie_list("Movie with the id of Inception", &found);

    println!("{} Removed {}", "✓".green(), report.removed.title);
    print_movie_list(
        "Movies by director Christopher Nolan after removal",
        &borrowed(&report.after_removal),
    );
    Ok(())
}

fn owned(movies: Vec<&Movie>) -> Vec<Movie> {
    movies.into_iter().cloned().collect()
}

fn borrowed(movies: &[Movie]) -> Vec<&Movie> {
    movies.iter().collect()
}

fn build_filter_chain(
    genre: Option<String>,
    director: Option<String>,
    keyword: Option<String>,
    min_rating: Option<f64>,
) -> FilterChain {
    let mut chain = FilterChain::new();
    if let Some(genre) = genre {
        chain = chain.add_filter(GenreFilter::new(&genre));
    }
    if let Some(director) = director {
        chain = chain.add_filter(DirectorFilter::new(&director));
    }
    if let Some(keyword) = keyword {
        chain = chain.add_filter(TitleKeywordFilter::new(&keyword));
    }
    if let Some(min_rating) = min_rating {
        chain = chain.add_filter(MinimumRatingFilter::new(min_rating));
    }
    chain
}

fn format_average(movie: &Movie) -> String {
    movie
        .average_rating()
        .map(|avg| format!("{:.2}", avg))
        .unwrap_or_else(|| "-".to_string())
}

/// Helper function to print a list of movies as text or JSON
fn print_movies(header: &str, movies: &[&Movie], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(movies)?);
    } else {
        print_movie_list(header, movies);
    }
    Ok(())
}

fn print_movie_list(header: &str, movies: &[&Movie]) {
    println!("{}", format!("{}:", header).bold().blue());
    if movies.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] by {} - avg {} ({} ratings)",
            (rank + 1).to_string().green(),
            movie.title,
            movie.release_year,
            movie.genre,
            movie.director,
            format_average(movie),
            movie.rating_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{MovieFilter, NewMovie};

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_cli_parses_query() {
        let cli = Cli::parse_from([
            "movie-catalog",
            "--json",
            "query",
            "--genre",
            "sci-fi",
            "--min-rating",
            "4.5",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Query {
                genre, min_rating, ..
            } => {
                assert_eq!(genre.as_deref(), Some("sci-fi"));
                assert_eq!(min_rating, Some(4.5));
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_build_filter_chain() {
        let chain = build_filter_chain(Some("Sci-Fi".into()), None, Some("inter".into()), None);
        assert_eq!(chain.filter_names(), vec!["GenreFilter", "TitleKeywordFilter"]);

        let catalog = seed::build_catalog(seed::builtin_movies(), Some(3)).unwrap();
        let hits: Vec<&str> = catalog
            .movies()
            .iter()
            .filter(|m| chain.matches(m))
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(hits, vec!["Interstellar"]);
    }

    #[test]
    fn test_demo_report() {
        let report = build_demo_report(Some(7)).unwrap();

        assert_eq!(report.inception_average, Some(4.5));
        assert_eq!(
            titles(&report.top_rated),
            vec!["The Dark Knight", "Inception", "Interstellar"]
        );
        assert_eq!(titles(&report.sci_fi), vec!["Inception", "Interstellar"]);
        assert_eq!(
            titles(&report.by_director),
            vec!["Inception", "The Dark Knight", "Interstellar"]
        );
        assert_eq!(titles(&report.keyword_dark), vec!["The Dark Knight"]);
        assert_eq!(report.found.as_ref(), Some(&report.removed));
        assert_eq!(report.removed.title, "Inception");
        assert_eq!(
            titles(&report.after_removal),
            vec!["The Dark Knight", "Interstellar"]
        );
    }

    #[test]
    fn test_demo_report_is_one_json_document() {
        let report = build_demo_report(Some(7)).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inception_average"], 4.5);
        assert_eq!(value["removed"]["title"], "Inception");
        assert_eq!(value["top_rated"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["after_removal"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_demo_runs() {
        run_demo(Some(7), false).unwrap();
        run_demo(Some(7), true).unwrap();
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let catalog = seed::build_catalog(seed::builtin_movies(), Some(1)).unwrap();

        let err = handle_show(&catalog, "missing", false).unwrap_err();
        assert_eq!(err.to_string(), "Movie missing not found");
        assert!(handle_show(&catalog, "missing", true).is_err());
    }

    #[test]
    fn test_show_known_id() {
        let catalog = seed::build_catalog(seed::builtin_movies(), Some(1)).unwrap();
        let id = catalog.movies()[0].id.clone();

        handle_show(&catalog, &id, false).unwrap();
        handle_show(&catalog, &id, true).unwrap();
    }

    #[test]
    fn test_stats_rows() {
        let mut movies = seed::builtin_movies();
        let tenet = NewMovie::new("Tenet", "Christopher Nolan", 2020, "Action");
        movies.push(tenet);
        let catalog = seed::build_catalog(movies, Some(1)).unwrap();

        let rows = stats_rows(&catalog);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].stats.map(|s| s.average_rating), Some(4.5));
        assert_eq!(rows[0].stats.map(|s| s.rating_count), Some(2));
        assert!(rows[3].stats.is_none());

        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(value[0]["title"], "Inception");
        assert_eq!(value[0]["stats"]["rating_count"], 2);
        assert!(value[3]["stats"].is_null());

        handle_stats(&catalog, false).unwrap();
    }

    #[test]
    fn test_print_movies() {
        let catalog = seed::build_catalog(seed::builtin_movies(), Some(1)).unwrap();

        let top = catalog.top_rated_movies();

        print_movies("Top rated movies", &top, false).unwrap();
        print_movies("Top rated movies", &top, true).unwrap();
        print_movies("Nothing", &[], false).unwrap();
    }
}
