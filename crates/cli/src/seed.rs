//! Building the catalog a CLI invocation works on.
//!
//! A seed file is a JSON array of `NewMovie` records. Without one, the
//! built-in Christopher Nolan set is loaded.

use anyhow::{Context, Result};
use catalog::{MovieCatalog, NewMovie};
use std::fs;
use std::path::Path;
use tracing::info;

/// The three movies used by the demo, with their demo ratings
pub fn builtin_movies() -> Vec<NewMovie> {
    vec![
        NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi").with_ratings([5, 4]),
        NewMovie::new("The Dark Knight", "Christopher Nolan", 2008, "Action").with_ratings([5]),
        NewMovie::new("Interstellar", "Christopher Nolan", 2014, "Sci-Fi").with_ratings([4]),
    ]
}

/// Parse seed-file contents
pub fn parse_seed(json: &str) -> Result<Vec<NewMovie>> {
    serde_json::from_str(json).context("Seed file is not a JSON array of movies")
}

/// Read and parse a seed file from disk
pub fn read_seed_file(path: &Path) -> Result<Vec<NewMovie>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed(&json).with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Create a catalog holding `movies`, optionally with reproducible ids
pub fn build_catalog(movies: Vec<NewMovie>, id_seed: Option<u64>) -> Result<MovieCatalog> {
    let mut catalog = match id_seed {
        Some(seed) => MovieCatalog::with_seed(seed),
        None => MovieCatalog::new(),
    };

    for movie in movies {
        let title = movie.title.clone();
        catalog
            .add_movie_with_ratings(movie)
            .with_context(|| format!("Invalid seed entry '{}'", title))?;
    }

    info!("Catalog ready with {} movies", catalog.len());
    Ok(catalog)
}
