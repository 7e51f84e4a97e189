//! Core domain types for the movie catalog.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Encapsulation: ratings are readable by anyone but only the catalog appends
//! - `Option<T>` for values that are undefined (average of no ratings)

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases and Constants
// =============================================================================

/// Opaque identifier assigned by the catalog when a movie is added
pub type MovieId = String;

/// Lowest accepted rating (inclusive)
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating (inclusive)
pub const MAX_RATING: i32 = 5;

/// Returns true if `rating` falls within `MIN_RATING..=MAX_RATING`
pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

// =============================================================================
// Movie
// =============================================================================

/// A movie record owned by a `MovieCatalog`.
///
/// Text fields keep the case they were added with; queries compare them
/// case-insensitively. Only `Serialize` is derived: movies enter a catalog
/// through `NewMovie` so their ratings are always validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    /// Append-only, every value in 1..=5
    pub(crate) ratings: Vec<u8>,
}

impl Movie {
    pub(crate) fn new(
        id: MovieId,
        title: String,
        director: String,
        release_year: i32,
        genre: String,
    ) -> Self {
        Self {
            id,
            title,
            director,
            release_year,
            genre,
            ratings: Vec::new(),
        }
    }

    /// All ratings in the order they were given
    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    /// Arithmetic mean of the ratings, or `None` when the movie is unrated
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        Some(f64::from(total) / self.ratings.len() as f64)
    }

    /// Average and count together, `None` when the movie is unrated
    pub fn stats(&self) -> Option<MovieStats> {
        self.average_rating().map(|average_rating| MovieStats {
            average_rating,
            rating_count: self.ratings.len(),
        })
    }
}

// =============================================================================
// Input and Statistics Types
// =============================================================================

/// A movie that has not been added to a catalog yet.
///
/// This is the record format of CLI seed files, so it deserializes from JSON:
///
/// ```json
/// { "title": "Inception", "director": "Christopher Nolan",
///   "release_year": 2010, "genre": "Sci-Fi", "ratings": [5, 4] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    /// Initial ratings, validated on insert
    #[serde(default)]
    pub ratings: Vec<i32>,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        release_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            release_year,
            genre: genre.into(),
            ratings: Vec::new(),
        }
    }

    /// Attach initial ratings (builder style)
    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = i32>) -> Self {
        self.ratings = ratings.into_iter().collect();
        self
    }
}

/// Rating statistics for a single rated movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovieStats {
    pub average_rating: f64,
    pub rating_count: usize,
}
