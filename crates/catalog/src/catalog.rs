//! MovieCatalog - the in-memory movie collection.
//!
//! Movies live in a `Vec` in insertion order. Every operation is a single
//! find-then-mutate step; failures return an error or `None` and leave the
//! catalog untouched.
//!
//! Rust concepts demonstrated here:
//! - `&self` queries returning borrowed `&Movie` values
//! - `&mut self` mutators, so the borrow checker rules out aliasing
//! - Stable sorting with precomputed keys

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::filters::{DirectorFilter, GenreFilter, MovieFilter, TitleKeywordFilter};
use crate::id::generate_id;
use crate::types::{Movie, MovieId, MovieStats, NewMovie, is_valid_rating};

/// In-memory catalog of movies.
///
/// Each catalog is independent: two instances never share movies or ids.
#[derive(Debug)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    /// Every id this catalog has handed out, including removed movies
    issued_ids: HashSet<MovieId>,
    rng: StdRng,
}

impl MovieCatalog {
    /// Creates an empty catalog with an OS-seeded id generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty catalog whose ids are reproducible for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            movies: Vec::new(),
            issued_ids: HashSet::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add a movie with no ratings and return its new id
    pub fn add_movie(
        &mut self,
        title: &str,
        director: &str,
        release_year: i32,
        genre: &str,
    ) -> MovieId {
        let id = self.next_id();
        self.movies.push(Movie::new(
            id.clone(),
            title.to_string(),
            director.to_string(),
            release_year,
            genre.to_string(),
        ));
        info!(id = %id, "Added movie: {}", title);
        id
    }

    /// Add a movie together with its initial ratings.
    ///
    /// All ratings are checked before anything is inserted, so an invalid
    /// rating leaves the catalog unchanged.
    pub fn add_movie_with_ratings(&mut self, new_movie: NewMovie) -> Result<MovieId> {
        let invalid = new_movie.ratings.iter().find(|&&r| !is_valid_rating(r));
        if let Some(&rating) = invalid {
            warn!(title = %new_movie.title, rating, "Rejected movie with invalid rating");
            return Err(CatalogError::InvalidRating { rating });
        }

        let id = self.add_movie(
            &new_movie.title,
            &new_movie.director,
            new_movie.release_year,
            &new_movie.genre,
        );
        if let Some(movie) = self.movies.last_mut() {
            movie.ratings.extend(new_movie.ratings.iter().map(|&r| r as u8));
        }
        Ok(id)
    }

    /// Append a rating in 1..=5 to the movie with `id`.
    ///
    /// Unknown ids are reported before out-of-range ratings.
    pub fn rate_movie(&mut self, id: &str, rating: i32) -> Result<()> {
        let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) else {
            warn!(id, rating, "Failed to rate movie: not found");
            return Err(CatalogError::not_found(id));
        };
        if !is_valid_rating(rating) {
            warn!(id, rating, "Failed to rate movie: rating out of range");
            return Err(CatalogError::InvalidRating { rating });
        }

        movie.ratings.push(rating as u8);
        info!(id, "Rated movie: {} with {} stars", movie.title, rating);
        Ok(())
    }

    /// Remove the movie with `id` and hand it back to the caller
    pub fn remove_movie(&mut self, id: &str) -> Result<Movie> {
        let Some(position) = self.movies.iter().position(|m| m.id == id) else {
            warn!(id, "Failed to remove movie: not found");
            return Err(CatalogError::not_found(id));
        };

        // `remove` keeps the relative order of the remaining movies
        let movie = self.movies.remove(position);
        info!(id, "Removed movie: {}", movie.title);
        Ok(movie)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a movie by id
    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        let movie = self.movies.iter().find(|m| m.id == id);
        match movie {
            Some(movie) => debug!(id, "Found movie: {}", movie.title),
            None => debug!(id, "No movie found"),
        }
        movie
    }

    /// Mean of the movie's ratings; `None` for unknown or unrated movies
    pub fn average_rating(&self, id: &str) -> Option<f64> {
        let average = self.get_movie(id).and_then(Movie::average_rating);
        if average.is_none() {
            debug!(id, "No ratings found for movie");
        }
        average
    }

    /// Average and count for a rated movie
    pub fn movie_stats(&self, id: &str) -> Option<MovieStats> {
        self.get_movie(id).and_then(Movie::stats)
    }

    /// Rated movies, highest average first.
    ///
    /// Unrated movies are left out. The sort is stable, so movies with equal
    /// averages stay in catalog order.
    pub fn top_rated_movies(&self) -> Vec<&Movie> {
        let mut rated: Vec<(&Movie, f64)> = self
            .movies
            .iter()
            .filter_map(|movie| movie.average_rating().map(|avg| (movie, avg)))
            .collect();

        rated.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let top: Vec<&Movie> = rated.into_iter().map(|(movie, _)| movie).collect();
        debug!(count = top.len(), "Top rated movies computed");
        top
    }

    /// Movies whose genre equals `genre`, ignoring case
    pub fn movies_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.filter(&GenreFilter::new(genre))
    }

    /// Movies whose director equals `director`, ignoring case
    pub fn movies_by_director(&self, director: &str) -> Vec<&Movie> {
        self.filter(&DirectorFilter::new(director))
    }

    /// Movies whose title contains `keyword`, ignoring case
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Movie> {
        self.filter(&TitleKeywordFilter::new(keyword))
    }

    /// Movies accepted by `filter`, in catalog order
    pub fn filter(&self, filter: &dyn MovieFilter) -> Vec<&Movie> {
        let matches: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|movie| filter.matches(movie))
            .collect();
        debug!(
            "Applied filter: {} (input count: {}, output count: {})",
            filter.describe(),
            self.movies.len(),
            matches.len()
        );
        matches
    }

    /// Draw ids until one has never been issued by this catalog
    fn next_id(&mut self) -> MovieId {
        loop {
            let id = generate_id(&mut self.rng);
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
            debug!(id = %id, "Generated id collided, drawing again");
        }
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}
