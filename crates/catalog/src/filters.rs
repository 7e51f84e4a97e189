//! Composable movie filters.
//!
//! Every catalog query (by genre, by director, by title keyword) is a filter
//! applied over the catalog in order. Filters can also be chained with
//! `FilterChain` to express combined queries.

use crate::types::Movie;

/// Core trait for selecting movies.
///
/// ## Design Note
/// - Filters only borrow the movie, so applying one never clones the catalog
/// - `Send + Sync` lets a boxed filter live inside shared query objects
pub trait MovieFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Returns true if `movie` should be kept
    fn matches(&self, movie: &Movie) -> bool;

    /// Label used when the filter is logged
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Case-insensitive exact match on genre
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: &str) -> Self {
        Self {
            genre: genre.to_lowercase(),
        }
    }
}

impl MovieFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.genre.to_lowercase() == self.genre
    }
}

/// Case-insensitive exact match on director
pub struct DirectorFilter {
    director: String,
}

impl DirectorFilter {
    pub fn new(director: &str) -> Self {
        Self {
            director: director.to_lowercase(),
        }
    }
}

impl MovieFilter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.director.to_lowercase() == self.director
    }
}

/// Case-insensitive substring match on title.
///
/// An empty keyword matches every title.
pub struct TitleKeywordFilter {
    keyword: String,
}

impl TitleKeywordFilter {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }
}

impl MovieFilter for TitleKeywordFilter {
    fn name(&self) -> &str {
        "TitleKeywordFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.title.to_lowercase().contains(&self.keyword)
    }
}

/// Keeps rated movies whose average is at least `min_average`.
///
/// Unrated movies never pass, since they have no average.
pub struct MinimumRatingFilter {
    min_average: f64,
}

impl MinimumRatingFilter {
    pub fn new(min_average: f64) -> Self {
        Self { min_average }
    }
}

impl MovieFilter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie
            .average_rating()
            .is_some_and(|average| average >= self.min_average)
    }
}

/// Chains several filters; a movie passes only if every filter matches.
///
/// ## Usage
/// ```ignore
/// let chain = FilterChain::new()
///     .add_filter(GenreFilter::new("sci-fi"))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let hits = catalog.filter(&chain);
/// ```
pub struct FilterChain {
    filters: Vec<Box<dyn MovieFilter>>,
}

impl FilterChain {
    /// Create an empty chain, which matches every movie.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the chain (builder pattern).
    pub fn add_filter(mut self, filter: impl MovieFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the chained filters, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl MovieFilter for FilterChain {
    fn name(&self) -> &str {
        "FilterChain"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.filters.iter().all(|filter| filter.matches(movie))
    }

    /// e.g. `FilterChain[GenreFilter, MinimumRatingFilter]`
    fn describe(&self) -> String {
        let inner: Vec<String> = self.filters.iter().map(|f| f.describe()).collect();
        format!("FilterChain[{}]", inner.join(", "))
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}
