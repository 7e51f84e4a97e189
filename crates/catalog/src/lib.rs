//! # Catalog Crate
//!
//! An in-memory movie catalog: add movies, rate them, query them, remove them.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, NewMovie, MovieStats)
//! - **catalog**: `MovieCatalog`, the owning collection and its operations
//! - **filters**: Composable `MovieFilter` implementations used by queries
//! - **id**: Random id generation
//! - **error**: Error types for catalog operations
//!
//! ## Example Usage
//!
//! ```
//! use catalog::MovieCatalog;
//!
//! let mut catalog = MovieCatalog::new();
//! let id = catalog.add_movie("Inception", "Christopher Nolan", 2010, "Sci-Fi");
//!
//! catalog.rate_movie(&id, 5)?;
//! catalog.rate_movie(&id, 4)?;
//! assert_eq!(catalog.average_rating(&id), Some(4.5));
//!
//! let sci_fi = catalog.movies_by_genre("sci-fi");
//! assert_eq!(sci_fi.len(), 1);
//! # Ok::<(), catalog::CatalogError>(())
//! ```
//!
//! Nothing here is synchronized. Wrap the catalog in a `Mutex` if more than
//! one thread needs it.

pub mod catalog;
pub mod error;
pub mod filters;
pub mod id;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::MovieCatalog;
pub use error::{CatalogError, Result};
pub use filters::{
    DirectorFilter, FilterChain, GenreFilter, MinimumRatingFilter, MovieFilter,
    TitleKeywordFilter,
};
pub use types::{MAX_RATING, MIN_RATING, Movie, MovieId, MovieStats, NewMovie};
