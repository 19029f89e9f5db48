//! The enriched, read-only movie catalog.
//!
//! Built once at startup from the two source tables and shared across
//! request handlers behind an `Arc`. Nothing mutates it afterwards, so
//! concurrent reads need no locking.

pub mod aggregate;
pub mod loader;

use std::collections::HashMap;
use std::path::Path;

use crate::error::AppResult;
use crate::models::Movie;

/// Movies with genre flags and average ratings, in source-file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    genres: Vec<String>,
    movies: Vec<Movie>,
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from already-aggregated movies.
    ///
    /// Rows keep the given order; when two rows share a title, lookups
    /// resolve to the first one.
    pub fn new(genres: Vec<String>, movies: Vec<Movie>) -> Self {
        let mut by_title = HashMap::with_capacity(movies.len());
        for (index, movie) in movies.iter().enumerate() {
            by_title.entry(movie.title.clone()).or_insert(index);
        }
        Self {
            genres,
            movies,
            by_title,
        }
    }

    /// Loads and aggregates the catalog from the two dataset files.
    pub fn load(movies_path: &Path, ratings_path: &Path) -> AppResult<Self> {
        let table = loader::load_movies_file(movies_path)?;
        let ratings = loader::load_ratings_file(ratings_path)?;
        Ok(aggregate::build_catalog(table, &ratings))
    }

    /// Genre column names, in table order.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// All movies, in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Looks up a movie by exact title. Duplicate titles resolve to the
    /// first catalog row.
    pub fn movie_by_title(&self, title: &str) -> Option<&Movie> {
        self.by_title.get(title).map(|&index| &self.movies[index])
    }

    /// All titles, in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|movie| movie.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, title: &str, flags: Vec<u8>, avg_rating: f64) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            flags,
            avg_rating,
        }
    }

    #[test]
    fn test_movie_by_title() {
        let catalog = Catalog::new(
            vec!["Action".to_string()],
            vec![movie(1, "Heat (1995)", vec![1], 4.0)],
        );
        assert_eq!(catalog.movie_by_title("Heat (1995)").unwrap().id, 1);
        assert!(catalog.movie_by_title("Missing (1999)").is_none());
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_row() {
        let catalog = Catalog::new(
            vec!["Action".to_string()],
            vec![
                movie(1, "Twin (1995)", vec![1], 4.0),
                movie(2, "Twin (1995)", vec![0], 2.0),
            ],
        );
        assert_eq!(catalog.movie_by_title("Twin (1995)").unwrap().id, 1);
    }

    #[test]
    fn test_titles_keep_catalog_order() {
        let catalog = Catalog::new(
            vec![],
            vec![
                movie(3, "C", vec![], 1.0),
                movie(1, "A", vec![], 2.0),
                movie(2, "B", vec![], 3.0),
            ],
        );
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }
}
