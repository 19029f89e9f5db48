//! Rating aggregation: mean rating per movie, joined onto the movie table.

use std::collections::HashMap;

use crate::models::{Movie, Rating};

use super::loader::MovieTable;
use super::Catalog;

/// Builds the enriched catalog.
///
/// Each movie gets the arithmetic mean of its ratings; movies with no
/// ratings get 0.0 so every row is comparable and unrated movies sort last.
/// Ratings for ids absent from the movie table are ignored.
pub fn build_catalog(table: MovieTable, ratings: &[Rating]) -> Catalog {
    let means = mean_ratings(ratings);
    let movies = table
        .rows
        .into_iter()
        .map(|row| Movie {
            avg_rating: means.get(&row.id).copied().unwrap_or(0.0),
            id: row.id,
            title: row.title,
            flags: row.flags,
        })
        .collect();
    Catalog::new(table.genres, movies)
}

/// Mean rating value grouped by movie id.
fn mean_ratings(ratings: &[Rating]) -> HashMap<u32, f64> {
    let mut sums: HashMap<u32, (u64, u32)> = HashMap::new();
    for rating in ratings {
        let entry = sums.entry(rating.movie_id).or_insert((0, 0));
        entry.0 += u64::from(rating.rating);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(movie_id, (sum, count))| (movie_id, sum as f64 / f64::from(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::MovieRow;

    fn rating(user_id: u32, movie_id: u32, value: u8) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating: value,
            timestamp: 881_250_949,
        }
    }

    fn table(rows: Vec<MovieRow>) -> MovieTable {
        MovieTable {
            genres: vec!["Action".to_string()],
            rows,
        }
    }

    fn row(id: u32, title: &str) -> MovieRow {
        MovieRow {
            id,
            title: title.to_string(),
            flags: vec![1],
        }
    }

    #[test]
    fn test_mean_is_arithmetic_average() {
        let catalog = build_catalog(
            table(vec![row(1, "Heat (1995)")]),
            &[rating(1, 1, 5), rating(2, 1, 4), rating(3, 1, 3)],
        );
        assert_eq!(catalog.movies()[0].avg_rating, 4.0);
    }

    #[test]
    fn test_unrated_movie_defaults_to_zero() {
        let catalog = build_catalog(
            table(vec![row(1, "Heat (1995)"), row(2, "Obscure (1990)")]),
            &[rating(1, 1, 4)],
        );
        assert_eq!(catalog.movies()[1].avg_rating, 0.0);
    }

    #[test]
    fn test_ratings_for_unknown_movies_are_ignored() {
        let catalog = build_catalog(
            table(vec![row(1, "Heat (1995)")]),
            &[rating(1, 1, 4), rating(1, 99, 1)],
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].avg_rating, 4.0);
    }

    #[test]
    fn test_join_keeps_table_order() {
        let catalog = build_catalog(
            table(vec![row(2, "B"), row(1, "A")]),
            &[rating(1, 1, 5), rating(1, 2, 3)],
        );
        assert_eq!(catalog.movies()[0].title, "B");
        assert_eq!(catalog.movies()[0].avg_rating, 3.0);
        assert_eq!(catalog.movies()[1].title, "A");
        assert_eq!(catalog.movies()[1].avg_rating, 5.0);
    }
}
