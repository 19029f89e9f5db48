//! Recommendation selection over the catalog.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::models::{Movie, Reason, Recommendation};

/// Number of titles returned per request.
pub const TOP_N: usize = 5;

/// Computes recommendations for a set of selected titles.
///
/// Blank entries are skipped; with no remaining selection the globally
/// top-rated titles are returned. Otherwise the genre flags of the selected
/// titles are summed, every genre with a strictly positive sum is active,
/// and the catalog is narrowed to movies carrying **all** active genres
/// before ranking. A selection whose titles activate no genre ranks the
/// whole catalog.
///
/// Selected titles not present in the catalog contribute nothing; they are
/// not an error. Ranking is by descending average rating; ties keep catalog
/// order.
pub fn recommend(catalog: &Catalog, selected_titles: &[String]) -> Recommendation {
    let selected: Vec<&str> = selected_titles
        .iter()
        .map(String::as_str)
        .filter(|title| !title.is_empty())
        .collect();

    if selected.is_empty() {
        return Recommendation {
            titles: top_rated(catalog.movies().iter().collect()),
            reason: Reason::GlobalTopRated,
        };
    }

    let scores = genre_scores(catalog, &selected);
    let active_genres: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score > 0)
        .map(|(genre, _)| genre)
        .collect();

    let candidates: Vec<&Movie> = catalog
        .movies()
        .iter()
        .filter(|movie| active_genres.iter().all(|&genre| movie.has_genre(genre)))
        .collect();

    Recommendation {
        titles: top_rated(candidates),
        reason: Reason::GenreTendency,
    }
}

/// Sums each genre flag across the selected titles found in the catalog.
fn genre_scores(catalog: &Catalog, selected: &[&str]) -> Vec<u32> {
    let mut scores = vec![0u32; catalog.genres().len()];
    for title in selected {
        let Some(movie) = catalog.movie_by_title(title) else {
            continue;
        };
        for (genre, score) in scores.iter_mut().enumerate() {
            *score += u32::from(movie.flags.get(genre).copied().unwrap_or(0));
        }
    }
    scores
}

/// Top titles by average rating, descending. The sort is stable, so equal
/// averages keep catalog order.
fn top_rated(mut candidates: Vec<&Movie>) -> Vec<String> {
    candidates.sort_by(|a, b| {
        b.avg_rating
            .partial_cmp(&a.avg_rating)
            .unwrap_or(Ordering::Equal)
    });
    candidates
        .into_iter()
        .take(TOP_N)
        .map(|movie| movie.title.clone())
        .collect()
}
