use serde::{Deserialize, Serialize};

/// A catalog movie with its genre flag vector and aggregated rating.
///
/// The flag vector is positional: index `i` corresponds to the `i`-th genre
/// column of the source table, as listed by [`crate::catalog::Catalog::genres`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    /// Identifier from the movie table
    pub id: u32,
    /// Display title, e.g. "Heat (1995)"
    pub title: String,
    /// One 0/1 flag per genre column
    pub flags: Vec<u8>,
    /// Mean rating across all users, 0.0 when the movie has no ratings
    pub avg_rating: f64,
}

impl Movie {
    /// Whether the movie carries the genre at the given column index.
    ///
    /// Out-of-range indices read as "not in this genre".
    pub fn has_genre(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(0) == 1
    }
}

/// One row of the rating table: user id, movie id, rating value, timestamp.
///
/// Fields are positional (the file has no header). Ratings exist only to be
/// folded into per-movie means and are dropped after aggregation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub rating: u8,
    pub timestamp: i64,
}
