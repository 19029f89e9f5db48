//! Parsing of the two source tables.
//!
//! Both parsers accept any reader so tests can feed in-memory bytes; the
//! `*_file` wrappers open paths. Any malformed row is an error: the catalog
//! is built once at startup and the process must not serve from a partial
//! load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{AppError, AppResult};
use crate::models::Rating;

/// Column index where the genre flag block starts in the movie table.
/// Columns before it hold the id, title and release metadata.
pub const GENRE_FLAG_OFFSET: usize = 5;

/// A movie row before rating aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub id: u32,
    pub title: String,
    pub flags: Vec<u8>,
}

/// The parsed movie table: genre column names plus rows in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieTable {
    pub genres: Vec<String>,
    pub rows: Vec<MovieRow>,
}

/// Loads the pipe-delimited movie table from a file.
pub fn load_movies_file(path: &Path) -> AppResult<MovieTable> {
    tracing::info!(path = %path.display(), "Loading movie table");
    load_movies(File::open(path)?)
}

/// Parses the pipe-delimited movie table.
///
/// The file carries a header row; every column from [`GENRE_FLAG_OFFSET`]
/// onward is a 0/1 genre flag named by its header. The source data is
/// Latin-1 encoded, so records are read as raw bytes and decoded per cell.
/// Rows shorter than the header are accepted: missing flag cells read as 0.
pub fn load_movies<R: Read>(reader: R) -> AppResult<MovieTable> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'|')
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.byte_headers()?.clone();
    if headers.len() <= GENRE_FLAG_OFFSET {
        return Err(AppError::Dataset(format!(
            "movie table has {} columns, expected genre flags from column {}",
            headers.len(),
            GENRE_FLAG_OFFSET
        )));
    }
    let genres: Vec<String> = headers
        .iter()
        .skip(GENRE_FLAG_OFFSET)
        .map(decode_latin1)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let row_number = index + 2; // header is line 1

        let id_cell = record
            .get(0)
            .map(decode_latin1)
            .unwrap_or_default();
        let id: u32 = id_cell.trim().parse().map_err(|_| {
            AppError::Dataset(format!("row {row_number}: bad movie id {id_cell:?}"))
        })?;

        let title = record
            .get(1)
            .map(decode_latin1)
            .ok_or_else(|| AppError::Dataset(format!("row {row_number}: missing title")))?;

        let mut flags = Vec::with_capacity(genres.len());
        for column in 0..genres.len() {
            let cell = record.get(GENRE_FLAG_OFFSET + column);
            flags.push(parse_flag(cell, row_number)?);
        }

        rows.push(MovieRow { id, title, flags });
    }

    Ok(MovieTable { genres, rows })
}

/// Loads the tab-delimited rating table from a file.
pub fn load_ratings_file(path: &Path) -> AppResult<Vec<Rating>> {
    tracing::info!(path = %path.display(), "Loading rating table");
    load_ratings(File::open(path)?)
}

/// Parses the tab-delimited, headerless rating table.
///
/// Four positional fields per row: user id, movie id, rating value,
/// timestamp.
pub fn load_ratings<R: Read>(reader: R) -> AppResult<Vec<Rating>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(reader);

    let mut ratings = Vec::new();
    for record in csv_reader.deserialize() {
        let rating: Rating = record?;
        ratings.push(rating);
    }
    Ok(ratings)
}

/// An empty or absent flag cell means "not in this genre".
fn parse_flag(cell: Option<&[u8]>, row_number: usize) -> AppResult<u8> {
    let text = cell.map(decode_latin1).unwrap_or_default();
    match text.trim() {
        "" | "0" => Ok(0),
        "1" => Ok(1),
        other => Err(AppError::Dataset(format!(
            "row {row_number}: genre flag must be 0 or 1, got {other:?}"
        ))),
    }
}

/// Latin-1 maps byte values directly onto the first 256 code points.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| byte as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIES: &str = "\
movie_id|movie_title|release_date|video_release_date|imdb_url|Action|Comedy|Drama
1|Heat (1995)|01-Jan-1995||http://example.com/1|1|0|0
2|Giggle (1996)|01-Jan-1996||http://example.com/2|0|1|0
3|Weep (1997)|01-Jan-1997||http://example.com/3|0|0|1
";

    #[test]
    fn test_genre_names_come_from_header() {
        let table = load_movies(MOVIES.as_bytes()).unwrap();
        assert_eq!(table.genres, vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_rows_keep_file_order() {
        let table = load_movies(MOVIES.as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].id, 1);
        assert_eq!(table.rows[0].title, "Heat (1995)");
        assert_eq!(table.rows[0].flags, vec![1, 0, 0]);
        assert_eq!(table.rows[2].title, "Weep (1997)");
    }

    #[test]
    fn test_latin1_titles_are_decoded() {
        let movies = b"movie_id|movie_title|a|b|c|Action\n1|Caf\xe9 (1995)|||x|1\n";
        let table = load_movies(&movies[..]).unwrap();
        assert_eq!(table.rows[0].title, "Caf\u{e9} (1995)");
    }

    #[test]
    fn test_short_rows_default_missing_flags_to_zero() {
        let movies = "movie_id|movie_title|a|b|c|Action|Comedy\n1|Heat (1995)|||x|1\n";
        let table = load_movies(movies.as_bytes()).unwrap();
        assert_eq!(table.rows[0].flags, vec![1, 0]);
    }

    #[test]
    fn test_empty_flag_cell_reads_as_zero() {
        let movies = "movie_id|movie_title|a|b|c|Action|Comedy\n1|Heat (1995)|||x||1\n";
        let table = load_movies(movies.as_bytes()).unwrap();
        assert_eq!(table.rows[0].flags, vec![0, 1]);
    }

    #[test]
    fn test_bad_movie_id_is_fatal() {
        let movies = "movie_id|movie_title|a|b|c|Action\noops|Heat (1995)|||x|1\n";
        let result = load_movies(movies.as_bytes());
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }

    #[test]
    fn test_bad_flag_value_is_fatal() {
        let movies = "movie_id|movie_title|a|b|c|Action\n1|Heat (1995)|||x|7\n";
        let result = load_movies(movies.as_bytes());
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }

    #[test]
    fn test_header_without_genre_columns_is_fatal() {
        let movies = "movie_id|movie_title\n1|Heat (1995)\n";
        let result = load_movies(movies.as_bytes());
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }

    #[test]
    fn test_ratings_parse_positionally() {
        let ratings = "196\t242\t3\t881250949\n186\t302\t3\t891717742\n";
        let parsed = load_ratings(ratings.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].user_id, 196);
        assert_eq!(parsed[0].movie_id, 242);
        assert_eq!(parsed[0].rating, 3);
        assert_eq!(parsed[0].timestamp, 881250949);
    }

    #[test]
    fn test_malformed_rating_row_is_fatal() {
        let ratings = "196\t242\tthree\t881250949\n";
        assert!(load_ratings(ratings.as_bytes()).is_err());
    }
}
