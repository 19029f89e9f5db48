//! Content-based movie recommendation service.
//!
//! At startup two delimited datasets are loaded and joined into an in-memory
//! [`catalog::Catalog`]: movie metadata with 0/1 genre-flag columns, and user
//! ratings that are reduced to a mean rating per movie. The catalog is then
//! served over HTTP — an HTML selection form plus a small JSON API — with all
//! recommendation logic in [`services::recommender`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
