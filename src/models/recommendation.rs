use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Why a set of recommendations was produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// Nothing was selected; the highest-rated movies overall are shown
    GlobalTopRated,
    /// Movies were selected; results follow the genre tendency of the selection
    GenreTendency,
}

impl Reason {
    /// Human-readable explanation shown alongside the recommendations.
    pub fn message(&self) -> &'static str {
        match self {
            Reason::GlobalTopRated => {
                "No movies were selected, so the highest-rated movies overall are shown."
            }
            Reason::GenreTendency => {
                "Recommended based on the genre tendency of the selected movies."
            }
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Ordered recommendation titles plus the reason they were chosen
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    /// Up to five titles, best first
    pub titles: Vec<String>,
    pub reason: Reason,
}
