use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::models::{Reason, Recommendation};
use crate::services::recommender;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Selected titles; may be empty or contain blank entries.
    #[serde(default)]
    pub movies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub titles: Vec<String>,
    pub reason: Reason,
    /// Human-readable form of `reason`
    pub message: &'static str,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            message: recommendation.reason.message(),
            titles: recommendation.titles,
            reason: recommendation.reason,
        }
    }
}

/// Handler for the JSON recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    tracing::info!(
        selected_count = request.movies.len(),
        "Processing recommendation request"
    );
    let recommendation = recommender::recommend(&state.catalog, &request.movies);
    Json(recommendation.into())
}

/// Lists every catalog title, in catalog order
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.titles().map(str::to_owned).collect())
}
