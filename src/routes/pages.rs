//! The HTML surface: a selection form over the catalog and its result page.
//!
//! Rendering is deliberately plain string assembly; the markup is two small
//! pages and the interesting behavior lives in the recommender.

use axum::{
    extract::{RawForm, State},
    response::Html,
};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::recommender;

use super::AppState;

/// Form payload for the recommend page.
///
/// The `movies` field repeats once per checked title, which is why the raw
/// body is parsed with `serde_html_form` rather than axum's single-value
/// form extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub movies: Vec<String>,
}

/// GET / — selection page listing every catalog title
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.catalog))
}

/// POST /recommend — recommendations for the submitted selection
pub async fn recommend(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Html<String>> {
    let form: RecommendForm = serde_html_form::from_bytes(&body)
        .map_err(|e| AppError::InvalidInput(format!("bad form payload: {e}")))?;

    tracing::info!(
        selected_count = form.movies.len(),
        "Processing recommendation form"
    );

    let recommendation = recommender::recommend(&state.catalog, &form.movies);
    Ok(Html(render_result(&recommendation)))
}

fn render_index(catalog: &Catalog) -> String {
    let mut checkboxes = String::new();
    for title in catalog.titles() {
        let escaped = escape_html(title);
        checkboxes.push_str(&format!(
            "      <li><label><input type=\"checkbox\" name=\"movies\" value=\"{escaped}\"> {escaped}</label></li>\n"
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Movie Recommender</title></head>\n\
         <body>\n\
           <h1>Pick some movies you like</h1>\n\
           <form method=\"post\" action=\"/recommend\">\n\
             <ul>\n\
         {checkboxes}\
             </ul>\n\
             <button type=\"submit\">Recommend</button>\n\
           </form>\n\
         </body>\n\
         </html>\n"
    )
}

fn render_result(recommendation: &Recommendation) -> String {
    let body = if recommendation.titles.is_empty() {
        "  <p>No movies matched your selection.</p>\n".to_string()
    } else {
        let items: String = recommendation
            .titles
            .iter()
            .map(|title| format!("    <li>{}</li>\n", escape_html(title)))
            .collect();
        format!("  <ol>\n{items}  </ol>\n")
    };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Recommendations</title></head>\n\
         <body>\n\
           <h1>Recommended for you</h1>\n\
         {body}\
           <p>{reason}</p>\n\
           <p><a href=\"/\">Back to selection</a></p>\n\
         </body>\n\
         </html>\n",
        reason = escape_html(recommendation.reason.message()),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
