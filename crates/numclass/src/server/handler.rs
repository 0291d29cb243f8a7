use crate::prelude::*;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use numclass_core::response::{parse_number, ClassificationResult};
use std::sync::Arc;

use super::AppState;

const NUMBER_PARAM: &str = "number";

/// Classify the `number` query parameter and attach its fun fact.
///
/// Steps run in order and the first failure ends the request: query decoding
/// (500), parameter validation (400), fact lookup (500), classification (500).
pub async fn classify_number(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> std::result::Result<Json<ClassificationResult>, Error> {
    check_query(uri.query().unwrap_or_default())?;

    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map_err(|e| Error::RequestParse(e.to_string()))?;

    // Repeated keys resolve to the first occurrence.
    let raw = params
        .iter()
        .find(|(key, _)| key == NUMBER_PARAM)
        .map(|(_, value)| value.as_str());

    let number = parse_number(raw)?;
    let fun_fact = state.facts.fetch(number).await?;

    // `is_perfect` is linear in the input, keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || ClassificationResult::new(number, fun_fact))
        .await
        .map_err(|e| Error::Classification(e.to_string()))?;

    Ok(Json(result))
}

/// Reject queries a strict form decoder refuses: `;` separators and `%` not
/// followed by two hex digits.
fn check_query(query: &str) -> std::result::Result<(), Error> {
    if query.contains(';') {
        return Err(Error::RequestParse(format!(
            "invalid semicolon separator in query {query:?}"
        )));
    }

    let bytes = query.as_bytes();
    for (index, _) in query.match_indices('%') {
        let escape = bytes.get(index + 1..index + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(Error::RequestParse(format!(
                "invalid escape at byte {index} in query {query:?}"
            )));
        }
    }

    Ok(())
}

/// Answer a CORS preflight with permissive headers and an empty body.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
