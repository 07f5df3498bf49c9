use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::warn;

use super::domain::{Selections, SelectionsPayload};
use super::ListingAnalyzer;
use crate::error::AppError;

/// Router exposing the analysis endpoint. Non-POST methods get a 405 from axum.
pub fn analysis_router(analyzer: Arc<ListingAnalyzer>) -> Router {
    Router::new()
        .route("/api/v1/listings/analyze", post(analyze_handler))
        .with_state(analyzer)
}

/// Decodes the body as JSON whatever the declared content type.
pub(crate) async fn analyze_handler(
    State(analyzer): State<Arc<ListingAnalyzer>>,
    body: Bytes,
) -> Response {
    let payload = match serde_json::from_slice::<SelectionsPayload>(&body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "rejected analysis payload");
            return AppError::from(err).into_response();
        }
    };

    let selections = Selections::from(payload);
    Json(analyzer.analyze(&selections)).into_response()
}
