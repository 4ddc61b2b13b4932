use super::types::ErrorResponse;
use crate::recommend::{RecommendationResult, Recommender};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

pub async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendationResult>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received recommendation request ({} bytes)", body.len());

    match state.recommender.recommend(&body).await {
        Ok(result) => {
            info!(
                "Returning recommendation (parsed JSON: {})",
                result.ai_json.is_some()
            );
            Ok(Json(result))
        }
        Err(e) => {
            error!("Recommendation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
