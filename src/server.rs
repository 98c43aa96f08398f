//! HTTP surface

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::models::RecommendationResponse;
use crate::service::WearService;

/// Builds the router serving `GET /what_to_wear`
pub fn router(service: Arc<WearService>) -> Router {
    Router::new()
        .route("/what_to_wear", get(what_to_wear))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Always answers 200; pipeline failures arrive as a labeled message.
async fn what_to_wear(State(service): State<Arc<WearService>>) -> Json<RecommendationResponse> {
    tracing::info!("Recommending clothing with {}", service.recommender_name());

    Json(RecommendationResponse {
        recommendation: service.recommendation_text().await,
    })
}
