//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::planner::{JourneyPlanner, PlanError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/journey", get(plan_journey))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Plan journeys between two named stations.
async fn plan_journey(
    State(state): State<AppState>,
    query: Result<Query<JourneyRequest>, QueryRejection>,
) -> Result<Json<JourneyResponse>, AppError> {
    let Query(req) = query?;
    let request = req.into_plan_request();

    let planner = JourneyPlanner::new(
        state.tfl.as_ref(),
        state.cache.as_ref(),
        state.config.as_ref(),
    );
    let routes = planner.plan(&request).await?;
    info!(
        from = %request.from,
        to = %request.to,
        routes = routes.len(),
        cached_lines = state.cache.entry_count(),
        "journey request served"
    );

    Ok(Json(JourneyResponse::from_routes(&routes)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::StationNotFound { .. } => AppError::NotFound {
                message: "Station not found".to_string(),
            },
            PlanError::NoJourneys => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::Upstream(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            info!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
