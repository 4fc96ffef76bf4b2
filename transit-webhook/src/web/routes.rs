//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::RouteFilter;
use crate::error::{DEFAULT_REPLY, QueryError};
use crate::tfl::TransitApi;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<A: TransitApi>(state: AppState<A>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook::<A>))
        .route("/api/arrivals", get(arrivals::<A>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Conversational agent webhook.
///
/// Always answers 200 with a response envelope; the agent speaks whatever
/// text we return, so failures become apologies rather than HTTP errors.
async fn webhook<A: TransitApi>(
    State(state): State<AppState<A>>,
    body: Bytes,
) -> Json<WebhookResponse> {
    let request: WebhookRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "unparseable webhook body");
            return Json(WebhookResponse::text(DEFAULT_REPLY));
        }
    };

    let tag = request.fulfillment_info.tag.as_str();
    if tag != GET_TRANSIT_SCHEDULE {
        warn!(tag, "unhandled webhook tag");
        return Json(WebhookResponse::text(DEFAULT_REPLY));
    }

    let params = &request.session_info.parameters;
    let stop_name = params.stop_name();
    let route = params.bus_route();
    debug!(?stop_name, ?route, "transit schedule request");

    let text = state
        .service
        .answer(stop_name.as_deref(), route.as_deref())
        .await;

    Json(WebhookResponse::text(text))
}

/// Ranked arrivals for a stop, as JSON.
async fn arrivals<A: TransitApi>(
    State(state): State<AppState<A>>,
    Query(req): Query<ArrivalsQuery>,
) -> Result<Json<ArrivalsResponse>, AppError> {
    let stop = req
        .stop
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Missing stop parameter".to_string(),
        })?;

    let route = req.route.as_deref().and_then(RouteFilter::new);
    let result = state.service.lookup(stop, route.as_ref()).await?;

    Ok(Json(ArrivalsResponse::from_stop_arrivals(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        let message = e.user_message();
        match e {
            QueryError::Upstream(_) => AppError::BadGateway { message },
            QueryError::StopNotFound { .. }
            | QueryError::NoArrivals { .. }
            | QueryError::NoMatchingRoute { .. } => AppError::NotFound { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            error!(%status, reason = %message, "request failed");
        } else {
            debug!(%status, reason = %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
