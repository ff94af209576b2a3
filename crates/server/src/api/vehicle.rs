use crate::{api::order_error, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carming::order::Destination;
use std::sync::Arc;

/// Position report pushed by the vehicle. Feeds the tracker behind the order endpoints.
pub async fn report_position(
    State(state): State<Arc<AppState>>,
    Json(request): Json<Destination>,
) -> Result<Response, StatusCode> {
    state
        .tracker
        .update(request.coordinate())
        .map_err(order_error)?;
    Ok(StatusCode::OK.into_response())
}
