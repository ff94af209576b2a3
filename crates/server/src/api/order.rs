use crate::{api::order_error, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carming::order::Destination;
use std::sync::Arc;

pub async fn save_destination(
    State(state): State<Arc<AppState>>,
    Json(request): Json<Destination>,
) -> Result<Response, StatusCode> {
    state.orders.save_destination(request).map_err(order_error)?;
    Ok(StatusCode::OK.into_response())
}

pub async fn get_off(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    state.orders.get_off().map_err(order_error)?;
    Ok(StatusCode::OK.into_response())
}

pub async fn is_destination(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let status = state.orders.is_destination().map_err(order_error)?;
    Ok(Json(status).into_response())
}

pub async fn current_position(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let position = state.orders.current_position().map_err(order_error)?;
    Ok(Json(position).into_response())
}

pub async fn global_path(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let path = state.orders.global_path().map_err(order_error)?;
    Ok(Json(path).into_response())
}
