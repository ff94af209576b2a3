use crate::{dto::MemberDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};
use tracing::error;

/// `GET /api/members?phone=...`. The number is matched exactly, so an E.164
/// `+` must be sent as `%2B`; a bare `+` decodes to a space and misses.
pub async fn find_by_phone(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let phone = params.get("phone").ok_or(StatusCode::BAD_REQUEST)?;
    let member = state.members.find_by_phone(phone).map_err(|err| {
        error!("Failed to look up member: {err}");
        StatusCode::SERVICE_UNAVAILABLE
    })?;
    match member {
        Some(member) => Ok(Json(MemberDto::from(&member)).into_response()),
        None => Err(StatusCode::NOT_FOUND),
    }
}
