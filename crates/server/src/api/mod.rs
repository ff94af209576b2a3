mod member;
mod order;
mod vehicle;

pub use member::*;
pub use order::*;
pub use vehicle::*;

use crate::state::AppState;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use carming::order::Error;
use std::sync::Arc;
use tracing::{error, warn};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/orders/dest", post(save_destination))
        .route("/api/orders/get-off", post(get_off))
        .route("/api/orders/valid-dest", get(is_destination))
        .route("/api/orders/current-position", get(current_position))
        .route("/api/orders/global-path", get(global_path))
        .route("/api/members", get(find_by_phone))
        .route("/api/vehicle/position", post(report_position))
        .with_state(state)
}

fn order_error(err: Error) -> StatusCode {
    match err {
        Error::InvalidCoordinate(_) => {
            warn!("Rejected request: {err}");
            StatusCode::BAD_REQUEST
        }
        Error::NoActiveOrder => {
            warn!("Rejected request: {err}");
            StatusCode::NOT_FOUND
        }
        Error::RoutingUnavailable(_) | Error::TrackerUnavailable(_) => {
            error!("Order service unavailable: {err}");
            StatusCode::SERVICE_UNAVAILABLE
        }
        Error::Poisoned => {
            error!("Order service failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
