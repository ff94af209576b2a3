mod models;
mod route;
mod service;
mod tracker;

pub use models::*;
pub use route::*;
pub use service::*;
pub use tracker::*;

use crate::shared::geo::{Coordinate, Distance};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Coordinate is outside of the valid range: {0}")]
    InvalidCoordinate(Coordinate),
    #[error("No order is currently in progress")]
    NoActiveOrder,
    #[error("Could not plan a route: {0}")]
    RoutingUnavailable(String),
    #[error("Position tracker is unavailable: {0}")]
    TrackerUnavailable(String),
    #[error("Order state lock was poisoned")]
    Poisoned,
}

/// The five operations the order endpoints delegate to.
pub trait OrderService: Send + Sync {
    /// Starts an order towards `destination`, or re-routes the one in progress.
    fn save_destination(&self, destination: Destination) -> Result<(), Error>;
    /// Passenger left the vehicle. Closes the order in progress.
    fn get_off(&self) -> Result<(), Error>;
    /// Never fails for a missing order, that is simply not arrived.
    fn is_destination(&self) -> Result<ArrivalStatus, Error>;
    fn current_position(&self) -> Result<Destination, Error>;
    /// Empty when no order is in progress.
    fn global_path(&self) -> Result<GlobalPath, Error>;
}

pub struct Config {
    /// How close the vehicle must be to count as arrived.
    pub arrival_radius: Distance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arrival_radius: Distance::from_meters(30.0),
        }
    }
}
