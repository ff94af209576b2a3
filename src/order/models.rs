use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

/// Target location of an order, or any coordinate shaped like one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub lat: f64,
    pub lng: f64,
    /// Optional place label shown to the passenger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Destination {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

impl From<Coordinate> for Destination {
    fn from(value: Coordinate) -> Self {
        Self::new(value.latitude, value.longitude)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalStatus {
    #[serde(rename = "isArrival")]
    pub arrived: bool,
}

impl ArrivalStatus {
    pub const fn new(arrived: bool) -> Self {
        Self { arrived }
    }
}

/// Ordered route tokens from origin to destination.
///
/// Tokens are opaque to this crate apart from the planner that produced them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalPath(Vec<String>);

impl GlobalPath {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for GlobalPath {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl FromIterator<String> for GlobalPath {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Driving,
    Completed,
}

/// One passenger ride: created by a saved destination, closed by get-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub destination: Destination,
    pub path: GlobalPath,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(id: u64, destination: Destination, path: GlobalPath) -> Self {
        Self {
            id,
            destination,
            path,
            status: OrderStatus::Driving,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn complete(mut self) -> Self {
        self.status = OrderStatus::Completed;
        self.completed_at = Some(Utc::now());
        self
    }
}
