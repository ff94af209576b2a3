use std::sync::RwLock;

use tracing::debug;

use crate::{order::Error, shared::geo::Coordinate};

/// Source of the vehicle's live position.
pub trait PositionTracker: Send + Sync {
    fn current(&self) -> Result<Coordinate, Error>;
}

/// Keeps the last position reported by the vehicle.
#[derive(Debug)]
pub struct ManualTracker {
    position: RwLock<Coordinate>,
}

impl ManualTracker {
    pub fn new(origin: Coordinate) -> Self {
        Self {
            position: RwLock::new(origin),
        }
    }

    pub fn update(&self, position: Coordinate) -> Result<(), Error> {
        if !position.is_valid() {
            return Err(Error::InvalidCoordinate(position));
        }
        *self.position.write().map_err(|_| Error::Poisoned)? = position;
        debug!("Vehicle reported position {position}");
        Ok(())
    }
}

impl PositionTracker for ManualTracker {
    fn current(&self) -> Result<Coordinate, Error> {
        self.position
            .read()
            .map(|position| *position)
            .map_err(|_| Error::Poisoned)
    }
}
