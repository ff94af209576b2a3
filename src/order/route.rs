use tracing::debug;

use crate::{
    order::{Error, GlobalPath},
    shared::geo::{Coordinate, Distance},
};

/// Computes the global path for an order. Usually backed by an external routing engine.
pub trait RoutePlanner: Send + Sync {
    fn plan(&self, from: Coordinate, to: Coordinate) -> Result<GlobalPath, Error>;
}

/// Encodes a point as a `"lat,lng"` path token with 6 decimals (~0.1 m).
pub fn path_token(coordinate: &Coordinate) -> String {
    format!("{:.6},{:.6}", coordinate.latitude, coordinate.longitude)
}

pub fn parse_path_token(token: &str) -> Option<Coordinate> {
    let (lat, lng) = token.split_once(',')?;
    Some(Coordinate::new(
        lat.trim().parse().ok()?,
        lng.trim().parse().ok()?,
    ))
}

/// Upper bound on segments per path. Longer routes are sampled more coarsely.
pub const MAX_PATH_SEGMENTS: usize = 1_000;

/// Plans a straight line sampled every `step`, both endpoints included.
///
/// The step widens when a route would need more than [`MAX_PATH_SEGMENTS`].
pub struct StraightLinePlanner {
    step: Distance,
}

impl Default for StraightLinePlanner {
    fn default() -> Self {
        Self::new(Distance::from_meters(100.0))
    }
}

impl StraightLinePlanner {
    pub fn new(step: Distance) -> Self {
        Self { step }
    }
}

impl RoutePlanner for StraightLinePlanner {
    fn plan(&self, from: Coordinate, to: Coordinate) -> Result<GlobalPath, Error> {
        let step = self.step.as_meters();
        if step.is_nan() || step <= 0.0 {
            return Err(Error::RoutingUnavailable(format!(
                "path step must be positive, got {}",
                self.step
            )));
        }
        let distance = from.distance_to(&to);
        let segments = (distance.as_meters() / step)
            .ceil()
            .clamp(1.0, MAX_PATH_SEGMENTS as f64) as usize;
        debug!("Planned {segments} segments over {distance}");
        Ok((0..=segments)
            .map(|i| path_token(&from.lerp(&to, i as f64 / segments as f64)))
            .collect())
    }
}
