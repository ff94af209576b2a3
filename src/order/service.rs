use std::sync::{
    Arc, RwLock,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, info};

use crate::order::{
    ArrivalStatus, Config, Destination, Error, GlobalPath, Order, OrderService, PositionTracker,
    RoutePlanner,
};

/// Single-vehicle order service backed by a route planner and a position tracker.
///
/// At most one order is in progress. Closed orders are kept in `history`.
pub struct LocalOrderService {
    config: Config,
    planner: Box<dyn RoutePlanner>,
    tracker: Arc<dyn PositionTracker>,
    current: RwLock<Option<Order>>,
    history: RwLock<Vec<Order>>,
    next_id: AtomicU64,
}

impl LocalOrderService {
    pub fn new(planner: Box<dyn RoutePlanner>, tracker: Arc<dyn PositionTracker>) -> Self {
        Self {
            config: Config::default(),
            planner,
            tracker,
            current: RwLock::new(None),
            history: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Snapshot of the order in progress, if any.
    pub fn current_order(&self) -> Result<Option<Order>, Error> {
        Ok(self.current.read().map_err(|_| Error::Poisoned)?.clone())
    }

    /// Completed orders, oldest first.
    pub fn history(&self) -> Result<Vec<Order>, Error> {
        Ok(self.history.read().map_err(|_| Error::Poisoned)?.clone())
    }
}

impl OrderService for LocalOrderService {
    fn save_destination(&self, destination: Destination) -> Result<(), Error> {
        let target = destination.coordinate();
        if !target.is_valid() {
            return Err(Error::InvalidCoordinate(target));
        }
        let origin = self.tracker.current()?;
        let path = self.planner.plan(origin, target)?;

        let mut current = self.current.write().map_err(|_| Error::Poisoned)?;
        match current.as_mut() {
            Some(order) => {
                info!(
                    "Order {} re-routed to {target} ({} path tokens)",
                    order.id,
                    path.len()
                );
                order.destination = destination;
                order.path = path;
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                info!(
                    "Order {id} created towards {target} ({} path tokens)",
                    path.len()
                );
                *current = Some(Order::new(id, destination, path));
            }
        }
        Ok(())
    }

    fn get_off(&self) -> Result<(), Error> {
        let order = self
            .current
            .write()
            .map_err(|_| Error::Poisoned)?
            .take()
            .ok_or(Error::NoActiveOrder)?
            .complete();
        info!("Passenger got off, order {} completed", order.id);
        self.history
            .write()
            .map_err(|_| Error::Poisoned)?
            .push(order);
        Ok(())
    }

    fn is_destination(&self) -> Result<ArrivalStatus, Error> {
        let target = match self.current.read().map_err(|_| Error::Poisoned)?.as_ref() {
            Some(order) => order.destination.coordinate(),
            None => return Ok(ArrivalStatus::new(false)),
        };
        let distance = self.tracker.current()?.distance_to(&target);
        let arrived = distance <= self.config.arrival_radius;
        debug!("Vehicle is {distance} from destination, arrived: {arrived}");
        Ok(ArrivalStatus::new(arrived))
    }

    fn current_position(&self) -> Result<Destination, Error> {
        Ok(self.tracker.current()?.into())
    }

    fn global_path(&self) -> Result<GlobalPath, Error> {
        Ok(self
            .current
            .read()
            .map_err(|_| Error::Poisoned)?
            .as_ref()
            .map(|order| order.path.clone())
            .unwrap_or_default())
    }
}
