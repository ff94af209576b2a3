use carming::prelude::*;
use std::sync::Arc;

pub struct AppState {
    pub orders: Arc<dyn OrderService>,
    pub members: Arc<dyn MemberFinder>,
    /// Receives the positions the vehicle reports.
    pub tracker: Arc<ManualTracker>,
}

impl AppState {
    pub fn new(
        orders: impl OrderService + 'static,
        members: impl MemberFinder + 'static,
        tracker: Arc<ManualTracker>,
    ) -> Self {
        Self {
            orders: Arc::new(orders),
            members: Arc::new(members),
            tracker,
        }
    }
}
