pub use crate::member::{Gender, Member, MemberFinder, MemberRepository, source::MemberSource};
pub use crate::order::{
    ArrivalStatus, Destination, GlobalPath, LocalOrderService, ManualTracker, Order, OrderService,
    OrderStatus, PositionTracker, RoutePlanner, StraightLinePlanner,
};
pub use crate::shared::geo::{Coordinate, Distance};
