pub mod member;
pub mod order;
pub mod prelude;
pub mod shared;
