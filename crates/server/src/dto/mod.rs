mod member;

pub use member::*;
