pub mod identity;

pub use identity::{RequestId, UserId};
