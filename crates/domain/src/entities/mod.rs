//! Entities - Objects with identity

mod adventure;

pub use adventure::{dedupe_by_id, Adventure};
