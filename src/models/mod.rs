//! Data models for the TuberTreats application.
//!
//! Records as held by the store, plus the request bodies that create them.

mod customer;
mod driver;
mod order;
mod order_topping;
mod topping;

pub use customer::*;
pub use driver::*;
pub use order::*;
pub use order_topping::*;
pub use topping::*;

use chrono::{DateTime, Local};

/// Wall-clock time of the running process.
pub type Timestamp = DateTime<Local>;

/// A stored record addressed by a store-assigned integer id.
pub trait Record {
    fn id(&self) -> i32;
}
