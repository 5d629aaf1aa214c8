//! Delivery driver model.

use serde::Serialize;

use super::Record;

/// A driver who delivers orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i32,
    pub name: String,
}

impl Record for Driver {
    fn id(&self) -> i32 {
        self.id
    }
}
