//! Topping model.

use serde::Serialize;

use super::Record;

/// A topping that can be added to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topping {
    pub id: i32,
    pub name: String,
}

impl Record for Topping {
    fn id(&self) -> i32 {
        self.id
    }
}
