//! Order model.

use serde::{Deserialize, Serialize};

use super::{Record, Timestamp};

/// A potato order, optionally assigned to a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    #[serde(rename = "tuberDriverId")]
    pub driver_id: Option<i32>,
    #[serde(rename = "orderPlacedOnDate")]
    pub placed_on: Timestamp,
    #[serde(rename = "deliveredOnDate")]
    pub delivered_on: Option<Timestamp>,
}

impl Order {
    /// A freshly placed order: no driver, not delivered.
    pub fn placed(id: i32, customer_id: i32, placed_on: Timestamp) -> Self {
        Self {
            id,
            customer_id,
            driver_id: None,
            placed_on,
            delivered_on: None,
        }
    }

    /// Mark the order delivered. A second call overwrites the earlier time.
    pub fn complete(&mut self, at: Timestamp) {
        self.delivered_on = Some(at);
    }

    /// Assign (or reassign) the delivering driver.
    pub fn assign_driver(&mut self, driver_id: i32) {
        self.driver_id = Some(driver_id);
    }
}

impl Record for Order {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Request body for placing a new order.
///
/// Any other fields a client sends are ignored; the driver and delivery time
/// of a new order are never taken from the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: i32,
}

/// Query string of `PUT /tuberorders/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverParams {
    pub driver_id: i32,
}
