//! Join rows linking orders to toppings.

use serde::{Deserialize, Serialize};

use super::Record;

/// One topping applied to one order. The same pair may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTopping {
    pub id: i32,
    #[serde(rename = "tuberOrderId")]
    pub order_id: i32,
    pub topping_id: i32,
}

impl Record for OrderTopping {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Request body for linking a topping to an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderToppingRequest {
    #[serde(rename = "tuberOrderId", alias = "orderId")]
    pub order_id: i32,
    pub topping_id: i32,
}
