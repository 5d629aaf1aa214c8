//! Customer model.

use serde::{Deserialize, Serialize};

use super::Record;

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Record for Customer {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Request body for creating a new customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub address: String,
}
