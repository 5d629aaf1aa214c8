//! Join/projection layer.
//!
//! Assembles stored records into the nested shapes returned by the API. Every
//! function reads from one `Tables` snapshot and keeps collection order.

use serde::Serialize;

use crate::db::Tables;
use crate::errors::AppError;
use crate::models::{Customer, Driver, Order, Timestamp, Topping};

/// A topping as shown inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToppingView {
    pub id: i32,
    pub name: String,
}

impl From<&Topping> for ToppingView {
    fn from(topping: &Topping) -> Self {
        Self {
            id: topping.id,
            name: topping.name.clone(),
        }
    }
}

/// Order fields plus resolved toppings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i32,
    pub customer_id: i32,
    #[serde(rename = "tuberDriverId")]
    pub driver_id: Option<i32>,
    #[serde(rename = "orderPlacedOnDate")]
    pub placed_on: Timestamp,
    #[serde(rename = "deliveredOnDate")]
    pub delivered_on: Option<Timestamp>,
    pub toppings: Vec<ToppingView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRef {
    pub id: i32,
    pub name: String,
}

/// Order summary with the customer and, when assigned, the driver embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub summary: OrderSummary,
    pub customer: CustomerRef,
    #[serde(rename = "tuberDriver")]
    pub driver: Option<DriverRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverWithDeliveries {
    pub id: i32,
    pub name: String,
    #[serde(rename = "tuberDeliveries")]
    pub deliveries: Vec<OrderSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithOrders {
    pub id: i32,
    pub name: String,
    pub address: String,
    #[serde(rename = "tuberOrders")]
    pub orders: Vec<OrderSummary>,
}

/// Toppings linked to an order, in topping-table order.
///
/// Each topping appears once however many rows link it; rows naming a topping
/// that does not exist match nothing.
fn toppings_for(tables: &Tables, order_id: i32) -> Vec<ToppingView> {
    tables
        .toppings
        .iter()
        .filter(|topping| {
            tables
                .order_toppings
                .iter()
                .any(|row| row.order_id == order_id && row.topping_id == topping.id)
        })
        .map(ToppingView::from)
        .collect()
}

pub fn order_summary(tables: &Tables, order: &Order) -> OrderSummary {
    OrderSummary {
        id: order.id,
        customer_id: order.customer_id,
        driver_id: order.driver_id,
        placed_on: order.placed_on,
        delivered_on: order.delivered_on,
        toppings: toppings_for(tables, order.id),
    }
}

/// Full view of one order.
///
/// A customer reference that does not resolve means the order is corrupt, and
/// the whole projection fails instead of returning a partial view.
pub fn order_detail(tables: &Tables, order: &Order) -> Result<OrderDetail, AppError> {
    let customer = tables.customers.find(order.customer_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "Customer #{} could not be found for Order #{}",
            order.customer_id, order.id
        ))
    })?;

    let driver = order
        .driver_id
        .and_then(|id| tables.drivers.find(id))
        .map(|driver| DriverRef {
            id: driver.id,
            name: driver.name.clone(),
        });

    Ok(OrderDetail {
        summary: order_summary(tables, order),
        customer: CustomerRef {
            id: customer.id,
            name: customer.name.clone(),
            address: customer.address.clone(),
        },
        driver,
    })
}

pub fn driver_with_deliveries(tables: &Tables, driver: &Driver) -> DriverWithDeliveries {
    let deliveries = tables
        .orders
        .iter()
        .filter(|order| order.driver_id == Some(driver.id))
        .map(|order| order_summary(tables, order))
        .collect();

    DriverWithDeliveries {
        id: driver.id,
        name: driver.name.clone(),
        deliveries,
    }
}

pub fn customer_with_orders(tables: &Tables, customer: &Customer) -> CustomerWithOrders {
    let orders = tables
        .orders
        .iter()
        .filter(|order| order.customer_id == customer.id)
        .map(|order| order_summary(tables, order))
        .collect();

    CustomerWithOrders {
        id: customer.id,
        name: customer.name.clone(),
        address: customer.address.clone(),
        orders,
    }
}
