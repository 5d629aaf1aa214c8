//! In-memory entity store.
//!
//! Nothing is persisted; every record lives until the process exits.

mod collection;
mod seed;

pub use collection::*;
pub use seed::sample_tables;

use chrono::Local;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::CustomerCheck;
use crate::errors::AppError;
use crate::models::{Customer, Driver, Order, OrderTopping, Topping};

/// All collections of the service.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub drivers: Collection<Driver>,
    pub customers: Collection<Customer>,
    pub toppings: Collection<Topping>,
    pub orders: Collection<Order>,
    pub order_toppings: Collection<OrderTopping>,
}

impl Tables {
    /// Validate the customer reference of an order about to be placed.
    ///
    /// `Lenient` accepts dangling ids; `Strict` reports the missing customer.
    pub fn check_order_customer(
        &self,
        customer_id: i32,
        policy: CustomerCheck,
    ) -> Result<(), AppError> {
        match policy {
            CustomerCheck::Lenient => Ok(()),
            CustomerCheck::Strict => self
                .customers
                .find(customer_id)
                .map(|_| ())
                .ok_or_else(|| {
                    AppError::NotFound(format!("Customer with ID {} not found.", customer_id))
                }),
        }
    }
}

/// Owner of the tables.
///
/// Handlers take one guard for the whole request, so id assignment and the
/// existence checks that precede a write see a consistent view.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample data, timed relative to now.
    pub fn seeded() -> Self {
        Self::from_tables(sample_tables(Local::now()))
    }

    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
