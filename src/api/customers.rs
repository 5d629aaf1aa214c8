//! Customer API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{not_found, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateCustomerRequest, Customer};
use crate::views::{self, CustomerWithOrders};
use crate::AppState;

/// GET /customers - List all customers with their orders.
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Vec<CustomerWithOrders>> {
    let tables = state.store.read().await;

    let customers = tables
        .customers
        .iter()
        .map(|customer| views::customer_with_orders(&tables, customer))
        .collect();

    success(customers)
}

/// GET /customers/{id} - Get a single customer with their orders.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<CustomerWithOrders> {
    let tables = state.store.read().await;

    let customer = tables
        .customers
        .find(id)
        .ok_or_else(|| not_found("Customer", id))?;

    success(views::customer_with_orders(&tables, customer))
}

/// POST /customers - Create a new customer.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> ApiResult<CustomerWithOrders> {
    let mut tables = state.store.write().await;

    let id = tables.customers.next_id();
    let customer = tables
        .customers
        .insert(Customer {
            id,
            name: request.name,
            address: request.address,
        })
        .clone();
    tracing::info!("Customer {} created", id);

    success(views::customer_with_orders(&tables, &customer))
}

/// DELETE /customers/{id} - Delete a customer. Their orders are kept.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut tables = state.store.write().await;

    tables
        .customers
        .remove(id)
        .ok_or_else(|| not_found("Customer", id))?;
    tracing::info!("Customer {} deleted", id);

    Ok(StatusCode::NO_CONTENT)
}
