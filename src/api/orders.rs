//! Order API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;

use super::{not_found, success, ApiResult};
use crate::errors::AppError;
use crate::models::{AssignDriverParams, CreateOrderRequest, Order};
use crate::views::{self, OrderDetail, OrderSummary};
use crate::AppState;

/// GET /tuberorders - List all orders.
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<OrderSummary>> {
    let tables = state.store.read().await;

    let orders = tables
        .orders
        .iter()
        .map(|order| views::order_summary(&tables, order))
        .collect();

    success(orders)
}

/// GET /tuberorders/{id} - Get a single order with its customer and driver.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<OrderDetail> {
    let tables = state.store.read().await;

    let order = tables
        .orders
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Order #{} could not be found", id)))?;

    success(views::order_detail(&tables, order)?)
}

/// POST /tuberorders - Place a new order.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> ApiResult<OrderSummary> {
    let mut tables = state.store.write().await;

    tables.check_order_customer(request.customer_id, state.config.customer_check)?;

    let id = tables.orders.next_id();
    let order = tables
        .orders
        .insert(Order::placed(id, request.customer_id, Local::now()))
        .clone();
    tracing::info!("Order {} placed for customer {}", id, request.customer_id);

    success(views::order_summary(&tables, &order))
}

/// POST /tuberorders/{id}/complete - Mark an order delivered.
pub async fn complete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<OrderSummary> {
    let mut tables = state.store.write().await;

    let order = tables.orders.find_mut(id).ok_or_else(|| not_found("Order", id))?;
    order.complete(Local::now());
    let order = order.clone();
    tracing::info!("Order {} delivered", id);

    success(views::order_summary(&tables, &order))
}

/// PUT /tuberorders/{id}?driverId= - Assign a driver to an order.
pub async fn assign_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AssignDriverParams>,
) -> ApiResult<OrderSummary> {
    let mut tables = state.store.write().await;

    // A missing order is reported before a missing driver.
    let driver_known = tables.drivers.find(params.driver_id).is_some();
    let order = tables.orders.find_mut(id).ok_or_else(|| not_found("Order", id))?;
    if !driver_known {
        return Err(not_found("Driver", params.driver_id));
    }

    order.assign_driver(params.driver_id);
    let order = order.clone();
    tracing::info!("Order {} assigned to driver {}", id, params.driver_id);

    success(views::order_summary(&tables, &order))
}
