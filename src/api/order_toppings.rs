//! Order-topping link endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{not_found, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateOrderToppingRequest, OrderTopping};
use crate::AppState;

/// GET /tubertoppings - List all order-topping links.
pub async fn list_order_toppings(State(state): State<AppState>) -> ApiResult<Vec<OrderTopping>> {
    let tables = state.store.read().await;
    success(tables.order_toppings.iter().cloned().collect())
}

/// POST /tubertoppings - Add a topping to an order.
pub async fn create_order_topping(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderToppingRequest>,
) -> ApiResult<OrderTopping> {
    let mut tables = state.store.write().await;

    if tables.orders.find(request.order_id).is_none() {
        return Err(not_found("Order", request.order_id));
    }
    if tables.toppings.find(request.topping_id).is_none() {
        return Err(not_found("Topping", request.topping_id));
    }

    let id = tables.order_toppings.next_id();
    let row = tables
        .order_toppings
        .insert(OrderTopping {
            id,
            order_id: request.order_id,
            topping_id: request.topping_id,
        })
        .clone();
    tracing::info!(
        "Topping {} added to order {} as link {}",
        row.topping_id,
        row.order_id,
        id
    );

    success(row)
}

/// DELETE /tubertoppings/{id} - Remove an order-topping link.
pub async fn delete_order_topping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut tables = state.store.write().await;

    tables
        .order_toppings
        .remove(id)
        .ok_or_else(|| not_found("TuberTopping", id))?;
    tracing::info!("Order-topping link {} removed", id);

    Ok(StatusCode::NO_CONTENT)
}
