//! Topping API endpoints.

use axum::extract::{Path, State};

use super::{not_found, success, ApiResult};
use crate::views::ToppingView;
use crate::AppState;

/// GET /toppings - List all toppings.
pub async fn list_toppings(State(state): State<AppState>) -> ApiResult<Vec<ToppingView>> {
    let tables = state.store.read().await;
    success(tables.toppings.iter().map(ToppingView::from).collect())
}

/// GET /toppings/{id} - Get a single topping.
pub async fn get_topping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ToppingView> {
    let tables = state.store.read().await;

    let topping = tables
        .toppings
        .find(id)
        .ok_or_else(|| not_found("Topping", id))?;

    success(ToppingView::from(topping))
}
