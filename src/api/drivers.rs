//! Driver API endpoints.

use axum::extract::{Path, State};

use super::{not_found, success, ApiResult};
use crate::views::{self, DriverWithDeliveries};
use crate::AppState;

/// GET /tuberdrivers - List all drivers with their deliveries.
pub async fn list_drivers(State(state): State<AppState>) -> ApiResult<Vec<DriverWithDeliveries>> {
    let tables = state.store.read().await;

    let drivers = tables
        .drivers
        .iter()
        .map(|driver| views::driver_with_deliveries(&tables, driver))
        .collect();

    success(drivers)
}

/// GET /tuberdrivers/{id} - Get a single driver with their deliveries.
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<DriverWithDeliveries> {
    let tables = state.store.read().await;

    let driver = tables.drivers.find(id).ok_or_else(|| not_found("Driver", id))?;

    success(views::driver_with_deliveries(&tables, driver))
}
