//! REST API module.
//!
//! One handler per endpoint. Each takes a single store guard, checks the ids it
//! was given, applies any write and hands the result to the projection layer.

mod customers;
mod drivers;
mod order_toppings;
mod orders;
mod toppings;

pub use customers::*;
pub use drivers::*;
pub use order_toppings::*;
pub use orders::*;
pub use toppings::*;

use axum::Json;

use crate::errors::AppError;

/// Response type that is either the JSON body or a not-found error.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Wrap a value as a successful JSON response.
pub fn success<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Not-found error in the `<Entity> with ID <id> not found.` form.
pub fn not_found(entity: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{} with ID {} not found.", entity, id))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::db::Store;
    use crate::{create_router, AppState};

    fn router() -> axum::Router {
        create_router(AppState {
            store: Arc::new(Store::seeded()),
            config: Arc::new(Config::default()),
        })
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            not_found("Driver", 12).message(),
            "Driver with ID 12 not found."
        );
    }

    #[tokio::test]
    async fn test_router_not_found_body_is_json_string() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/tuberdrivers/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#""Driver with ID 99 not found.""#);
    }

    #[tokio::test]
    async fn test_router_delete_returns_no_content() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/tubertoppings/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
