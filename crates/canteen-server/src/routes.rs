//! HTTP 處理器

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use canteen_catalog::{MenuBrowser, OrderListing, OrderSort, OrderSubmission};
use canteen_core::{CanteenError, MenuFilter, OrderId};
use canteen_optimizer::OptimizeOutcome;
use serde::Deserialize;
use serde_json::Value;

use crate::dto::{HealthResponse, MenuItemDto, OrderDto, PlaceOrderResponse};
use crate::{ApiError, AppState};

/// 解析請求內容；不是合法 JSON 時視為沒有資料
fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn list_menu(State(state): State<AppState>) -> Json<Vec<MenuItemDto>> {
    let catalog = state.catalog.read().await;
    Json(
        MenuBrowser::filter(&*catalog, &MenuFilter::default())
            .iter()
            .map(MenuItemDto::from)
            .collect(),
    )
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let catalog = state.catalog.read().await;
    Json(MenuBrowser::categories(&*catalog))
}

pub async fn list_featured(State(state): State<AppState>) -> Json<Vec<MenuItemDto>> {
    let catalog = state.catalog.read().await;
    Json(
        MenuBrowser::featured(&*catalog)
            .iter()
            .map(MenuItemDto::from)
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub struct MenuFilterQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub vegetarian: Option<String>,
}

impl From<MenuFilterQuery> for MenuFilter {
    fn from(query: MenuFilterQuery) -> Self {
        MenuFilter {
            category: query.category,
            location: query.location,
            vegetarian_only: query.vegetarian.as_deref() == Some("true"),
        }
    }
}

pub async fn filter_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuFilterQuery>,
) -> Json<Vec<MenuItemDto>> {
    let filter = MenuFilter::from(query);
    let catalog = state.catalog.read().await;
    Json(
        MenuBrowser::filter(&*catalog, &filter)
            .iter()
            .map(MenuItemDto::from)
            .collect(),
    )
}

pub async fn submit_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlaceOrderResponse>, ApiError> {
    let submission = OrderSubmission::from_json(&parse_body(&body))?;

    let mut catalog = state.catalog.write().await;
    let placed = submission.place(&mut *catalog)?;

    Ok(Json(PlaceOrderResponse::from(&placed)))
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Json<Vec<OrderDto>> {
    let sort = OrderSort::from_params(query.sort_by.as_deref(), query.direction.as_deref());
    let catalog = state.catalog.read().await;
    Json(
        OrderListing::list(&*catalog, sort)
            .iter()
            .map(OrderDto::from)
            .collect(),
    )
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<OrderDto>, ApiError> {
    let catalog = state.catalog.read().await;
    OrderListing::detail(&*catalog, order_id)
        .map(|detail| Json(OrderDto::from(&detail)))
        .ok_or_else(|| ApiError(CanteenError::NotFound("Order not found".to_string())))
}

/// 產能最佳化
///
/// 在讀鎖內取得訂單摘要快照，釋放鎖後於阻塞執行緒上跑 DP。
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn optimize_orders(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = parse_body(&body);

    let job = {
        let catalog = state.catalog.read().await;
        state.optimizer.prepare(&*catalog, &payload)
    };

    let result = match job {
        Ok(job) => {
            let service = state.optimizer.clone();
            tokio::task::spawn_blocking(move || service.execute(&job))
                .await
                .unwrap_or_else(|e| Err(CanteenError::internal(e.to_string())))
        }
        Err(error) => Err(error),
    };

    let outcome = OptimizeOutcome::from_result(result);
    let status = if outcome.is_success() {
        StatusCode::OK
    } else if outcome.is_internal_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(outcome)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use canteen_catalog::{seed_menu, InMemoryCatalog};
    use canteen_core::OptimizerConfig;
    use canteen_optimizer::OptimizationService;
    use serde_json::json;
    use tower::ServiceExt;

    fn router() -> Router {
        let mut catalog = InMemoryCatalog::new();
        seed_menu(&mut catalog);
        let state = AppState::new(catalog, OptimizationService::new(OptimizerConfig::default()));
        build_router(state)
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn place(router: &Router, items: Value, total: impl Into<Value>) -> OrderId {
        let total: Value = total.into();
        let (status, body) = send(
            router,
            "POST",
            "/submit-order",
            Some(json!({"customer_name": "Nila", "items": items, "total": total})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["order_id"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&router(), "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_menu_filter() {
        let router = router();

        let (_, all) = send(&router, "GET", "/api/menu", None).await;
        assert_eq!(all.as_array().unwrap().len(), 11);

        let (status, veg_chinese) = send(
            &router,
            "GET",
            "/api/menu/filter?category=Chinese&vegetarian=true",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = veg_chinese
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Veg Fried Rice", "Veg Chowmein"]);
    }

    #[tokio::test]
    async fn test_submit_and_fetch_order() {
        let router = router();
        let order_id = place(&router, json!([{"id": 1, "quantity": 2}]), 80).await;

        let (status, order) = send(&router, "GET", &format!("/api/orders/{order_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(order["customer"]["name"], "Nila");
        assert_eq!(order["items"][0]["quantity"], 2);
        assert_eq!(order["items"][0]["menu_item"]["name"], "Masala Dosa");
        assert_eq!(order["total_price"], 80.0);
        assert_eq!(order["status"], "new");

        let (status, missing) = send(&router, "GET", "/api/orders/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(missing["message"], "Order not found");
    }

    #[tokio::test]
    async fn test_submit_invalid_items() {
        let (status, body) = send(
            &router(),
            "POST",
            "/submit-order",
            Some(json!({"items": {"id": 1}})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"status": "error", "message": "Invalid items format"}));
    }

    #[tokio::test]
    async fn test_optimize_orders() {
        let router = router();
        // 件數 10 / 20 / 30，總額 60 / 100 / 120
        let first = place(&router, json!([{"id": 11, "quantity": 10}]), 60).await;
        let second = place(&router, json!([{"id": 7, "quantity": 20}]), 100).await;
        let third = place(&router, json!([{"id": 11, "quantity": 30}]), 120).await;

        let (status, body) = send(
            &router,
            "POST",
            "/api/optimize-order",
            Some(json!({"order_ids": [first, second, third], "capacity": 50})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_value"], 220.0);
        assert_eq!(body["total_weight"], 50);
        assert_eq!(body["capacity_utilization"], 100.0);
        let ids: Vec<_> = body["optimized_orders"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![third, second]);
        assert_eq!(body["optimized_orders"][0]["customer"], "Nila");
        assert_eq!(body["optimized_orders"][0]["items_count"], 30);
    }

    #[tokio::test]
    async fn test_optimize_rejects_invalid_input() {
        let router = router();

        let cases = [
            (Some(json!({"order_ids": [], "capacity": 10})), "No valid orders selected"),
            (Some(json!({"order_ids": [1], "capacity": -5})), "capacity must be a positive number"),
            (Some(json!({"order_ids": 3, "capacity": 10})), "order_ids must be an array"),
            (None, "No data provided"),
        ];

        for (payload, message) in cases {
            let (status, body) = send(&router, "POST", "/api/optimize-order", payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"success": false, "error": message}));
        }
    }

    #[tokio::test]
    async fn test_optimize_value_overflow_is_internal_failure() {
        let router = router();
        let max = "79228162514264337593543950335";
        let first = place(&router, json!([{"id": 11, "quantity": 1}]), max).await;
        let second = place(&router, json!([{"id": 11, "quantity": 1}]), max).await;

        let (status, body) = send(
            &router,
            "POST",
            "/api/optimize-order",
            Some(json!({"order_ids": [first, second], "capacity": 10})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "error": "Failed to run optimization"}));
    }

    #[tokio::test]
    async fn test_optimize_accepts_integral_float_ids() {
        let router = router();
        let order_id = place(&router, json!([{"id": 11, "quantity": 2}]), 30).await;

        let (status, body) = send(
            &router,
            "POST",
            "/api/optimize-order",
            Some(json!({"order_ids": [order_id as f64], "capacity": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimized_orders"][0]["id"], order_id);
    }
}
