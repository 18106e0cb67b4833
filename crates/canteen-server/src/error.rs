//! API 錯誤回應

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use canteen_core::CanteenError;
use serde_json::json;

/// 一般端點的錯誤，輸出 `{ "status": "error", "message": ... }`
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CanteenError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            CanteenError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CanteenError::NotFound(_) => StatusCode::NOT_FOUND,
            CanteenError::InternalFailure(_) | CanteenError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("請求處理失敗: {}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "status": "error", "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CanteenError::invalid_input("Invalid order items"), StatusCode::BAD_REQUEST)]
    #[case(CanteenError::NotFound("Order not found".into()), StatusCode::NOT_FOUND)]
    #[case(CanteenError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_status_mapping(#[case] error: CanteenError, #[case] expected: StatusCode) {
        assert_eq!(ApiError::from(error).status_code(), expected);
    }
}
