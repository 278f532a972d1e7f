use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors related to secrets store operations
#[derive(Debug, thiserror::Error)]
pub enum SecretStoreError {
    /// The list-secrets call failed
    #[error("list_secrets failed: {0}")]
    List(String),

    /// A get-secret-value call failed
    #[error("get_secret_value failed: {0}")]
    Get(String),

    /// Configuration error
    #[error("secret store configuration error: {0}")]
    Config(String),
}

impl IntoResponse for SecretStoreError {
    fn into_response(self) -> Response {
        let code = match &self {
            SecretStoreError::List(_) | SecretStoreError::Get(_) => StatusCode::BAD_GATEWAY,
            SecretStoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "message": self.to_string(),
                "type": "secret_store_error"
            }
        });
        (code, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, SecretStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_bad_gateway() {
        let response = SecretStoreError::List("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = SecretStoreError::Get("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn config_errors_map_to_internal_error() {
        let response = SecretStoreError::Config("bad region".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
