//! Gateway API types: error mapping and the JSON body extractor

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::account::StoreError;

/// Every handler returns this: success payload or a mapped error.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Success helper, mirrors `ApiError::into_err`
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Uniform JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "account 42 not found")]
    pub error: String,
}

/// API failure carrying the HTTP status it maps to.
///
/// Conversion to an HTTP response happens in exactly one place
/// (`IntoResponse` below); handlers only pick the constructor.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Malformed input or invalid identifier
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    /// No row for the requested id
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    /// SQL execution or connectivity failure
    pub fn db_error(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.into(),
        }
    }

    /// Convenience for early returns from handlers
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::not_found(err.to_string()),
            StoreError::Database(e) => {
                tracing::error!("Store failure: {}", e);
                ApiError::db_error(format!("database error: {}", e))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// JSON body extractor that decodes the raw bytes itself.
///
/// A decode failure always becomes a 400 with the serde message in the
/// uniform error body, and a missing Content-Type header does not mask
/// the decode verdict the way the stock `Json` rejection would.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read body: {}", e)))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {}", e)))?;
        Ok(ApiJson(value))
    }
}
