//! JSON extraction with API-shaped rejection bodies

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::{ApiErrorDetail, ApiErrorResponse, ApiErrorType};

/// Drop-in replacement for `axum::Json` whose extraction failures come
/// back in the same JSON envelope every other error uses, instead of
/// axum's plain-text rejections.
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

/// Rejection produced when a request body cannot be read as `T`
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl JsonRejection {
    fn new(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection::*;

        let message = match &rejection {
            JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
            JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            MissingJsonContentType(_) => {
                "Missing Content-Type header. Expected 'application/json'.".to_string()
            }
            BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
            _ => "Invalid JSON request".to_string(),
        };

        Self {
            status: rejection.status(),
            message,
        }
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.message,
                error_type: ApiErrorType::InvalidRequestError,
                param: None,
                code: Some("json_parse_error".to_string()),
            },
        };

        (self.status, AxumJson(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection::new(rejection)),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
