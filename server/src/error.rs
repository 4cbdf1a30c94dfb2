//! Mapping from store and extractor failures to HTTP responses.
//!
//! Every error body is a JSON object with a single `detail` key. A missing
//! todo yields a plain message; anything the caller can fix by changing the
//! request yields a list of `{field, reason}` entries. A store that can no
//! longer allocate ids answers 500 with the error text.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use todo_core::StoreError;
use tracing::{error, warn};

/// Body text of every 404 for an unknown todo id.
pub const NOT_FOUND_DETAIL: &str = "Todo not found";

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request could not be decoded into the handler's input.
    #[error("{field}: {reason}")]
    Rejection {
        status: StatusCode,
        field: &'static str,
        reason: String,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(
                StoreError::IdsExhausted | StoreError::DuplicateId(_) | StoreError::NonPositiveId(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejection { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Store(StoreError::NotFound(todo_id)) => {
                warn!(todo_id, "todo not found");
                json!({ "detail": NOT_FOUND_DETAIL })
            }
            ApiError::Store(StoreError::Validation(err)) => {
                warn!(error = %err, "rejected todo payload");
                let detail: Vec<_> = err
                    .errors()
                    .iter()
                    .map(|e| json!({ "field": e.field, "reason": e.reason }))
                    .collect();
                json!({ "detail": detail })
            }
            ApiError::Store(err) => {
                error!(error = %err, "todo store failure");
                json!({ "detail": err.to_string() })
            }
            ApiError::Rejection { field, reason, .. } => {
                warn!(%status, field, %reason, "rejected request");
                json!({ "detail": [{ "field": field, "reason": reason }] })
            }
        };
        (status, Json(body)).into_response()
    }
}

// Malformed JSON syntax and a missing content type keep the framework's 400
// and 415; a body that parses but does not fit the payload type is a 422.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            field: "body",
            reason: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejection {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            field: "path",
            reason: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejection {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            field: "query",
            reason: rejection.body_text(),
        }
    }
}

/// Failures that stop the server itself.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
