use benchdb::{ImportError, StoreError, validation::ValidationError};
use rocket::{
    Request,
    http::Status,
    response::{self, Responder},
    serde::json::Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure of an API call, rendered as `{"error": "..."}` with its status.
#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub message: String,
}

impl ApiError {
    pub fn new(
        status: Status,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Status::NotFound, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(error: ImportError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::UnknownBenchmark(_) => {
                Self::bad_request(error.to_string())
            },
            StoreError::Io {
                ..
            }
            | StoreError::Snapshot {
                ..
            } => {
                tracing::error!(%error, "benchmark store failure");
                Self::new(
                    Status::InternalServerError,
                    "Failed to persist benchmark data",
                )
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(
        self,
        request: &'r Request<'_>,
    ) -> response::Result<'static> {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).respond_to(request)
    }
}
