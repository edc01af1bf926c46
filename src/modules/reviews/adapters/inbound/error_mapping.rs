use crate::modules::reviews::errors::ApplicationError;
use crate::modules::reviews::use_cases::assign_slot::decision::DecideError;
use async_graphql::ErrorExtensions;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApplicationError::Rejected(DecideError::IncompleteInput)
            | ApplicationError::Rejected(DecideError::InvalidEmail)
            | ApplicationError::RecipientMissing => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Rejected(_) | ApplicationError::SubmissionInFlight => {
                StatusCode::CONFLICT
            }
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Forbidden => StatusCode::FORBIDDEN,
            ApplicationError::StoreUnavailable(_) | ApplicationError::MisconfiguredChannel => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApplicationError::ChannelError(_) => StatusCode::BAD_GATEWAY,
            ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Payload errors raised before a use case runs.
pub fn unprocessable(message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: "InvalidPayload",
        message: message.into(),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

pub fn gql_error(err: ApplicationError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code.to_string()))
}
