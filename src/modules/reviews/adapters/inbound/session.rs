// Session extraction for inbound HTTP requests.
//
// - Role: `x-admin-password` matching the configured password makes the caller admin. No
//   header means reviewer. A wrong password is refused outright.
// - Year: `?year=`, falling back to the configured default year.

use crate::modules::reviews::errors::ApplicationError;
use crate::modules::reviews::adapters::inbound::error_mapping::unprocessable;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub admin_password: String,
    pub default_year: i32,
}

#[derive(Deserialize)]
struct SessionQuery {
    year: Option<i32>,
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let settings = &state.session;
        let Query(query) = Query::<SessionQuery>::try_from_uri(&parts.uri)
            .map_err(|_| unprocessable("year must be an integer"))?;
        let year = query.year.unwrap_or(settings.default_year);

        match parts.headers.get(ADMIN_PASSWORD_HEADER) {
            None => Ok(SessionContext::reviewer(year)),
            Some(value) => {
                let given = value.to_str().unwrap_or_default();
                if !settings.admin_password.is_empty() && given == settings.admin_password {
                    Ok(SessionContext::admin(year))
                } else {
                    tracing::warn!("admin password rejected");
                    Err(ApplicationError::Forbidden.into_response())
                }
            }
        }
    }
}
