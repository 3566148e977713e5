//! Axum extractor for the session-supplied user identity

use crate::app_state::AppState;
use crate::controllers::error::ControllerError;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Header the session layer uses to hand the signed-in user downstream.
pub const SESSION_USER_HEADER: &str = "x-session-user";

/// Identity of the signed-in user.
///
/// The value is trusted as supplied; nothing here checks that the user
/// actually exists. A request without one cannot operate on anything,
/// which surfaces as the usual redirect to the root.
pub struct SessionUser(pub Uuid);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ControllerError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(SESSION_USER_HEADER) else {
                return Err(ControllerError::session("no signed-in user on the request"));
            };

            let user_id = header_value
                .to_str()
                .ok()
                .and_then(|value| Uuid::parse_str(value).ok())
                .ok_or_else(|| {
                    ControllerError::session(format!(
                        "unreadable {SESSION_USER_HEADER} header: {header_value:?}"
                    ))
                })?;

            log::debug!("Using user ID from session: {}", user_id);
            Ok(SessionUser(user_id))
        }
    }
}
