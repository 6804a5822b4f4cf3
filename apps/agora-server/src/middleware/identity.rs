//! Caller identity extractors.
//!
//! Authentication happens upstream; by the time a request reaches this server
//! the gateway has replaced any client-supplied value of [`USER_ID_HEADER`]
//! with the validated numeric user id.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use agora_core::domain::UserId;

use super::error::AppError;

/// Header carrying the authenticated user id.
pub static USER_ID_HEADER: &str = "X-User-Id";

/// Authenticated caller. Rejects the request with 401 when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
}

impl Identity {
    fn from_headers(req: &HttpRequest) -> Option<Self> {
        let value = req.headers().get(USER_ID_HEADER)?.to_str().ok()?;
        match value.trim().parse::<UserId>() {
            Ok(user_id) => Some(Self { user_id }),
            Err(_) => {
                tracing::debug!(header = %value, "Ignoring malformed user id header");
                None
            }
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req).ok_or(AppError::Unauthorized))
    }
}

/// Optional identity extractor - anonymous callers get `None`.
#[derive(Debug, Clone, Copy)]
pub struct OptionalIdentity(pub Option<Identity>);

impl OptionalIdentity {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.map(|identity| identity.user_id)
    }
}

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalIdentity(Identity::from_headers(req))))
    }
}
