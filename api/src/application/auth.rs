use aircook_core::domain::{
    authentication::{ports::AuthService, value_objects::Identity},
    common::entities::app_errors::CoreError,
};
use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Why a bearer token was rejected, kept so that `RequiredIdentity` can
/// report it instead of a generic 401.
#[derive(Debug, Clone)]
pub struct AuthFailure(pub CoreError);

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    let token = bearer.token().trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Optional auth middleware: a valid Bearer token sets the `Identity`,
/// anything else lets the request through anonymously.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Some(token) = extract_token_from_bearer(&mut parts).await {
        match state.service.authorize_request(token).await {
            Ok(identity) => {
                parts.extensions.insert(identity);
            }
            Err(e) => {
                debug!("Bearer token rejected: {}", e);
                parts.extensions.insert(AuthFailure(e));
            }
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Extractor for routes that need a signed-in caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        match parts.extensions.get::<AuthFailure>() {
            Some(AuthFailure(error)) => Err(ApiError::from(error.clone())),
            None => Err(ApiError::Unauthorized(
                "Authentification requise".to_string(),
            )),
        }
    }
}
