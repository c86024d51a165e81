use aircook_core::domain::user::{ports::UserService, value_objects::AuthenticatedUser};
use axum::extract::State;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RegisterValidator;

#[utoipa::path(
    post,
    path = "/register",
    tag = "user",
    summary = "Register",
    description = "Creates a `user` account and returns a session token. The email must not be in use.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = AuthenticatedUser),
        (status = 400, description = "Invalid payload or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<AuthenticatedUser>, ApiError> {
    let authenticated = state
        .service
        .register(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(authenticated))
}
