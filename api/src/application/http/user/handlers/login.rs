use aircook_core::domain::user::{ports::UserService, value_objects::AuthenticatedUser};
use axum::extract::State;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::LoginValidator;

#[utoipa::path(
    post,
    path = "/login",
    tag = "user",
    summary = "Login",
    request_body = LoginValidator,
    responses(
        (status = 200, body = AuthenticatedUser),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<AuthenticatedUser>, ApiError> {
    let authenticated = state
        .service
        .login(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(authenticated))
}
