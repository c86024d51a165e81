use aircook_core::domain::user::{entities::User, ports::UserService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateProfileValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: User,
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    summary = "Update my profile",
    description = "Updates username, email, password or allergies. A new password is re-hashed.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Invalid payload or email already registered"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let user = state
        .service
        .update_profile(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: user }))
}
