use aircook_core::domain::user::{entities::User, ports::UserService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "user",
    summary = "Get my profile",
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let user = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: user }))
}
