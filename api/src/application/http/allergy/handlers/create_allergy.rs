use aircook_core::domain::allergy::{entities::Allergy, ports::AllergyService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::allergy::validators::CreateAllergyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateAllergyResponse {
    pub data: Allergy,
}

#[utoipa::path(
    post,
    path = "",
    tag = "allergy",
    summary = "Create allergy",
    description = "Administrators only.",
    request_body = CreateAllergyValidator,
    responses(
        (status = 201, body = CreateAllergyResponse),
        (status = 403, description = "Caller is not an administrator")
    ),
    security(("bearer" = []))
)]
pub async fn create_allergy(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateAllergyValidator>,
) -> Result<Response<CreateAllergyResponse>, ApiError> {
    let allergy = state
        .service
        .create_allergy(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateAllergyResponse { data: allergy }))
}
