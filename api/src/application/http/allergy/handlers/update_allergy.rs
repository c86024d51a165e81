use aircook_core::domain::allergy::{entities::Allergy, ports::AllergyService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::allergy::validators::UpdateAllergyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateAllergyResponse {
    pub data: Allergy,
}

#[utoipa::path(
    put,
    path = "/{allergy_id}",
    tag = "allergy",
    summary = "Update allergy",
    description = "Administrators only.",
    params(
        ("allergy_id" = String, Path, description = "Airtable record id of the allergy"),
    ),
    request_body = UpdateAllergyValidator,
    responses(
        (status = 200, body = UpdateAllergyResponse),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Allergy not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_allergy(
    Path(allergy_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAllergyValidator>,
) -> Result<Response<UpdateAllergyResponse>, ApiError> {
    let allergy = state
        .service
        .update_allergy(identity, allergy_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateAllergyResponse { data: allergy }))
}
