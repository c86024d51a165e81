use aircook_core::domain::allergy::ports::AllergyService;
use axum::extract::{Path, State};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{allergy_id}",
    tag = "allergy",
    summary = "Delete allergy",
    description = "Administrators only.",
    params(
        ("allergy_id" = String, Path, description = "Airtable record id of the allergy"),
    ),
    responses(
        (status = 204, description = "Allergy deleted"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Allergy not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_allergy(
    Path(allergy_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_allergy(identity, allergy_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
