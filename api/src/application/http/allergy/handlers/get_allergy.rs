use aircook_core::domain::allergy::{entities::Allergy, ports::AllergyService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergyResponse {
    pub data: Allergy,
}

#[utoipa::path(
    get,
    path = "/{allergy_id}",
    tag = "allergy",
    summary = "Get allergy",
    params(
        ("allergy_id" = String, Path, description = "Airtable record id of the allergy"),
    ),
    responses(
        (status = 200, body = GetAllergyResponse),
        (status = 404, description = "Allergy not found")
    )
)]
pub async fn get_allergy(
    Path(allergy_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetAllergyResponse>, ApiError> {
    let allergy = state
        .service
        .get_allergy(allergy_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergyResponse { data: allergy }))
}
