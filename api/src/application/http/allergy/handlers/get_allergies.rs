use aircook_core::domain::allergy::{entities::Allergy, ports::AllergyService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergiesResponse {
    pub data: Vec<Allergy>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergy",
    summary = "Get allergies",
    description = "Lists the allergy catalog sorted by name.",
    responses(
        (status = 200, body = GetAllergiesResponse)
    )
)]
pub async fn get_allergies(
    State(state): State<AppState>,
) -> Result<Response<GetAllergiesResponse>, ApiError> {
    let allergies = state
        .service
        .get_allergies()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergiesResponse { data: allergies }))
}
