use aircook_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Creates a recipe. The stored author is always `chef`, whatever `authorID` the client sends.",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = CreateRecipeResponse),
        (status = 400, description = "Invalid recipe"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer" = []))
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let (draft, author_id) = payload.into_draft();

    let recipe = state
        .service
        .create_recipe(identity, CreateRecipeInput { draft, author_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
