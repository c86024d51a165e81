use aircook_core::domain::assistant::{entities::GeneratedRecipe, ports::AssistantService};
use axum::extract::State;

use crate::application::auth::RequiredIdentity;
use crate::application::http::assistant::validators::GenerateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "assistant",
    summary = "Generate a recipe",
    description = "Asks the assistant for a recipe built from the given ingredients, avoiding the caller's allergies. With `save`, a parsed recipe is stored under the `chef` author.",
    request_body = GenerateRecipeValidator,
    responses(
        (status = 200, body = GeneratedRecipe),
        (status = 500, description = "The language model is unavailable")
    ),
    security(("bearer" = []))
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GeneratedRecipe>, ApiError> {
    let generated = state
        .service
        .generate_recipe(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(generated))
}
