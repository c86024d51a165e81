use aircook_core::domain::assistant::{entities::NutritionReport, ports::AssistantService};
use axum::extract::State;

use crate::application::auth::RequiredIdentity;
use crate::application::http::assistant::validators::AnalyzeNutritionValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/analyze-nutrition",
    tag = "assistant",
    summary = "Analyze nutrition",
    description = "Estimates calories and macronutrients of a stored recipe (`recipeId`, result saved on the recipe) or of a free ingredient list.",
    request_body = AnalyzeNutritionValidator,
    responses(
        (status = 200, body = NutritionReport),
        (status = 400, description = "No ingredients to analyze"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn analyze_nutrition(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeNutritionValidator>,
) -> Result<Response<NutritionReport>, ApiError> {
    let report = state
        .service
        .analyze_nutrition(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
