use aircook_core::domain::assistant::{entities::ChatReply, ports::AssistantService};
use axum::extract::State;

use crate::application::auth::RequiredIdentity;
use crate::application::http::assistant::validators::ChatValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/chat",
    tag = "assistant",
    summary = "Chat with the chef",
    description = "Sends one message, with optional history, to the culinary assistant. When the answer holds a recipe, `recipeData` carries it parsed.",
    request_body = ChatValidator,
    responses(
        (status = 200, body = ChatReply),
        (status = 500, description = "The language model is unavailable")
    ),
    security(("bearer" = []))
)]
pub async fn chat(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatReply>, ApiError> {
    let reply = state
        .service
        .chat(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}
