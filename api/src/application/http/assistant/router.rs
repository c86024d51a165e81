use super::handlers::analyze_nutrition::{__path_analyze_nutrition, analyze_nutrition};
use super::handlers::chat::{__path_chat, chat};
use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(chat, generate_recipe, analyze_nutrition))]
pub struct AssistantApiDoc;

pub fn assistant_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/ai/chat"), post(chat))
        .route(
            &format!("{root_path}/ai/generate-recipe"),
            post(generate_recipe),
        )
        .route(
            &format!("{root_path}/ai/analyze-nutrition"),
            post(analyze_nutrition),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
