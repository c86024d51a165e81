use super::handlers::create_recipe::{__path_create_recipe, create_recipe};
use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recipe_allergies::{__path_get_recipe_allergies, get_recipe_allergies};
use super::handlers::get_recipes::{__path_get_recipes, get_recipes};
use super::handlers::toggle_like::{__path_toggle_like, toggle_like};
use super::handlers::update_recipe::{__path_update_recipe, update_recipe};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    get_recipe,
    create_recipe,
    update_recipe,
    delete_recipe,
    toggle_like,
    get_recipe_allergies
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recipes"),
            get(get_recipes).post(create_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}"),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}/like"),
            post(toggle_like),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}/allergies"),
            get(get_recipe_allergies),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
