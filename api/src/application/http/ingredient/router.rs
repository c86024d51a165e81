use super::handlers::create_ingredient::{__path_create_ingredient, create_ingredient};
use super::handlers::delete_ingredient::{__path_delete_ingredient, delete_ingredient};
use super::handlers::get_ingredient::{__path_get_ingredient, get_ingredient};
use super::handlers::get_ingredients::{__path_get_ingredients, get_ingredients};
use super::handlers::update_ingredient::{__path_update_ingredient, update_ingredient};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    get_ingredient,
    create_ingredient,
    update_ingredient,
    delete_ingredient
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/ingredients"),
            get(get_ingredients).post(create_ingredient),
        )
        .route(
            &format!("{root_path}/ingredients/{{ingredient_id}}"),
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
