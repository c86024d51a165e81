use super::handlers::create_allergy::{__path_create_allergy, create_allergy};
use super::handlers::delete_allergy::{__path_delete_allergy, delete_allergy};
use super::handlers::get_allergies::{__path_get_allergies, get_allergies};
use super::handlers::get_allergy::{__path_get_allergy, get_allergy};
use super::handlers::update_allergy::{__path_update_allergy, update_allergy};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_allergies,
    get_allergy,
    create_allergy,
    update_allergy,
    delete_allergy
))]
pub struct AllergyApiDoc;

pub fn allergy_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/allergies"),
            get(get_allergies).post(create_allergy),
        )
        .route(
            &format!("{root_path}/allergies/{{allergy_id}}"),
            get(get_allergy).put(update_allergy).delete(delete_allergy),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
