use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::login::{__path_login, login};
use super::handlers::register::{__path_register, register};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register, login, get_profile, update_profile))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/users/register"), post(register))
        .route(&format!("{root_path}/users/login"), post(login))
        .route(
            &format!("{root_path}/users/profile"),
            get(get_profile).put(update_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
