use crate::application::http::{
    allergy::router::AllergyApiDoc, assistant::router::AssistantApiDoc, health::HealthApiDoc,
    ingredient::router::IngredientApiDoc, recipe::router::RecipeApiDoc, user::router::UserApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AirCook API",
        description = "Recipes, ingredients and allergies stored in Airtable, with a French cooking assistant."
    ),
    modifiers(&BearerSecurity),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/allergies", api = AllergyApiDoc),
        (path = "/ai", api = AssistantApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
