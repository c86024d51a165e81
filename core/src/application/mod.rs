use tracing::info;

use crate::{
    domain::common::{
        AirCookConfig, entities::app_errors::CoreError, policies::AirCookPolicy, services::Service,
    },
    infrastructure::{
        airtable::client::AirtableClient,
        allergy::repositories::allergy_repository::AirtableAllergyRepository,
        crypto::argon2_hasher::Argon2Hasher,
        ingredient::repositories::ingredient_repository::AirtableIngredientRepository,
        jwt::jwt_token_service::JwtTokenService,
        llm::groq_client::GroqLLMClient,
        recipe::repositories::recipe_repository::AirtableRecipeRepository,
        user::repositories::user_repository::AirtableUserRepository,
    },
};

pub type AirCookService = Service<
    AirtableRecipeRepository,
    AirtableUserRepository,
    AirtableIngredientRepository,
    AirtableAllergyRepository,
    Argon2Hasher,
    JwtTokenService,
    GroqLLMClient,
>;

/// Wire the Airtable, Groq, Argon2 and JWT adapters into one service.
/// All repositories share a single pooled HTTP client.
pub fn create_service(config: AirCookConfig) -> Result<AirCookService, CoreError> {
    let airtable = AirtableClient::new(config.airtable)?;
    let llm_client = GroqLLMClient::new(config.llm.groq_api_key, config.llm.groq_model.clone())?;

    info!(model = %config.llm.groq_model, "AirCook service ready");

    Ok(Service::new(
        AirtableRecipeRepository::new(airtable.clone()),
        AirtableUserRepository::new(airtable.clone()),
        AirtableIngredientRepository::new(airtable.clone()),
        AirtableAllergyRepository::new(airtable),
        Argon2Hasher::new(),
        JwtTokenService::new(config.auth.jwt_secret, config.auth.jwt_expiration_hours),
        llm_client,
        AirCookPolicy::new(),
    ))
}
