use crate::domain::{
    allergy::ports::AllergyRepository,
    assistant::ports::LLMClient,
    authentication::{
        ports::{AuthService, TokenService},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    ingredient::ports::IngredientRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<RR, UR, IR, AR, H, T, LLM> AuthService for Service<RR, UR, IR, AR, H, T, LLM>
where
    RR: RecipeRepository,
    UR: UserRepository,
    IR: IngredientRepository,
    AR: AllergyRepository,
    H: HasherRepository,
    T: TokenService,
    LLM: LLMClient,
{
    async fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.token_service.verify_token(token)?;

        Ok(Identity::from(claims))
    }
}
