use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::{
    allergy::ports::AllergyRepository,
    assistant::ports::LLMClient,
    authentication::{ports::TokenService, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    ingredient::ports::IngredientRepository,
    recipe::ports::RecipeRepository,
    user::{
        entities::{Role, User},
        ports::{UserRepository, UserService},
        value_objects::{
            AuthenticatedUser, LoginInput, NewUser, RegisterUserInput, UpdateProfileInput,
            UserChanges, normalize_allergies, normalize_email,
        },
    },
};

impl<RR, UR, IR, AR, H, T, LLM> UserService for Service<RR, UR, IR, AR, H, T, LLM>
where
    RR: RecipeRepository,
    UR: UserRepository,
    IR: IngredientRepository,
    AR: AllergyRepository,
    H: HasherRepository,
    T: TokenService,
    LLM: LLMClient,
{
    #[instrument(skip_all)]
    async fn register(&self, input: RegisterUserInput) -> Result<AuthenticatedUser, CoreError> {
        let email = normalize_email(&input.email);

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(NewUser {
                username: input.username.trim().to_string(),
                email,
                password_hash,
                role: Role::User,
                allergies: Vec::new(),
                created_at: Utc::now(),
            })
            .await?;

        info!(user_id = %user.id, "user registered");

        let token = self
            .token_service
            .issue_token(user.id.clone(), user.role)?;

        Ok(AuthenticatedUser { token, user })
    }

    #[instrument(skip_all)]
    async fn login(&self, input: LoginInput) -> Result<AuthenticatedUser, CoreError> {
        let user = self
            .user_repository
            .get_by_email(normalize_email(&input.email))
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let is_valid = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !is_valid {
            return Err(CoreError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue_token(user.id.clone(), user.role)?;

        Ok(AuthenticatedUser { token, user })
    }

    async fn get_profile(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip_all, fields(user_id = %identity.id))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        let user = self
            .user_repository
            .get_by_id(identity.id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let email = match input.email {
            Some(email) => {
                let email = normalize_email(&email);
                if email != user.email
                    && self
                        .user_repository
                        .get_by_email(email.clone())
                        .await?
                        .is_some()
                {
                    return Err(CoreError::AlreadyExists);
                }
                Some(email)
            }
            None => None,
        };

        let password_hash = match input.password {
            Some(password) => Some(self.hasher_repository.hash_password(password).await?),
            None => None,
        };

        self.user_repository
            .update_user(
                user.id,
                UserChanges {
                    username: input.username.map(|u| u.trim().to_string()),
                    email,
                    password_hash,
                    allergies: input.allergies.map(normalize_allergies),
                    liked_recipes: None,
                    updated_at: Some(Utc::now()),
                },
            )
            .await
    }
}
