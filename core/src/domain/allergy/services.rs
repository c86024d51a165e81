use tracing::{debug, instrument};

use crate::domain::{
    allergy::{
        entities::{Allergy, AllergyCheck},
        matcher::find_matching_allergies,
        ports::{AllergyPolicy, AllergyRepository, AllergyService},
        value_objects::{AllergyChanges, NewAllergy},
    },
    assistant::ports::LLMClient,
    authentication::{ports::TokenService, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    ingredient::ports::IngredientRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

fn clean_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

impl<RR, UR, IR, AR, H, T, LLM> AllergyService for Service<RR, UR, IR, AR, H, T, LLM>
where
    RR: RecipeRepository,
    UR: UserRepository,
    IR: IngredientRepository,
    AR: AllergyRepository,
    H: HasherRepository,
    T: TokenService,
    LLM: LLMClient,
{
    async fn get_allergies(&self) -> Result<Vec<Allergy>, CoreError> {
        let mut allergies = self.allergy_repository.fetch_allergies().await?;
        allergies.sort_by_key(|a| a.name.to_lowercase());
        Ok(allergies)
    }

    async fn get_allergy(&self, allergy_id: String) -> Result<Allergy, CoreError> {
        self.allergy_repository
            .get_by_id(allergy_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip_all, fields(user_id = %identity.id))]
    async fn create_allergy(
        &self,
        identity: Identity,
        input: NewAllergy,
    ) -> Result<Allergy, CoreError> {
        ensure_policy(
            self.policy.can_manage_allergies(identity).await,
            "insufficient permissions to manage allergies",
        )?;

        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }

        self.allergy_repository
            .create_allergy(NewAllergy {
                name: input.name.trim().to_string(),
                description: input.description,
                keywords: clean_keywords(input.keywords),
            })
            .await
    }

    #[instrument(skip_all, fields(user_id = %identity.id, allergy_id = %allergy_id))]
    async fn update_allergy(
        &self,
        identity: Identity,
        allergy_id: String,
        changes: AllergyChanges,
    ) -> Result<Allergy, CoreError> {
        ensure_policy(
            self.policy.can_manage_allergies(identity).await,
            "insufficient permissions to manage allergies",
        )?;

        let allergy = self
            .allergy_repository
            .get_by_id(allergy_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.allergy_repository
            .update_allergy(
                allergy.id,
                AllergyChanges {
                    keywords: changes.keywords.map(clean_keywords),
                    ..changes
                },
            )
            .await
    }

    #[instrument(skip_all, fields(user_id = %identity.id, allergy_id = %allergy_id))]
    async fn delete_allergy(&self, identity: Identity, allergy_id: String) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_allergies(identity).await,
            "insufficient permissions to manage allergies",
        )?;

        let allergy = self
            .allergy_repository
            .get_by_id(allergy_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.allergy_repository.delete_allergy(allergy.id).await
    }

    #[instrument(skip_all, fields(user_id = %identity.id, recipe_id = %recipe_id))]
    async fn check_recipe_allergies(
        &self,
        identity: Identity,
        recipe_id: String,
    ) -> Result<AllergyCheck, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let user = self
            .user_repository
            .get_by_id(identity.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if user.allergies.is_empty() {
            return Ok(AllergyCheck {
                recipe_id: recipe.id,
                matches: Vec::new(),
            });
        }

        let records = self.allergy_repository.fetch_allergies().await?;
        let matches =
            find_matching_allergies(&user.allergies, &recipe.ingredient_names(), &records);

        debug!(matches = matches.len(), "allergy check done");

        Ok(AllergyCheck {
            recipe_id: recipe.id,
            matches,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        allergy::{ports::AllergyService, value_objects::NewAllergy},
        authentication::value_objects::Identity,
        common::{entities::app_errors::CoreError, fakes::TestContext},
        recipe::entities::RecipeIngredient,
        user::{entities::Role, ports::UserService, value_objects::UpdateProfileInput},
    };

    #[tokio::test]
    async fn test_check_recipe_allergies_uses_profile_and_records() {
        let ctx = TestContext::new();
        let admin = Identity::new("recAdmin000000001", Role::Admin);
        ctx.service
            .create_allergy(
                admin,
                NewAllergy {
                    name: "Kiwi".to_string(),
                    description: String::new(),
                    keywords: vec!["actinidia".to_string(), " ".to_string()],
                },
            )
            .await
            .unwrap();

        let user = ctx.seed_user("marie@example.com").await;
        ctx.service
            .update_profile(
                ctx.identity_for(&user),
                UpdateProfileInput {
                    allergies: Some(vec![
                        "gluten".to_string(),
                        "kiwi".to_string(),
                        "poisson".to_string(),
                    ]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let mut draft = TestContext::draft("Salade exotique");
        draft.ingredients = vec![
            RecipeIngredient::new("Actinidia (kiwi jaune)", "2", ""),
            RecipeIngredient::new("Farine", "100", "g"),
        ];
        let recipe = ctx.seed_recipe_draft(draft).await;

        let check = ctx
            .service
            .check_recipe_allergies(ctx.identity_for(&user), recipe.id.clone())
            .await
            .unwrap();

        assert_eq!(check.recipe_id, recipe.id);
        assert_eq!(check.matches, vec!["gluten".to_string(), "kiwi".to_string()]);
    }

    #[tokio::test]
    async fn test_user_without_allergies_has_no_matches() {
        let ctx = TestContext::new();
        let user = ctx.seed_user("paul@example.com").await;
        let recipe = ctx.seed_recipe("Pain perdu").await;

        let check = ctx
            .service
            .check_recipe_allergies(ctx.identity_for(&user), recipe.id)
            .await
            .unwrap();

        assert!(check.matches.is_empty());
    }

    #[tokio::test]
    async fn test_user_cannot_manage_allergies() {
        let ctx = TestContext::new();

        let result = ctx
            .service
            .delete_allergy(
                Identity::new("recUser0000000001", Role::User),
                "recAllergy0000001".to_string(),
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_allergies_are_listed_by_name() {
        let ctx = TestContext::new();
        let admin = Identity::new("recAdmin000000001", Role::Admin);
        for name in ["Soja", "arachides", "Lactose"] {
            ctx.service
                .create_allergy(
                    admin.clone(),
                    NewAllergy {
                        name: name.to_string(),
                        description: String::new(),
                        keywords: vec![],
                    },
                )
                .await
                .unwrap();
        }

        let names: Vec<String> = ctx
            .service
            .get_allergies()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["arachides", "Lactose", "Soja"]);
    }
}
