use tracing::instrument;

use crate::domain::{
    allergy::ports::AllergyRepository,
    assistant::ports::LLMClient,
    authentication::{ports::TokenService, value_objects::Identity},
    common::{
        SortOrder, entities::app_errors::CoreError, ensure_sort_fields, policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientPolicy, IngredientRepository, IngredientService},
        value_objects::{
            GetIngredientsFilter, INGREDIENT_SORT_FIELDS, IngredientChanges, NewIngredient,
        },
    },
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

fn validate_nutrients(values: &[Option<f64>]) -> Result<(), CoreError> {
    if values.iter().flatten().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(CoreError::Invalid(
            "nutrient values must be non-negative numbers".to_string(),
        ));
    }
    Ok(())
}

impl<RR, UR, IR, AR, H, T, LLM> IngredientService for Service<RR, UR, IR, AR, H, T, LLM>
where
    RR: RecipeRepository,
    UR: UserRepository,
    IR: IngredientRepository,
    AR: AllergyRepository,
    H: HasherRepository,
    T: TokenService,
    LLM: LLMClient,
{
    async fn get_ingredients(
        &self,
        mut filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        ensure_sort_fields(&filter.sort, INGREDIENT_SORT_FIELDS)?;

        if filter.sort.is_empty() {
            filter.sort = vec![SortOrder::asc("name")];
        }

        self.ingredient_repository.fetch_ingredients(filter).await
    }

    async fn get_ingredient(&self, ingredient_id: String) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip_all, fields(user_id = %identity.id))]
    async fn create_ingredient(
        &self,
        identity: Identity,
        input: NewIngredient,
    ) -> Result<Ingredient, CoreError> {
        ensure_policy(
            self.policy.can_manage_ingredients(identity).await,
            "insufficient permissions to manage ingredients",
        )?;

        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }
        validate_nutrients(&[
            Some(input.calories),
            Some(input.proteins),
            Some(input.carbs),
            Some(input.fats),
        ])?;

        self.ingredient_repository.create_ingredient(input).await
    }

    #[instrument(skip_all, fields(user_id = %identity.id, ingredient_id = %ingredient_id))]
    async fn update_ingredient(
        &self,
        identity: Identity,
        ingredient_id: String,
        changes: IngredientChanges,
    ) -> Result<Ingredient, CoreError> {
        ensure_policy(
            self.policy.can_manage_ingredients(identity).await,
            "insufficient permissions to manage ingredients",
        )?;

        validate_nutrients(&[
            changes.calories,
            changes.proteins,
            changes.carbs,
            changes.fats,
        ])?;

        let ingredient = self
            .ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.ingredient_repository
            .update_ingredient(ingredient.id, changes)
            .await
    }

    #[instrument(skip_all, fields(user_id = %identity.id, ingredient_id = %ingredient_id))]
    async fn delete_ingredient(
        &self,
        identity: Identity,
        ingredient_id: String,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_ingredients(identity).await,
            "insufficient permissions to manage ingredients",
        )?;

        let ingredient = self
            .ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.ingredient_repository
            .delete_ingredient(ingredient.id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::future;

    use crate::domain::{
        authentication::value_objects::Identity,
        common::{
            entities::app_errors::CoreError,
            fakes::{MockPorts, TestContext},
        },
        ingredient::{
            entities::Ingredient,
            ports::IngredientService,
            value_objects::{GetIngredientsFilter, IngredientChanges, NewIngredient},
        },
        user::entities::Role,
    };

    fn flour() -> NewIngredient {
        NewIngredient {
            name: "Farine de blé".to_string(),
            calories: 364.0,
            proteins: 10.0,
            carbs: 76.0,
            fats: 1.0,
            vitamins: vec!["B1".to_string()],
            minerals: vec!["Fer".to_string()],
            allergens: vec!["gluten".to_string()],
            unit: "100g".to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_cannot_create_ingredient() {
        let ctx = TestContext::new();

        let result = ctx
            .service
            .create_ingredient(Identity::new("recUser0000000001", Role::User), flour())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_forbidden_caller_never_reaches_the_store() {
        let mut ports = MockPorts::default();
        ports.ingredients.expect_create_ingredient().never();
        ports.ingredients.expect_get_by_id().never();
        ports.ingredients.expect_delete_ingredient().never();
        let service = ports.into_service();
        let user = Identity::new("recUser0000000001", Role::User);

        let created = service.create_ingredient(user.clone(), flour()).await;
        let deleted = service
            .delete_ingredient(user, "recFlour000000001".to_string())
            .await;

        assert!(matches!(created, Err(CoreError::Forbidden(_))));
        assert!(matches!(deleted, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_admin_delete_of_missing_ingredient_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .ingredients
            .expect_get_by_id()
            .withf(|id| id == "recFlour000000001")
            .times(1)
            .returning(|_| Box::pin(future::ready(Ok::<Option<Ingredient>, CoreError>(None))));
        ports.ingredients.expect_delete_ingredient().never();
        let service = ports.into_service();

        let result = service
            .delete_ingredient(
                Identity::new("recAdmin000000001", Role::Admin),
                "recFlour000000001".to_string(),
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_admin_creates_and_updates_ingredient() {
        let ctx = TestContext::new();
        let admin = Identity::new("recAdmin000000001", Role::Admin);

        let created = ctx
            .service
            .create_ingredient(admin.clone(), flour())
            .await
            .unwrap();
        assert_eq!(created.allergens, vec!["gluten".to_string()]);

        let updated = ctx
            .service
            .update_ingredient(
                admin,
                created.id.clone(),
                IngredientChanges {
                    calories: Some(350.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.calories, 350.0);
        assert_eq!(updated.name, "Farine de blé");
    }

    #[tokio::test]
    async fn test_negative_nutrients_are_rejected() {
        let ctx = TestContext::new();
        let mut ingredient = flour();
        ingredient.fats = -1.0;

        let result = ctx
            .service
            .create_ingredient(Identity::new("recAdmin000000001", Role::Admin), ingredient)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_search_ingredients_by_name() {
        let ctx = TestContext::new();
        let admin = Identity::new("recAdmin000000001", Role::Admin);
        ctx.service
            .create_ingredient(admin.clone(), flour())
            .await
            .unwrap();
        let mut butter = flour();
        butter.name = "Beurre doux".to_string();
        ctx.service.create_ingredient(admin, butter).await.unwrap();

        let found = ctx
            .service
            .get_ingredients(GetIngredientsFilter {
                search: Some("beurre".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Beurre doux");
    }
}
