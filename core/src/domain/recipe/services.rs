use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::domain::{
    allergy::ports::AllergyRepository,
    assistant::ports::LLMClient,
    authentication::{ports::TokenService, value_objects::Identity},
    common::{SortOrder, entities::app_errors::CoreError, ensure_sort_fields, services::Service},
    crypto::ports::HasherRepository,
    ingredient::ports::IngredientRepository,
    recipe::{
        entities::{DEFAULT_AUTHOR_ID, Recipe},
        ports::{RecipeRepository, RecipeService},
        value_objects::{
            CreateRecipeInput, GetRecipesFilter, LikeOutcome, NewRecipe, RECIPE_SORT_FIELDS,
            RecipeChanges, UpdateRecipeInput, validate_changes, validate_draft,
        },
    },
    user::{ports::UserRepository, value_objects::UserChanges},
};

impl<RR, UR, IR, AR, H, T, LLM> RecipeService for Service<RR, UR, IR, AR, H, T, LLM>
where
    RR: RecipeRepository,
    UR: UserRepository,
    IR: IngredientRepository,
    AR: AllergyRepository,
    H: HasherRepository,
    T: TokenService,
    LLM: LLMClient,
{
    async fn get_recipes(&self, mut filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        ensure_sort_fields(&filter.sort, RECIPE_SORT_FIELDS)?;

        if filter.sort.is_empty() {
            filter.sort = vec![SortOrder::desc("createdAt")];
        }

        self.recipe_repository.fetch_recipes(filter).await
    }

    async fn get_recipe(&self, recipe_id: String) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip_all, fields(user_id = %identity.id))]
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        validate_draft(&input.draft)?;

        if let Some(author_id) = input.author_id
            && author_id != DEFAULT_AUTHOR_ID
        {
            warn!(requested_author = %author_id, "ignoring caller supplied author");
        }

        let recipe = self
            .recipe_repository
            .create_recipe(NewRecipe::from_draft(input.draft))
            .await?;

        info!(recipe_id = %recipe.id, "recipe created");

        Ok(recipe)
    }

    #[instrument(skip_all, fields(user_id = %identity.id, recipe_id = %recipe_id))]
    async fn update_recipe(
        &self,
        identity: Identity,
        recipe_id: String,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let mut changes = RecipeChanges::from(input);
        validate_changes(&changes)?;

        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        changes.updated_at = Some(Utc::now());

        self.recipe_repository
            .update_recipe(recipe.id, changes)
            .await
    }

    #[instrument(skip_all, fields(user_id = %identity.id, recipe_id = %recipe_id))]
    async fn delete_recipe(&self, identity: Identity, recipe_id: String) -> Result<(), CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.recipe_repository.delete_recipe(recipe.id).await?;

        info!("recipe deleted");

        Ok(())
    }

    #[instrument(skip_all, fields(user_id = %identity.id, recipe_id = %recipe_id))]
    async fn toggle_like(
        &self,
        identity: Identity,
        recipe_id: String,
    ) -> Result<LikeOutcome, CoreError> {
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

        let mut liked_recipes = user.liked_recipes.clone();
        let (likes, liked) = match liked_recipes.iter().position(|id| id == &recipe.id) {
            Some(index) => {
                liked_recipes.remove(index);
                (recipe.likes.saturating_sub(1), false)
            }
            None => {
                liked_recipes.push(recipe.id.clone());
                (recipe.likes.saturating_add(1), true)
            }
        };

        let updated = self
            .recipe_repository
            .update_recipe(
                recipe.id.clone(),
                RecipeChanges {
                    likes: Some(likes),
                    ..Default::default()
                },
            )
            .await?;

        self.user_repository
            .update_user(
                user.id,
                UserChanges {
                    liked_recipes: Some(liked_recipes),
                    ..Default::default()
                },
            )
            .await?;

        Ok(LikeOutcome {
            recipe_id: updated.id,
            likes: updated.likes,
            liked,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        common::{SortOrder, entities::app_errors::CoreError, fakes::TestContext},
        recipe::{
            entities::{DEFAULT_AUTHOR_ID, Difficulty},
            ports::{RecipeRepository, RecipeService},
            value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
        },
    };

    #[tokio::test]
    async fn test_create_recipe_always_persists_chef_as_author() {
        let ctx = TestContext::new();
        let user = ctx.seed_user("marie@example.com").await;

        let recipe = ctx
            .service
            .create_recipe(
                ctx.identity_for(&user),
                CreateRecipeInput {
                    draft: TestContext::draft("Quiche lorraine"),
                    author_id: Some(user.id.clone()),
                },
            )
            .await
            .unwrap();

        assert_eq!(recipe.author_id, DEFAULT_AUTHOR_ID);
        assert_eq!(recipe.likes, 0);

        let stored = ctx
            .recipes
            .get_by_id(recipe.id.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.author_id, "chef");
    }

    #[tokio::test]
    async fn test_create_recipe_rejects_missing_ingredients() {
        let ctx = TestContext::new();
        let user = ctx.seed_user("marie@example.com").await;
        let mut draft = TestContext::draft("Soupe vide");
        draft.ingredients.clear();

        let result = ctx
            .service
            .create_recipe(
                ctx.identity_for(&user),
                CreateRecipeInput {
                    draft,
                    author_id: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_update_recipe_keeps_author_and_refreshes_timestamp() {
        let ctx = TestContext::new();
        let user = ctx.seed_user("marie@example.com").await;
        let recipe = ctx.seed_recipe("Ratatouille").await;

        let updated = ctx
            .service
            .update_recipe(
                ctx.identity_for(&user),
                recipe.id.clone(),
                UpdateRecipeInput {
                    difficulty: Some(Difficulty::Difficile),
                    servings: Some(6),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.difficulty, Difficulty::Difficile);
        assert_eq!(updated.servings, 6);
        assert_eq!(updated.name, "Ratatouille");
        assert_eq!(updated.author_id, DEFAULT_AUTHOR_ID);
        assert!(updated.updated_at >= recipe.updated_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_recipe_is_not_found() {
        let ctx = TestContext::new();
        let user = ctx.seed_user("marie@example.com").await;

        let update = ctx
            .service
            .update_recipe(
                ctx.identity_for(&user),
                "recMissing0000000".to_string(),
                UpdateRecipeInput::default(),
            )
            .await;
        assert_eq!(update, Err(CoreError::NotFound));

        let delete = ctx
            .service
            .delete_recipe(ctx.identity_for(&user), "recMissing0000000".to_string())
            .await;
        assert_eq!(delete, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_toggle_like_increments_then_decrements() {
        let ctx = TestContext::new();
        let user = ctx.seed_user("marie@example.com").await;
        let recipe = ctx.seed_recipe("Tarte aux pommes").await;

        let liked = ctx
            .service
            .toggle_like(ctx.identity_for(&user), recipe.id.clone())
            .await
            .unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes, 1);
        assert!(ctx.user(&user.id).await.has_liked(&recipe.id));

        let unliked = ctx
            .service
            .toggle_like(ctx.identity_for(&user), recipe.id.clone())
            .await
            .unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes, 0);
        assert!(!ctx.user(&user.id).await.has_liked(&recipe.id));
    }

    #[tokio::test]
    async fn test_get_recipes_rejects_unknown_sort_field() {
        let ctx = TestContext::new();

        let result = ctx
            .service
            .get_recipes(GetRecipesFilter {
                sort: vec![SortOrder::asc("password")],
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_get_recipes_filters_by_category() {
        let ctx = TestContext::new();
        ctx.seed_recipe("Ratatouille").await;
        let mut dessert = TestContext::draft("Clafoutis");
        dessert.category = "Dessert".to_string();
        ctx.seed_recipe_draft(dessert).await;

        let recipes = ctx
            .service
            .get_recipes(GetRecipesFilter {
                category: Some("Dessert".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Clafoutis");
    }
}
