use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{
            CreateRecipeInput, GetRecipesFilter, LikeOutcome, NewRecipe, RecipeChanges,
            UpdateRecipeInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn fetch_recipes(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn create_recipe(
        &self,
        recipe: NewRecipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe_id: String,
        changes: RecipeChanges,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        recipe_id: String,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_like(
        &self,
        identity: Identity,
        recipe_id: String,
    ) -> impl Future<Output = Result<LikeOutcome, CoreError>> + Send;
}
