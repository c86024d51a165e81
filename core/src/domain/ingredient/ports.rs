use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{GetIngredientsFilter, IngredientChanges, NewIngredient},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: NewIngredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        ingredient_id: String,
        changes: IngredientChanges,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn get_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn create_ingredient(
        &self,
        identity: Identity,
        input: NewIngredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        identity: Identity,
        ingredient_id: String,
        changes: IngredientChanges,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        identity: Identity,
        ingredient_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait IngredientPolicy: Send + Sync {
    fn can_manage_ingredients(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
