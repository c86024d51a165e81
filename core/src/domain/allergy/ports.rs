use std::future::Future;

use crate::domain::{
    allergy::{
        entities::{Allergy, AllergyCheck},
        value_objects::{AllergyChanges, NewAllergy},
    },
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AllergyRepository: Send + Sync {
    fn fetch_allergies(&self) -> impl Future<Output = Result<Vec<Allergy>, CoreError>> + Send;

    fn get_by_id(
        &self,
        allergy_id: String,
    ) -> impl Future<Output = Result<Option<Allergy>, CoreError>> + Send;

    fn create_allergy(
        &self,
        allergy: NewAllergy,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn update_allergy(
        &self,
        allergy_id: String,
        changes: AllergyChanges,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn delete_allergy(
        &self,
        allergy_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AllergyService: Send + Sync {
    fn get_allergies(&self) -> impl Future<Output = Result<Vec<Allergy>, CoreError>> + Send;

    fn get_allergy(
        &self,
        allergy_id: String,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn create_allergy(
        &self,
        identity: Identity,
        input: NewAllergy,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn update_allergy(
        &self,
        identity: Identity,
        allergy_id: String,
        changes: AllergyChanges,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn delete_allergy(
        &self,
        identity: Identity,
        allergy_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn check_recipe_allergies(
        &self,
        identity: Identity,
        recipe_id: String,
    ) -> impl Future<Output = Result<AllergyCheck, CoreError>> + Send;
}

pub trait AllergyPolicy: Send + Sync {
    fn can_manage_allergies(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
