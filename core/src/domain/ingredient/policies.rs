use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::AirCookPolicy},
    ingredient::ports::IngredientPolicy,
};

impl IngredientPolicy for AirCookPolicy {
    async fn can_manage_ingredients(&self, identity: Identity) -> Result<bool, CoreError> {
        self.is_admin(&identity)
    }
}
