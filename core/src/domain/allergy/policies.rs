use crate::domain::{
    allergy::ports::AllergyPolicy,
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::AirCookPolicy},
};

impl AllergyPolicy for AirCookPolicy {
    async fn can_manage_allergies(&self, identity: Identity) -> Result<bool, CoreError> {
        self.is_admin(&identity)
    }
}
