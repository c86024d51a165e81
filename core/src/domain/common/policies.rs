use crate::domain::{authentication::value_objects::Identity, common::entities::app_errors::CoreError};

/// Turn a policy decision into a `Forbidden` error when it is negative.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

/// Role based policy. Catalog tables (ingredients, allergies) are only
/// writable by administrators; everything else needs a signed-in user.
#[derive(Debug, Clone, Default)]
pub struct AirCookPolicy;

impl AirCookPolicy {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn is_admin(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.is_admin())
    }
}
