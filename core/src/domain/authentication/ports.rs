use std::future::Future;

use crate::domain::{
    authentication::{entities::JwtClaim, value_objects::Identity},
    common::entities::app_errors::CoreError,
    user::entities::Role,
};

/// Issues and verifies signed session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    fn issue_token(&self, user_id: String, role: Role) -> Result<String, CoreError>;

    fn verify_token(&self, token: String) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
