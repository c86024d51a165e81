use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenService},
    common::entities::app_errors::CoreError,
    user::entities::Role,
};

/// HS256 session tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl JwtTokenService {
    pub fn new(secret: String, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue_token(&self, user_id: String, role: Role) -> Result<String, CoreError> {
        let claims = JwtClaim::new(user_id, role, self.ttl_hours);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify_token(&self, token: String) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(&token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::ExpiredToken,
                _ => {
                    debug!("Rejected token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
