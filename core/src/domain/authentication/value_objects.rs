use crate::domain::{authentication::entities::JwtClaim, user::entities::Role};

/// Caller identity extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        Self {
            id: claims.id,
            role: claims.role,
        }
    }
}
