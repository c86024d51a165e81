use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::entities::Role;

/// JWT payload. `id` is the Airtable record id of the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub id: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(id: String, role: Role, ttl_hours: i64) -> Self {
        let now = Utc::now();

        Self {
            id,
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
        }
    }
}
