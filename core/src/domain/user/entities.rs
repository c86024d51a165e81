use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Unknown labels fall back to the least privileged role.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub role: Role,
    pub allergies: Vec<String>,
    pub liked_recipes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn has_liked(&self, recipe_id: &str) -> bool {
        self.liked_recipes.iter().any(|id| id == recipe_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_label() {
        assert_eq!(Role::from_label("admin"), Role::Admin);
        assert_eq!(Role::from_label(" ADMIN "), Role::Admin);
        assert_eq!(Role::from_label("user"), Role::User);
        assert_eq!(Role::from_label("superuser"), Role::User);
        assert_eq!(Role::from_label(""), Role::User);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let now = Utc::now();
        let user = User {
            id: "recUser0000000001".to_string(),
            username: "marie".to_string(),
            email: "marie@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::User,
            allergies: vec!["gluten".to_string()],
            liked_recipes: vec![],
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["likedRecipes"], serde_json::json!([]));
        assert_eq!(json["role"], "user");
    }
}
