use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::user::entities::{Role, User};

pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub allergies: Option<Vec<String>>,
}

/// A user record about to be created. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub allergies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update of a user record; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub liked_recipes: Option<Vec<String>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim each allergy label and drop blanks and case-insensitive duplicates.
pub fn normalize_allergies(allergies: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(allergies.len());
    for allergy in allergies {
        let allergy = allergy.trim().to_string();
        if allergy.is_empty()
            || normalized
                .iter()
                .any(|a| a.to_lowercase() == allergy.to_lowercase())
        {
            continue;
        }
        normalized.push(allergy);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_allergies() {
        let allergies = vec![
            " Gluten ".to_string(),
            "".to_string(),
            "gluten".to_string(),
            "Lactose".to_string(),
        ];
        assert_eq!(
            normalize_allergies(allergies),
            vec!["Gluten".to_string(), "Lactose".to_string()]
        );
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Chef@AirCook.FR "), "chef@aircook.fr");
    }
}
