use aircook_core::domain::user::value_objects::{
    LoginInput, RegisterUserInput, UpdateProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 3, message = "le nom d'utilisateur doit contenir au moins 3 caractères"))]
    pub username: String,

    #[validate(email(message = "email invalide"))]
    pub email: String,

    #[validate(length(min = 6, message = "le mot de passe doit contenir au moins 6 caractères"))]
    pub password: String,
}

impl From<RegisterValidator> for RegisterUserInput {
    fn from(payload: RegisterValidator) -> Self {
        RegisterUserInput {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "email invalide"))]
    pub email: String,

    #[validate(length(min = 1, message = "le mot de passe est requis"))]
    pub password: String,
}

impl From<LoginValidator> for LoginInput {
    fn from(payload: LoginValidator) -> Self {
        LoginInput {
            email: payload.email,
            password: payload.password,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(min = 3, message = "le nom d'utilisateur doit contenir au moins 3 caractères"))]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(email(message = "email invalide"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(min = 6, message = "le mot de passe doit contenir au moins 6 caractères"))]
    pub password: Option<String>,

    #[serde(default)]
    pub allergies: Option<Vec<String>>,
}

impl From<UpdateProfileValidator> for UpdateProfileInput {
    fn from(payload: UpdateProfileValidator) -> Self {
        UpdateProfileInput {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            allergies: payload.allergies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rules() {
        let payload = RegisterValidator {
            username: "jo".to_string(),
            email: "not-an-email".to_string(),
            password: "12345".to_string(),
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));

        let valid = RegisterValidator {
            username: "marie".to_string(),
            email: "marie@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_profile_update_only_checks_present_fields() {
        let payload = UpdateProfileValidator {
            allergies: Some(vec!["gluten".to_string()]),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }
}
