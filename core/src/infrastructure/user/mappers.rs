use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{
            entities::{Role, User},
            value_objects::{NewUser, UserChanges},
        },
    },
    infrastructure::airtable::record::{
        AirtableRecord, decode_datetime, decode_json_field, encode_json_field, format_timestamp,
    },
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFields {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub allergies: Option<Value>,
    pub liked_recipes: Option<Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWriteFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_recipes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<AirtableRecord<UserFields>> for User {
    fn from(record: AirtableRecord<UserFields>) -> Self {
        let fields = record.fields;
        let created_at = decode_datetime(fields.created_at.as_deref(), record.created_time);

        User {
            allergies: decode_json_field(&record.id, "allergies", fields.allergies),
            liked_recipes: decode_json_field(&record.id, "likedRecipes", fields.liked_recipes),
            id: record.id,
            username: fields.username.unwrap_or_default(),
            email: fields.email.unwrap_or_default(),
            password_hash: fields.password.unwrap_or_default(),
            role: fields
                .role
                .as_deref()
                .map(Role::from_label)
                .unwrap_or_default(),
            created_at,
            updated_at: decode_datetime(fields.updated_at.as_deref(), Some(created_at)),
        }
    }
}

impl TryFrom<NewUser> for UserWriteFields {
    type Error = CoreError;

    fn try_from(user: NewUser) -> Result<Self, Self::Error> {
        let timestamp = format_timestamp(user.created_at);

        Ok(Self {
            username: Some(user.username),
            email: Some(user.email),
            password: Some(user.password_hash),
            role: Some(user.role.as_str().to_string()),
            allergies: Some(encode_json_field("allergies", &user.allergies)?),
            liked_recipes: Some(encode_json_field("likedRecipes", &Vec::<String>::new())?),
            created_at: Some(timestamp.clone()),
            updated_at: Some(timestamp),
        })
    }
}

impl TryFrom<UserChanges> for UserWriteFields {
    type Error = CoreError;

    fn try_from(changes: UserChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            username: changes.username,
            email: changes.email,
            password: changes.password_hash,
            role: None,
            allergies: changes
                .allergies
                .map(|a| encode_json_field("allergies", &a))
                .transpose()?,
            liked_recipes: changes
                .liked_recipes
                .map(|l| encode_json_field("likedRecipes", &l))
                .transpose()?,
            created_at: None,
            updated_at: changes.updated_at.map(format_timestamp),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_user_record_decodes_role_and_lists() {
        let record: AirtableRecord<UserFields> = serde_json::from_value(json!({
            "id": "recUser0000000001",
            "createdTime": "2024-03-01T12:00:00.000Z",
            "fields": {
                "username": "marie",
                "email": "marie@example.com",
                "password": "$argon2id$v=19$hash",
                "role": "admin",
                "allergies": "[\"gluten\"]",
                "likedRecipes": "not json"
            }
        }))
        .unwrap();

        let user = User::from(record);

        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.password_hash, "$argon2id$v=19$hash");
        assert_eq!(user.allergies, vec!["gluten"]);
        assert!(user.liked_recipes.is_empty());
    }

    #[test]
    fn test_missing_role_is_user() {
        let record: AirtableRecord<UserFields> = serde_json::from_value(json!({
            "id": "recUser0000000002",
            "fields": {}
        }))
        .unwrap();

        assert_eq!(User::from(record).role, Role::User);
    }

    #[test]
    fn test_new_user_fields() {
        let fields = UserWriteFields::try_from(NewUser {
            username: "paul".to_string(),
            email: "paul@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: Role::User,
            allergies: vec![],
            created_at: Utc::now(),
        })
        .unwrap();

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["password"], "$argon2id$hash");
        assert_eq!(json["role"], "user");
        assert_eq!(json["allergies"], "[]");
        assert_eq!(json["likedRecipes"], "[]");
    }
}
