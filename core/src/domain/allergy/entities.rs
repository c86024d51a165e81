use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Allergy {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Substrings looked up in ingredient names.
    pub keywords: Vec<String>,
}

/// Result of checking one recipe against the caller's allergies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllergyCheck {
    pub recipe_id: String,
    pub matches: Vec<String>,
}
