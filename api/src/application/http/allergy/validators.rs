use aircook_core::domain::allergy::value_objects::{AllergyChanges, NewAllergy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAllergyValidator {
    #[validate(length(min = 1, message = "le nom est requis"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Substrings looked up in ingredient names, e.g. `blé` for gluten.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl From<CreateAllergyValidator> for NewAllergy {
    fn from(payload: CreateAllergyValidator) -> Self {
        NewAllergy {
            name: payload.name,
            description: payload.description,
            keywords: payload.keywords,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAllergyValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "le nom ne peut pas être vide"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl From<UpdateAllergyValidator> for AllergyChanges {
    fn from(payload: UpdateAllergyValidator) -> Self {
        AllergyChanges {
            name: payload.name,
            description: payload.description,
            keywords: payload.keywords,
        }
    }
}
