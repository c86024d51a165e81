use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
#[cfg(test)]
pub mod fakes;
pub mod policies;
pub mod services;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Clone, Debug)]
pub struct AirCookConfig {
    pub airtable: AirtableConfig,
    pub llm: LLMConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct AirtableConfig {
    pub api_url: String,
    pub api_key: String,
    pub base_id: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub groq_api_key: String,
    pub groq_model: String,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

/// Sort on one stored column, e.g. `-createdAt` parses as descending `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortOrder {
    pub field: String,
    pub descending: bool,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

/// Clamp a requested page window to the allowed bounds.
pub fn clamp_window(offset: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    (
        offset.unwrap_or(0),
        limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
    )
}

/// Records to request from the store so that `offset..offset + limit` is
/// covered; saturates instead of wrapping on huge offsets.
pub fn window_end(offset: u32, limit: u32) -> u32 {
    offset.saturating_add(limit)
}

/// Reject sort fields that are not part of the given whitelist.
pub fn ensure_sort_fields(sort: &[SortOrder], allowed: &[&str]) -> Result<(), CoreError> {
    match sort.iter().find(|s| !allowed.contains(&s.field.as_str())) {
        Some(unknown) => Err(CoreError::Invalid(format!(
            "unknown sort field '{}'",
            unknown.field
        ))),
        None => Ok(()),
    }
}
