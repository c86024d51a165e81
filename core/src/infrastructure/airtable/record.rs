use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct AirtableRecord<F> {
    pub id: String,
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<DateTime<Utc>>,
    pub fields: F,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirtableListResponse<F> {
    pub records: Vec<AirtableRecord<F>>,
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AirtableWriteRequest<'a, W> {
    pub fields: &'a W,
    pub typecast: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirtableDeleteResponse {
    pub deleted: bool,
}

/// Decode a column holding JSON text. Missing, blank or malformed values
/// decode to the default and are logged, the record is still returned.
pub fn decode_json_field<T>(record_id: &str, column: &str, raw: Option<Value>) -> T
where
    T: DeserializeOwned + Default,
{
    let decoded = match raw {
        None | Some(Value::Null) => return T::default(),
        Some(Value::String(text)) if text.trim().is_empty() => return T::default(),
        Some(Value::String(text)) => serde_json::from_str(&text),
        // Linked or multi-select columns arrive as JSON already.
        Some(value) => serde_json::from_value(value),
    };

    decoded.unwrap_or_else(|e| {
        warn!(record_id, column, error = %e, "malformed JSON column, using default");
        T::default()
    })
}

pub fn encode_json_field<T: Serialize>(column: &str, value: &T) -> Result<String, CoreError> {
    serde_json::to_string(value).map_err(|e| {
        error!(column, "failed to encode JSON column: {}", e);
        CoreError::InternalServerError
    })
}

/// Airtable numbers are floats; counts and durations are stored as whole
/// non-negative values.
pub fn decode_count(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn decode_datetime(raw: Option<&str>, fallback: Option<DateTime<Utc>>) -> DateTime<Utc> {
    raw.and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or(fallback)
        .unwrap_or_default()
}
