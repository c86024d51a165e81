use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument};

use crate::{
    domain::common::{AirtableConfig, SortOrder, entities::app_errors::CoreError},
    infrastructure::airtable::record::{
        AirtableDeleteResponse, AirtableListResponse, AirtableRecord, AirtableWriteRequest,
    },
};

/// Airtable caps list pages at 100 records.
const PAGE_SIZE: u32 = 100;

/// Record ids look like `recXXXXXXXXXXXXXX`.
pub fn is_record_id(id: &str) -> bool {
    id.len() == 17 && id.starts_with("rec") && id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter_by_formula: Option<String>,
    pub sort: Vec<SortOrder>,
    pub max_records: Option<u32>,
}

impl ListQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("pageSize".to_string(), PAGE_SIZE.to_string())];

        if let Some(formula) = &self.filter_by_formula {
            params.push(("filterByFormula".to_string(), formula.clone()));
        }

        for (index, sort) in self.sort.iter().enumerate() {
            params.push((format!("sort[{index}][field]"), sort.field.clone()));
            params.push((
                format!("sort[{index}][direction]"),
                if sort.descending { "desc" } else { "asc" }.to_string(),
            ));
        }

        if let Some(max_records) = self.max_records {
            params.push(("maxRecords".to_string(), max_records.to_string()));
        }

        params
    }
}

/// Thin typed client over the Airtable REST API of one base.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    client: Client,
    api_url: String,
    base_id: String,
    api_key: String,
}

impl AirtableClient {
    pub fn new(config: AirtableConfig) -> Result<Self, CoreError> {
        let client = Client::builder().build().map_err(|e| {
            error!("Failed to build Airtable HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            base_id: config.base_id,
            api_key: config.api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url,
            self.base_id,
            urlencoding::encode(table)
        )
    }

    fn record_url(&self, table: &str, record_id: &str) -> String {
        format!(
            "{}/{}",
            self.table_url(table),
            urlencoding::encode(record_id)
        )
    }

    /// Send a request; a 404 yields `None`, any other failure is an
    /// external service error.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> Result<Option<T>, CoreError> {
        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!("Airtable {} request failed: {}", action, e);
                CoreError::ExternalServiceError(format!("Airtable {action} failed"))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Airtable {} error: {} - {}", action, status, body);
            return Err(CoreError::ExternalServiceError(format!(
                "Airtable {action} returned {status}"
            )));
        }

        response.json::<T>().await.map(Some).map_err(|e| {
            error!("Failed to parse Airtable {} response: {}", action, e);
            CoreError::ExternalServiceError(format!("invalid Airtable {action} response"))
        })
    }

    /// List records, following the `offset` cursor until the table or
    /// `max_records` is exhausted.
    #[instrument(skip(self, query), fields(formula = ?query.filter_by_formula))]
    pub async fn list_records<F: DeserializeOwned>(
        &self,
        table: &str,
        query: ListQuery,
    ) -> Result<Vec<AirtableRecord<F>>, CoreError> {
        let params = query.to_params();
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self.client.get(self.table_url(table)).query(&params);
            if let Some(offset) = &cursor {
                request = request.query(&[("offset", offset)]);
            }

            let page: AirtableListResponse<F> = self
                .execute(request, "list")
                .await?
                .ok_or_else(|| {
                    error!("Airtable table {} not found", table);
                    CoreError::ExternalServiceError(format!("unknown Airtable table {table}"))
                })?;

            records.extend(page.records);

            let reached_max = query
                .max_records
                .is_some_and(|max| records.len() >= max as usize);
            match page.offset {
                Some(offset) if !reached_max => cursor = Some(offset),
                _ => break,
            }
        }

        debug!(count = records.len(), "records listed");

        Ok(records)
    }

    pub async fn get_record<F: DeserializeOwned>(
        &self,
        table: &str,
        record_id: &str,
    ) -> Result<Option<AirtableRecord<F>>, CoreError> {
        if !is_record_id(record_id) {
            return Ok(None);
        }

        self.execute(self.client.get(self.record_url(table, record_id)), "get")
            .await
    }

    pub async fn create_record<W, F>(
        &self,
        table: &str,
        fields: &W,
    ) -> Result<AirtableRecord<F>, CoreError>
    where
        W: Serialize,
        F: DeserializeOwned,
    {
        let request = self
            .client
            .post(self.table_url(table))
            .json(&AirtableWriteRequest {
                fields,
                typecast: true,
            });

        self.execute(request, "create").await?.ok_or_else(|| {
            error!("Airtable table {} not found", table);
            CoreError::ExternalServiceError(format!("unknown Airtable table {table}"))
        })
    }

    /// Partial update; only the serialized fields are touched.
    pub async fn update_record<W, F>(
        &self,
        table: &str,
        record_id: &str,
        fields: &W,
    ) -> Result<AirtableRecord<F>, CoreError>
    where
        W: Serialize,
        F: DeserializeOwned,
    {
        if !is_record_id(record_id) {
            return Err(CoreError::NotFound);
        }

        let request = self
            .client
            .patch(self.record_url(table, record_id))
            .json(&AirtableWriteRequest {
                fields,
                typecast: true,
            });

        self.execute(request, "update")
            .await?
            .ok_or(CoreError::NotFound)
    }

    pub async fn delete_record(&self, table: &str, record_id: &str) -> Result<(), CoreError> {
        if !is_record_id(record_id) {
            return Err(CoreError::NotFound);
        }

        let response: AirtableDeleteResponse = self
            .execute(self.client.delete(self.record_url(table, record_id)), "delete")
            .await?
            .ok_or(CoreError::NotFound)?;

        if !response.deleted {
            error!("Airtable refused to delete record {}", record_id);
            return Err(CoreError::ExternalServiceError(
                "Airtable delete was not applied".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_record_id() {
        assert!(is_record_id("recA1b2C3d4E5f6G7"));
        assert!(!is_record_id("recA1b2"));
        assert!(!is_record_id("tblA1b2C3d4E5f6G7"));
        assert!(!is_record_id("rec/../../A1b2C3d"));
    }

    #[test]
    fn test_list_query_params() {
        let query = ListQuery {
            filter_by_formula: Some("{category} = 'Dessert'".to_string()),
            sort: vec![SortOrder::desc("createdAt"), SortOrder::asc("name")],
            max_records: Some(40),
        };

        assert_eq!(
            query.to_params(),
            vec![
                ("pageSize".to_string(), "100".to_string()),
                (
                    "filterByFormula".to_string(),
                    "{category} = 'Dessert'".to_string()
                ),
                ("sort[0][field]".to_string(), "createdAt".to_string()),
                ("sort[0][direction]".to_string(), "desc".to_string()),
                ("sort[1][field]".to_string(), "name".to_string()),
                ("sort[1][direction]".to_string(), "asc".to_string()),
                ("maxRecords".to_string(), "40".to_string()),
            ]
        );
    }

    #[test]
    fn test_urls_are_encoded() {
        let client = AirtableClient::new(AirtableConfig {
            api_url: "https://api.airtable.com/v0/".to_string(),
            api_key: "key".to_string(),
            base_id: "appBase".to_string(),
        })
        .unwrap();

        assert_eq!(
            client.record_url("Recipes", "recA1b2C3d4E5f6G7"),
            "https://api.airtable.com/v0/appBase/Recipes/recA1b2C3d4E5f6G7"
        );
        assert_eq!(
            client.table_url("My Table"),
            "https://api.airtable.com/v0/appBase/My%20Table"
        );
    }
}
