use tracing::error;

use crate::{
    domain::{
        allergy::{
            entities::Allergy,
            ports::AllergyRepository,
            value_objects::{AllergyChanges, NewAllergy},
        },
        common::{SortOrder, entities::app_errors::CoreError},
    },
    infrastructure::{
        airtable::{
            ALLERGIES_TABLE,
            client::{AirtableClient, ListQuery},
            record::AirtableRecord,
        },
        allergy::mappers::{AllergyFields, AllergyWriteFields},
    },
};

#[derive(Debug, Clone)]
pub struct AirtableAllergyRepository {
    pub client: AirtableClient,
}

impl AirtableAllergyRepository {
    pub fn new(client: AirtableClient) -> Self {
        Self { client }
    }
}

impl AllergyRepository for AirtableAllergyRepository {
    async fn fetch_allergies(&self) -> Result<Vec<Allergy>, CoreError> {
        let records: Vec<AirtableRecord<AllergyFields>> = self
            .client
            .list_records(
                ALLERGIES_TABLE,
                ListQuery {
                    sort: vec![SortOrder::asc("name")],
                    ..Default::default()
                },
            )
            .await?;

        Ok(records.into_iter().map(Allergy::from).collect())
    }

    async fn get_by_id(&self, allergy_id: String) -> Result<Option<Allergy>, CoreError> {
        let record: Option<AirtableRecord<AllergyFields>> = self
            .client
            .get_record(ALLERGIES_TABLE, &allergy_id)
            .await?;

        Ok(record.map(Allergy::from))
    }

    async fn create_allergy(&self, allergy: NewAllergy) -> Result<Allergy, CoreError> {
        let fields = AllergyWriteFields::try_from(allergy)?;

        let record: AirtableRecord<AllergyFields> = self
            .client
            .create_record(ALLERGIES_TABLE, &fields)
            .await
            .inspect_err(|e| error!("Failed to create allergy: {}", e))?;

        Ok(Allergy::from(record))
    }

    async fn update_allergy(
        &self,
        allergy_id: String,
        changes: AllergyChanges,
    ) -> Result<Allergy, CoreError> {
        let fields = AllergyWriteFields::try_from(changes)?;

        let record: AirtableRecord<AllergyFields> = self
            .client
            .update_record(ALLERGIES_TABLE, &allergy_id, &fields)
            .await?;

        Ok(Allergy::from(record))
    }

    async fn delete_allergy(&self, allergy_id: String) -> Result<(), CoreError> {
        self.client
            .delete_record(ALLERGIES_TABLE, &allergy_id)
            .await
    }
}
