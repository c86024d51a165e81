use tracing::{error, instrument};

use crate::{
    domain::{
        common::{clamp_window, entities::app_errors::CoreError, window_end},
        ingredient::{
            entities::Ingredient,
            ports::IngredientRepository,
            value_objects::{GetIngredientsFilter, IngredientChanges, NewIngredient},
        },
    },
    infrastructure::{
        airtable::{
            INGREDIENTS_TABLE,
            client::{AirtableClient, ListQuery},
            formula,
            record::AirtableRecord,
        },
        ingredient::mappers::{IngredientFields, IngredientWriteFields},
    },
};

#[derive(Debug, Clone)]
pub struct AirtableIngredientRepository {
    pub client: AirtableClient,
}

impl AirtableIngredientRepository {
    pub fn new(client: AirtableClient) -> Self {
        Self { client }
    }
}

pub(crate) fn ingredients_formula(filter: &GetIngredientsFilter) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        clauses.push(formula::field_contains_ci("name", search));
    }

    // Allergens are stored as JSON text, match the quoted element.
    if let Some(allergen) = filter.allergen.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        clauses.push(formula::field_contains_ci(
            "allergens",
            &format!("\"{allergen}\""),
        ));
    }

    formula::and(clauses)
}

impl IngredientRepository for AirtableIngredientRepository {
    #[instrument(skip_all)]
    async fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let (offset, limit) = clamp_window(filter.offset, filter.limit);

        let records: Vec<AirtableRecord<IngredientFields>> = self
            .client
            .list_records(
                INGREDIENTS_TABLE,
                ListQuery {
                    filter_by_formula: ingredients_formula(&filter),
                    sort: filter.sort,
                    max_records: Some(window_end(offset, limit)),
                },
            )
            .await?;

        Ok(records
            .into_iter()
            .skip(offset as usize)
            .map(Ingredient::from)
            .collect())
    }

    async fn get_by_id(&self, ingredient_id: String) -> Result<Option<Ingredient>, CoreError> {
        let record: Option<AirtableRecord<IngredientFields>> = self
            .client
            .get_record(INGREDIENTS_TABLE, &ingredient_id)
            .await?;

        Ok(record.map(Ingredient::from))
    }

    async fn create_ingredient(&self, ingredient: NewIngredient) -> Result<Ingredient, CoreError> {
        let fields = IngredientWriteFields::try_from(ingredient)?;

        let record: AirtableRecord<IngredientFields> = self
            .client
            .create_record(INGREDIENTS_TABLE, &fields)
            .await
            .inspect_err(|e| error!("Failed to create ingredient: {}", e))?;

        Ok(Ingredient::from(record))
    }

    async fn update_ingredient(
        &self,
        ingredient_id: String,
        changes: IngredientChanges,
    ) -> Result<Ingredient, CoreError> {
        let fields = IngredientWriteFields::try_from(changes)?;

        let record: AirtableRecord<IngredientFields> = self
            .client
            .update_record(INGREDIENTS_TABLE, &ingredient_id, &fields)
            .await?;

        Ok(Ingredient::from(record))
    }

    async fn delete_ingredient(&self, ingredient_id: String) -> Result<(), CoreError> {
        self.client
            .delete_record(INGREDIENTS_TABLE, &ingredient_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_formula() {
        let filter = GetIngredientsFilter {
            search: Some("farine".to_string()),
            allergen: Some("gluten".to_string()),
            ..Default::default()
        };

        assert_eq!(
            ingredients_formula(&filter).unwrap(),
            "AND(FIND(LOWER('farine'), LOWER({name})), FIND(LOWER('\"gluten\"'), LOWER({allergens})))"
        );
    }
}
