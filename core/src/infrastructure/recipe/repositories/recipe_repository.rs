use tracing::{error, instrument};

use crate::{
    domain::{
        common::{clamp_window, entities::app_errors::CoreError, window_end},
        recipe::{
            entities::Recipe,
            ports::RecipeRepository,
            value_objects::{GetRecipesFilter, NewRecipe, RecipeChanges},
        },
    },
    infrastructure::{
        airtable::{
            RECIPES_TABLE,
            client::{AirtableClient, ListQuery},
            formula,
            record::AirtableRecord,
        },
        recipe::mappers::{RecipeFields, RecipeWriteFields},
    },
};

#[derive(Debug, Clone)]
pub struct AirtableRecipeRepository {
    pub client: AirtableClient,
}

impl AirtableRecipeRepository {
    pub fn new(client: AirtableClient) -> Self {
        Self { client }
    }
}

pub(crate) fn recipes_formula(filter: &GetRecipesFilter) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(category) = &filter.category {
        clauses.push(formula::field_equals("category", category));
    }

    if let Some(difficulty) = filter.difficulty {
        clauses.push(formula::field_equals("difficulty", difficulty.as_str()));
    }

    if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        clauses.push(formula::field_contains_ci("name", search));
    }

    match filter.is_public {
        Some(true) => clauses.push(formula::field_is_true("isPublic")),
        Some(false) => clauses.push(formula::field_is_false("isPublic")),
        None => {}
    }

    formula::and(clauses)
}

impl RecipeRepository for AirtableRecipeRepository {
    #[instrument(skip_all)]
    async fn fetch_recipes(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        let (offset, limit) = clamp_window(filter.offset, filter.limit);

        let records: Vec<AirtableRecord<RecipeFields>> = self
            .client
            .list_records(
                RECIPES_TABLE,
                ListQuery {
                    filter_by_formula: recipes_formula(&filter),
                    sort: filter.sort,
                    max_records: Some(window_end(offset, limit)),
                },
            )
            .await?;

        Ok(records
            .into_iter()
            .skip(offset as usize)
            .map(Recipe::from)
            .collect())
    }

    async fn get_by_id(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        let record: Option<AirtableRecord<RecipeFields>> =
            self.client.get_record(RECIPES_TABLE, &recipe_id).await?;

        Ok(record.map(Recipe::from))
    }

    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, CoreError> {
        let fields = RecipeWriteFields::try_from(recipe)?;

        let record: AirtableRecord<RecipeFields> = self
            .client
            .create_record(RECIPES_TABLE, &fields)
            .await
            .inspect_err(|e| error!("Failed to create recipe: {}", e))?;

        Ok(Recipe::from(record))
    }

    async fn update_recipe(
        &self,
        recipe_id: String,
        changes: RecipeChanges,
    ) -> Result<Recipe, CoreError> {
        let fields = RecipeWriteFields::try_from(changes)?;

        let record: AirtableRecord<RecipeFields> = self
            .client
            .update_record(RECIPES_TABLE, &recipe_id, &fields)
            .await?;

        Ok(Recipe::from(record))
    }

    async fn delete_recipe(&self, recipe_id: String) -> Result<(), CoreError> {
        self.client.delete_record(RECIPES_TABLE, &recipe_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::AirtableConfig, recipe::entities::Difficulty};

    #[test]
    fn test_recipes_formula() {
        assert_eq!(recipes_formula(&GetRecipesFilter::default()), None);

        let filter = GetRecipesFilter {
            category: Some("Dessert".to_string()),
            difficulty: Some(Difficulty::Facile),
            search: Some(" tarte ".to_string()),
            is_public: Some(true),
            ..Default::default()
        };

        assert_eq!(
            recipes_formula(&filter).unwrap(),
            "AND({category} = 'Dessert', {difficulty} = 'Facile', \
             FIND(LOWER('tarte'), LOWER({name})), {isPublic} = TRUE())"
        );
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = GetRecipesFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(recipes_formula(&filter), None);
    }

    #[tokio::test]
    async fn test_huge_offset_reaches_the_store_without_overflow() {
        let repository = AirtableRecipeRepository::new(
            AirtableClient::new(AirtableConfig {
                api_url: "http://127.0.0.1:9".to_string(),
                api_key: "key".to_string(),
                base_id: "appTest".to_string(),
            })
            .unwrap(),
        );

        let result = repository
            .fetch_recipes(GetRecipesFilter {
                offset: Some(u32::MAX - 5),
                limit: Some(20),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
