use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{
            entities::User,
            ports::UserRepository,
            value_objects::{NewUser, UserChanges},
        },
    },
    infrastructure::{
        airtable::{
            USERS_TABLE,
            client::{AirtableClient, ListQuery},
            formula,
            record::AirtableRecord,
        },
        user::mappers::{UserFields, UserWriteFields},
    },
};

#[derive(Debug, Clone)]
pub struct AirtableUserRepository {
    pub client: AirtableClient,
}

impl AirtableUserRepository {
    pub fn new(client: AirtableClient) -> Self {
        Self { client }
    }
}

impl UserRepository for AirtableUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, CoreError> {
        let fields = UserWriteFields::try_from(user)?;

        let record: AirtableRecord<UserFields> = self
            .client
            .create_record(USERS_TABLE, &fields)
            .await
            .inspect_err(|e| error!("Failed to create user: {}", e))?;

        Ok(User::from(record))
    }

    async fn get_by_id(&self, user_id: String) -> Result<Option<User>, CoreError> {
        let record: Option<AirtableRecord<UserFields>> =
            self.client.get_record(USERS_TABLE, &user_id).await?;

        Ok(record.map(User::from))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let records: Vec<AirtableRecord<UserFields>> = self
            .client
            .list_records(
                USERS_TABLE,
                ListQuery {
                    filter_by_formula: Some(formula::field_equals_ci("email", &email)),
                    sort: Vec::new(),
                    max_records: Some(1),
                },
            )
            .await?;

        Ok(records.into_iter().next().map(User::from))
    }

    async fn update_user(&self, user_id: String, changes: UserChanges) -> Result<User, CoreError> {
        let fields = UserWriteFields::try_from(changes)?;

        let record: AirtableRecord<UserFields> = self
            .client
            .update_record(USERS_TABLE, &user_id, &fields)
            .await?;

        Ok(User::from(record))
    }
}
