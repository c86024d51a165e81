use std::future::Future;

use crate::domain::{
    assistant::{
        entities::{ChatMessage, ChatReply, GeneratedRecipe, NutritionReport},
        value_objects::{AnalyzeNutritionInput, ChatInput, GenerateRecipeInput},
    },
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

/// Chat-completion backend.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AssistantService: Send + Sync {
    fn chat(
        &self,
        identity: Identity,
        input: ChatInput,
    ) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn analyze_nutrition(
        &self,
        identity: Identity,
        input: AnalyzeNutritionInput,
    ) -> impl Future<Output = Result<NutritionReport, CoreError>> + Send;
}
