//! In-memory adapters used by the service tests.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use chrono::Utc;

use crate::{
    domain::{
        allergy::{
            entities::Allergy,
            ports::{AllergyRepository, MockAllergyRepository},
            value_objects::{AllergyChanges, NewAllergy},
        },
        assistant::{
            entities::ChatMessage,
            ports::{LLMClient, MockLLMClient},
        },
        authentication::{ports::MockTokenService, value_objects::Identity},
        common::{
            SortOrder, clamp_window, entities::app_errors::CoreError, policies::AirCookPolicy,
            services::Service,
        },
        crypto::ports::MockHasherRepository,
        ingredient::{
            entities::Ingredient,
            ports::{IngredientRepository, MockIngredientRepository},
            value_objects::{GetIngredientsFilter, IngredientChanges, NewIngredient},
        },
        recipe::{
            entities::{Difficulty, Recipe, RecipeDraft, RecipeIngredient},
            ports::{MockRecipeRepository, RecipeRepository},
            value_objects::{GetRecipesFilter, NewRecipe, RecipeChanges},
        },
        user::{
            entities::{Role, User},
            ports::{MockUserRepository, UserRepository},
            value_objects::{NewUser, UserChanges},
        },
    },
    infrastructure::{crypto::argon2_hasher::Argon2Hasher, jwt::jwt_token_service::JwtTokenService},
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn record_id() -> String {
    format!("rec{:014}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn page<T>(items: Vec<T>, offset: Option<u32>, limit: Option<u32>) -> Vec<T> {
    let (offset, limit) = clamp_window(offset, limit);
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

fn compare_recipes(a: &Recipe, b: &Recipe, sort: &SortOrder) -> std::cmp::Ordering {
    let ordering = match sort.field.as_str() {
        "name" => a.name.cmp(&b.name),
        "likes" => a.likes.cmp(&b.likes),
        "updatedAt" => a.updated_at.cmp(&b.updated_at),
        "servings" => a.servings.cmp(&b.servings),
        _ => a.created_at.cmp(&b.created_at),
    };
    if sort.descending {
        ordering.reverse()
    } else {
        ordering
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<Mutex<Vec<Recipe>>>,
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn fetch_recipes(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.category.as_ref().is_none_or(|c| &r.category == c))
            .filter(|r| filter.difficulty.is_none_or(|d| r.difficulty == d))
            .filter(|r| filter.is_public.is_none_or(|p| r.is_public == p))
            .filter(|r| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|s| contains_ci(&r.name, s))
            })
            .cloned()
            .collect();

        for sort in filter.sort.iter().rev() {
            recipes.sort_by(|a, b| compare_recipes(a, b, sort));
        }

        Ok(page(recipes, filter.offset, filter.limit))
    }

    async fn get_by_id(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned())
    }

    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, CoreError> {
        let draft = recipe.draft;
        let created = Recipe {
            id: record_id(),
            name: draft.name,
            description: draft.description,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            servings: draft.servings,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            difficulty: draft.difficulty,
            category: draft.category,
            image_url: draft.image_url,
            is_public: draft.is_public,
            author_id: recipe.author_id,
            created_at: recipe.created_at,
            updated_at: recipe.created_at,
            likes: recipe.likes,
            nutritional_analysis: None,
        };
        self.recipes.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_recipe(
        &self,
        recipe_id: String,
        changes: RecipeChanges,
    ) -> Result<Recipe, CoreError> {
        let mut recipes = self.recipes.lock().unwrap();
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = changes.name {
            recipe.name = name;
        }
        if let Some(description) = changes.description {
            recipe.description = description;
        }
        if let Some(ingredients) = changes.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = changes.instructions {
            recipe.instructions = instructions;
        }
        if let Some(servings) = changes.servings {
            recipe.servings = servings;
        }
        if let Some(prep_time) = changes.prep_time {
            recipe.prep_time = prep_time;
        }
        if let Some(cook_time) = changes.cook_time {
            recipe.cook_time = cook_time;
        }
        if let Some(difficulty) = changes.difficulty {
            recipe.difficulty = difficulty;
        }
        if let Some(category) = changes.category {
            recipe.category = category;
        }
        if let Some(image_url) = changes.image_url {
            recipe.image_url = Some(image_url);
        }
        if let Some(is_public) = changes.is_public {
            recipe.is_public = is_public;
        }
        if let Some(likes) = changes.likes {
            recipe.likes = likes;
        }
        if let Some(analysis) = changes.nutritional_analysis {
            recipe.nutritional_analysis = Some(analysis);
        }
        if let Some(updated_at) = changes.updated_at {
            recipe.updated_at = updated_at;
        }

        Ok(recipe.clone())
    }

    async fn delete_recipe(&self, recipe_id: String) -> Result<(), CoreError> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);
        if recipes.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, CoreError> {
        let created = User {
            id: record_id(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            allergies: user.allergies,
            liked_recipes: Vec::new(),
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        self.users.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, user_id: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(&email))
            .cloned())
    }

    async fn update_user(&self, user_id: String, changes: UserChanges) -> Result<User, CoreError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(CoreError::NotFound)?;

        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(allergies) = changes.allergies {
            user.allergies = allergies;
        }
        if let Some(liked_recipes) = changes.liked_recipes {
            user.liked_recipes = liked_recipes;
        }
        if let Some(updated_at) = changes.updated_at {
            user.updated_at = updated_at;
        }

        Ok(user.clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryIngredientRepository {
    ingredients: Arc<Mutex<Vec<Ingredient>>>,
}

impl IngredientRepository for InMemoryIngredientRepository {
    async fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut ingredients: Vec<Ingredient> = self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|s| contains_ci(&i.name, s))
            })
            .filter(|i| {
                filter
                    .allergen
                    .as_ref()
                    .is_none_or(|a| i.allergens.iter().any(|x| x.eq_ignore_ascii_case(a)))
            })
            .cloned()
            .collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(page(ingredients, filter.offset, filter.limit))
    }

    async fn get_by_id(&self, ingredient_id: String) -> Result<Option<Ingredient>, CoreError> {
        Ok(self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == ingredient_id)
            .cloned())
    }

    async fn create_ingredient(&self, ingredient: NewIngredient) -> Result<Ingredient, CoreError> {
        let created = Ingredient {
            id: record_id(),
            name: ingredient.name,
            calories: ingredient.calories,
            proteins: ingredient.proteins,
            carbs: ingredient.carbs,
            fats: ingredient.fats,
            vitamins: ingredient.vitamins,
            minerals: ingredient.minerals,
            allergens: ingredient.allergens,
            unit: ingredient.unit,
        };
        self.ingredients.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_ingredient(
        &self,
        ingredient_id: String,
        changes: IngredientChanges,
    ) -> Result<Ingredient, CoreError> {
        let mut ingredients = self.ingredients.lock().unwrap();
        let ingredient = ingredients
            .iter_mut()
            .find(|i| i.id == ingredient_id)
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = changes.name {
            ingredient.name = name;
        }
        if let Some(calories) = changes.calories {
            ingredient.calories = calories;
        }
        if let Some(proteins) = changes.proteins {
            ingredient.proteins = proteins;
        }
        if let Some(carbs) = changes.carbs {
            ingredient.carbs = carbs;
        }
        if let Some(fats) = changes.fats {
            ingredient.fats = fats;
        }
        if let Some(vitamins) = changes.vitamins {
            ingredient.vitamins = vitamins;
        }
        if let Some(minerals) = changes.minerals {
            ingredient.minerals = minerals;
        }
        if let Some(allergens) = changes.allergens {
            ingredient.allergens = allergens;
        }
        if let Some(unit) = changes.unit {
            ingredient.unit = unit;
        }

        Ok(ingredient.clone())
    }

    async fn delete_ingredient(&self, ingredient_id: String) -> Result<(), CoreError> {
        self.ingredients
            .lock()
            .unwrap()
            .retain(|i| i.id != ingredient_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAllergyRepository {
    allergies: Arc<Mutex<Vec<Allergy>>>,
}

impl AllergyRepository for InMemoryAllergyRepository {
    async fn fetch_allergies(&self) -> Result<Vec<Allergy>, CoreError> {
        Ok(self.allergies.lock().unwrap().clone())
    }

    async fn get_by_id(&self, allergy_id: String) -> Result<Option<Allergy>, CoreError> {
        Ok(self
            .allergies
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == allergy_id)
            .cloned())
    }

    async fn create_allergy(&self, allergy: NewAllergy) -> Result<Allergy, CoreError> {
        let created = Allergy {
            id: record_id(),
            name: allergy.name,
            description: allergy.description,
            keywords: allergy.keywords,
        };
        self.allergies.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_allergy(
        &self,
        allergy_id: String,
        changes: AllergyChanges,
    ) -> Result<Allergy, CoreError> {
        let mut allergies = self.allergies.lock().unwrap();
        let allergy = allergies
            .iter_mut()
            .find(|a| a.id == allergy_id)
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = changes.name {
            allergy.name = name;
        }
        if let Some(description) = changes.description {
            allergy.description = description;
        }
        if let Some(keywords) = changes.keywords {
            allergy.keywords = keywords;
        }

        Ok(allergy.clone())
    }

    async fn delete_allergy(&self, allergy_id: String) -> Result<(), CoreError> {
        self.allergies
            .lock()
            .unwrap()
            .retain(|a| a.id != allergy_id);
        Ok(())
    }
}

/// Replays queued answers and records the messages it was sent.
/// An empty queue behaves like an unreachable provider.
#[derive(Clone, Default)]
pub struct ScriptedLLMClient {
    answers: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl ScriptedLLMClient {
    pub fn push_answer(&self, answer: &str) {
        self.answers.lock().unwrap().push_back(answer.to_string());
    }

    pub fn last_request(&self) -> Vec<ChatMessage> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        self.requests.lock().unwrap().push(messages);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CoreError::ExternalServiceError("no scripted answer".to_string()))
    }
}

pub type TestService = Service<
    InMemoryRecipeRepository,
    InMemoryUserRepository,
    InMemoryIngredientRepository,
    InMemoryAllergyRepository,
    Argon2Hasher,
    JwtTokenService,
    ScriptedLLMClient,
>;

pub struct TestContext {
    pub service: TestService,
    pub recipes: InMemoryRecipeRepository,
    pub users: InMemoryUserRepository,
    pub tokens: JwtTokenService,
    pub llm: ScriptedLLMClient,
}

impl TestContext {
    pub fn new() -> Self {
        let recipes = InMemoryRecipeRepository::default();
        let users = InMemoryUserRepository::default();
        let tokens = JwtTokenService::new("test-secret".to_string(), 24);
        let llm = ScriptedLLMClient::default();

        let service = Service::new(
            recipes.clone(),
            users.clone(),
            InMemoryIngredientRepository::default(),
            InMemoryAllergyRepository::default(),
            Argon2Hasher::new(),
            tokens.clone(),
            llm.clone(),
            AirCookPolicy::new(),
        );

        Self {
            service,
            recipes,
            users,
            tokens,
            llm,
        }
    }

    pub fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            description: format!("{name} maison"),
            ingredients: vec![
                RecipeIngredient::new("Tomates", "4", ""),
                RecipeIngredient::new("Huile d'olive", "2", "c. à soupe"),
            ],
            instructions: vec!["Préparer les légumes.".to_string(), "Cuire.".to_string()],
            servings: 4,
            prep_time: 15,
            cook_time: 30,
            difficulty: Difficulty::Moyen,
            category: "Plat principal".to_string(),
            image_url: None,
            is_public: true,
        }
    }

    pub fn identity_for(&self, user: &User) -> Identity {
        Identity::new(user.id.clone(), user.role)
    }

    pub async fn seed_user(&self, email: &str) -> User {
        self.users
            .create_user(NewUser {
                username: "marie".to_string(),
                email: email.to_string(),
                password_hash: "$argon2id$placeholder".to_string(),
                role: Role::User,
                allergies: Vec::new(),
                created_at: Utc::now(),
            })
            .await
            .unwrap()
    }

    pub async fn seed_recipe(&self, name: &str) -> Recipe {
        self.seed_recipe_draft(Self::draft(name)).await
    }

    pub async fn seed_recipe_draft(&self, draft: RecipeDraft) -> Recipe {
        self.recipes
            .create_recipe(NewRecipe::from_draft(draft))
            .await
            .unwrap()
    }

    pub async fn user(&self, user_id: &str) -> User {
        self.users
            .get_by_id(user_id.to_string())
            .await
            .unwrap()
            .unwrap()
    }
}

pub type MockedService = Service<
    MockRecipeRepository,
    MockUserRepository,
    MockIngredientRepository,
    MockAllergyRepository,
    MockHasherRepository,
    MockTokenService,
    MockLLMClient,
>;

/// Bare mocks for every port. Any call without an expectation panics.
#[derive(Default)]
pub struct MockPorts {
    pub recipes: MockRecipeRepository,
    pub users: MockUserRepository,
    pub ingredients: MockIngredientRepository,
    pub allergies: MockAllergyRepository,
    pub hasher: MockHasherRepository,
    pub tokens: MockTokenService,
    pub llm: MockLLMClient,
}

impl MockPorts {
    pub fn into_service(self) -> MockedService {
        Service::new(
            self.recipes,
            self.users,
            self.ingredients,
            self.allergies,
            self.hasher,
            self.tokens,
            self.llm,
            AirCookPolicy::new(),
        )
    }
}
