use aircook_core::domain::common::entities::app_errors::CoreError;
use axum::{
    Json,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use validator::{Validate, ValidationErrors};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", message.clone())
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", message.clone())
            }
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, "E_FORBIDDEN", message.clone()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", message.clone()),
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                message.clone(),
            ),
            ApiError::Core(error) => match error {
                CoreError::NotFound => (
                    StatusCode::NOT_FOUND,
                    "E_NOT_FOUND",
                    "Ressource introuvable".to_string(),
                ),
                CoreError::Invalid(reason) => (
                    StatusCode::BAD_REQUEST,
                    "E_BAD_REQUEST",
                    format!("Données invalides : {reason}"),
                ),
                CoreError::AlreadyExists => (
                    StatusCode::BAD_REQUEST,
                    "E_ALREADY_EXISTS",
                    "Un utilisateur avec cet email existe déjà".to_string(),
                ),
                CoreError::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    "E_INVALID_CREDENTIALS",
                    "Email ou mot de passe incorrect".to_string(),
                ),
                CoreError::InvalidToken => (
                    StatusCode::UNAUTHORIZED,
                    "E_UNAUTHORIZED",
                    "Token invalide".to_string(),
                ),
                CoreError::ExpiredToken => (
                    StatusCode::UNAUTHORIZED,
                    "E_UNAUTHORIZED",
                    "Token expiré".to_string(),
                ),
                CoreError::Forbidden(_) => (
                    StatusCode::FORBIDDEN,
                    "E_FORBIDDEN",
                    "Accès refusé".to_string(),
                ),
                CoreError::ExternalServiceError(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E_EXTERNAL_SERVICE",
                    "Le service externe est indisponible".to_string(),
                ),
                CoreError::HashError(_) | CoreError::InternalServerError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E_INTERNAL_SERVER_ERROR",
                    "Erreur interne du serveur".to_string(),
                ),
            },
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::Core(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            error!("{} ({}): {}", code, status, self);
        }

        let body = ErrorResponse {
            code: code.to_string(),
            message,
            status: status.as_u16(),
            details: None,
        };

        let detailed = self.details().map(|details| DetailedError(ErrorResponse {
            details: Some(details),
            ..body.clone()
        }));

        let mut response = (status, Json(body)).into_response();
        if let Some(detailed) = detailed {
            response.extensions_mut().insert(detailed);
        }
        response
    }
}

/// Error body including the underlying error text. Clients only see it
/// through [`error_details`].
#[derive(Debug, Clone)]
pub struct DetailedError(pub ErrorResponse);

/// Outside production, swap error bodies for their detailed variant.
pub async fn error_details(State(state): State<AppState>, response: Response) -> Response {
    if state.args.is_production() {
        return response;
    }

    match response.extensions().get::<DetailedError>().cloned() {
        Some(DetailedError(body)) => (response.status(), Json(body)).into_response(),
        None => response,
    }
}

/// Flatten field errors into `field: message` pairs, sorted by field.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(validation_message(&e)))?;

        Ok(ValidateJson(value))
    }
}
