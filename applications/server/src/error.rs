/// Server error types
use crate::pages;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use podcastr_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Episode API error: {0}")]
    Upstream(#[from] ClientError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) | ServerError::Upstream(ClientError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) | ServerError::Internal(_) | ServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True when the API may answer normally on a later attempt
    pub fn is_transient(&self) -> bool {
        matches!(self, ServerError::Upstream(e) if e.is_transient())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ServerError::NotFound(_) | ServerError::Upstream(ClientError::NotFound(_)) => {
                "Episódio não encontrado"
            }
            ServerError::Upstream(ref e) => {
                tracing::error!("Episode API error: {}", e);
                "Não foi possível carregar os episódios"
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Erro de configuração"
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Erro interno"
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                "Erro interno"
            }
        };

        (status, Html(pages::error_page(status, message))).into_response()
    }
}
