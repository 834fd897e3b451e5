use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use solana_client::client_error::ClientError;
use thiserror::Error;

use crate::cors_headers;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid input query parameter: {0}")]
    InvalidQueryParameter(&'static str),
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
    #[error("Invalid \"account\" provided")]
    InvalidAccount,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Failed to fetch latest blockhash: {0}")]
    Blockhash(#[from] ClientError),
    #[error("Failed to serialize transaction: {0}")]
    Serialize(#[from] bincode::Error),
}

impl ActionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQueryParameter(_)
            | Self::InvalidQuery(_)
            | Self::InvalidAccount
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Blockhash(_) => StatusCode::BAD_GATEWAY,
            Self::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every failed action request
#[derive(Debug, Serialize)]
pub struct ActionErrorBody {
    pub message: String,
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let body = ActionErrorBody {
            message: self.to_string(),
        };
        (self.status(), cors_headers(), Json(body)).into_response()
    }
}
