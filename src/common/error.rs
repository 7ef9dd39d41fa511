// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // O banco pode simplesmente não estar disponível (ver db::store::Store).
    #[error("Banco de dados não disponível")]
    StoreUnavailable,

    #[error("Imóvel não encontrado")]
    PropertyNotFound,

    #[error("Registro não encontrado")]
    NotFound,

    // Identificador que não é um ObjectId válido em um endpoint que exige id.
    #[error("Id inválido")]
    InvalidId,

    // Variante para erros do driver do MongoDB
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("Erro de serialização BSON")]
    BsonError(#[from] bson::ser::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            // Mensagens em inglês: são o contrato de fio que o site já consome.
            AppError::StoreUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "Database not available"),
            AppError::PropertyNotFound => (StatusCode::NOT_FOUND, "Property not found"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::InvalidId => (StatusCode::BAD_REQUEST, "Invalid id"),

            // Todos os outros erros (DatabaseError, BsonError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
