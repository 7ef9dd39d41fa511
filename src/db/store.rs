// src/db/store.rs

use std::env;

use bson::Document;
use mongodb::{Client, Collection, Database};

use crate::common::error::AppError;

/// A conexão com o banco de documentos.
///
/// O ambiente de hospedagem pode subir o backend antes do banco estar
/// alcançável, então uma falha de conexão NÃO derruba o processo: o estado
/// vira `Unavailable` e cada chamador decide como degradar (lista vazia nos
/// GETs, 503 explícito nas escritas). Não existe handle global anulável:
/// quem precisa do banco recebe este valor e é obrigado a tratar os dois
/// casos.
#[derive(Clone)]
pub enum Store {
    Connected(Database),
    Unavailable,
}

impl Store {
    /// Lê `MONGO_URL` / `DB_NAME` do ambiente e tenta conectar.
    pub async fn connect() -> Self {
        let Ok(uri) = env::var("MONGO_URL") else {
            tracing::warn!("⚠️ MONGO_URL não definida: API sobe sem banco de dados.");
            return Store::Unavailable;
        };
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "realestate".to_string());

        match Client::with_uri_str(&uri).await {
            Ok(client) => {
                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
                Store::Connected(client.database(&db_name))
            }
            Err(e) => {
                tracing::error!("🔥 Falha ao conectar ao banco de dados: {:?}", e);
                Store::Unavailable
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Store::Connected(_))
    }

    pub fn database(&self) -> Result<&Database, AppError> {
        match self {
            Store::Connected(db) => Ok(db),
            Store::Unavailable => Err(AppError::StoreUnavailable),
        }
    }

    /// Handle para uma coleção, ou `StoreUnavailable` se não há conexão.
    pub fn collection(&self, name: &str) -> Result<Collection<Document>, AppError> {
        Ok(self.database()?.collection::<Document>(name))
    }
}
