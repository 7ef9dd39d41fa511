// src/db/service_repo.rs

use bson::{Document, doc, oid::ObjectId};
use futures::TryStreamExt;

use crate::{common::error::AppError, db::store::Store, models::service::ServicePayload};

pub const COLLECTION: &str = "service";

// O repositório de serviços (coleção 'service'). Só criação e listagem.
#[derive(Clone)]
pub struct ServiceRepository {
    store: Store,
}

impl ServiceRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Document>, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut cursor = coll.find(doc! {}).limit(limit).await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }
        Ok(documents)
    }

    pub async fn insert(&self, payload: &ServicePayload) -> Result<ObjectId, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut document = bson::to_document(payload)?;
        document.insert("created_at", bson::DateTime::now());

        let result = coll.insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!("insert_one não retornou um ObjectId"))
        })
    }
}
