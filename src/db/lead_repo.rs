// src/db/lead_repo.rs

use bson::{Document, doc, oid::ObjectId};
use futures::TryStreamExt;

use crate::{common::error::AppError, db::store::Store, models::lead::LeadPayload};

pub const COLLECTION: &str = "lead";

// O repositório de leads (coleção 'lead'). Leads nascem uma vez por envio
// de formulário e nunca são alterados nem apagados por aqui.
#[derive(Clone)]
pub struct LeadRepository {
    store: Store,
}

impl LeadRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn insert(&self, payload: &LeadPayload, score: i32) -> Result<ObjectId, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut document = bson::to_document(payload)?;
        // Se o cliente mandou um score, ele é descartado aqui:
        // o valor gravado é sempre o calculado pelo servidor.
        document.insert("score", score);
        document.insert("created_at", bson::DateTime::now());

        let result = coll.insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!("insert_one não retornou um ObjectId"))
        })
    }

    /// Lista os leads mais recentes primeiro (por data de criação).
    pub async fn list(&self, limit: i64) -> Result<Vec<Document>, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut cursor = coll
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }
        Ok(documents)
    }
}
