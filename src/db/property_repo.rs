// src/db/property_repo.rs

use bson::{Document, doc, oid::ObjectId};
use futures::TryStreamExt;

use crate::{
    common::error::AppError,
    db::{
        filter::{PropertyFilter, slug_or_id_filter},
        store::Store,
    },
    models::property::{PropertyPayload, PropertyStatus},
};

pub const COLLECTION: &str = "property";

// O repositório de imóveis, responsável por todas as interações com a coleção 'property'
#[derive(Clone)]
pub struct PropertyRepository {
    store: Store,
}

impl PropertyRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // Busca filtrada, sempre limitada.
    pub async fn list(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut cursor = coll.find(filter.to_document()).limit(limit).await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }
        Ok(documents)
    }

    /// Busca por slug OU por id em UMA consulta combinada: nada de duas idas
    /// ao banco, para não haver corrida entre as duas tentativas.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Document>, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        Ok(coll.find_one(slug_or_id_filter(identifier)).await?)
    }

    pub async fn insert(&self, payload: &PropertyPayload) -> Result<ObjectId, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut document = bson::to_document(payload)?;
        document.insert("created_at", bson::DateTime::now());

        let result = coll.insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!("insert_one não retornou um ObjectId"))
        })
    }

    /// Substituição completa do documento ($set de todos os campos do payload)
    /// mais o carimbo de `updated_at`. Retorna se algum documento casou.
    pub async fn replace(&self, id: ObjectId, payload: &PropertyPayload) -> Result<bool, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let mut data = bson::to_document(payload)?;
        data.insert("updated_at", bson::DateTime::now());

        let result = coll
            .update_one(doc! { "_id": id }, doc! { "$set": data })
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Patch somente de status.
    pub async fn set_status(&self, id: ObjectId, status: PropertyStatus) -> Result<bool, AppError> {
        let coll = self.store.collection(COLLECTION)?;
        let result = coll
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status.as_str() } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}
