// src/handlers/properties.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use bson::oid::ObjectId;
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        serialize::{serialize_doc, serialize_docs},
    },
    config::AppState,
    db::filter::ListPropertiesQuery,
    models::property::{PropertyPayload, UpdateStatusPayload},
};

// GET /api/properties
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    params(ListPropertiesQuery),
    responses(
        (status = 200, description = "Imóveis que casam com os filtros (lista vazia se o banco está fora)")
    )
)]
pub async fn list_properties(
    State(app_state): State<AppState>,
    Query(params): Query<ListPropertiesQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Leitura degrada para lista vazia quando o banco não está disponível.
    if !app_state.store.is_connected() {
        return Ok(Json(Value::Array(vec![])));
    }

    let documents = app_state
        .property_repo
        .list(&params.to_filter(), params.limit())
        .await?;

    Ok(Json(serialize_docs(documents)))
}

// GET /api/properties/{identifier}
#[utoipa::path(
    get,
    path = "/api/properties/{identifier}",
    tag = "Properties",
    params(
        ("identifier" = String, Path, description = "Slug OU ObjectId do imóvel")
    ),
    responses(
        (status = 200, description = "O imóvel encontrado"),
        (status = 404, description = "Nenhum imóvel com esse slug/id"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn get_property(
    State(app_state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.store.is_connected() {
        return Err(AppError::StoreUnavailable);
    }

    let document = app_state
        .property_repo
        .find_by_identifier(&identifier)
        .await?
        .ok_or(AppError::PropertyNotFound)?;

    Ok(Json(serialize_doc(document)))
}

// POST /api/properties
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = PropertyPayload,
    responses(
        (status = 200, description = "Imóvel criado; corpo `{ id }`"),
        (status = 422, description = "Dados inválidos"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn create_property(
    State(app_state): State<AppState>,
    Json(payload): Json<PropertyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !app_state.store.is_connected() {
        // Escrita NÃO degrada em silêncio: o cliente precisa saber que nada foi salvo.
        return Err(AppError::StoreUnavailable);
    }

    let id = app_state.property_repo.insert(&payload).await?;
    Ok(Json(json!({ "id": id.to_hex() })))
}

// PUT /api/properties/{id}
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = "Properties",
    request_body = PropertyPayload,
    params(
        ("id" = String, Path, description = "ObjectId do imóvel")
    ),
    responses(
        (status = 200, description = "Imóvel substituído; corpo `{ updated: true }`"),
        (status = 400, description = "Id malformado"),
        (status = 404, description = "Nenhum imóvel com esse id"),
        (status = 422, description = "Dados inválidos"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn update_property(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PropertyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !app_state.store.is_connected() {
        return Err(AppError::StoreUnavailable);
    }

    let oid = ObjectId::parse_str(&id).map_err(|_| AppError::InvalidId)?;
    let matched = app_state.property_repo.replace(oid, &payload).await?;
    if !matched {
        return Err(AppError::PropertyNotFound);
    }

    Ok(Json(json!({ "updated": true })))
}

// PATCH /api/properties/{id}/status
#[utoipa::path(
    patch,
    path = "/api/properties/{id}/status",
    tag = "Properties",
    request_body = UpdateStatusPayload,
    params(
        ("id" = String, Path, description = "ObjectId do imóvel")
    ),
    responses(
        (status = 200, description = "Status atualizado; corpo `{ updated: true }`"),
        (status = 400, description = "Id malformado"),
        (status = 404, description = "Nenhum imóvel com esse id"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn update_property_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.store.is_connected() {
        return Err(AppError::StoreUnavailable);
    }

    let oid = ObjectId::parse_str(&id).map_err(|_| AppError::InvalidId)?;
    let matched = app_state
        .property_repo
        .set_status(oid, payload.status)
        .await?;
    if !matched {
        return Err(AppError::PropertyNotFound);
    }

    Ok(Json(json!({ "updated": true })))
}
