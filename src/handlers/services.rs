// src/handlers/services.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    common::{error::AppError, serialize::serialize_docs},
    config::AppState,
    db::filter::LimitQuery,
    models::service::ServicePayload,
};

// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    params(LimitQuery),
    responses(
        (status = 200, description = "Lista de serviços (vazia se o banco está fora)")
    )
)]
pub async fn list_services(
    State(app_state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.store.is_connected() {
        return Ok(Json(Value::Array(vec![])));
    }

    let documents = app_state.service_repo.list(params.limit()).await?;
    Ok(Json(serialize_docs(documents)))
}

// POST /api/services
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Services",
    request_body = ServicePayload,
    responses(
        (status = 200, description = "Serviço criado; corpo `{ id }`"),
        (status = 422, description = "Dados inválidos"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !app_state.store.is_connected() {
        return Err(AppError::StoreUnavailable);
    }

    let id = app_state.service_repo.insert(&payload).await?;
    Ok(Json(json!({ "id": id.to_hex() })))
}
