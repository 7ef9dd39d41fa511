// src/handlers/leads.rs

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
    models::lead::LeadPayload,
    services::scoring::score_lead,
};

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = LeadPayload,
    responses(
        (status = 200, description = "Lead criado; corpo `{ id, score }`"),
        (status = 422, description = "Dados inválidos"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !app_state.store.is_connected() {
        return Err(AppError::StoreUnavailable);
    }

    // O score é sempre recalculado aqui; o que o cliente mandar é ignorado.
    let score = score_lead(&payload);
    let id = app_state.lead_repo.insert(&payload, score).await?;

    // Encaminhamento fire-and-forget ao CRM: o desfecho nunca é aguardado e
    // falha nenhuma chega ao cliente: o lead já está salvo.
    let forwarder = app_state.crm_forwarder.clone();
    let lead = payload.clone();
    tokio::spawn(async move {
        forwarder.forward_lead(&lead).await;
    });

    Ok(Json(json!({ "id": id.to_hex(), "score": score })))
}

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    params(LimitQuery),
    responses(
        (status = 200, description = "Leads mais recentes primeiro (lista vazia se o banco está fora)")
    )
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.store.is_connected() {
        return Ok(Json(Value::Array(vec![])));
    }

    let documents = app_state.lead_repo.list(params.limit()).await?;
    Ok(Json(serialize_docs(documents)))
}
