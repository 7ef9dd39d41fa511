// src/handlers/system.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    db::filter::{LimitQuery, PropertyFilter},
};

pub const API_NAME: &str = "Luxury Real Estate & Construction API";

// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Liveness"))
)]
pub async fn root() -> impl IntoResponse {
    Json(json!({ "name": API_NAME, "status": "ok" }))
}

// GET /test
//
// Diagnóstico de conectividade usado pelo painel de deploy. NUNCA pode
// estourar erro por falta de banco: o payload descreve o que está faltando.
#[utoipa::path(
    get,
    path = "/test",
    tag = "System",
    responses((status = 200, description = "Diagnóstico do backend e do banco"))
)]
pub async fn test_database(State(app_state): State<AppState>) -> impl IntoResponse {
    let mut response = json!({
        "backend": "✅ Running",
        "database": "❌ Not Available",
        "database_url": "❌ Not Set",
        "database_name": "❌ Not Set",
        "connection_status": "Not Connected",
        "collections": [],
    });

    if let Ok(db) = app_state.store.database() {
        response["database_url"] = json!("✅ Set");
        response["database_name"] = json!(db.name());

        match db.list_collection_names().await {
            Ok(names) => {
                response["database"] = json!("✅ Connected & Working");
                response["connection_status"] = json!("Connected");
                let truncated: Vec<&String> = names.iter().take(10).collect();
                response["collections"] = json!(truncated);
            }
            Err(e) => {
                let message: String = e.to_string().chars().take(120).collect();
                response["database"] = json!(format!("❌ Error: {message}"));
            }
        }
    }

    Json(response)
}

// GET /api/export/crm
//
// Placeholder do export de imóveis para o CRM: por enquanto só conta o que
// seria exportado.
#[utoipa::path(
    get,
    path = "/api/export/crm",
    tag = "System",
    params(LimitQuery),
    responses((status = 200, description = "Quantidade de imóveis exportados; corpo `{ exported }`"))
)]
pub async fn export_properties_to_crm(
    State(app_state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.store.is_connected() {
        return Ok(Json(json!({ "exported": 0 })));
    }

    let documents = app_state
        .property_repo
        .list(&PropertyFilter::default(), params.limit_or(100))
        .await?;

    Ok(Json(json!({ "exported": documents.len() })))
}
