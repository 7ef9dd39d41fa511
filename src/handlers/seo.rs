// src/handlers/seo.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use bson::doc;

use crate::{
    common::{error::AppError, serialize::serialize_doc},
    config::AppState,
};

// GET /api/seo/{kind}/{slug}
//
// Devolve só o sub-documento `seo` do registro pedido: é o que o renderer
// do site precisa para montar as meta tags sem carregar o documento inteiro.
#[utoipa::path(
    get,
    path = "/api/seo/{kind}/{slug}",
    tag = "SEO",
    params(
        ("kind" = String, Path, description = "Coleção (property, service...)"),
        ("slug" = String, Path, description = "Slug do registro")
    ),
    responses(
        (status = 200, description = "O sub-documento SEO (objeto vazio se o registro não tem SEO)"),
        (status = 404, description = "Nenhum registro com esse slug"),
        (status = 503, description = "Banco de dados não disponível")
    )
)]
pub async fn get_seo(
    State(app_state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let collection = app_state.store.collection(&kind.to_lowercase())?;

    let document = collection
        .find_one(doc! { "slug": slug })
        .await?
        .ok_or(AppError::NotFound)?;

    // Registro sem SEO devolve {}: o cliente trata como "sem overrides".
    let seo = document.get_document("seo").cloned().unwrap_or_default();
    Ok(Json(serialize_doc(seo)))
}
