// src/lib.rs

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;

/// Monta o router completo da API.
///
/// Fica na lib (e não no main) para que os testes de integração consigam
/// montar a aplicação com um `AppState` de teste.
pub fn build_router(app_state: AppState) -> Router {
    // O CMS e o site institucional rodam em outros domínios,
    // então o CORS fica totalmente liberado (igual ao deploy atual).
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Os paths são contrato com o site/CMS já no ar: ficam exatamente assim.
    Router::new()
        .route("/", get(handlers::system::root))
        .route("/test", get(handlers::system::test_database))
        .route(
            "/api/properties",
            get(handlers::properties::list_properties).post(handlers::properties::create_property),
        )
        .route(
            "/api/properties/{identifier}",
            get(handlers::properties::get_property).put(handlers::properties::update_property),
        )
        .route(
            "/api/properties/{identifier}/status",
            patch(handlers::properties::update_property_status),
        )
        .route(
            "/api/services",
            get(handlers::services::list_services).post(handlers::services::create_service),
        )
        .route(
            "/api/leads",
            post(handlers::leads::create_lead).get(handlers::leads::list_leads),
        )
        .route("/api/seo/{kind}/{slug}", get(handlers::seo::get_seo))
        .route("/api/export/crm", get(handlers::system::export_properties_to_crm))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state)
}
