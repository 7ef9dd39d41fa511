// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Luxury Real Estate & Construction API",
        version = "1.0.0",
        description = "Backend do site/CMS imobiliário: imóveis, serviços, leads e SEO."
    ),
    paths(
        // --- System ---
        handlers::system::root,
        handlers::system::test_database,
        handlers::system::export_properties_to_crm,

        // --- Properties ---
        handlers::properties::list_properties,
        handlers::properties::get_property,
        handlers::properties::create_property,
        handlers::properties::update_property,
        handlers::properties::update_property_status,

        // --- Services ---
        handlers::services::list_services,
        handlers::services::create_service,

        // --- Leads ---
        handlers::leads::create_lead,
        handlers::leads::list_leads,

        // --- SEO ---
        handlers::seo::get_seo,
    ),
    components(schemas(
        models::property::PropertyPayload,
        models::property::UpdateStatusPayload,
        models::property::PropertyType,
        models::property::PropertyStatus,
        models::property::Currency,
        models::seo::Seo,
        models::service::ServicePayload,
        models::lead::LeadPayload,
    )),
    tags(
        (name = "Properties", description = "Catálogo de imóveis"),
        (name = "Services", description = "Serviços de construção"),
        (name = "Leads", description = "Formulário de contato e integração com o CRM"),
        (name = "SEO", description = "Metadados por slug"),
        (name = "System", description = "Liveness e diagnóstico")
    )
)]
pub struct ApiDoc;
