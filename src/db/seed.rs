// src/db/seed.rs

use bson::doc;

use crate::common::error::AppError;
use crate::db::{lead_repo, property_repo, service_repo, store::Store};

/// Popula o banco com dados de demonstração para o CMS/site.
///
/// Só roda quando pedido via `SEED_DEMO_DATA` e só se a coleção de imóveis
/// ainda estiver vazia: nunca sobrescreve dados reais.
pub async fn seed_demo_data(store: &Store) -> Result<(), AppError> {
    let properties = store.collection(property_repo::COLLECTION)?;
    if properties.count_documents(doc! {}).await? > 0 {
        tracing::info!("Coleção 'property' já tem dados: seed ignorado.");
        return Ok(());
    }

    let now = bson::DateTime::now();

    properties
        .insert_one(doc! {
            "title": "Residencia Bahía Azul",
            "slug": "residencia-bahia-azul",
            "type": "residential",
            "status": "available",
            "price": 1_250_000.0,
            "currency": "USD",
            "location": "Zona Hotelera, Cancún",
            "city": "Cancún",
            "state": "Quintana Roo",
            "country": "Mexico",
            "bedrooms": 4_i64,
            "bathrooms": 4.5,
            "area_m2": 420.0,
            "parking": 2_i64,
            "amenities": ["alberca", "muelle privado", "seguridad 24h"],
            "description": "Residencia frente al mar con acceso privado a la playa.",
            "featured": true,
            "seo": {
                "title": "Residencia de lujo en Cancún",
                "keywords": ["cancun", "frente al mar"],
                "schema_type": "RealEstateAgent",
            },
            "created_at": now,
        })
        .await?;

    properties
        .insert_one(doc! {
            "title": "Torre Corporativa Mérida Centro",
            "slug": "torre-corporativa-merida-centro",
            "type": "commercial",
            "status": "pre-sale",
            "price": 18_500_000.0,
            "currency": "MXN",
            "location": "Centro, Mérida",
            "city": "Mérida",
            "state": "Yucatán",
            "country": "Mexico",
            "amenities": ["elevadores", "planta de emergencia"],
            "featured": false,
            "created_at": now,
        })
        .await?;

    store
        .collection(service_repo::COLLECTION)?
        .insert_one(doc! {
            "name": "Construcción llave en mano",
            "slug": "construccion-llave-en-mano",
            "summary": "Del terreno a la entrega, un solo contrato.",
            "categories": ["construccion", "llave-en-mano"],
            "gallery": [],
            "created_at": now,
        })
        .await?;

    // Um lead de exemplo deixa o painel do CMS com cara de vivo.
    store
        .collection(lead_repo::COLLECTION)?
        .insert_one(doc! {
            "name": "María García",
            "email": "maria@example.com",
            "phone": "+52 998 123 4567",
            "message": "Me interesa la residencia de la Zona Hotelera.",
            "source": "website",
            "tags": ["demo"],
            "score": 30_i32,
            "created_at": now,
        })
        .await?;

    tracing::info!("🌱 Dados de demonstração inseridos.");
    Ok(())
}
