// src/models/property.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::seo::Seo;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Land,
    Mixed,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "residential",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
            PropertyType::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    PreSale,
    #[default]
    Available,
    Sold,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::PreSale => "pre-sale",
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Mxn,
    #[default]
    Usd,
}

// --- PAYLOAD ---

// O corpo de POST /api/properties e PUT /api/properties/{id}.
// Os mesmos campos vão direto para o documento no banco (menos `_id`
// e `created_at`/`updated_at`, que são responsabilidade do repositório).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PropertyPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Residencia Bahía Azul")]
    pub title: String,

    // Identificador amigável para URLs, escolhido pelo CMS.
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "residencia-bahia-azul")]
    pub slug: String,

    #[serde(rename = "type", default)]
    pub property_type: PropertyType,

    #[serde(default)]
    pub status: PropertyStatus,

    #[validate(range(min = 0.0, message = "must_be_non_negative"))]
    #[schema(example = 2_500_000.0)]
    pub price: f64,

    #[serde(default)]
    pub currency: Currency,

    #[schema(example = "Zona Hotelera, Cancún")]
    pub location: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default = "default_country")]
    pub country: Option<String>,

    #[validate(range(min = 0, message = "must_be_non_negative"))]
    pub bedrooms: Option<i64>,
    #[validate(range(min = 0.0, message = "must_be_non_negative"))]
    pub bathrooms: Option<f64>,
    #[validate(range(min = 0.0, message = "must_be_non_negative"))]
    pub area_m2: Option<f64>,
    #[validate(range(min = 0, message = "must_be_non_negative"))]
    pub parking: Option<i64>,

    #[serde(default)]
    pub amenities: Vec<String>,
    pub description: Option<String>,

    // Mídia: URLs absolutas validadas.
    #[validate(url(message = "invalid_url"))]
    pub hero_image: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_url_list"))]
    pub gallery: Vec<String>,
    #[validate(url(message = "invalid_url"))]
    pub video_url: Option<String>,
    #[validate(url(message = "invalid_url"))]
    pub tour_360_url: Option<String>,
    #[validate(url(message = "invalid_url"))]
    pub floorplan_url: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(default)]
    pub featured: bool,

    pub seo: Option<Seo>,
}

fn default_country() -> Option<String> {
    Some("Mexico".to_string())
}

fn validate_url_list(urls: &[String]) -> Result<(), ValidationError> {
    use validator::ValidateUrl;

    if urls.iter().all(|u| u.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_url"))
    }
}

// O corpo de PATCH /api/properties/{id}/status.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusPayload {
    pub status: PropertyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> serde_json::Value {
        json!({
            "title": "Residencia Bahía Azul",
            "slug": "residencia-bahia-azul",
            "price": 2_500_000.0,
            "location": "Zona Hotelera, Cancún",
        })
    }

    #[test]
    fn minimal_payload_gets_schema_defaults() {
        let payload: PropertyPayload = serde_json::from_value(minimal()).unwrap();

        assert_eq!(payload.property_type, PropertyType::Residential);
        assert_eq!(payload.status, PropertyStatus::Available);
        assert_eq!(payload.currency, Currency::Usd);
        assert_eq!(payload.country.as_deref(), Some("Mexico"));
        assert!(!payload.featured);
        assert!(payload.amenities.is_empty());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut body = minimal();
        body["price"] = json!(-1.0);
        let payload: PropertyPayload = serde_json::from_value(body).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn malformed_media_urls_fail_validation() {
        let mut body = minimal();
        body["hero_image"] = json!("no-es-una-url");
        body["gallery"] = json!(["https://cdn.example.com/1.jpg", "tampoco"]);
        let payload: PropertyPayload = serde_json::from_value(body).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("hero_image"));
        assert!(errors.field_errors().contains_key("gallery"));
    }

    #[test]
    fn enums_keep_wire_spelling() {
        assert_eq!(PropertyStatus::PreSale.as_str(), "pre-sale");
        assert_eq!(
            serde_json::to_value(PropertyStatus::PreSale).unwrap(),
            json!("pre-sale")
        );
        assert_eq!(serde_json::to_value(Currency::Mxn).unwrap(), json!("MXN"));
        assert_eq!(
            serde_json::to_value(PropertyType::Residential).unwrap(),
            json!("residential")
        );
    }
}
