// src/models/lead.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

// O corpo de POST /api/leads: o formulário de contato do site.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LeadPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "María García")]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    #[schema(example = "+52 998 123 4567")]
    pub phone: Option<String>,

    pub message: Option<String>,

    // De onde veio o lead (formulário, landing page, campanha...).
    #[serde(default = "default_source")]
    #[schema(example = "website")]
    pub source: Option<String>,

    // Referência frouxa ao `_id` de um imóvel: não é chave estrangeira.
    pub property_id: Option<String>,

    #[serde(default)]
    #[schema(example = json!(["vip", "2026"]))]
    pub tags: Vec<String>,

    pub utm: Option<HashMap<String, String>>,

    // Se o cliente mandar um score, ignoramos: o valor gravado é SEMPRE
    // o calculado pelo servidor (services::scoring).
    pub score: Option<i32>,
}

fn default_source() -> Option<String> {
    Some("website".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_defaults_to_website() {
        let lead: LeadPayload = serde_json::from_value(json!({ "name": "Ana" })).unwrap();
        assert_eq!(lead.source.as_deref(), Some("website"));
        assert!(lead.tags.is_empty());
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let lead: LeadPayload =
            serde_json::from_value(json!({ "name": "Ana", "email": "nope" })).unwrap();
        assert!(lead.validate().unwrap_err().field_errors().contains_key("email"));
    }
}
