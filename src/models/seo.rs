// src/models/seo.rs

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

// Sub-documento de SEO embutido em Imóveis e Serviços.
// Todos os campos são sobrescritas opcionais do conteúdo padrão do site.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Seo {
    #[schema(example = "Casa de luxo em Cancún")]
    pub title: Option<String>,

    pub description: Option<String>,

    #[schema(example = json!(["inmobiliaria", "cancun"]))]
    pub keywords: Option<Vec<String>>,

    // Tipo do schema.org para rich results.
    #[serde(default = "default_schema_type")]
    #[schema(example = "RealEstateAgent")]
    pub schema_type: Option<String>,
}

fn default_schema_type() -> Option<String> {
    Some("RealEstateAgent".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_type_defaults_to_real_estate_agent() {
        let seo: Seo = serde_json::from_str(r#"{ "title": "SEO" }"#).unwrap();
        assert_eq!(seo.schema_type.as_deref(), Some("RealEstateAgent"));
    }
}
