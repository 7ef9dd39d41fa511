// src/models/service.rs

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::seo::Seo;

// O corpo de POST /api/services (serviços de construção/remodelação do site).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ServicePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Construcción residencial")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "construccion-residencial")]
    pub slug: String,

    pub summary: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url_list"))]
    pub gallery: Vec<String>,

    #[serde(default)]
    #[schema(example = json!(["construccion", "llave-en-mano"]))]
    pub categories: Vec<String>,

    pub seo: Option<Seo>,
}

fn validate_url_list(urls: &[String]) -> Result<(), ValidationError> {
    use validator::ValidateUrl;

    if urls.iter().all(|u| u.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_url"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_and_slug() {
        let payload: ServicePayload =
            serde_json::from_value(json!({ "name": "", "slug": "" })).unwrap();
        let errors = payload.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("slug"));
    }
}
