// src/db/filter.rs

use bson::{Document, doc, oid::ObjectId};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::property::{PropertyStatus, PropertyType};

pub const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

/// Os parâmetros de busca de GET /api/properties, com os nomes exatos
/// que chegam na query string.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPropertiesQuery {
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    #[serde(rename = "price_min")]
    pub min_price: Option<f64>,
    #[serde(rename = "price_max")]
    pub max_price: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
}

impl ListPropertiesQuery {
    pub fn to_filter(&self) -> PropertyFilter {
        PropertyFilter {
            location: self.location.clone(),
            property_type: self.property_type,
            status: self.status,
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            featured: self.featured,
        }
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit)
    }
}

/// O `limit` é sempre aplicado: tem default são e nunca fica ilimitado.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Query string dos endpoints de listagem que só aceitam `limit`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

impl LimitQuery {
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit)
    }

    /// Igual a `limit()`, mas com outro default (o export usa 100).
    pub fn limit_or(&self, default: i64) -> i64 {
        clamp_limit(self.limit.or(Some(default)))
    }
}

/// O construtor de predicados da busca de imóveis.
///
/// Um struct fixo de campos opcionais, dobrado campo a campo em um único
/// documento de consulta: sem mapa solto onde um nome de campo digitado
/// errado passaria em silêncio. Puro: sem estado, sem IO.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub location: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub featured: Option<bool>,
}

impl PropertyFilter {
    /// Dobra os campos presentes no predicado final (AND implícito).
    /// Nenhum parâmetro presente ⇒ documento vazio ⇒ casa com tudo.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();

        // Busca textual: substring case-insensitive em qualquer um dos três
        // campos de localização, combinados com $or. É a única regra "fuzzy"
        // do sistema, e o grupo $or inteiro conta como UMA cláusula do AND.
        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            filter.insert(
                "$or",
                vec![
                    regex_clause("location", location),
                    regex_clause("city", location),
                    regex_clause("state", location),
                ],
            );
        }

        if let Some(property_type) = self.property_type {
            filter.insert("type", property_type.as_str());
        }
        if let Some(status) = self.status {
            filter.insert("status", status.as_str());
        }

        // Faixa de preço em UMA cláusula; limite ausente fica ausente
        // (nada de 0 ou infinito implícitos).
        if self.min_price.is_some() || self.max_price.is_some() {
            let mut price = Document::new();
            if let Some(min) = self.min_price {
                price.insert("$gte", min);
            }
            if let Some(max) = self.max_price {
                price.insert("$lte", max);
            }
            filter.insert("price", price);
        }

        // Quartos e banheiros são piso ("pelo menos N"), não igualdade.
        if let Some(bedrooms) = self.bedrooms {
            filter.insert("bedrooms", doc! { "$gte": bedrooms });
        }
        if let Some(bathrooms) = self.bathrooms {
            filter.insert("bathrooms", doc! { "$gte": bathrooms });
        }

        // Tri-state: Some(false) filtra os não-destaques; None não filtra nada.
        if let Some(featured) = self.featured {
            filter.insert("featured", featured);
        }

        filter
    }
}

fn regex_clause(field: &str, pattern: &str) -> Document {
    let mut clause = Document::new();
    clause.insert(field, doc! { "$regex": pattern, "$options": "i" });
    clause
}

/// Predicado de GET /api/properties/{identifier}: UMA consulta combinada,
/// casando por `slug` OU por `_id`. A cláusula de id só entra quando a string
/// é um ObjectId sintaticamente válido: assim um identificador malformado
/// nunca chega ao driver, e continua podendo casar como slug.
pub fn slug_or_id_filter(identifier: &str) -> Document {
    let mut clauses = vec![doc! { "slug": identifier }];
    if let Ok(oid) = ObjectId::parse_str(identifier) {
        clauses.push(doc! { "_id": oid });
    }
    doc! { "$or": clauses }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert_eq!(PropertyFilter::default().to_document(), Document::new());
    }

    #[test]
    fn filter_is_pure() {
        let filter = PropertyFilter {
            location: Some("Cancún".to_string()),
            min_price: Some(100_000.0),
            ..Default::default()
        };
        assert_eq!(filter.to_document(), filter.to_document());
    }

    #[test]
    fn location_builds_case_insensitive_or_group() {
        let filter = PropertyFilter {
            location: Some("Cancún".to_string()),
            ..Default::default()
        };

        let mut expected = Document::new();
        expected.insert(
            "$or",
            vec![
                regex_clause("location", "Cancún"),
                regex_clause("city", "Cancún"),
                regex_clause("state", "Cancún"),
            ],
        );
        assert_eq!(filter.to_document(), expected);
        assert_eq!(
            regex_clause("city", "Cancún"),
            doc! { "city": { "$regex": "Cancún", "$options": "i" } }
        );
    }

    #[test]
    fn empty_location_is_ignored() {
        let filter = PropertyFilter {
            location: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.to_document(), Document::new());
    }

    #[test]
    fn type_alone_builds_single_equality() {
        let filter = PropertyFilter {
            property_type: Some(PropertyType::Residential),
            ..Default::default()
        };
        assert_eq!(filter.to_document(), doc! { "type": "residential" });
    }

    #[test]
    fn location_and_type_combine_with_and() {
        let filter = PropertyFilter {
            location: Some("Cancún".to_string()),
            property_type: Some(PropertyType::Residential),
            ..Default::default()
        };

        let document = filter.to_document();
        assert!(document.contains_key("$or"));
        assert_eq!(document.get_str("type").unwrap(), "residential");
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn price_bounds_fold_into_one_range_clause() {
        let filter = PropertyFilter {
            min_price: Some(100_000.0),
            max_price: Some(500_000.0),
            ..Default::default()
        };
        assert_eq!(
            filter.to_document(),
            doc! { "price": { "$gte": 100_000.0, "$lte": 500_000.0 } }
        );
    }

    #[test]
    fn absent_price_bound_is_omitted_not_defaulted() {
        let filter = PropertyFilter {
            min_price: Some(100_000.0),
            ..Default::default()
        };

        let document = filter.to_document();
        assert_eq!(document, doc! { "price": { "$gte": 100_000.0 } });
        let price = document.get_document("price").unwrap();
        assert!(!price.contains_key("$lte"));
    }

    #[test]
    fn bedrooms_and_bathrooms_are_minimum_thresholds() {
        let filter = PropertyFilter {
            bedrooms: Some(3),
            bathrooms: Some(2.5),
            ..Default::default()
        };
        assert_eq!(
            filter.to_document(),
            doc! {
                "bedrooms": { "$gte": 3_i64 },
                "bathrooms": { "$gte": 2.5 },
            }
        );
    }

    #[test]
    fn featured_false_is_distinguishable_from_absent() {
        let explicit = PropertyFilter {
            featured: Some(false),
            ..Default::default()
        };
        assert_eq!(explicit.to_document(), doc! { "featured": false });

        let absent = PropertyFilter::default();
        assert!(!absent.to_document().contains_key("featured"));
    }

    #[test]
    fn malformed_identifier_never_reaches_the_id_clause() {
        let document = slug_or_id_filter("casa-frente-al-mar");
        let clauses = document.get_array("$or").unwrap();

        assert_eq!(clauses.len(), 1);
        assert_eq!(
            clauses[0].as_document().unwrap(),
            &doc! { "slug": "casa-frente-al-mar" }
        );
    }

    #[test]
    fn valid_object_id_adds_the_id_clause() {
        let oid = ObjectId::new();
        let hex = oid.to_hex();
        let document = slug_or_id_filter(&hex);
        let clauses = document.get_array("$or").unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].as_document().unwrap(), &doc! { "slug": hex.clone() });
        assert_eq!(clauses[1].as_document().unwrap(), &doc! { "_id": oid });
    }

    #[test]
    fn limit_has_a_sane_default_and_is_never_unbounded() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(1_000_000)), 500);
    }
}
