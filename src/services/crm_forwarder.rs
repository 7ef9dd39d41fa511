// src/services/crm_forwarder.rs

use std::{env, time::Duration};

use serde_json::json;

use crate::models::lead::LeadPayload;

const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// Encaminhamento best-effort de leads para o CRM (HubSpot).
///
/// O resultado NUNCA é aguardado pelo handler: o envio roda em uma task
/// destacada (`tokio::spawn`), com timeout limitado, e qualquer falha é
/// apenas logada: a criação do lead já foi respondida ao cliente.
#[derive(Clone)]
pub struct CrmForwarder {
    client: reqwest::Client,
    token: Option<String>,
    endpoint: String,
}

impl CrmForwarder {
    pub fn new(token: Option<String>, base_url: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            token,
            endpoint: format!("{}/crm/v3/objects/contacts", base.trim_end_matches('/')),
        })
    }

    /// Sem `HUBSPOT_API_KEY` no ambiente a integração fica desligada
    /// em silêncio: não é erro.
    pub fn from_env() -> anyhow::Result<Self> {
        let token = env::var("HUBSPOT_API_KEY").ok().filter(|t| !t.is_empty());
        if token.is_none() {
            tracing::info!("Integração com o CRM desativada (HUBSPOT_API_KEY ausente).");
        }
        Self::new(token, env::var("HUBSPOT_BASE_URL").ok())
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Envia o lead como contato do CRM. Só loga o desfecho: o chamador não
    /// depende (e não deve depender) do resultado.
    pub async fn forward_lead(&self, lead: &LeadPayload) {
        let Some(token) = &self.token else {
            return;
        };

        // Mapeamento do lead para o schema de contatos do HubSpot.
        let payload = json!({
            "properties": {
                "email": lead.email.as_deref().unwrap_or(""),
                "firstname": lead.name,
                "phone": lead.phone.as_deref().unwrap_or(""),
                "message": lead.message.as_deref().unwrap_or(""),
                "tags": lead.tags.join(","),
                "source": lead.source.as_deref().unwrap_or("website"),
                "property_id": lead.property_id.as_deref().unwrap_or(""),
            }
        });

        match self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::info!("✅ Lead encaminhado ao CRM.");
            }
            Ok(response) => {
                tracing::warn!("⚠️ CRM respondeu com status {}.", response.status());
            }
            Err(e) => {
                tracing::warn!("⚠️ Falha ao encaminhar lead ao CRM: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_disables_the_integration() {
        let forwarder = CrmForwarder::new(None, None).unwrap();
        assert!(!forwarder.is_enabled());
    }

    #[test]
    fn endpoint_is_the_contacts_resource() {
        let forwarder =
            CrmForwarder::new(Some("token".to_string()), Some("https://crm.test/".to_string()))
                .unwrap();
        assert!(forwarder.is_enabled());
        assert_eq!(forwarder.endpoint, "https://crm.test/crm/v3/objects/contacts");
    }

    #[tokio::test]
    async fn disabled_forwarder_is_a_no_op() {
        let forwarder = CrmForwarder::new(None, None).unwrap();
        let lead: LeadPayload = serde_json::from_value(serde_json::json!({ "name": "Ana" })).unwrap();
        // Não pode tentar rede nenhuma; apenas retorna.
        forwarder.forward_lead(&lead).await;
    }
}
