// src/config.rs

use crate::{
    db::{LeadRepository, PropertyRepository, ServiceRepository, store::Store},
    services::crm_forwarder::CrmForwarder,
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub property_repo: PropertyRepository,
    pub service_repo: ServiceRepository,
    pub lead_repo: LeadRepository,
    pub crm_forwarder: CrmForwarder,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // A conexão pode falhar (banco ainda subindo, URL ausente no ambiente).
        // Nesse caso o estado carrega um Store::Unavailable e cada handler
        // decide como degradar, em vez de derrubarmos o processo aqui.
        let store = Store::connect().await;

        let crm_forwarder = CrmForwarder::from_env()?;

        Ok(Self::from_parts(store, crm_forwarder))
    }

    // --- Monta o gráfico de dependências ---
    // Separado do `new` para os testes conseguirem injetar um Store de teste.
    pub fn from_parts(store: Store, crm_forwarder: CrmForwarder) -> Self {
        let property_repo = PropertyRepository::new(store.clone());
        let service_repo = ServiceRepository::new(store.clone());
        let lead_repo = LeadRepository::new(store.clone());

        Self {
            store,
            property_repo,
            service_repo,
            lead_repo,
            crm_forwarder,
        }
    }
}
