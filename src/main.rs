// src/main.rs

use std::env;

use tokio::net::TcpListener;

use imoveis_backend::{build_router, config::AppState, db};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    // (A conexão com o banco NÃO derruba o processo: vira Store::Unavailable.)
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Carga de dados de demonstração, apenas quando pedida explicitamente.
    let seed = env::var("SEED_DEMO_DATA")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if seed {
        if let Err(e) = db::seed::seed_demo_data(&app_state.store).await {
            tracing::warn!("⚠️ Falha ao popular dados de demonstração: {}", e);
        }
    }

    let app = build_router(app_state);

    // Inicia o servidor
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
