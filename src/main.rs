// Módulos de la aplicación
mod api;
mod app_state;
mod assistant;
mod config;
mod corpus;
mod glossary;
mod index;
mod intent;
mod repl;
mod retriever;
mod stopwords;

use std::sync::{Arc, Mutex};

use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::assistant::Assistant;
use crate::retriever::Retriever;

#[tokio::main]
async fn main() {
    // 1. Cargar .env e inicializar logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Cargar configuración
    let cfg = config::AppConfig::from_env().expect("Error al cargar la configuración");

    // 3. Construir el corpus y el índice TF-IDF (una sola vez por proceso)
    let retriever = Retriever::new(&corpus::kb_docs(), corpus::faq_entries());
    info!(
        "Índice construido: {} pasajes, {} FAQs",
        retriever.passage_count(),
        retriever.faq_count()
    );

    // 4. Crear el asistente
    let mut assistant = Assistant::new(retriever, cfg.default_mode, cfg.top_k);

    // 5. Modo de ejecución: `serve` levanta la API web; por defecto, REPL
    if std::env::args().any(|a| a == "serve") {
        run_server(cfg, assistant).await;
    } else {
        repl::run(&mut assistant).expect("Error en el bucle interactivo");
    }
}

async fn run_server(cfg: config::AppConfig, assistant: Assistant) {
    // Estado compartido de la aplicación
    let app_state = AppState {
        config: cfg.clone(),
        assistant: Arc::new(Mutex::new(assistant)),
    };

    // Router de la API con CORS permisivo
    let app = api::create_router(app_state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Iniciar el servidor con apagado ordenado
    let listener = tokio::net::TcpListener::bind(&cfg.server_addr)
        .await
        .expect("No se pudo abrir el puerto del servidor");
    info!("🚀 Servidor escuchando en http://{}", cfg.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Señal de apagado recibida, iniciando cierre del servidor.");
        })
        .await
        .expect("Error del servidor HTTP");

    info!("✅ Servidor cerrado correctamente.");
}
