//! Carga y gestión de configuración de la aplicación (servidor + asistente).

use anyhow::{anyhow, Result};
use std::env;

use crate::assistant::Mode;

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    pub default_mode: Mode,
    pub top_k: usize,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

        let default_mode = env::var("ASSISTANT_MODE")
            .map(|m| Mode::parse(&m))
            .unwrap_or(Mode::Tutor);

        let top_k = match env::var("RETRIEVER_TOP_K") {
            Ok(raw) => {
                let k: usize = raw
                    .parse()
                    .map_err(|_| anyhow!("RETRIEVER_TOP_K inválido: {raw}"))?;
                if k == 0 {
                    return Err(anyhow!("RETRIEVER_TOP_K debe ser >= 1"));
                }
                k
            }
            Err(_) => 3,
        };

        Ok(Self {
            server_addr,
            default_mode,
            top_k,
        })
    }
}
