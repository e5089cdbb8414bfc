use std::sync::{Arc, Mutex};

use crate::{assistant::Assistant, config::AppConfig};

/// Estado compartido entre handlers. El asistente va tras un mutex porque el
/// modo y el buffer de memoria mutan por turno; el índice subyacente es de
/// sólo lectura.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub assistant: Arc<Mutex<Assistant>>,
}
