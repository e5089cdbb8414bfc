//! API HTTP del asistente (axum). Dos endpoints de conversación y uno de
//! estado; los errores se devuelven como JSON con el código apropiado.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::app_state::AppState;

// --- Payloads y Respuestas de la API ---

#[derive(Deserialize)]
pub struct ChatPayload {
    message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
    mode: String,
}

#[derive(Deserialize)]
pub struct ModePayload {
    mode: String,
}

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/mode", post(mode_handler))
        .route("/status", get(status_handler))
        .with_state(app_state)
}

// --- Handlers ---

#[axum::debug_handler]
async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<serde_json::Value>)> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Empty message"})),
        ));
    }

    let mut assistant = state.assistant.lock().map_err(|e| {
        error!("Estado del asistente envenenado: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal error"})),
        )
    })?;

    let response = assistant.answer(message);
    Ok(Json(ChatResponse {
        response,
        mode: assistant.mode().as_str().to_string(),
    }))
}

#[axum::debug_handler]
async fn mode_handler(
    State(state): State<AppState>,
    Json(payload): Json<ModePayload>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let mode = payload.mode.trim().to_lowercase();
    if mode != "tutor" && mode != "concise" {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid mode"})),
        ));
    }

    let mut assistant = state.assistant.lock().map_err(|e| {
        error!("Estado del asistente envenenado: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal error"})),
        )
    })?;

    assistant.set_mode(&mode);
    let current = assistant.mode().as_str();
    Ok(Json(json!({
        "mode": current,
        "message": format!("Mode changed to {current}"),
    })))
}

#[axum::debug_handler]
async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let assistant = state.assistant.lock().map_err(|e| {
        error!("Estado del asistente envenenado: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(json!({
        "status": "ok",
        "mode": assistant.mode().as_str(),
        "passages": assistant.retriever().passage_count(),
        "faqs": assistant.retriever().faq_count(),
        "top_k": state.config.top_k,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::assistant::{Assistant, Mode};
    use crate::config::AppConfig;
    use crate::corpus::{Document, FaqEntry};
    use crate::retriever::Retriever;

    fn test_state() -> AppState {
        let docs = vec![Document {
            title: "Dopamine",
            text: "dopamine reward motivation motor control",
        }];
        let faqs = vec![FaqEntry {
            question: "what regulates reward",
            answer: "dopamine regulates reward",
        }];
        let assistant = Assistant::new(Retriever::new(&docs, faqs), Mode::Tutor, 3);
        AppState {
            config: AppConfig {
                server_addr: "127.0.0.1:0".to_string(),
                default_mode: Mode::Tutor,
                top_k: 3,
            },
            assistant: Arc::new(Mutex::new(assistant)),
        }
    }

    #[tokio::test]
    async fn empty_message_is_rejected_with_400() {
        // El recorte se aplica antes de validar: sólo espacios cuenta vacío.
        for message in ["", "   \t  "] {
            let result = chat_handler(
                State(test_state()),
                Json(ChatPayload {
                    message: message.to_string(),
                }),
            )
            .await;
            let (status, body) = result.err().unwrap();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.0["error"], "Empty message");
        }
    }

    #[tokio::test]
    async fn valid_chat_returns_response_and_mode() {
        let result = chat_handler(
            State(test_state()),
            Json(ChatPayload {
                message: "dopamine reward".to_string(),
            }),
        )
        .await;
        let Json(reply) = result.ok().unwrap();
        assert!(!reply.response.is_empty());
        assert_eq!(reply.mode, "tutor");
    }

    #[tokio::test]
    async fn invalid_mode_is_rejected_with_400() {
        let result = mode_handler(
            State(test_state()),
            Json(ModePayload {
                mode: "loud".to_string(),
            }),
        )
        .await;
        let (status, body) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0["error"], "Invalid mode");
    }

    #[tokio::test]
    async fn valid_mode_switch_updates_shared_state() {
        let state = test_state();
        let result = mode_handler(
            State(state.clone()),
            Json(ModePayload {
                mode: "CONCISE".to_string(),
            }),
        )
        .await;
        let Json(body) = result.ok().unwrap();
        assert_eq!(body["mode"], "concise");
        assert_eq!(body["message"], "Mode changed to concise");
        assert_eq!(state.assistant.lock().unwrap().mode(), Mode::Concise);
    }

    #[tokio::test]
    async fn status_reports_corpus_and_mode() {
        let result = status_handler(State(test_state())).await;
        let Json(body) = result.ok().unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "tutor");
        assert_eq!(body["passages"], 1);
        assert_eq!(body["faqs"], 1);
    }
}
