use crate::service::{
    Service,
    llm::{Message, Role},
    resume,
};
use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use vitrine_error::{ErrorType, Result, bail};

#[derive(Deserialize)]
pub struct ChatRequest {
    messages: Vec<Message>,
}

#[debug_handler(state = crate::state::Zustand)]
pub async fn post(
    State(service): State<Service>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>> {
    if request.messages.is_empty() {
        bail!(
            type = ErrorType::BadRequest(Some("Messages array is required".into())),
            "empty message list"
        );
    }

    if !matches!(
        request.messages.last(),
        Some(message) if message.role == Role::User,
    ) {
        bail!(
            type = ErrorType::BadRequest(Some("Last message must be from user".into())),
            "conversation does not end with a user message"
        );
    }

    let system = resume::chat_system_prompt();
    let reply = service
        .llm
        .complete(Some(&system), &request.messages)
        .await?;

    Ok(Json(json!({ "reply": reply })))
}
