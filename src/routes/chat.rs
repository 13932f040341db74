use axum::{Json, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse, DietTipsResponse},
    services::topic_gate,
    state::SharedState,
};

pub const OFF_TOPIC_REPLY: &str = "I'm your Diet Assistant, so I only answer nutrition and diet-related questions. Please ask me about foods, calories, or diet plans for health conditions.";

const DIET_TIPS_PROMPT: &str = "Give 3 evidence-based diet tips for healthy living.";

// Provider failures are folded into the reply text so the chat UI always has
// something to render; both endpoints answer 200 on that path.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    if !topic_gate::is_in_domain(&payload.message) {
        return Json(ChatResponse {
            reply: OFF_TOPIC_REPLY.to_string(),
        });
    }

    let reply = match state.provider.complete(&payload.message).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "provider call failed");
            format!("Error contacting Gemini API: {err}")
        }
    };

    Json(ChatResponse { reply })
}

pub async fn diet_tips_handler(State(state): State<SharedState>) -> Json<DietTipsResponse> {
    let tips = match state.provider.complete(DIET_TIPS_PROMPT).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "provider call failed");
            format!("Error contacting Gemini API: {err}")
        }
    };

    Json(DietTipsResponse { tips })
}
