//! Realtime Session Token Exchange
//!
//! Builds the session configuration for the OpenAI Realtime API (model,
//! voice, behavior script, tool schema) and trades the server credential
//! for a short-lived client token. The token is opaque to this backend;
//! any upstream failure is a hard error for the request, never retried.

use crate::{cart::AppState, config::Settings, error::ApiError, tools};
use serde_json::{json, Value};
use std::time::Duration;

const CLIENT_SECRETS_URL: &str = "https://api.openai.com/v1/realtime/client_secrets";

/// Assembles the realtime session payload for one ordering conversation.
///
/// The session id is baked into the instructions so every tool call the
/// agent makes carries it back to us.
pub fn build_session_config(settings: &Settings, session_id: &str) -> Value {
    json!({
        "session": {
            "type": "realtime",
            "model": settings.openai_model,
            "audio": {
                "output": { "voice": "alloy" }
            },
            "instructions": instructions(session_id),
            "tools": tools::tool_definitions(),
            "tool_choice": "auto",
        }
    })
}

/// Exchanges the server credential for a client-usable ephemeral key.
pub async fn create_ephemeral_key(state: &AppState, session_id: &str) -> Result<String, ApiError> {
    let settings = &state.settings;
    let config = build_session_config(settings, session_id);

    let response = state
        .http
        .post(CLIENT_SECRETS_URL)
        .bearer_auth(&settings.openai_api_key)
        .timeout(Duration::from_secs(settings.token_timeout_secs))
        .json(&config)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::TokenRejected { status, body });
    }

    let body: Value = response.json().await?;
    body.get("value")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ApiError::TokenMissingValue)
}

/// The behavior script governing the agent's turn-taking. Prompt content,
/// not program logic; kept next to the payload builder that embeds it.
fn instructions(session_id: &str) -> String {
    format!(
        r#"You are the voice assistant for Burger House. Be friendly but concise (2-3 sentences max).

MANDATORY FLOW:

1. WELCOME (first turn):
   "Welcome to Burger House! We have burgers, fries and drinks. What would you like to order today?"

2. ADDING A PRODUCT:
   "Great, I added [product] for $[price] to your cart. Would you like anything else?"

   IMPORTANT:
- When the customer asks ABOUT a product (without ordering it), use show_product to put it on screen
- When they ADD it to the order, use add_to_cart

3. WHEN THEY FINISH (says "no", "that's all", "done", "ready to pay"):
   "Great, your order is ready. Now I'll ask you for a few delivery details."
   Action: call ready_for_checkout IMMEDIATELY after this reply

4. COLLECT DETAILS (one at a time, wait for each answer):
   - "What is your full name?"
   - "Your phone number?"
   - "Your email address?"
   - "Full delivery address?"
   After each answer, store it with save_customer_data

5. AFTER THE LAST DETAIL:
   "Perfect, your details are all set. You can now enter your card on screen to complete the payment."

CRITICAL RULES:
- Session ID: {session_id} - ALWAYS include it in function calls
- Mention prices when adding products
- Be brief but friendly
- Do NOT repeat the whole order unless asked
- When they finish ordering -> ready_for_checkout -> then collect details
- If the checkout screen was closed and the customer wants it back, call reopen_checkout
- Whenever cards or payment come up, redirect to the payment screen via ready_for_checkout
- NEVER ask for card details by voice
"#
    )
}
