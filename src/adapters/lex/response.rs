//! Outbound response envelope for the conversational platform.

use std::collections::HashMap;

use serde::Serialize;

const DIALOG_ACTION_CLOSE: &str = "Close";
const FULFILLED_INTENT: &str = "FulfilledIntent";
const STATE_FULFILLED: &str = "Fulfilled";
const CONTENT_TYPE_PLAIN_TEXT: &str = "PlainText";

/// A closed, fulfilled response carrying a single plain-text message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_state: ResponseSessionState,
    pub messages: Vec<Message>,
    pub session_attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSessionState {
    pub dialog_action: DialogAction,
    pub intent: ResponseIntent,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseIntent {
    pub name: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

impl LexResponse {
    /// Builds the uniform "conversation closed, fulfilled" envelope.
    ///
    /// Session attributes default to an empty mapping when none are carried
    /// forward.
    pub fn close(
        text: impl Into<String>,
        session_attributes: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            session_state: ResponseSessionState {
                dialog_action: DialogAction {
                    action_type: DIALOG_ACTION_CLOSE.to_string(),
                },
                intent: ResponseIntent {
                    name: FULFILLED_INTENT.to_string(),
                    state: STATE_FULFILLED.to_string(),
                },
            },
            messages: vec![Message {
                content_type: CONTENT_TYPE_PLAIN_TEXT.to_string(),
                content: text.into(),
            }],
            session_attributes: session_attributes.unwrap_or_default(),
        }
    }

    /// Returns the plain-text content of the single message.
    pub fn message_text(&self) -> &str {
        &self.messages[0].content
    }
}
