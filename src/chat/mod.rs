//! Conversational gateway.
//!
//! Tries the external language model first; on any model failure answers
//! from the local detector and responder ("demo" mode). If the local path
//! fails too, the caller gets a fixed trilingual placeholder. The gateway
//! itself never returns an error.

use std::sync::Arc;

use serde::Serialize;

use crate::SensorSnapshot;

pub mod detect;
pub mod guides;
pub mod i18n;
pub mod model;
pub mod responder;

pub use detect::{detect_language, detect_topic, Language, Topic};
pub use model::{ChatMessage, GeminiClient, LanguageModel, ModelError};

// ---

/// Returned when neither the model nor the offline responder produced text.
pub const PLACEHOLDER: &str = "🌾 I'm here to help! / मैं मदद के लिए यहाँ हूँ! / ਮੈਂ ਮਦਦ ਲਈ ਇੱਥੇ ਹਾਂ!\n\n\
                               Ask me about farming in English, Hindi, or Punjabi!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Ai,
    Demo,
}

/// One answered question. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    // ---
    pub user_message: String,
    pub language: Language,
    pub topic: Topic,
    pub response: String,
    pub mode: ChatMode,
}

/// JSON body of `POST /api/chatbot/message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    // ---
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ChatMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
}

impl ChatReply {
    pub fn placeholder() -> Self {
        ChatReply {
            response: PLACEHOLDER.to_string(),
            mode: None,
            language: None,
            topic: None,
        }
    }
}

impl From<ChatTurn> for ChatReply {
    fn from(turn: ChatTurn) -> Self {
        ChatReply {
            response: turn.response,
            mode: Some(turn.mode),
            language: Some(turn.language),
            topic: Some(turn.topic),
        }
    }
}

/// Local answer source used when the model is unavailable.
pub trait OfflineResponder: Send + Sync {
    fn answer(&self, message: &str, snapshot: &SensorSnapshot) -> anyhow::Result<ChatTurn>;
}

/// Keyword detection plus the rule-based responder.
pub struct RuleResponder;

impl OfflineResponder for RuleResponder {
    fn answer(&self, message: &str, snapshot: &SensorSnapshot) -> anyhow::Result<ChatTurn> {
        // ---
        let language = detect_language(message);
        let topic = detect_topic(message);
        tracing::debug!(language = language.as_str(), topic = topic.as_str(), "Offline answer");

        Ok(ChatTurn {
            user_message: message.to_string(),
            language,
            topic,
            response: responder::respond(topic, snapshot, language),
            mode: ChatMode::Demo,
        })
    }
}

#[derive(Clone)]
pub struct ChatGateway {
    model: Arc<dyn LanguageModel>,
    offline: Arc<dyn OfflineResponder>,
}

impl ChatGateway {
    // ---
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self::with_offline(model, Arc::new(RuleResponder))
    }

    pub fn with_offline(model: Arc<dyn LanguageModel>, offline: Arc<dyn OfflineResponder>) -> Self {
        ChatGateway { model, offline }
    }

    /// Answer one question. Single model attempt, no retries.
    pub async fn converse(
        &self,
        message: &str,
        snapshot: &SensorSnapshot,
        history: &[ChatMessage],
    ) -> ChatReply {
        // ---
        match self.model.ask(message, snapshot, history).await {
            Ok(text) => {
                tracing::info!("Answered by language model");
                ChatReply {
                    response: text,
                    mode: Some(ChatMode::Ai),
                    language: Some(detect_language(message)),
                    topic: None,
                }
            }
            Err(ModelError::NotConfigured) => self.answer_offline(message, snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "Language model failed, falling back to demo mode");
                self.answer_offline(message, snapshot)
            }
        }
    }

    fn answer_offline(&self, message: &str, snapshot: &SensorSnapshot) -> ChatReply {
        // ---
        match self.offline.answer(message, snapshot) {
            Ok(turn) => turn.into(),
            Err(e) => {
                tracing::error!(error = %e, "Offline responder failed, sending placeholder");
                ChatReply::placeholder()
            }
        }
    }
}
