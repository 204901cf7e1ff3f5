//! Request-side domain types.
//!
//! A request is what the transport layer hands the engine after JSON
//! decoding: the user's message, the conversation so far, an optional
//! study context, and an operating mode. Every optional field has a
//! documented default resolved inside the engine — a request that
//! deserializes is always generatable.

use serde::{Deserialize, Serialize};

/// The operating mode of a single exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Free conversation — reply, summary, action items, resources.
    #[default]
    Chat,
    /// Full schedule generation — everything chat produces plus a study plan.
    Plan,
    /// Affective/reflective exchange — motivation and reflection always set.
    CheckIn,
}

/// Who authored a turn in the conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The studying user
    User,
    /// The assistant
    Assistant,
}

/// One prior turn of the conversation, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Optional study context supplied alongside a message.
///
/// Every field is optional. Numeric fields are signed so out-of-range
/// values (a negative day count, a zero minute budget) survive decoding
/// and are resolved to defaults by the engine instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    /// Exam date as `YYYY-MM-DD` (the wire format of a date input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,

    /// Minutes available per study day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_day: Option<i64>,

    /// Number of days to plan for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_available: Option<i64>,
}

/// A fully decoded study request — the engine's single input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantRequest {
    /// The user's free-text message. May be empty.
    #[serde(default)]
    pub message: String,

    /// Conversation so far, oldest first. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<ChatTurn>,

    /// Optional study context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<StudyContext>,

    /// Operating mode; defaults to chat.
    #[serde(default)]
    pub mode: Mode,
}

impl AssistantRequest {
    /// Create a bare chat request from a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}
