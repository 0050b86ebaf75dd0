use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ChatbotId, FaqId, SessionId};

/// Inbound chat message as posted by the widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatbot_id: Option<ChatbotId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_session(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_chatbot(mut self, chatbot_id: impl Into<ChatbotId>) -> Self {
        self.chatbot_id = Some(chatbot_id.into());
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Reply payload. `timestamp` is RFC 3339 UTC with millisecond precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: SessionId,
    pub timestamp: String,
}

/// Breakdown of one candidate's score.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreDetails {
    /// Keywords found as substrings of the lower-cased message.
    pub keyword_hits: Vec<String>,
    /// Question words (> 2 chars) that also occur as message tokens.
    pub question_overlap: Vec<String>,
    /// Keyword and question-overlap contribution, without the priority term.
    pub relevance: f64,
    /// `1 / priority`.
    pub priority_bonus: f64,
}

/// Why the fallback text was returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallbackReason {
    EmptyCandidateSet,
    BelowThreshold { best_score: f64 },
    BlankAnswer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    Matched { faq_id: FaqId, score: f64 },
    Fallback(FallbackReason),
}

/// Result of one selector pass: the text to send plus how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub reply: String,
    pub outcome: SelectionOutcome,
}

impl Selection {
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, SelectionOutcome::Fallback(_))
    }

    pub fn matched_id(&self) -> Option<&FaqId> {
        match &self.outcome {
            SelectionOutcome::Matched { faq_id, .. } => Some(faq_id),
            SelectionOutcome::Fallback(_) => None,
        }
    }
}
