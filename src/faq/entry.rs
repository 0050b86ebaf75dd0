use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::keywords::{clean_owned, deserialize_lenient};
use crate::types::identifiers::{ChatbotId, FaqId};

pub const DEFAULT_PRIORITY: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaqError {
    #[error("Question must not be empty")]
    EmptyQuestion,
    #[error("Answer must not be empty")]
    EmptyAnswer,
    #[error("Priority must be at least 1")]
    ZeroPriority,
}

/// A stored question/answer pair with its matching keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub keywords: Vec<String>,
    /// Lower is preferred. Never 0 once written through a store.
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatbot_id: Option<ChatbotId>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

fn default_active() -> bool {
    true
}

impl FaqEntry {
    /// Active entry with priority 1 and no keywords.
    pub fn new(id: impl Into<FaqId>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            keywords: Vec::new(),
            priority: DEFAULT_PRIORITY,
            is_active: true,
            chatbot_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_chatbot(mut self, chatbot_id: impl Into<ChatbotId>) -> Self {
        self.chatbot_id = Some(chatbot_id.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Priority used for scoring; a stray 0 is read as 1.
    pub fn effective_priority(&self) -> u32 {
        self.priority.max(1)
    }

    pub(crate) fn apply(&mut self, patch: FaqPatch) -> Result<(), FaqError> {
        let FaqPatch {
            question,
            answer,
            keywords,
            priority,
            is_active,
        } = patch;

        // Validate everything before touching the entry.
        let question = question.map(|q| required(q, FaqError::EmptyQuestion)).transpose()?;
        let answer = answer.map(|a| required(a, FaqError::EmptyAnswer)).transpose()?;
        if priority == Some(0) {
            return Err(FaqError::ZeroPriority);
        }

        if let Some(question) = question {
            self.question = question;
        }
        if let Some(answer) = answer {
            self.answer = answer;
        }
        if let Some(keywords) = keywords {
            self.keywords = clean_owned(keywords);
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Input for creating an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub chatbot_id: Option<ChatbotId>,
}

impl FaqDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Self::default()
        }
    }

    /// Validate and turn the draft into a stored entry.
    ///
    /// Text is trimmed; a missing or zero priority becomes 1 and a missing
    /// active flag becomes `true`.
    pub fn into_entry(self, id: FaqId) -> Result<FaqEntry, FaqError> {
        let question = required(self.question, FaqError::EmptyQuestion)?;
        let answer = required(self.answer, FaqError::EmptyAnswer)?;
        let priority = match self.priority {
            None | Some(0) => DEFAULT_PRIORITY,
            Some(p) => p,
        };

        let now = Utc::now();
        Ok(FaqEntry {
            id,
            question,
            answer,
            keywords: clean_owned(self.keywords),
            priority,
            is_active: self.is_active.unwrap_or(true),
            chatbot_id: self.chatbot_id,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update; `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPatch {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

fn required(text: String, err: FaqError) -> Result<String, FaqError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}
