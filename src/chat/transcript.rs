use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;
use crate::types::identifiers::{ChatbotId, MessageId, SessionId};

pub const DEFAULT_PAGE_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Bot,
    System,
}

/// One logged chat line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: MessageId,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub session_id: SessionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub chatbot_id: ChatbotId,
    pub is_read: bool,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub content: String,
    pub kind: MessageKind,
    pub session_id: SessionId,
    pub user_id: Option<String>,
    pub chatbot_id: ChatbotId,
}

impl NewMessage {
    fn into_record(self) -> MessageRecord {
        // Bot lines need no follow-up
        let handled = self.kind == MessageKind::Bot;
        let now = Utc::now();
        MessageRecord {
            id: MessageId::generate(),
            content: self.content.trim().to_string(),
            kind: self.kind,
            session_id: self.session_id,
            user_id: self.user_id,
            chatbot_id: self.chatbot_id,
            is_read: handled,
            is_resolved: handled,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Filter and page selection for [`MessageLog::list`]. `page` is 1-based.
#[derive(Debug, Clone, Default)]
pub struct MessageQuery {
    pub kind: Option<MessageKind>,
    pub is_read: Option<bool>,
    pub is_resolved: Option<bool>,
    pub session_id: Option<SessionId>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl MessageQuery {
    fn matches(&self, record: &MessageRecord) -> bool {
        self.kind.map_or(true, |k| record.kind == k)
            && self.is_read.map_or(true, |r| record.is_read == r)
            && self.is_resolved.map_or(true, |r| record.is_resolved == r)
            && self
                .session_id
                .as_ref()
                .map_or(true, |s| &record.session_id == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Counts over the filtered set, not just the current page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    pub total: usize,
    pub unread: usize,
    pub unresolved: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePage {
    pub messages: Vec<MessageRecord>,
    pub pagination: Pagination,
    pub stats: MessageStats,
}

pub trait MessageLog {
    fn append(&mut self, message: NewMessage) -> Result<MessageRecord, StoreError>;

    /// Newest first.
    fn list(&self, query: &MessageQuery) -> Result<MessagePage, StoreError>;

    fn update_status(
        &mut self,
        id: &MessageId,
        is_read: Option<bool>,
        is_resolved: Option<bool>,
    ) -> Result<MessageRecord, StoreError>;

    fn delete(&mut self, id: &MessageId) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryMessageLog {
    records: Vec<MessageRecord>,
}

impl MemoryMessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MessageLog for MemoryMessageLog {
    fn append(&mut self, message: NewMessage) -> Result<MessageRecord, StoreError> {
        let record = message.into_record();
        self.records.push(record.clone());
        Ok(record)
    }

    fn list(&self, query: &MessageQuery) -> Result<MessagePage, StoreError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

        // Appends are chronological, so reverse iteration is newest first.
        let filtered: Vec<&MessageRecord> =
            self.records.iter().rev().filter(|r| query.matches(r)).collect();

        let mut stats = MessageStats {
            total: filtered.len(),
            ..MessageStats::default()
        };
        for r in &filtered {
            stats.unread += usize::from(!r.is_read);
            stats.unresolved += usize::from(!r.is_resolved);
            match r.kind {
                MessageKind::User => stats.user_messages += 1,
                MessageKind::Bot => stats.bot_messages += 1,
                MessageKind::System => {}
            }
        }

        let messages = filtered
            .iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .map(|r| (*r).clone())
            .collect();

        Ok(MessagePage {
            messages,
            pagination: Pagination {
                page,
                limit,
                total: stats.total,
                total_pages: stats.total.div_ceil(limit),
            },
            stats,
        })
    }

    fn update_status(
        &mut self,
        id: &MessageId,
        is_read: Option<bool>,
        is_resolved: Option<bool>,
    ) -> Result<MessageRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::MessageNotFound(id.clone()))?;
        if let Some(read) = is_read {
            record.is_read = read;
        }
        if let Some(resolved) = is_resolved {
            record.is_resolved = resolved;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    fn delete(&mut self, id: &MessageId) -> Result<(), StoreError> {
        let idx = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::MessageNotFound(id.clone()))?;
        self.records.remove(idx);
        Ok(())
    }
}
