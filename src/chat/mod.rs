pub mod transcript;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::selection::{AnswerSelector, KeywordOverlapScorer, Scorer};
use crate::store::{FaqStore, StoreError};
use crate::types::identifiers::{ChatbotId, SessionId};
use crate::types::reply::{ChatRequest, ChatResponse};
pub use transcript::{
    MemoryMessageLog, MessageKind, MessageLog, MessagePage, MessageQuery, MessageRecord,
    MessageStats, NewMessage, Pagination,
};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message must not be empty")]
    EmptyMessage,
    #[error("FAQ store error: {0}")]
    Store(#[from] StoreError),
}

/// Request/response boundary around the selector.
///
/// Owns the FAQ store and the message log; reads candidates per request and
/// records a transcript when the request names a bot.
pub struct ChatService<St, L, S = KeywordOverlapScorer> {
    store: St,
    log: L,
    selector: AnswerSelector<S>,
}

impl<St, L> ChatService<St, L, KeywordOverlapScorer>
where
    St: FaqStore,
    L: MessageLog,
{
    pub fn new(store: St, log: L) -> Self {
        Self::with_selector(store, log, AnswerSelector::default())
    }
}

impl<St, L, S> ChatService<St, L, S>
where
    St: FaqStore,
    L: MessageLog,
    S: Scorer,
{
    pub fn with_selector(store: St, log: L, selector: AnswerSelector<S>) -> Self {
        Self {
            store,
            log,
            selector,
        }
    }

    pub fn handle(&mut self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let session_id = request.session_id.unwrap_or_else(SessionId::generate);

        let candidates = self.store.list_active(request.chatbot_id.as_ref())?;
        let selection = self.selector.select(message, &candidates);
        tracing::debug!(
            session = %session_id,
            candidates = candidates.len(),
            fallback = selection.is_fallback(),
            "chat reply selected"
        );

        if let Some(chatbot_id) = request.chatbot_id {
            self.record_exchange(
                message,
                &selection.reply,
                &session_id,
                request.user_id,
                chatbot_id,
            );
        }

        Ok(ChatResponse {
            reply: selection.reply,
            session_id,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    // Logging failures never fail the chat request.
    fn record_exchange(
        &mut self,
        message: &str,
        reply: &str,
        session_id: &SessionId,
        user_id: Option<String>,
        chatbot_id: ChatbotId,
    ) {
        let lines = [(MessageKind::User, message), (MessageKind::Bot, reply)];
        for (kind, content) in lines {
            let entry = NewMessage {
                content: content.to_string(),
                kind,
                session_id: session_id.clone(),
                user_id: user_id.clone(),
                chatbot_id: chatbot_id.clone(),
            };
            if let Err(err) = self.log.append(entry) {
                tracing::warn!(error = %err, session = %session_id, ?kind, "failed to record chat message");
            }
        }
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut St {
        &mut self.store
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut L {
        &mut self.log
    }

    pub fn selector(&self) -> &AnswerSelector<S> {
        &self.selector
    }
}
