pub mod identifiers;
pub mod reply;

pub use identifiers::{ChatbotId, Checksum, FaqId, MessageId, SessionId};
pub use reply::{
    ChatRequest, ChatResponse, FallbackReason, ScoreDetails, Selection, SelectionOutcome,
};
