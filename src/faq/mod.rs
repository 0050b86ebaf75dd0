pub mod entry;
pub mod keywords;
pub mod seed;

pub use crate::types::identifiers::{ChatbotId, FaqId};
pub use entry::{FaqDraft, FaqEntry, FaqError, FaqPatch, DEFAULT_PRIORITY};
pub use keywords::{decode_keywords, normalize_keywords, KeywordError};
pub use seed::{default_faqs, DEFAULT_CHATBOT_ID};
