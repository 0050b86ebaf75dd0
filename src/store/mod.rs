pub mod memory;
pub mod snapshot;

use std::path::PathBuf;

use thiserror::Error;

use crate::faq::{FaqDraft, FaqEntry, FaqError, FaqPatch};
use crate::types::identifiers::{ChatbotId, FaqId, MessageId};

pub use memory::MemoryFaqStore;
pub use snapshot::{FaqSnapshot, SNAPSHOT_FORMAT_VERSION};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("FAQ not found: {0}")]
    FaqNotFound(FaqId),
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),
    #[error("Duplicate FAQ ID: {0}")]
    DuplicateFaqId(FaqId),
    #[error("Invalid FAQ: {0}")]
    Validation(#[from] FaqError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Snapshot checksum mismatch for {path}: recorded {recorded}, content hashes to {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        recorded: String,
        actual: String,
    },
    #[error("Unsupported snapshot format version: {0}")]
    UnsupportedFormat(u32),
}

/// Read/write access to FAQ records.
///
/// Listings are ordered by priority ascending; equal priorities keep
/// insertion order.
pub trait FaqStore {
    /// Active entries, optionally limited to one bot.
    fn list_active(&self, chatbot: Option<&ChatbotId>) -> Result<Vec<FaqEntry>, StoreError>;

    fn list_all(&self) -> Result<Vec<FaqEntry>, StoreError>;

    fn get(&self, id: &FaqId) -> Result<FaqEntry, StoreError>;

    fn create(&mut self, draft: FaqDraft) -> Result<FaqEntry, StoreError>;

    fn update(&mut self, id: &FaqId, patch: FaqPatch) -> Result<FaqEntry, StoreError>;

    fn delete(&mut self, id: &FaqId) -> Result<(), StoreError>;
}
