//! FAQ answer selection for a customer-support chat widget.
//!
//! `faq-core` scores an inbound message against the active FAQ entries
//! (keyword substring hits, question-word overlap, a small priority nudge),
//! picks the first highest-scoring entry and falls back to a fixed reply
//! when nothing scores high enough. Selection is pure and deterministic:
//! identical inputs always produce the identical reply.
//!
//! Around the selector sit the collaborators it is consumed through: a FAQ
//! store with snapshot persistence, keyword normalization at the store
//! boundary, and a chat service that stamps replies and keeps a transcript.

pub mod chat;
pub mod faq;
pub mod selection;
pub mod store;
pub mod types;

pub use selection::select_answer;
