use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }
    };
}

string_id!(
    /// Opaque FAQ identifier. Seeded entries use readable ids (`faq-營業時間`),
    /// entries created at runtime get `faq-<uuid>`.
    FaqId
);

string_id!(
    /// Bot (tenant) scope for FAQs and transcripts.
    ChatbotId
);

string_id!(
    /// Conversation token handed back to the widget.
    SessionId
);

string_id!(MessageId);

impl FaqId {
    pub fn generate() -> Self {
        FaqId(format!("faq-{}", Uuid::new_v4()))
    }
}

impl MessageId {
    pub fn generate() -> Self {
        MessageId(format!("msg-{}", Uuid::new_v4()))
    }
}

const SESSION_SUFFIX_LEN: usize = 9;

impl SessionId {
    /// `session_<unix millis>_<9 random alphanumerics>`.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let random = Uuid::new_v4().simple().to_string();
        SessionId(format!("session_{millis}_{}", &random[..SESSION_SUFFIX_LEN]))
    }
}

/// Content hash in `sha256:<hex>` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Checksum(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
