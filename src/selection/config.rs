use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FALLBACK_TEXT: &str =
    "抱歉，我沒有理解您的問題。請選擇下方常見問題或聯繫人工客服獲得幫助。";
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

#[derive(Debug, Error)]
pub enum SelectorConfigError {
    #[error("Fallback text must not be blank")]
    BlankFallback,
    #[error("Match threshold must be a finite, non-negative number: {0}")]
    InvalidThreshold(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Which part of the winning score is compared against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdBasis {
    /// Keyword, overlap and priority terms together. With priority 1 the
    /// priority term alone reaches 1.0, so any message clears 0.5.
    #[default]
    Total,
    /// Keyword and overlap terms only; priority just breaks ties.
    Relevance,
}

// Serializable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub fallback_text: String,
    pub match_threshold: f64,
    pub threshold_basis: ThresholdBasis,
}

impl SelectorConfig {
    pub fn v0() -> Self {
        Self {
            fallback_text: DEFAULT_FALLBACK_TEXT.into(),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            threshold_basis: ThresholdBasis::Total,
        }
    }

    /// Read a JSON config file; absent fields keep their v0 values.
    pub fn load(path: &Path) -> Result<Self, SelectorConfigError> {
        let bytes = fs::read(path)?;
        let config: SelectorConfig = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SelectorConfigError> {
        if self.fallback_text.trim().is_empty() {
            return Err(SelectorConfigError::BlankFallback);
        }
        if !self.match_threshold.is_finite() || self.match_threshold < 0.0 {
            return Err(SelectorConfigError::InvalidThreshold(self.match_threshold));
        }
        Ok(())
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::v0()
    }
}
