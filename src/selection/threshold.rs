use crate::selection::config::{SelectorConfig, ThresholdBasis};
use crate::types::reply::{FallbackReason, Selection, SelectionOutcome};

use super::ScoredCandidate;

/// Turn the scan winner (if any) into the reply that goes back to the user.
pub fn apply_threshold(best: Option<ScoredCandidate<'_>>, config: &SelectorConfig) -> Selection {
    let Some(best) = best else {
        return fallback(config, FallbackReason::EmptyCandidateSet);
    };

    let compared = match config.threshold_basis {
        ThresholdBasis::Total => best.score,
        ThresholdBasis::Relevance => best.details.relevance,
    };

    // Exactly at the threshold is accepted.
    if compared < config.match_threshold {
        return fallback(
            config,
            FallbackReason::BelowThreshold {
                best_score: compared,
            },
        );
    }

    if best.entry.answer.trim().is_empty() {
        return fallback(config, FallbackReason::BlankAnswer);
    }

    Selection {
        reply: best.entry.answer.clone(),
        outcome: SelectionOutcome::Matched {
            faq_id: best.entry.id.clone(),
            score: best.score,
        },
    }
}

fn fallback(config: &SelectorConfig, reason: FallbackReason) -> Selection {
    Selection {
        reply: config.fallback_text.clone(),
        outcome: SelectionOutcome::Fallback(reason),
    }
}
