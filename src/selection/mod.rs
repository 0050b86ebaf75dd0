pub mod config;
pub mod ranking;
pub mod threshold;

use crate::faq::FaqEntry;
use crate::types::reply::{ScoreDetails, Selection};
pub use config::{SelectorConfig, SelectorConfigError, ThresholdBasis};
pub use ranking::{KeywordOverlapScorer, Scorer, Utterance};
pub use threshold::apply_threshold;

/// Internal: a candidate after scoring, before the threshold check.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
	pub entry: &'a FaqEntry,
	pub score: f64,
	pub details: ScoreDetails,
}

pub struct AnswerSelector<S> {
	scorer: S,
	config: SelectorConfig,
}

impl Default for AnswerSelector<KeywordOverlapScorer> {
	fn default() -> Self {
		Self {
			scorer: KeywordOverlapScorer,
			config: SelectorConfig::v0(),
		}
	}
}

impl<S> AnswerSelector<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self {
			scorer,
			config: SelectorConfig::v0(),
		}
	}

	pub fn with_config(scorer: S, config: SelectorConfig) -> Result<Self, SelectorConfigError> {
		config.validate()?;
		Ok(Self { scorer, config })
	}

	pub fn config(&self) -> &SelectorConfig {
		&self.config
	}

	/// Score every candidate, keep the first strict maximum, apply the threshold.
	///
	/// Candidates are expected to be active and already scoped to the bot.
	/// Never fails: an empty pool or a weak best match yields the fallback text.
	pub fn select(&self, message: &str, candidates: &[FaqEntry]) -> Selection {
		let utterance = Utterance::new(message);

		// 1. Scoring Phase
		let scored = candidates.iter().map(|entry| {
			let details = self.scorer.score(entry, &utterance);
			let score = self.scorer.score_value(&details);
			ScoredCandidate {
				entry,
				score,
				details,
			}
		});

		// 2. Reduction Phase
		// Strictly greater replaces, so ties stay with the earliest candidate.
		// Under the relevance basis only candidates that clear the threshold on
		// relevance compete; the priority term then just orders those.
		let (eligible, any) = scored.fold(
			(None::<ScoredCandidate<'_>>, None::<ScoredCandidate<'_>>),
			|(eligible, any), current| {
				let eligible = if self.competes(&current) {
					keep_first_max(eligible, current.clone())
				} else {
					eligible
				};
				(eligible, keep_first_max(any, current))
			},
		);
		let best = eligible.or(any);

		if let Some(b) = &best {
			tracing::debug!(
				faq_id = %b.entry.id,
				score = b.score,
				keyword_hits = b.details.keyword_hits.len(),
				question_overlap = b.details.question_overlap.len(),
				candidates = candidates.len(),
				"best faq candidate"
			);
		}

		// 3. Threshold Phase
		let selection = apply_threshold(best, &self.config);
		if selection.is_fallback() {
			tracing::debug!(outcome = ?selection.outcome, "no faq cleared the threshold");
		}
		selection
	}

	pub fn select_answer(&self, message: &str, candidates: &[FaqEntry]) -> String {
		self.select(message, candidates).reply
	}

	fn competes(&self, candidate: &ScoredCandidate<'_>) -> bool {
		match self.config.threshold_basis {
			ThresholdBasis::Total => true,
			ThresholdBasis::Relevance => candidate.details.relevance >= self.config.match_threshold,
		}
	}
}

fn keep_first_max<'a>(
	best: Option<ScoredCandidate<'a>>,
	current: ScoredCandidate<'a>,
) -> Option<ScoredCandidate<'a>> {
	match best {
		Some(b) if current.score > b.score => Some(current),
		Some(b) => Some(b),
		None => Some(current),
	}
}

/// One-shot selection with the default scorer and config.
pub fn select_answer(message: &str, candidates: &[FaqEntry]) -> String {
	AnswerSelector::default().select_answer(message, candidates)
}
