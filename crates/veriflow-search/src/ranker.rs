//! Trust-aware re-ranking of similarity candidates

use serde::{Deserialize, Serialize};

use veriflow_domain::traits::SearchCandidate;
use veriflow_domain::{Claim, ClaimId, MediaType};

use crate::config::SearchConfig;
use crate::reasoning::{build_reasoning_chain, ReasoningChain, ReasoningInputs};

/// A re-ranked, reasoning-annotated search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// The result claim's id
    pub claim_id: ClaimId,

    /// Semantic similarity as supplied by the provider
    pub similarity: f64,

    /// Weighted combination of similarity and trust score
    pub combined_score: f64,

    /// The claim snapshot
    pub claim: Claim,

    /// Why this result was returned
    pub reasoning: ReasoningChain,
}

/// Re-rank similarity candidates by combined semantic/trust score
///
/// `combined = similarity_weight * similarity + trust_weight * trust_score`
/// (0.7/0.3 under the default config). The sort is descending by
/// combined score and **stable**: candidates with equal combined scores
/// keep the similarity-rank order the provider supplied, which makes
/// ranking deterministic and testable.
///
/// Each result carries a reasoning chain built from the candidate's
/// similarity, trust metrics, age at `now_ms`, and whether its media
/// type differs from `query_media`. An empty candidate list yields an
/// empty result list.
pub fn hybrid_rank(
    query_media: MediaType,
    candidates: Vec<SearchCandidate>,
    now_ms: u64,
    config: &SearchConfig,
) -> Vec<RankedResult> {
    let mut results: Vec<RankedResult> = candidates
        .into_iter()
        .map(|candidate| {
            let combined_score = config.similarity_weight * candidate.similarity
                + config.trust_weight * candidate.claim.trust_score;

            let reasoning = build_reasoning_chain(&ReasoningInputs {
                similarity: candidate.similarity,
                trust_score: candidate.claim.trust_score,
                verification_count: candidate.claim.verification_count,
                age_days: candidate.claim.age_days(now_ms),
                cross_modal: candidate.claim.media_type != query_media,
            });

            RankedResult {
                claim_id: candidate.claim_id,
                similarity: candidate.similarity,
                combined_score,
                claim: candidate.claim,
                reasoning,
            }
        })
        .collect();

    tracing::debug!(results = results.len(), "Re-ranking candidates by combined score");

    // Vec::sort_by is stable; equal combined scores keep provider order
    results.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}
