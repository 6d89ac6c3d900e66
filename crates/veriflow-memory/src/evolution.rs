//! Claim evolution bundle

use serde::{Deserialize, Serialize};

use veriflow_domain::traits::RelatedClaim;
use veriflow_domain::{Claim, ClaimId, EvidenceEntry};
use veriflow_trust::TrustConfig;

use crate::history::{build_trust_history, TrustHistoryPoint};

/// The evolution of a claim over time: the target, its related claims,
/// its evidence ledger, and the replayed trust trajectory
///
/// This is the raw bundle for callers that want to render their own
/// views; [`crate::build_provenance`] produces the opinionated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimEvolution {
    /// The claim being tracked
    pub claim_id: ClaimId,

    /// The target claim snapshot
    pub original_claim: Claim,

    /// Related claims discovered through vector similarity
    pub related_claims: Vec<RelatedClaim>,

    /// The evidence ledger, as supplied
    pub evidence_trail: Vec<EvidenceEntry>,

    /// Score/level trajectory replayed over the ledger
    pub trust_score_history: Vec<TrustHistoryPoint>,
}

/// Bundle a claim's evolution from supplied snapshots
pub fn build_claim_evolution(
    claim: &Claim,
    related: &[RelatedClaim],
    evidence: &[EvidenceEntry],
    config: &TrustConfig,
) -> ClaimEvolution {
    ClaimEvolution {
        claim_id: claim.id,
        original_claim: claim.clone(),
        related_claims: related.to_vec(),
        evidence_trail: evidence.to_vec(),
        trust_score_history: build_trust_history(claim, evidence, config),
    }
}
