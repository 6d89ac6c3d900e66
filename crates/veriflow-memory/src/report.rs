//! Provenance reports: timeline + evidence summary + recommendation

use serde::{Deserialize, Serialize};

use veriflow_domain::traits::RelatedClaim;
use veriflow_domain::{Claim, ClaimId, EvidenceEntry, TimelineEntry, TrustLevel};
use veriflow_trust::TrustConfig;

use crate::summary::{render_evidence_summary, summarize_evidence, EvidenceSummary};
use crate::timeline::build_timeline;

/// Comprehensive provenance report for a single claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceReport {
    /// The claim the report describes
    pub claim_id: ClaimId,

    /// The claim snapshot the report was built from
    pub current_status: Claim,

    /// Prose assessment of the current trust level (fixed template)
    pub trust_assessment: String,

    /// Structured ledger summary
    pub evidence_summary: EvidenceSummary,

    /// Human-readable ledger summary
    pub evidence_summary_text: String,

    /// Chronological evolution timeline
    pub timeline: Vec<TimelineEntry>,

    /// Related claims the report considered
    pub related_claims: Vec<RelatedClaim>,

    /// Sharing recommendation keyed by the final trust level
    pub recommendation: String,
}

/// Deterministic recommendation text for a trust level
///
/// Fixed templates, not generative output: the same level always yields
/// the same wording.
pub fn recommendation(level: TrustLevel) -> &'static str {
    match level {
        TrustLevel::Verified | TrustLevel::LikelyTrue => {
            "This claim appears credible. However, always verify with primary sources."
        }
        TrustLevel::Uncertain => {
            "Exercise caution. More evidence is needed to assess this claim's veracity."
        }
        TrustLevel::LikelyFalse | TrustLevel::Debunked => {
            "This claim is unreliable. Do not share without fact-checking."
        }
    }
}

/// Prose assessment of a claim's current trust standing
///
/// Template embeds the level (title-cased) and the score to two
/// decimals, followed by a level-specific verdict sentence.
pub fn trust_assessment(claim: &Claim) -> String {
    let level_title = match claim.trust_level {
        TrustLevel::Debunked => "Debunked",
        TrustLevel::LikelyFalse => "Likely False",
        TrustLevel::Uncertain => "Uncertain",
        TrustLevel::LikelyTrue => "Likely True",
        TrustLevel::Verified => "Verified",
    };

    let verdict = match claim.trust_level {
        TrustLevel::Verified => "This claim has been verified by multiple credible sources.",
        TrustLevel::LikelyTrue => "This claim is likely true based on available evidence.",
        TrustLevel::Uncertain => {
            "Insufficient evidence to determine the veracity of this claim."
        }
        TrustLevel::LikelyFalse => "This claim is likely false based on available evidence.",
        TrustLevel::Debunked => "This claim has been debunked by authoritative sources.",
    };

    format!(
        "Current trust level: {} (score: {:.2}). {}",
        level_title, claim.trust_score, verdict
    )
}

/// Build a full provenance report from supplied snapshots
///
/// Pure assembly: the claim, its related claims, and its evidence ledger
/// are fetched by the caller; this function only merges them.
pub fn build_provenance(
    claim: &Claim,
    related: &[RelatedClaim],
    evidence: &[EvidenceEntry],
    config: &TrustConfig,
) -> ProvenanceReport {
    tracing::debug!(
        claim_id = %claim.id,
        evidence = evidence.len(),
        related = related.len(),
        "Assembling provenance report"
    );

    ProvenanceReport {
        claim_id: claim.id,
        current_status: claim.clone(),
        trust_assessment: trust_assessment(claim),
        evidence_summary: summarize_evidence(evidence),
        evidence_summary_text: render_evidence_summary(evidence),
        timeline: build_timeline(claim, evidence, related, config),
        related_claims: related.to_vec(),
        recommendation: recommendation(claim.trust_level).to_string(),
    }
}
