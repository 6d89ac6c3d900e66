//! Reconciliation of inconsistent stored snapshots

use veriflow_domain::{Claim, ClaimId, TrustLevel};

/// Non-fatal signal that a fetched snapshot violated its invariants
///
/// Raised when a stored `trust_level` does not match the stored
/// `trust_score` under the fixed thresholds, or when the score itself is
/// out of range. The operation that fetched the snapshot proceeds with
/// the corrected copy; persisting the correction is the caller's choice.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustAnomaly {
    /// The claim whose snapshot was inconsistent
    pub claim_id: ClaimId,

    /// Score as stored (possibly out of range)
    pub stored_score: f64,

    /// Level as stored
    pub stored_level: TrustLevel,

    /// Score after clamping
    pub corrected_score: f64,

    /// Level recomputed from the corrected score
    pub corrected_level: TrustLevel,
}

/// Repair a fetched claim snapshot
///
/// Clamps the trust score to [0.0, 1.0] and recomputes the trust level
/// from it. Returns the corrected snapshot and, when anything actually
/// changed, a [`TrustAnomaly`] describing the inconsistency. Never
/// fails and never blocks the calling operation; anomalies are also
/// logged at WARN for operators.
pub fn reconcile(claim: &Claim) -> (Claim, Option<TrustAnomaly>) {
    let corrected_score = if claim.trust_score.is_finite() {
        claim.trust_score.clamp(0.0, 1.0)
    } else {
        // A non-finite stored score carries no information; repair to neutral
        0.5
    };
    let corrected_level = TrustLevel::from_score(corrected_score);

    let consistent =
        corrected_score == claim.trust_score && corrected_level == claim.trust_level;
    if consistent {
        return (claim.clone(), None);
    }

    let anomaly = TrustAnomaly {
        claim_id: claim.id,
        stored_score: claim.trust_score,
        stored_level: claim.trust_level,
        corrected_score,
        corrected_level,
    };

    tracing::warn!(
        claim_id = %claim.id,
        stored_score = claim.trust_score,
        stored_level = claim.trust_level.as_str(),
        corrected_level = corrected_level.as_str(),
        "Inconsistent trust fields on stored claim; recomputed from score"
    );

    let mut corrected = claim.clone();
    corrected.trust_score = corrected_score;
    corrected.trust_level = corrected_level;

    (corrected, Some(anomaly))
}
