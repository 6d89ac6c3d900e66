//! Trust score history replayed from the evidence ledger

use serde::{Deserialize, Serialize};

use veriflow_domain::{Claim, EvidenceEntry, EvidenceId, TrustLevel};
use veriflow_trust::{initial_score, trust_level, update_with_evidence, TrustConfig};

/// One point in a claim's trust trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustHistoryPoint {
    /// When this point applies (milliseconds since Unix epoch)
    pub timestamp: u64,

    /// Score after the event at this point
    pub trust_score: f64,

    /// Classification of `trust_score`
    pub trust_level: TrustLevel,

    /// What happened ("Claim first observed", "Supporting evidence added", ...)
    pub event: String,

    /// The evidence entry behind this point, when there is one
    pub evidence_id: Option<EvidenceId>,
}

/// Replay the evidence ledger into a trust trajectory
///
/// The trajectory starts at the claim's creation with the default
/// initial score (neutral source and platform), then applies each ledger
/// entry one at a time in chronological order. Replaying from the
/// observation baseline rather than the snapshot's current score keeps
/// the history self-consistent: the first point never sits above the
/// evidence that produced the later ones.
///
/// Ties in evidence timestamps preserve ledger order (stable sort).
pub fn build_trust_history(
    claim: &Claim,
    evidence: &[EvidenceEntry],
    config: &TrustConfig,
) -> Vec<TrustHistoryPoint> {
    let mut history = Vec::with_capacity(evidence.len() + 1);

    let mut current = initial_score(0.5, 0.5, config);
    history.push(TrustHistoryPoint {
        timestamp: claim.created_at,
        trust_score: current,
        trust_level: trust_level(current),
        event: "Claim first observed".to_string(),
        evidence_id: None,
    });

    let mut sorted: Vec<&EvidenceEntry> = evidence.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    for entry in sorted {
        current = update_with_evidence(current, std::slice::from_ref(entry), config);

        history.push(TrustHistoryPoint {
            timestamp: entry.timestamp,
            trust_score: current,
            trust_level: trust_level(current),
            event: format!("{} evidence added", entry.direction()),
            evidence_id: Some(entry.id),
        });
    }

    history
}
