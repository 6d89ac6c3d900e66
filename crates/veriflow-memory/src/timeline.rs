//! Chronological timeline assembly

use veriflow_domain::traits::RelatedClaim;
use veriflow_domain::{Claim, EvidenceEntry, TimelineEntry, TimelineEventKind};
use veriflow_trust::TrustConfig;

use crate::history::build_trust_history;

/// Merge a claim, its evidence ledger, and its related claims into one
/// chronologically ordered timeline
///
/// Emits:
/// - one `Creation` entry at the claim's creation timestamp
/// - one `EvidenceAdded` entry per ledger entry
/// - one `LevelTransition` entry per trust-level boundary crossing found
///   by replaying the ledger (see [`build_trust_history`])
/// - one `RelatedAppearance` entry per related claim whose timestamp
///   differs from the target's
///
/// Entries sort by timestamp ascending; ties break by the fixed
/// event-kind priority on [`TimelineEventKind`]. The sort is stable, so
/// entries equal under both keys keep their emission order.
pub fn build_timeline(
    claim: &Claim,
    evidence: &[EvidenceEntry],
    related: &[RelatedClaim],
    config: &TrustConfig,
) -> Vec<TimelineEntry> {
    let mut timeline = Vec::new();

    timeline.push(TimelineEntry::new(
        claim.created_at,
        TimelineEventKind::Creation,
        format!("Claim first appeared on {}", claim.platform.as_str()),
        claim.id.to_string(),
    ));

    for entry in evidence {
        timeline.push(TimelineEntry::new(
            entry.timestamp,
            TimelineEventKind::EvidenceAdded,
            format!("{} evidence found", entry.direction()),
            entry.id.to_string(),
        ));
    }

    // Boundary crossings come out of the replayed trajectory: compare
    // each point's level against the previous one
    let history = build_trust_history(claim, evidence, config);
    for window in history.windows(2) {
        let (before, after) = (&window[0], &window[1]);
        if before.trust_level != after.trust_level {
            timeline.push(TimelineEntry::new(
                after.timestamp,
                TimelineEventKind::LevelTransition,
                format!(
                    "Trust level changed from {} to {}",
                    before.trust_level.as_str(),
                    after.trust_level.as_str()
                ),
                claim.id.to_string(),
            ));
        }
    }

    for rel in related {
        if rel.claim.created_at == claim.created_at {
            continue;
        }
        timeline.push(TimelineEntry::new(
            rel.claim.created_at,
            TimelineEventKind::RelatedAppearance,
            format!("Similar claim found on {}", rel.claim.platform.as_str()),
            rel.claim_id.to_string(),
        ));
    }

    timeline.sort_by_key(|entry| entry.sort_key());
    timeline
}
