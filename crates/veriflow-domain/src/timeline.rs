//! Timeline entries for chronological provenance reconstruction

use serde::{Deserialize, Serialize};

/// The kind of event a timeline entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    /// The claim was first observed
    Creation,

    /// An entry was appended to the evidence ledger
    EvidenceAdded,

    /// The recomputed trust score crossed a trust-level boundary
    LevelTransition,

    /// A similar claim surfaced elsewhere
    RelatedAppearance,
}

impl TimelineEventKind {
    /// Tie-break priority for entries sharing a timestamp
    ///
    /// Creation < EvidenceAdded < LevelTransition < RelatedAppearance.
    /// This ordering is part of the timeline contract, not incidental:
    /// a level transition caused by an evidence entry sorts after that
    /// entry, and related appearances always come last at an instant.
    pub fn priority(&self) -> u8 {
        match self {
            TimelineEventKind::Creation => 0,
            TimelineEventKind::EvidenceAdded => 1,
            TimelineEventKind::LevelTransition => 2,
            TimelineEventKind::RelatedAppearance => 3,
        }
    }

    /// Get the event kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineEventKind::Creation => "creation",
            TimelineEventKind::EvidenceAdded => "evidence_added",
            TimelineEventKind::LevelTransition => "level_transition",
            TimelineEventKind::RelatedAppearance => "related_appearance",
        }
    }
}

/// One event in a claim's chronological evolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// When the event happened (milliseconds since Unix epoch)
    pub timestamp: u64,

    /// What kind of event this is
    pub kind: TimelineEventKind,

    /// Human-readable description (deterministic template)
    pub description: String,

    /// String form of the originating entity id (claim or evidence)
    pub origin_id: String,
}

impl TimelineEntry {
    /// Create a timeline entry
    pub fn new(
        timestamp: u64,
        kind: TimelineEventKind,
        description: String,
        origin_id: String,
    ) -> Self {
        Self {
            timestamp,
            kind,
            description,
            origin_id,
        }
    }

    /// Composite sort key: timestamp ascending, then event-kind priority
    pub fn sort_key(&self) -> (u64, u8) {
        (self.timestamp, self.kind.priority())
    }
}
