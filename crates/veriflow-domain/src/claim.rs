//! Claims and their identifiers - the unit everything else scores,
//! explains, and tracks

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::media::{MediaType, Platform};
use crate::trust_level::TrustLevel;

/// Unique identifier for a claim, backed by UUIDv7 (per ADR-006)
///
/// The v7 layout front-loads a millisecond timestamp, so ids sort by
/// observation time: "claims seen this week" is a plain range scan, and
/// ingesters on different hosts mint ids without coordinating. The id
/// doubles as a coarse observation timestamp via [`ClaimId::timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(u128);

impl ClaimId {
    /// Mint a fresh id for a newly observed claim
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Reconstruct an id from its raw u128, as stored by a provider
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an id from its hyphenated UUID string form
    ///
    /// # Examples
    ///
    /// ```
    /// use veriflow_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// let parsed = ClaimId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Raw u128 form, for providers that store ids numerically
    pub fn value(&self) -> u128 {
        self.0
    }

    /// When the claim was observed (milliseconds since Unix epoch)
    ///
    /// Extracted from the id itself; the top 48 bits of a UUIDv7 are the
    /// generation timestamp.
    pub fn timestamp(&self) -> u64 {
        (self.0 >> 80) as u64
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A claim - a tracked assertion with an associated trust estimate
///
/// Per ADR-001, a claim is a statement with a credibility estimate, not a
/// fact. This core never holds claim state: callers pass a snapshot in,
/// scoring returns a new snapshot, and persistence belongs to the caller.
///
/// Invariants:
/// - `trust_score` is always in [0.0, 1.0]
/// - `trust_level` is always `TrustLevel::from_score(trust_score)`
///
/// Both are enforced by [`Claim::new`] and [`Claim::set_trust_score`];
/// snapshots fetched from external storage should pass through
/// `veriflow_trust::reconcile` before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// Media type the claim was observed in
    pub media_type: MediaType,

    /// Platform where the claim originated
    pub platform: Platform,

    /// Source URL, when known
    pub source_url: Option<String>,

    /// When the claim was first observed (milliseconds since Unix epoch)
    pub created_at: u64,

    /// When the trust fields were last recomputed (milliseconds since Unix epoch)
    pub last_updated: u64,

    /// Continuous credibility estimate [0.0, 1.0]
    pub trust_score: f64,

    /// Discrete classification of `trust_score` (derived, never set directly)
    pub trust_level: TrustLevel,

    /// Number of independent verifications recorded for this claim
    pub verification_count: u32,

    /// Count of supporting entries in the evidence ledger
    pub supporting_evidence_count: u32,

    /// Count of refuting entries in the evidence ledger
    pub refuting_evidence_count: u32,

    /// Original text content, when the claim is textual
    pub original_text: Option<String>,

    /// Transcription, when the claim is audio or video
    pub transcription: Option<String>,

    /// Tags attached at ingestion (ordered set for deterministic output)
    pub tags: BTreeSet<String>,
}

impl Claim {
    /// Create a new claim snapshot with the given trust score
    ///
    /// The score is clamped to [0.0, 1.0] and the trust level derived from
    /// it, so the snapshot invariants hold by construction.
    pub fn new(
        id: ClaimId,
        media_type: MediaType,
        platform: Platform,
        trust_score: f64,
        created_at: u64,
    ) -> Self {
        let trust_score = trust_score.clamp(0.0, 1.0);
        Self {
            id,
            media_type,
            platform,
            source_url: None,
            created_at,
            last_updated: created_at,
            trust_score,
            trust_level: TrustLevel::from_score(trust_score),
            verification_count: 0,
            supporting_evidence_count: 0,
            refuting_evidence_count: 0,
            original_text: None,
            transcription: None,
            tags: BTreeSet::new(),
        }
    }

    /// Replace the trust score, clamping it and re-deriving the trust level
    ///
    /// `updated_at` becomes the new `last_updated` timestamp. This is the
    /// only sanctioned way to move a snapshot's score.
    pub fn set_trust_score(&mut self, score: f64, updated_at: u64) {
        self.trust_score = score.clamp(0.0, 1.0);
        self.trust_level = TrustLevel::from_score(self.trust_score);
        self.last_updated = updated_at;
    }

    /// Age of the claim in whole days at the given instant
    ///
    /// Saturates at zero when `now_ms` precedes `created_at`.
    pub fn age_days(&self, now_ms: u64) -> u32 {
        const MS_PER_DAY: u64 = 86_400_000;
        (now_ms.saturating_sub(self.created_at) / MS_PER_DAY) as u32
    }

    /// Whole days since the trust fields were last recomputed
    pub fn days_since_update(&self, now_ms: u64) -> u32 {
        const MS_PER_DAY: u64 = 86_400_000;
        (now_ms.saturating_sub(self.last_updated) / MS_PER_DAY) as u32
    }
}
