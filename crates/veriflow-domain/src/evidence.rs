//! Evidence ledger entries (per ADR-002 - append-only, immutable)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::claim::ClaimId;
use crate::media::MediaType;

/// Unique identifier for an evidence entry (UUIDv7, per ADR-006)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceId(u128);

impl EvidenceId {
    /// Mint a fresh id for a new ledger entry
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Reconstruct an id from its raw u128, as stored by a provider
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Raw u128 form, for providers that store ids numerically
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for EvidenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Validation failures for evidence submitted at the boundary
///
/// The scoring calculator assumes well-formed entries; malformed evidence
/// is rejected here before it ever reaches a score computation.
#[derive(Debug, Clone, PartialEq)]
pub enum EvidenceError {
    /// Credibility outside [0.0, 1.0] or not a finite number
    InvalidCredibility(f64),

    /// Entry has no content
    EmptyContent,
}

impl fmt::Display for EvidenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvidenceError::InvalidCredibility(c) => {
                write!(f, "Credibility {} is outside [0.0, 1.0]", c)
            }
            EvidenceError::EmptyContent => write!(f, "Evidence entry has no content"),
        }
    }
}

impl std::error::Error for EvidenceError {}

/// A piece of evidence supporting or refuting a claim
///
/// Entries are immutable once created and ordered by timestamp; the
/// ledger they form is append-only. Nothing in this core edits or
/// deletes an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    /// Unique identifier
    pub id: EvidenceId,

    /// The claim this entry belongs to
    pub claim_id: ClaimId,

    /// Media type of the evidence itself
    pub media_type: MediaType,

    /// Evidence content (text, transcription, or description)
    pub content: String,

    /// Source URL, when known
    pub source_url: Option<String>,

    /// When the evidence was recorded (milliseconds since Unix epoch)
    pub timestamp: u64,

    /// Whether the entry supports (true) or refutes (false) the claim
    pub is_supporting: bool,

    /// Credibility of the evidence source [0.0, 1.0]
    pub credibility: f64,
}

impl EvidenceEntry {
    /// Create a validated evidence entry
    ///
    /// Rejects credibility outside [0.0, 1.0] (including NaN) and empty
    /// content. Well-formedness is established once, here, so downstream
    /// scoring never re-validates.
    pub fn new(
        claim_id: ClaimId,
        media_type: MediaType,
        content: String,
        timestamp: u64,
        is_supporting: bool,
        credibility: f64,
    ) -> Result<Self, EvidenceError> {
        if !credibility.is_finite() || !(0.0..=1.0).contains(&credibility) {
            return Err(EvidenceError::InvalidCredibility(credibility));
        }
        if content.trim().is_empty() {
            return Err(EvidenceError::EmptyContent);
        }

        Ok(Self {
            id: EvidenceId::new(),
            claim_id,
            media_type,
            content,
            source_url: None,
            timestamp,
            is_supporting,
            credibility,
        })
    }

    /// Attach a source URL
    pub fn with_source_url(mut self, url: String) -> Self {
        self.source_url = Some(url);
        self
    }

    /// Human label for the entry's direction ("Supporting" / "Refuting")
    pub fn direction(&self) -> &'static str {
        if self.is_supporting {
            "Supporting"
        } else {
            "Refuting"
        }
    }
}
