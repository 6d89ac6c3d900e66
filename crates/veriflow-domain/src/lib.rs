//! VeriFlow Domain Layer
//!
//! This crate contains the core data model for VeriFlow: claims observed
//! across media types, the evidence ledger that supports or refutes them,
//! and the value objects that trust scoring, provenance reconstruction,
//! and explainable search are built from.
//!
//! ## Key Concepts
//!
//! - **Claim**: a tracked assertion with a continuous trust score, not a fact
//! - **Evidence Entry**: an immutable, timestamped, credibility-weighted
//!   data point supporting or refuting a claim (per ADR-002 the ledger is
//!   append-only; scores are recomputed, never mutated in place)
//! - **Trust Level**: discrete five-band classification of a trust score
//! - **Reasoning Step**: one link in a deterministic justification chain
//! - **Timeline Entry**: one event in a claim's chronological evolution
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Near-zero external dependencies (uuid for identifiers, serde for
//!   payload interchange across the provider boundary)
//! - Pure data and invariants only
//! - Embedding generation, vector similarity search, and persistence are
//!   trait boundaries (see [`traits`]); implementations live elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod evidence;
pub mod media;
pub mod reasoning;
pub mod timeline;
pub mod traits;
pub mod trust_level;

// Re-exports for convenience
pub use claim::{Claim, ClaimId};
pub use evidence::{EvidenceEntry, EvidenceError, EvidenceId};
pub use media::{MediaType, Platform};
pub use reasoning::{Confidence, ReasoningStep, StepKind};
pub use timeline::{TimelineEntry, TimelineEventKind};
pub use trust_level::TrustLevel;
