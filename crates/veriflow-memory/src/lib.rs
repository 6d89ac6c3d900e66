//! VeriFlow Memory Layer
//!
//! Merges a claim snapshot, its evidence ledger, and its related claims
//! into deterministic caller-facing artifacts:
//!
//! - [`build_trust_history`]: the score/level trajectory replayed over
//!   the ledger in chronological order
//! - [`build_timeline`]: one chronologically ordered timeline of
//!   creation, evidence, level transitions, and related appearances
//! - [`summarize_evidence`]: counts and mean credibilities per side
//! - [`build_provenance`]: the full provenance report (timeline +
//!   evidence summary + trust assessment + recommendation)
//! - [`build_claim_evolution`]: the raw evolution bundle for callers
//!   that want the pieces rather than the report
//!
//! Everything here is a pure function over supplied snapshots; nothing
//! reads a clock or a store, so identical inputs always reproduce the
//! same artifact byte for byte.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod evolution;
mod history;
mod report;
mod summary;
mod timeline;

pub use evolution::{build_claim_evolution, ClaimEvolution};
pub use history::{build_trust_history, TrustHistoryPoint};
pub use report::{build_provenance, recommendation, trust_assessment, ProvenanceReport};
pub use summary::{render_evidence_summary, summarize_evidence, EvidenceSummary};
pub use timeline::build_timeline;
