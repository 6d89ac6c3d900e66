//! VeriFlow Hybrid Search
//!
//! Turns similarity-ranked candidates from the Vector Similarity Provider
//! into trust-aware, explainable results:
//!
//! - [`build_reasoning_chain`]: deterministic justification for a single
//!   hit (semantic match, trust assessment, verification, recency,
//!   cross-modal note)
//! - [`hybrid_rank`]: re-ranks candidates by a weighted combination of
//!   semantic similarity and trust score, annotating each result with a
//!   reasoning chain
//! - [`find_claim_evolution_path`]: bounded breadth-first walk over
//!   related-claim edges showing how a claim morphed across platforms
//!   and media types
//!
//! The orchestrator never touches a vector or a distance function; the
//! provider filters and orders candidates (per ADR-005), and everything
//! here is a deterministic function of those inputs plus an explicit
//! `now` supplied by the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod evolution;
mod ranker;
mod reasoning;

pub use config::SearchConfig;
pub use error::SearchError;
pub use evolution::{find_claim_evolution_path, EdgeRelation, EvolutionEdge, EvolutionPath};
pub use ranker::{hybrid_rank, RankedResult};
pub use reasoning::{build_reasoning_chain, ReasoningChain, ReasoningInputs};
