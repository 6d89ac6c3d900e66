//! VeriFlow Trust Score Calculator
//!
//! Pure functions that move a claim's credibility estimate as evidence
//! accumulates and time passes:
//!
//! - [`initial_score`]: seed score for a newly observed claim from source
//!   and platform reliability
//! - [`update_with_evidence`]: evidence-weighted update with recency
//!   weighting and score inertia
//! - [`decay`]: temporal pull toward neutral for claims without updates
//! - [`trust_level`]: discrete five-band classification
//! - [`credibility_boost`]: bounded boost from independent verifications
//! - [`reconcile`]: repair of inconsistent stored snapshots with a
//!   non-fatal anomaly signal
//!
//! # Purity
//!
//! Every function here is a total, side-effect-free function of its
//! explicit inputs: no I/O, no clock reads, no shared state. Invalid
//! numeric inputs are clamped rather than rejected. Any number of
//! invocations may run in parallel without coordination; the one caveat
//! lives at the caller's boundary (per ADR-008): concurrent
//! read-modify-write recalculation for the *same* claim must be
//! serialized or the second write silently wins.
//!
//! # Decay baselines
//!
//! [`decay`] is a function of the original score and the *total* elapsed
//! days from a single durable baseline (per ADR-009). Chaining two calls
//! over split day-ranges compounds from an already-decayed intermediate
//! and understates decay; callers must keep one last-known score and one
//! elapsed-day count.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod boost;
mod calculator;
mod config;
mod reconcile;

pub use boost::credibility_boost;
pub use calculator::{decay, initial_score, trust_level, update_with_evidence};
pub use config::TrustConfig;
pub use reconcile::{reconcile, TrustAnomaly};
