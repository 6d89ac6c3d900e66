//! Reasoning chain value objects (per ADR-007 - deterministic explanations)
//!
//! A reasoning chain is an ordered sequence of steps justifying why a
//! search result was returned. Chains are built by `veriflow-search`; the
//! value objects live here so the memory and API layers can consume them
//! without depending on the orchestrator.

use serde::{Deserialize, Serialize};

/// The kind of justification a reasoning step carries
///
/// Steps always appear in this order within a chain:
/// SemanticMatch, TrustAssessment, Verification, Temporal, CrossModal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// How close the result is to the query in embedding space
    SemanticMatch,

    /// What the claim's trust score says about its reliability
    TrustAssessment,

    /// Independent verifications recorded for the claim
    Verification,

    /// How fresh or stale the claim is
    Temporal,

    /// The result's media type differs from the query's
    CrossModal,
}

impl StepKind {
    /// Get the step kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::SemanticMatch => "semantic_match",
            StepKind::TrustAssessment => "trust_assessment",
            StepKind::Verification => "verification",
            StepKind::Temporal => "temporal",
            StepKind::CrossModal => "cross_modal",
        }
    }
}

/// Confidence bucket for a single reasoning step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Weak signal
    Low,

    /// Moderate signal
    Medium,

    /// Strong signal (in either direction)
    High,
}

impl Confidence {
    /// Numeric weight used when aggregating a chain into one score
    pub fn weight(&self) -> f64 {
        match self {
            Confidence::High => 1.0,
            Confidence::Medium => 0.6,
            Confidence::Low => 0.3,
        }
    }

    /// Get the confidence name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// One link in a reasoning chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    /// What this step justifies
    pub kind: StepKind,

    /// Human-readable explanation (deterministic template, no wall clock)
    pub explanation: String,

    /// How strong this signal is
    pub confidence: Confidence,
}

impl ReasoningStep {
    /// Create a reasoning step
    pub fn new(kind: StepKind, explanation: String, confidence: Confidence) -> Self {
        Self {
            kind,
            explanation,
            confidence,
        }
    }
}
