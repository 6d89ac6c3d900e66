//! Deterministic reasoning chains for search results
//!
//! Every chain is a fixed-order sequence of steps built from numeric
//! inputs alone: no randomness, no clock reads, no generative text.
//! Identical inputs produce byte-identical chains (per ADR-007), which
//! is what makes result explanations testable and cacheable.

use serde::{Deserialize, Serialize};

use veriflow_domain::{Confidence, ReasoningStep, StepKind, TrustLevel};

/// Inputs to a reasoning chain, all caller-supplied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReasoningInputs {
    /// Semantic similarity of the result to the query [0.0, 1.0]
    pub similarity: f64,

    /// The result claim's trust score [0.0, 1.0]
    pub trust_score: f64,

    /// The result claim's verification count
    pub verification_count: u32,

    /// The result claim's age in whole days
    pub age_days: u32,

    /// Whether the result's media type differs from the query's
    pub cross_modal: bool,
}

/// An ordered, explainable justification for a single search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningChain {
    /// The steps, in fixed emission order
    pub steps: Vec<ReasoningStep>,
}

impl ReasoningChain {
    /// Confidence-weighted mean over the chain's steps
    ///
    /// High = 1.0, Medium = 0.6, Low = 0.3; an empty chain scores 0.0.
    pub fn confidence_score(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }

        let total: f64 = self.steps.iter().map(|s| s.confidence.weight()).sum();
        total / self.steps.len() as f64
    }
}

/// Build the reasoning chain for a single search hit
///
/// Step order is fixed regardless of input values:
/// 1. `SemanticMatch` - always
/// 2. `TrustAssessment` - always (a confidently negative assessment is
///    still a confident assessment)
/// 3. `Verification` - only when the claim has been verified at least once
/// 4. `Temporal` - always
/// 5. `CrossModal` - only for cross-modal hits
pub fn build_reasoning_chain(inputs: &ReasoningInputs) -> ReasoningChain {
    let mut steps = Vec::with_capacity(5);

    steps.push(semantic_match_step(inputs.similarity));
    steps.push(trust_assessment_step(inputs.trust_score));
    if inputs.verification_count > 0 {
        steps.push(verification_step(inputs.verification_count));
    }
    steps.push(temporal_step(inputs.age_days));
    if inputs.cross_modal {
        steps.push(cross_modal_step());
    }

    ReasoningChain { steps }
}

fn semantic_match_step(similarity: f64) -> ReasoningStep {
    let (explanation, confidence) = if similarity >= 0.85 {
        (
            format!("Very high semantic similarity ({:.3}) to query", similarity),
            Confidence::High,
        )
    } else if similarity >= 0.6 {
        (
            format!("Good semantic similarity ({:.3}) to query", similarity),
            Confidence::Medium,
        )
    } else {
        (
            format!("Moderate semantic similarity ({:.3}) to query", similarity),
            Confidence::Low,
        )
    };

    ReasoningStep::new(StepKind::SemanticMatch, explanation, confidence)
}

fn trust_assessment_step(trust_score: f64) -> ReasoningStep {
    let (explanation, confidence) = match TrustLevel::from_score(trust_score) {
        TrustLevel::Verified | TrustLevel::LikelyTrue => (
            format!("High trust score ({:.2}) indicates reliability", trust_score),
            Confidence::High,
        ),
        TrustLevel::Uncertain => (
            format!("Uncertain trust score ({:.2}) provides limited signal", trust_score),
            Confidence::Medium,
        ),
        TrustLevel::LikelyFalse | TrustLevel::Debunked => (
            format!("Low trust score ({:.2}) indicates unreliability", trust_score),
            Confidence::High,
        ),
    };

    ReasoningStep::new(StepKind::TrustAssessment, explanation, confidence)
}

fn verification_step(count: u32) -> ReasoningStep {
    let confidence = if count >= 5 {
        Confidence::High
    } else {
        Confidence::Medium
    };

    ReasoningStep::new(
        StepKind::Verification,
        format!("Claim has been verified {} time(s)", count),
        confidence,
    )
}

fn temporal_step(age_days: u32) -> ReasoningStep {
    let (explanation, confidence) = if age_days <= 7 {
        (
            format!("Recent claim ({} days old)", age_days),
            Confidence::High,
        )
    } else if age_days <= 30 {
        (
            format!("Claim is {} days old", age_days),
            Confidence::Medium,
        )
    } else {
        (
            format!("Older claim ({} days old) - may need re-verification", age_days),
            Confidence::Low,
        )
    };

    ReasoningStep::new(StepKind::Temporal, explanation, confidence)
}

fn cross_modal_step() -> ReasoningStep {
    ReasoningStep::new(
        StepKind::CrossModal,
        "Result stored under a different media type than the query; matched via shared embedding space"
            .to_string(),
        Confidence::Medium,
    )
}
