//! Search orchestrator error types

use thiserror::Error;

use veriflow_domain::ClaimId;

/// Errors that can occur during search orchestration
#[derive(Error, Debug)]
pub enum SearchError {
    /// Ranking weights are negative or do not sum to 1.0
    #[error("Invalid ranking weights: similarity {similarity_weight} + trust {trust_weight} must sum to 1.0")]
    InvalidWeights {
        /// Configured similarity weight
        similarity_weight: f64,
        /// Configured trust weight
        trust_weight: f64,
    },

    /// A referenced claim does not exist in the provider
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    /// The Vector Similarity Provider failed
    #[error("Provider error: {0}")]
    Provider(String),
}
