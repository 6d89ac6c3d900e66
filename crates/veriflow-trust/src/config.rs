//! Configuration for trust score computation
//!
//! Defaults are the policy constants the scoring model was tuned with;
//! deployments that override them own the consequences.

use serde::{Deserialize, Serialize};

/// Weight of source credibility in the initial score (default: 0.6)
pub const SOURCE_WEIGHT: f64 = 0.6;

/// Weight of platform reliability in the initial score (default: 0.4)
pub const PLATFORM_WEIGHT: f64 = 0.4;

/// Score inertia under new evidence (default: 0.3)
pub const MOMENTUM: f64 = 0.3;

/// Per-rank recency decay applied to sorted evidence (default: 0.95)
pub const EVIDENCE_RECENCY_DECAY: f64 = 0.95;

/// Daily decay rate pulling unupdated scores toward neutral (default: 0.01)
pub const DAILY_DECAY_RATE: f64 = 0.01;

/// Configuration for the trust score calculator
///
/// Serde-derived so it can sit in the application's TOML config:
///
/// ```toml
/// [trust]
/// source_weight = 0.6
/// platform_weight = 0.4
/// momentum = 0.3
/// evidence_recency_decay = 0.95
/// daily_decay_rate = 0.01
/// ```
///
/// # Examples
///
/// ```
/// use veriflow_trust::TrustConfig;
///
/// let config = TrustConfig::default();
/// assert_eq!(config.momentum, 0.3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Weight of source credibility in the initial score
    /// Default: 0.6 (source outweighs platform 60/40)
    pub source_weight: f64,

    /// Weight of platform reliability in the initial score
    /// Default: 0.4
    pub platform_weight: f64,

    /// Inertia of the current score under new evidence [0.0, 1.0]
    /// A single batch of evidence can move the score at most
    /// `(1 - momentum)` of the distance to 0 or 1.
    /// Default: 0.3
    pub momentum: f64,

    /// Per-rank decay applied to evidence sorted newest-first
    /// The i-th entry (0-indexed) is weighted `decay^i`.
    /// Default: 0.95
    pub evidence_recency_decay: f64,

    /// Daily rate at which an unupdated score is pulled toward 0.5
    /// Default: 0.01
    pub daily_decay_rate: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            source_weight: SOURCE_WEIGHT,
            platform_weight: PLATFORM_WEIGHT,
            momentum: MOMENTUM,
            evidence_recency_decay: EVIDENCE_RECENCY_DECAY,
            daily_decay_rate: DAILY_DECAY_RATE,
        }
    }
}
