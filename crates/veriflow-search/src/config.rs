//! Configuration for hybrid ranking and evolution traversal

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default weight of semantic similarity in the combined score
pub const SIMILARITY_WEIGHT: f64 = 0.7;

/// Default weight of the trust score in the combined score
pub const TRUST_WEIGHT: f64 = 0.3;

/// Default minimum similarity for an edge in the evolution graph
pub const MIN_RELATED_SIMILARITY: f64 = 0.5;

/// Default maximum hops in an evolution traversal
pub const MAX_DEPTH: usize = 3;

/// Default maximum neighbors explored per hop
pub const MAX_FAN_OUT: usize = 5;

/// Configuration for the hybrid search orchestrator
///
/// The two ranking weights must sum to 1.0 (within epsilon) so the
/// combined score stays in [0.0, 1.0]; [`SearchConfig::validated`]
/// enforces that. Serde-derived for the application's TOML config:
///
/// ```toml
/// [search]
/// similarity_weight = 0.7
/// trust_weight = 0.3
/// min_related_similarity = 0.5
/// max_depth = 3
/// max_fan_out = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of semantic similarity in the combined score
    /// Default: 0.7
    pub similarity_weight: f64,

    /// Weight of the claim's trust score in the combined score
    /// Default: 0.3
    pub trust_weight: f64,

    /// Minimum similarity for a related-claim edge to enter the
    /// evolution graph
    /// Default: 0.5
    pub min_related_similarity: f64,

    /// Maximum hops from the origin in an evolution traversal
    /// Default: 3
    pub max_depth: usize,

    /// Maximum neighbors explored per claim per hop
    /// Default: 5
    pub max_fan_out: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            similarity_weight: SIMILARITY_WEIGHT,
            trust_weight: TRUST_WEIGHT,
            min_related_similarity: MIN_RELATED_SIMILARITY,
            max_depth: MAX_DEPTH,
            max_fan_out: MAX_FAN_OUT,
        }
    }
}

impl SearchConfig {
    /// Validate the configuration, consuming and returning it
    ///
    /// Rejects ranking weights that are negative or do not sum to 1.0
    /// within 1e-9.
    pub fn validated(self) -> Result<Self, SearchError> {
        if self.similarity_weight < 0.0 || self.trust_weight < 0.0 {
            return Err(SearchError::InvalidWeights {
                similarity_weight: self.similarity_weight,
                trust_weight: self.trust_weight,
            });
        }
        if (self.similarity_weight + self.trust_weight - 1.0).abs() > 1e-9 {
            return Err(SearchError::InvalidWeights {
                similarity_weight: self.similarity_weight,
                trust_weight: self.trust_weight,
            });
        }
        Ok(self)
    }

    /// Construct a config with custom ranking weights
    pub fn with_weights(similarity_weight: f64, trust_weight: f64) -> Result<Self, SearchError> {
        Self {
            similarity_weight,
            trust_weight,
            ..Self::default()
        }
        .validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.similarity_weight, 0.7);
        assert_eq!(config.trust_weight, 0.3);
        assert_eq!(config.min_related_similarity, 0.5);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_fan_out, 5);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(SearchConfig::default().validated().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        assert!(SearchConfig::with_weights(0.5, 0.5).is_ok());
        assert!(SearchConfig::with_weights(0.8, 0.3).is_err());
        assert!(SearchConfig::with_weights(0.7, 0.2).is_err());
    }

    #[test]
    fn test_negative_weights_rejected() {
        assert!(SearchConfig::with_weights(1.3, -0.3).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_str = r#"
            similarity_weight = 0.6
            trust_weight = 0.4
            min_related_similarity = 0.7
            max_depth = 2
            max_fan_out = 10
        "#;

        let config: SearchConfig = toml::from_str(toml_str).unwrap();
        let config = config.validated().unwrap();
        assert_eq!(config.similarity_weight, 0.6);
        assert_eq!(config.max_fan_out, 10);
    }
}
