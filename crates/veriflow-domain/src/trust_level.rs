//! Trust level classification (per ADR-003 - five fixed bands)

use serde::{Deserialize, Serialize};

/// Discrete five-band classification of a trust score
///
/// The bands are non-overlapping, exhaustive over [0.0, 1.0], and
/// boundary-inclusive on the low side:
///
/// | Level | Range |
/// |-------|-------|
/// | `Debunked` | [0.00, 0.20) |
/// | `LikelyFalse` | [0.20, 0.40) |
/// | `Uncertain` | [0.40, 0.70) |
/// | `LikelyTrue` | [0.70, 0.85) |
/// | `Verified` | [0.85, 1.00] |
///
/// The thresholds are policy constants, not configuration: every stored
/// `trust_level` must equal `TrustLevel::from_score(trust_score)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// Overwhelming refuting evidence [0.00, 0.20)
    Debunked,

    /// Evidence leans refuting [0.20, 0.40)
    LikelyFalse,

    /// Not enough signal either way [0.40, 0.70)
    Uncertain,

    /// Evidence leans supporting [0.70, 0.85)
    LikelyTrue,

    /// Strongly corroborated [0.85, 1.00]
    Verified,
}

/// Lower bound of the `Verified` band
pub const VERIFIED_THRESHOLD: f64 = 0.85;
/// Lower bound of the `LikelyTrue` band
pub const LIKELY_TRUE_THRESHOLD: f64 = 0.70;
/// Lower bound of the `Uncertain` band
pub const UNCERTAIN_THRESHOLD: f64 = 0.40;
/// Lower bound of the `LikelyFalse` band
pub const LIKELY_FALSE_THRESHOLD: f64 = 0.20;

impl TrustLevel {
    /// Classify a trust score into its band
    ///
    /// Total over all real inputs: the score is clamped to [0.0, 1.0]
    /// first, so NaN-free out-of-range inputs classify rather than fail.
    /// Monotonic non-decreasing in the score.
    ///
    /// # Examples
    ///
    /// ```
    /// use veriflow_domain::TrustLevel;
    ///
    /// assert_eq!(TrustLevel::from_score(0.15), TrustLevel::Debunked);
    /// assert_eq!(TrustLevel::from_score(0.40), TrustLevel::Uncertain);
    /// assert_eq!(TrustLevel::from_score(0.85), TrustLevel::Verified);
    /// ```
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 1.0);
        if score >= VERIFIED_THRESHOLD {
            TrustLevel::Verified
        } else if score >= LIKELY_TRUE_THRESHOLD {
            TrustLevel::LikelyTrue
        } else if score >= UNCERTAIN_THRESHOLD {
            TrustLevel::Uncertain
        } else if score >= LIKELY_FALSE_THRESHOLD {
            TrustLevel::LikelyFalse
        } else {
            TrustLevel::Debunked
        }
    }

    /// Get the trust level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Debunked => "debunked",
            TrustLevel::LikelyFalse => "likely_false",
            TrustLevel::Uncertain => "uncertain",
            TrustLevel::LikelyTrue => "likely_true",
            TrustLevel::Verified => "verified",
        }
    }

    /// Parse a trust level from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debunked" => Some(TrustLevel::Debunked),
            "likely_false" => Some(TrustLevel::LikelyFalse),
            "uncertain" => Some(TrustLevel::Uncertain),
            "likely_true" => Some(TrustLevel::LikelyTrue),
            "verified" => Some(TrustLevel::Verified),
            _ => None,
        }
    }
}

impl std::str::FromStr for TrustLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid trust level: {}", s))
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
