//! Credibility boost from verification sources

/// Bounded boost earned from independent verifications
///
/// Each verification source is worth 0.05 up to 0.15 total; official or
/// authoritative sources are worth 0.075 each up to another 0.15. The
/// combined boost is capped at 0.3 so verification alone can never carry
/// a claim across more than one trust band.
///
/// # Examples
///
/// ```
/// use veriflow_trust::credibility_boost;
///
/// let boost = credibility_boost(2, 1);
/// assert!((boost - 0.175).abs() < 1e-12);
///
/// // Saturates regardless of how many sources pile on
/// assert_eq!(credibility_boost(100, 100), 0.3);
/// ```
pub fn credibility_boost(verification_sources: usize, official_sources: usize) -> f64 {
    let verification = (verification_sources as f64 * 0.05).min(0.15);
    let official = (official_sources as f64 * 0.075).min(0.15);

    (verification + official).min(0.3)
}
