//! Core scoring functions: initial score, evidence update, temporal decay

use veriflow_domain::{EvidenceEntry, TrustLevel};

use crate::config::TrustConfig;

/// Seed a trust score for a newly observed claim
///
/// Weighted average of the source's credibility and the platform's
/// reliability, favoring the source 60/40 under the default config.
/// Inputs and result are clamped to [0.0, 1.0].
///
/// # Examples
///
/// ```
/// use veriflow_trust::{initial_score, TrustConfig};
///
/// let score = initial_score(0.9, 0.7, &TrustConfig::default());
/// assert!((score - 0.82).abs() < 1e-12);
/// ```
pub fn initial_score(
    source_credibility: f64,
    platform_reliability: f64,
    config: &TrustConfig,
) -> f64 {
    let source = source_credibility.clamp(0.0, 1.0);
    let platform = platform_reliability.clamp(0.0, 1.0);

    (source * config.source_weight + platform * config.platform_weight).clamp(0.0, 1.0)
}

/// Update a trust score from a batch of evidence
///
/// Evidence is sorted newest-first and the i-th entry weighted
/// `evidence_recency_decay^i`, so fresh evidence dominates. The weighted
/// support ratio is then blended with the current score under momentum:
/// one batch can move the score at most `(1 - momentum)` of the distance
/// to 0 or 1.
///
/// An empty batch is a no-op, not an error. A batch whose credibilities
/// are all zero carries no signal and is likewise a no-op.
pub fn update_with_evidence(
    current_score: f64,
    evidence: &[EvidenceEntry],
    config: &TrustConfig,
) -> f64 {
    let current = current_score.clamp(0.0, 1.0);

    if evidence.is_empty() {
        return current;
    }

    // Newest first; stable so same-timestamp entries keep ledger order
    let mut sorted: Vec<&EvidenceEntry> = evidence.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut supporting_weight = 0.0;
    let mut refuting_weight = 0.0;

    for (rank, entry) in sorted.iter().enumerate() {
        let recency = config.evidence_recency_decay.powi(rank as i32);
        let impact = entry.credibility * recency;

        if entry.is_supporting {
            supporting_weight += impact;
        } else {
            refuting_weight += impact;
        }
    }

    let total_weight = supporting_weight + refuting_weight;
    if total_weight == 0.0 {
        // All-zero credibilities: no signal, leave the score alone
        return current;
    }

    let support_ratio = supporting_weight / total_weight;
    let new_score = current * config.momentum + support_ratio * (1.0 - config.momentum);

    new_score.clamp(0.0, 1.0)
}

/// Pull an unupdated score toward neutral 0.5
///
/// `factor = (1 - daily_decay_rate)^days`; the score moves that fraction
/// of its distance from 0.5. Pure function of the *original* score and
/// the total elapsed days: chaining calls over split day-ranges
/// compounds from intermediate decayed values and understates decay, so
/// callers keep a single durable baseline (per ADR-009).
///
/// `decay(s, 0)` returns exactly `s` for in-range `s`.
pub fn decay(score: f64, days_since_update: u32, config: &TrustConfig) -> f64 {
    let score = score.clamp(0.0, 1.0);
    let factor = (1.0 - config.daily_decay_rate).powi(days_since_update as i32);

    (0.5 + (score - 0.5) * factor).clamp(0.0, 1.0)
}

/// Classify a trust score into its five-band trust level
///
/// Total and monotonic; delegates to [`TrustLevel::from_score`].
pub fn trust_level(score: f64) -> TrustLevel {
    TrustLevel::from_score(score)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use veriflow_domain::{ClaimId, MediaType};

    fn arb_evidence() -> impl Strategy<Value = EvidenceEntry> {
        (any::<bool>(), 0.0f64..=1.0, 0u64..1_000_000).prop_map(|(sup, cred, ts)| {
            EvidenceEntry::new(
                ClaimId::from_value(1),
                MediaType::Text,
                "e".to_string(),
                ts,
                sup,
                cred,
            )
            .unwrap()
        })
    }

    proptest! {
        /// Property: every score-producing function stays in [0, 1]
        #[test]
        fn test_scores_stay_in_range(
            src in -5.0f64..5.0,
            plat in -5.0f64..5.0,
            current in -5.0f64..5.0,
            days in 0u32..10_000,
            batch in proptest::collection::vec(arb_evidence(), 0..20),
        ) {
            let config = TrustConfig::default();

            let s0 = initial_score(src, plat, &config);
            prop_assert!((0.0..=1.0).contains(&s0));

            let s1 = update_with_evidence(current, &batch, &config);
            prop_assert!((0.0..=1.0).contains(&s1));

            let s2 = decay(current, days, &config);
            prop_assert!((0.0..=1.0).contains(&s2));
        }

        /// Property: decay never crosses neutral
        #[test]
        fn test_decay_never_crosses_neutral(score in 0.0f64..=1.0, days in 0u32..10_000) {
            let decayed = decay(score, days, &TrustConfig::default());
            if score >= 0.5 {
                prop_assert!(decayed >= 0.5);
                prop_assert!(decayed <= score);
            } else {
                prop_assert!(decayed <= 0.5);
                prop_assert!(decayed >= score);
            }
        }

        /// Property: evidence order within the slice does not change the result
        /// (ranking is by timestamp, not input position)
        #[test]
        fn test_update_ignores_input_order(
            current in 0.0f64..=1.0,
            mut batch in proptest::collection::vec(arb_evidence(), 0..10),
        ) {
            // Distinct timestamps so the newest-first ordering is unambiguous
            for (i, e) in batch.iter_mut().enumerate() {
                e.timestamp = (i as u64) * 1000;
            }

            let config = TrustConfig::default();
            let forward = update_with_evidence(current, &batch, &config);

            batch.reverse();
            let backward = update_with_evidence(current, &batch, &config);

            prop_assert!((forward - backward).abs() < 1e-12);
        }
    }
}
