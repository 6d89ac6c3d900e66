//! Integration tests for veriflow-search
//!
//! These tests run the full retrieval pipeline against an in-memory
//! provider: similarity search, hybrid re-ranking with reasoning chains,
//! and evolution-path traversal over a claim graph.

use std::collections::HashMap;

use veriflow_domain::traits::{
    RelatedClaim, SearchCandidate, SearchFilter, VectorSearchProvider,
};
use veriflow_domain::{Claim, ClaimId, MediaType, Platform, StepKind};
use veriflow_search::{
    find_claim_evolution_path, hybrid_rank, EdgeRelation, SearchConfig, SearchError,
};

const DAY_MS: u64 = 86_400_000;

/// In-memory stand-in for the vector index
struct MemoryProvider {
    claims: HashMap<ClaimId, Claim>,
    // ordered candidate lists keyed by nothing; search returns all
    ranked: Vec<(ClaimId, f64)>,
    related: HashMap<ClaimId, Vec<(ClaimId, f64)>>,
}

impl MemoryProvider {
    fn new() -> Self {
        Self {
            claims: HashMap::new(),
            ranked: Vec::new(),
            related: HashMap::new(),
        }
    }

    fn insert(&mut self, claim: Claim, similarity: f64) -> ClaimId {
        let id = claim.id;
        self.ranked.push((id, similarity));
        self.claims.insert(id, claim);
        self.related.entry(id).or_default();
        id
    }

    fn relate(&mut self, from: ClaimId, to: ClaimId, similarity: f64) {
        self.related.entry(from).or_default().push((to, similarity));
    }
}

impl VectorSearchProvider for MemoryProvider {
    type Error = String;

    fn search(
        &self,
        _query_vector: &[f32],
        filter: &SearchFilter,
        limit: usize,
    ) -> Result<Vec<SearchCandidate>, Self::Error> {
        let mut out: Vec<SearchCandidate> = self
            .ranked
            .iter()
            .filter(|(id, _)| {
                let claim = &self.claims[id];
                filter.media_type.is_none_or(|m| claim.media_type == m)
                    && filter.platform.is_none_or(|p| claim.platform == p)
                    && filter
                        .min_trust_score
                        .is_none_or(|min| claim.trust_score >= min)
            })
            .map(|(id, similarity)| SearchCandidate {
                claim_id: *id,
                similarity: *similarity,
                claim: self.claims[id].clone(),
            })
            .collect();
        out.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap());
        out.truncate(limit);
        Ok(out)
    }

    fn related_claims(
        &self,
        claim_id: ClaimId,
        limit: usize,
    ) -> Result<Option<Vec<RelatedClaim>>, Self::Error> {
        let Some(neighbors) = self.related.get(&claim_id) else {
            return Ok(None);
        };
        Ok(Some(
            neighbors
                .iter()
                .take(limit)
                .map(|(id, similarity)| RelatedClaim {
                    claim_id: *id,
                    similarity: *similarity,
                    claim: self.claims[id].clone(),
                })
                .collect(),
        ))
    }
}

fn claim(id: u128, media: MediaType, platform: Platform, trust: f64, created_at: u64) -> Claim {
    Claim::new(ClaimId::from_value(id), media, platform, trust, created_at)
}

#[test]
fn test_search_then_rank_end_to_end() {
    let mut provider = MemoryProvider::new();
    // High similarity, debunked
    provider.insert(claim(1, MediaType::Text, Platform::Twitter, 0.10, 0), 0.92);
    // Slightly lower similarity, verified
    provider.insert(claim(2, MediaType::Text, Platform::NewsWebsite, 0.90, 0), 0.85);
    // Cross-modal hit
    provider.insert(claim(3, MediaType::Image, Platform::Facebook, 0.50, 0), 0.70);

    let candidates = provider
        .search(&[0.0; 384], &SearchFilter::default(), 10)
        .unwrap();
    let results = hybrid_rank(
        MediaType::Text,
        candidates,
        3 * DAY_MS,
        &SearchConfig::default(),
    );

    assert_eq!(results.len(), 3);

    // 0.7*0.85 + 0.3*0.90 = 0.865 beats 0.7*0.92 + 0.3*0.10 = 0.674
    assert_eq!(results[0].claim_id, ClaimId::from_value(2));
    assert_eq!(results[1].claim_id, ClaimId::from_value(1));

    // Every result is explained
    for result in &results {
        assert!(!result.reasoning.steps.is_empty());
        assert_eq!(result.reasoning.steps[0].kind, StepKind::SemanticMatch);
    }

    // Only the image claim carries a cross-modal note
    let cross_modal = |id: u128| {
        results
            .iter()
            .find(|r| r.claim_id == ClaimId::from_value(id))
            .unwrap()
            .reasoning
            .steps
            .iter()
            .any(|s| s.kind == StepKind::CrossModal)
    };
    assert!(cross_modal(3));
    assert!(!cross_modal(1));
    assert!(!cross_modal(2));
}

#[test]
fn test_provider_filter_respected_by_pipeline() {
    let mut provider = MemoryProvider::new();
    provider.insert(claim(1, MediaType::Text, Platform::Twitter, 0.9, 0), 0.9);
    provider.insert(claim(2, MediaType::Video, Platform::Tiktok, 0.9, 0), 0.8);

    let filter = SearchFilter {
        media_type: Some(MediaType::Text),
        ..SearchFilter::default()
    };
    let candidates = provider.search(&[0.0; 384], &filter, 10).unwrap();
    let results = hybrid_rank(MediaType::Text, candidates, 0, &SearchConfig::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].claim_id, ClaimId::from_value(1));
}

#[test]
fn test_evolution_path_across_platforms_and_media() {
    let mut provider = MemoryProvider::new();
    // A tweet, reposted on Facebook, turned into a TikTok video
    let tweet = provider.insert(claim(1, MediaType::Text, Platform::Twitter, 0.5, 0), 0.9);
    let repost = provider.insert(
        claim(2, MediaType::Text, Platform::Facebook, 0.5, DAY_MS),
        0.8,
    );
    let video = provider.insert(
        claim(3, MediaType::Video, Platform::Tiktok, 0.5, 2 * DAY_MS),
        0.7,
    );
    provider.relate(tweet, repost, 0.95);
    provider.relate(repost, video, 0.80);
    // Cycle back to the origin
    provider.relate(video, tweet, 0.80);

    let origin = provider.claims[&tweet].clone();
    let path =
        find_claim_evolution_path(&origin, &provider, &SearchConfig::default()).unwrap();

    assert_eq!(path.origin, tweet);
    assert_eq!(path.visited, vec![tweet, repost, video]);
    assert_eq!(path.edges.len(), 3);
    assert_eq!(path.edges[0].relation, EdgeRelation::CrossPlatformDuplicate);
    assert_eq!(
        path.edges[1].relation,
        EdgeRelation::MediaTransformation {
            from: MediaType::Text,
            to: MediaType::Video,
        }
    );
    // The cycle edge back to the origin is recorded once, not re-walked
    assert_eq!(path.edges[2].from, video);
    assert_eq!(path.edges[2].to, tweet);
}

#[test]
fn test_evolution_unknown_origin_surfaces_not_found() {
    let provider = MemoryProvider::new();
    let orphan = claim(42, MediaType::Text, Platform::Twitter, 0.5, 0);

    let result = find_claim_evolution_path(&orphan, &provider, &SearchConfig::default());

    match result {
        Err(SearchError::ClaimNotFound(id)) => assert_eq!(id, ClaimId::from_value(42)),
        other => panic!("expected ClaimNotFound, got {:?}", other.map(|p| p.edges.len())),
    }
}
