//! Claim evolution traversal: how information morphs across platforms

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use veriflow_domain::traits::VectorSearchProvider;
use veriflow_domain::{Claim, ClaimId, MediaType};

use crate::config::SearchConfig;
use crate::error::SearchError;

/// How two claims joined by an evolution edge relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EdgeRelation {
    /// Same media type, same platform
    DuplicateSamePlatform,

    /// Same media type, different platform
    CrossPlatformDuplicate,

    /// The claim changed media type along this edge
    MediaTransformation {
        /// Media type at the edge's source
        from: MediaType,
        /// Media type at the edge's target
        to: MediaType,
    },
}

/// One edge in the evolution graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionEdge {
    /// Source claim
    pub from: ClaimId,

    /// Target claim
    pub to: ClaimId,

    /// Similarity between the two claims
    pub similarity: f64,

    /// How the claims relate
    pub relation: EdgeRelation,
}

/// The bounded evolution graph rooted at an origin claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPath {
    /// The claim the traversal started from
    pub origin: ClaimId,

    /// Every claim id the traversal visited, in visit order
    pub visited: Vec<ClaimId>,

    /// Discovered edges, duplicate-free
    pub edges: Vec<EvolutionEdge>,
}

/// Trace how a claim evolved through related claims
///
/// Breadth-first over the provider's related-claim edges, bounded by
/// `config.max_depth` hops from the origin and `config.max_fan_out`
/// neighbors per claim; neighbors below `config.min_related_similarity`
/// are ignored. A visited set makes the walk cycle-safe: no claim id is
/// expanded twice and no `(from, to)` edge appears twice, for any input
/// graph including cyclic ones.
///
/// The caller supplies the origin snapshot; if the provider does not
/// know the origin id the traversal fails with
/// [`SearchError::ClaimNotFound`] rather than returning an empty graph.
/// A neighbor id the provider can no longer resolve mid-walk is skipped:
/// the index moved underneath us, which is not the caller's fault.
pub fn find_claim_evolution_path<P: VectorSearchProvider>(
    origin: &Claim,
    provider: &P,
    config: &SearchConfig,
) -> Result<EvolutionPath, SearchError>
where
    P::Error: std::fmt::Display,
{
    let mut visited: HashSet<ClaimId> = HashSet::new();
    let mut visit_order: Vec<ClaimId> = Vec::new();
    let mut edges: Vec<EvolutionEdge> = Vec::new();
    let mut seen_edges: HashSet<(ClaimId, ClaimId)> = HashSet::new();

    let mut queue: VecDeque<(Claim, usize)> = VecDeque::new();
    visited.insert(origin.id);
    visit_order.push(origin.id);
    queue.push_back((origin.clone(), 0));

    let mut origin_known = false;

    while let Some((claim, depth)) = queue.pop_front() {
        if depth >= config.max_depth {
            continue;
        }

        let related = provider
            .related_claims(claim.id, config.max_fan_out)
            .map_err(|e| SearchError::Provider(e.to_string()))?;

        let Some(related) = related else {
            if claim.id == origin.id {
                return Err(SearchError::ClaimNotFound(origin.id));
            }
            tracing::debug!(claim_id = %claim.id, "Related claim vanished mid-traversal; skipping");
            continue;
        };
        if claim.id == origin.id {
            origin_known = true;
        }

        for rel in related
            .iter()
            .filter(|r| r.similarity >= config.min_related_similarity)
            .take(config.max_fan_out)
        {
            if seen_edges.insert((claim.id, rel.claim_id)) {
                edges.push(EvolutionEdge {
                    from: claim.id,
                    to: rel.claim_id,
                    similarity: rel.similarity,
                    relation: classify_relation(&claim, &rel.claim),
                });
            }

            if visited.insert(rel.claim_id) {
                visit_order.push(rel.claim_id);
                queue.push_back((rel.claim.clone(), depth + 1));
            }
        }
    }

    // A zero-depth traversal never queries the provider; the origin is
    // taken on faith from the caller's snapshot
    if !origin_known && config.max_depth > 0 {
        return Err(SearchError::ClaimNotFound(origin.id));
    }

    Ok(EvolutionPath {
        origin: origin.id,
        visited: visit_order,
        edges,
    })
}

/// Classify how two adjacent claims relate
fn classify_relation(from: &Claim, to: &Claim) -> EdgeRelation {
    if from.media_type != to.media_type {
        EdgeRelation::MediaTransformation {
            from: from.media_type,
            to: to.media_type,
        }
    } else if from.platform == to.platform {
        EdgeRelation::DuplicateSamePlatform
    } else {
        EdgeRelation::CrossPlatformDuplicate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use veriflow_domain::traits::RelatedClaim;
    use veriflow_domain::Platform;

    /// In-memory provider over a fixed adjacency map
    struct GraphProvider {
        claims: HashMap<ClaimId, Claim>,
        neighbors: HashMap<ClaimId, Vec<(ClaimId, f64)>>,
    }

    impl GraphProvider {
        fn new() -> Self {
            Self {
                claims: HashMap::new(),
                neighbors: HashMap::new(),
            }
        }

        fn add_claim(&mut self, id: u128, media: MediaType, platform: Platform) -> ClaimId {
            let claim = Claim::new(ClaimId::from_value(id), media, platform, 0.5, 1000);
            let claim_id = claim.id;
            self.claims.insert(claim_id, claim);
            self.neighbors.entry(claim_id).or_default();
            claim_id
        }

        fn link(&mut self, from: ClaimId, to: ClaimId, similarity: f64) {
            self.neighbors.entry(from).or_default().push((to, similarity));
        }
    }

    impl VectorSearchProvider for GraphProvider {
        type Error = String;

        fn search(
            &self,
            _query_vector: &[f32],
            _filter: &veriflow_domain::traits::SearchFilter,
            _limit: usize,
        ) -> Result<Vec<veriflow_domain::traits::SearchCandidate>, Self::Error> {
            Ok(vec![])
        }

        fn related_claims(
            &self,
            claim_id: ClaimId,
            limit: usize,
        ) -> Result<Option<Vec<RelatedClaim>>, Self::Error> {
            let Some(neighbors) = self.neighbors.get(&claim_id) else {
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

    fn origin_of(provider: &GraphProvider, id: ClaimId) -> Claim {
        provider.claims[&id].clone()
    }

    #[test]
    fn test_unknown_origin_is_an_error() {
        let provider = GraphProvider::new();
        let orphan = Claim::new(
            ClaimId::from_value(99),
            MediaType::Text,
            Platform::Twitter,
            0.5,
            1000,
        );

        let result =
            find_claim_evolution_path(&orphan, &provider, &SearchConfig::default());

        assert!(matches!(result, Err(SearchError::ClaimNotFound(_))));
    }

    #[test]
    fn test_isolated_claim_yields_empty_graph() {
        let mut provider = GraphProvider::new();
        let a = provider.add_claim(1, MediaType::Text, Platform::Twitter);

        let path = find_claim_evolution_path(
            &origin_of(&provider, a),
            &provider,
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.origin, a);
        assert_eq!(path.visited, vec![a]);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn test_simple_chain_traversal() {
        let mut provider = GraphProvider::new();
        let a = provider.add_claim(1, MediaType::Text, Platform::Twitter);
        let b = provider.add_claim(2, MediaType::Text, Platform::Facebook);
        let c = provider.add_claim(3, MediaType::Image, Platform::Facebook);
        provider.link(a, b, 0.9);
        provider.link(b, c, 0.8);

        let path = find_claim_evolution_path(
            &origin_of(&provider, a),
            &provider,
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.visited, vec![a, b, c]);
        assert_eq!(path.edges.len(), 2);
        assert_eq!(path.edges[0].relation, EdgeRelation::CrossPlatformDuplicate);
        assert_eq!(
            path.edges[1].relation,
            EdgeRelation::MediaTransformation {
                from: MediaType::Text,
                to: MediaType::Image,
            }
        );
    }

    #[test]
    fn test_cycle_is_safe_and_edges_unique() {
        let mut provider = GraphProvider::new();
        let a = provider.add_claim(1, MediaType::Text, Platform::Twitter);
        let b = provider.add_claim(2, MediaType::Text, Platform::Twitter);
        // a <-> b cycle
        provider.link(a, b, 0.9);
        provider.link(b, a, 0.9);

        let path = find_claim_evolution_path(
            &origin_of(&provider, a),
            &provider,
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.visited, vec![a, b]);
        // Both directions recorded once each, nothing revisited
        assert_eq!(path.edges.len(), 2);
        let pairs: Vec<(ClaimId, ClaimId)> =
            path.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(a, b), (b, a)]);
    }

    #[test]
    fn test_max_depth_bounds_hops() {
        let mut provider = GraphProvider::new();
        let ids: Vec<ClaimId> = (1..=6)
            .map(|i| provider.add_claim(i, MediaType::Text, Platform::Twitter))
            .collect();
        for pair in ids.windows(2) {
            provider.link(pair[0], pair[1], 0.9);
        }

        let config = SearchConfig {
            max_depth: 2,
            ..SearchConfig::default()
        };
        let path =
            find_claim_evolution_path(&origin_of(&provider, ids[0]), &provider, &config)
                .unwrap();

        // Two hops reach ids[1] and ids[2]; ids[3..] stay unexplored
        assert_eq!(path.visited, vec![ids[0], ids[1], ids[2]]);
        assert_eq!(path.edges.len(), 2);
    }

    #[test]
    fn test_max_fan_out_bounds_neighbors_per_hop() {
        let mut provider = GraphProvider::new();
        let hub = provider.add_claim(1, MediaType::Text, Platform::Twitter);
        for i in 2..=10 {
            let spoke = provider.add_claim(i, MediaType::Text, Platform::Twitter);
            provider.link(hub, spoke, 0.9);
        }

        let config = SearchConfig {
            max_fan_out: 3,
            ..SearchConfig::default()
        };
        let path = find_claim_evolution_path(&origin_of(&provider, hub), &provider, &config)
            .unwrap();

        assert_eq!(path.edges.len(), 3);
        assert_eq!(path.visited.len(), 4); // hub + 3 spokes
    }

    #[test]
    fn test_low_similarity_neighbors_ignored() {
        let mut provider = GraphProvider::new();
        let a = provider.add_claim(1, MediaType::Text, Platform::Twitter);
        let b = provider.add_claim(2, MediaType::Text, Platform::Twitter);
        let c = provider.add_claim(3, MediaType::Text, Platform::Twitter);
        provider.link(a, b, 0.9);
        provider.link(a, c, 0.3); // below the 0.5 default threshold

        let path = find_claim_evolution_path(
            &origin_of(&provider, a),
            &provider,
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.visited, vec![a, b]);
        assert_eq!(path.edges.len(), 1);
    }

    #[test]
    fn test_same_platform_duplicate_relation() {
        let mut provider = GraphProvider::new();
        let a = provider.add_claim(1, MediaType::Video, Platform::Tiktok);
        let b = provider.add_claim(2, MediaType::Video, Platform::Tiktok);
        provider.link(a, b, 0.95);

        let path = find_claim_evolution_path(
            &origin_of(&provider, a),
            &provider,
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.edges[0].relation, EdgeRelation::DuplicateSamePlatform);
    }

    #[test]
    fn test_vanished_neighbor_is_skipped_not_fatal() {
        let mut provider = GraphProvider::new();
        let a = provider.add_claim(1, MediaType::Text, Platform::Twitter);
        let b = provider.add_claim(2, MediaType::Text, Platform::Twitter);
        provider.link(a, b, 0.9);
        // b's adjacency disappears from the index
        provider.neighbors.remove(&b);

        let path = find_claim_evolution_path(
            &origin_of(&provider, a),
            &provider,
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(path.visited, vec![a, b]);
        assert_eq!(path.edges.len(), 1);
    }
}
