//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the trust core and its
//! infrastructure (per ADR-005): embedding generation, vector similarity
//! search, and claim/evidence persistence are all opaque providers. The
//! core consumes these narrow contracts and nothing more; implementations
//! live in other crates.

use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimId};
use crate::evidence::EvidenceEntry;
use crate::media::{MediaType, Platform};
use crate::trust_level::TrustLevel;

/// Metadata predicates applied by the Vector Similarity Provider
///
/// The provider filters before returning candidates; the core does not
/// re-filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Restrict to a media type
    pub media_type: Option<MediaType>,

    /// Restrict to a platform
    pub platform: Option<Platform>,

    /// Restrict to a trust level
    pub trust_level: Option<TrustLevel>,

    /// Minimum trust score (inclusive)
    pub min_trust_score: Option<f64>,

    /// Maximum trust score (inclusive)
    pub max_trust_score: Option<f64>,

    /// Earliest claim timestamp (milliseconds since Unix epoch, inclusive)
    pub start_date: Option<u64>,

    /// Latest claim timestamp (milliseconds since Unix epoch, inclusive)
    pub end_date: Option<u64>,
}

/// One similarity-ranked candidate returned by the provider
///
/// Candidates arrive strictly descending by `similarity`, stable for
/// equal scores; the hybrid ranker relies on that ordering as the
/// tie-break baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// The matched claim's id
    pub claim_id: ClaimId,

    /// Cosine similarity to the query vector [0.0, 1.0]
    pub similarity: f64,

    /// The claim snapshot stored as the point's payload
    pub claim: Claim,
}

/// A related claim discovered through vector similarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedClaim {
    /// The related claim's id
    pub claim_id: ClaimId,

    /// Similarity between the two claims [0.0, 1.0]
    pub similarity: f64,

    /// The related claim snapshot
    pub claim: Claim,
}

/// The trust fields recomputation produces for persistence
///
/// The store must apply all four fields atomically; no partial write may
/// be visible to concurrent readers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustFieldsUpdate {
    /// New trust score [0.0, 1.0]
    pub trust_score: f64,

    /// Classification of `trust_score` under the fixed thresholds
    pub trust_level: TrustLevel,

    /// New verification count
    pub verification_count: u32,

    /// When the recomputation happened (milliseconds since Unix epoch)
    pub last_updated: u64,
}

/// Trait for claim persistence
///
/// Implemented by the infrastructure layer. Callers are responsible for
/// serializing recalculation per claim id (per ADR-008): two concurrent
/// read-modify-write cycles against the same claim can lose an update,
/// and this core exposes no locking of its own.
pub trait ClaimStore {
    /// Error type for store operations
    type Error;

    /// Get a claim snapshot by id
    fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, Self::Error>;

    /// Atomically update the trust fields of a stored claim
    fn set_trust_fields(&mut self, id: ClaimId, update: TrustFieldsUpdate)
        -> Result<(), Self::Error>;
}

/// Trait for the append-only evidence ledger
pub trait EvidenceStore {
    /// Error type for store operations
    type Error;

    /// Append an entry to a claim's ledger
    fn append(&mut self, claim_id: ClaimId, entry: EvidenceEntry) -> Result<(), Self::Error>;

    /// List a claim's ledger in chronological order
    fn list(&self, claim_id: ClaimId) -> Result<Vec<EvidenceEntry>, Self::Error>;
}

/// Trait for the Vector Similarity Provider
///
/// Distance computation and indexing are entirely the provider's concern;
/// the core only consumes ordered results.
pub trait VectorSearchProvider {
    /// Error type for provider operations
    type Error;

    /// Search for claims near a query vector
    ///
    /// Results are strictly descending by similarity, stable for equal
    /// scores, and already filtered by `filter`.
    fn search(
        &self,
        query_vector: &[f32],
        filter: &SearchFilter,
        limit: usize,
    ) -> Result<Vec<SearchCandidate>, Self::Error>;

    /// Find claims similar to an already-stored claim
    ///
    /// Returns `None` when `claim_id` is unknown; the core surfaces that
    /// to the caller rather than substituting a default.
    fn related_claims(
        &self,
        claim_id: ClaimId,
        limit: usize,
    ) -> Result<Option<Vec<RelatedClaim>>, Self::Error>;
}

/// Trait for the opaque embedding provider
///
/// Model choice, dimensionality, and modality handling are out of scope;
/// the core only ever passes vectors through to the search provider.
pub trait EmbeddingProvider {
    /// Error type for embedding operations
    type Error;

    /// Embed raw text into a fixed-length vector
    fn embed_text(&self, text: &str) -> Result<Vec<f32>, Self::Error>;
}
