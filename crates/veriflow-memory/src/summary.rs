//! Evidence summaries: structured counts plus the human-readable rendering

use serde::{Deserialize, Serialize};

use veriflow_domain::EvidenceEntry;

/// Structured summary of an evidence ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    /// Number of supporting entries
    pub supporting_count: usize,

    /// Number of refuting entries
    pub refuting_count: usize,

    /// Mean credibility of supporting entries, when any exist
    pub mean_supporting_credibility: Option<f64>,

    /// Mean credibility of refuting entries, when any exist
    pub mean_refuting_credibility: Option<f64>,

    /// Timestamp of the most recent entry, when any exist
    pub most_recent: Option<u64>,
}

/// Summarize an evidence ledger
///
/// Empty ledgers summarize to zero counts and `None` aggregates; that is
/// a defined result, not an error.
pub fn summarize_evidence(evidence: &[EvidenceEntry]) -> EvidenceSummary {
    let supporting: Vec<&EvidenceEntry> = evidence.iter().filter(|e| e.is_supporting).collect();
    let refuting: Vec<&EvidenceEntry> = evidence.iter().filter(|e| !e.is_supporting).collect();

    let mean = |entries: &[&EvidenceEntry]| {
        if entries.is_empty() {
            None
        } else {
            Some(entries.iter().map(|e| e.credibility).sum::<f64>() / entries.len() as f64)
        }
    };

    EvidenceSummary {
        supporting_count: supporting.len(),
        refuting_count: refuting.len(),
        mean_supporting_credibility: mean(&supporting),
        mean_refuting_credibility: mean(&refuting),
        most_recent: evidence.iter().map(|e| e.timestamp).max(),
    }
}

/// Render a ledger as the human-readable summary text
///
/// Fixed template: totals per side, then up to three key sources per
/// side in ledger order. Deterministic for identical input.
pub fn render_evidence_summary(evidence: &[EvidenceEntry]) -> String {
    if evidence.is_empty() {
        return "No evidence available for this claim.".to_string();
    }

    let supporting: Vec<&EvidenceEntry> = evidence.iter().filter(|e| e.is_supporting).collect();
    let refuting: Vec<&EvidenceEntry> = evidence.iter().filter(|e| !e.is_supporting).collect();

    let mut summary = String::from("Evidence Summary:\n");
    summary.push_str(&format!("- Total pieces of evidence: {}\n", evidence.len()));
    summary.push_str(&format!("- Supporting evidence: {}\n", supporting.len()));
    summary.push_str(&format!("- Refuting evidence: {}\n\n", refuting.len()));

    let render_side = |summary: &mut String, label: &str, entries: &[&EvidenceEntry]| {
        if entries.is_empty() {
            return;
        }
        summary.push_str(label);
        for e in entries.iter().take(3) {
            summary.push_str(&format!(
                "  - {} from {} (credibility: {:.2})\n",
                e.media_type.as_str(),
                e.source_url.as_deref().unwrap_or("unknown source"),
                e.credibility
            ));
        }
    };

    render_side(&mut summary, "Key supporting sources:\n", &supporting);
    if !refuting.is_empty() && !supporting.is_empty() {
        summary.push('\n');
    }
    render_side(&mut summary, "Key refuting sources:\n", &refuting);

    summary
}
