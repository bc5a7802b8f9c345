//! Additive merge of externally supplied quotes into the local sequence.
//!
//! A candidate is appended when no local quote has the exact same text.
//! Existing quotes are never removed or modified, so a same-text candidate
//! with a different category is dropped rather than overwriting the local one.

use crate::domain::Quote;
use std::collections::HashSet;

/// Result of a merge pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// Number of candidates appended to the local sequence
    pub added: usize,
}

impl MergeOutcome {
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

/// Append every candidate whose text is not yet present locally.
///
/// Candidates are processed in order and checked against the local sequence
/// as it grows, so duplicates within `candidates` are only added once.
pub fn merge_quotes<I>(local: &mut Vec<Quote>, candidates: I) -> MergeOutcome
where
    I: IntoIterator<Item = Quote>,
{
    let mut known: HashSet<String> = local.iter().map(|q| q.text.clone()).collect();
    let mut outcome = MergeOutcome::default();

    for candidate in candidates {
        if known.insert(candidate.text.clone()) {
            local.push(candidate);
            outcome.added += 1;
        }
    }

    outcome
}
