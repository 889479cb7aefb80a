//! Multi-target matching - resolve many selectors in one pass

use std::collections::HashMap;

use crate::hash::{Hasher, Target, TARGET_BYTES};
use crate::types::MatchRecord;

/// Hash every candidate once and report each one matching any target.
///
/// Unlike [`super::search`] this never stops early, so colliding candidates
/// for the same target are all reported. Results are in enumeration order.
pub fn match_all<I, H>(candidates: I, hasher: &H, targets: &[Target]) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = String>,
    H: Hasher + ?Sized,
{
    let lookup: HashMap<[u8; TARGET_BYTES], &Target> =
        targets.iter().map(|t| (t.bytes(), t)).collect();
    if lookup.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut scanned = 0u64;
    for (position, candidate) in candidates.into_iter().enumerate() {
        scanned += 1;
        let digest = hasher.digest(candidate.as_bytes());
        if let Some(target) = lookup.get(&digest.prefix()) {
            tracing::debug!(selector = %target, candidate = %candidate, "Selector matched");
            matches.push(MatchRecord::new(candidate, &digest, target, position as u64));
        }
    }

    tracing::info!(
        targets = lookup.len(),
        candidates = scanned,
        matches = matches.len(),
        "Multi-target scan complete"
    );
    matches
}
