//! Search control - hash candidates until one matches the target
//!
//! [`search`] is the core linear scan with early exit; [`SelectorSearch`]
//! wraps it with configuration, logging, progress and a parallel mode.
//! [`match_all`] checks every candidate against many targets at once.

mod controller;
mod multi;

pub use controller::SelectorSearch;
pub use multi::match_all;

use crate::hash::{Hasher, Target};
use crate::types::MatchRecord;

/// Return the first candidate whose digest prefix equals `target`.
///
/// Candidates are pulled one at a time; once a match is found nothing
/// further is generated or hashed. `None` means the sequence was exhausted.
pub fn search<I, H>(candidates: I, hasher: &H, target: &Target) -> Option<MatchRecord>
where
    I: IntoIterator<Item = String>,
    H: Hasher + ?Sized,
{
    candidates
        .into_iter()
        .enumerate()
        .find_map(|(position, candidate)| {
            let digest = hasher.digest(candidate.as_bytes());
            target
                .matches(&digest)
                .then(|| MatchRecord::new(candidate, &digest, target, position as u64))
        })
}


#[cfg(test)]
mod tests {
    use super::testing::CountingHasher;
    use super::*;
    use crate::grammar::Grammar;
    use crate::hash::HashAlgorithm;

    #[test]
    fn test_finds_self_derived_target() {
        let grammar = Grammar::standard(
            vec!["swap"],
            vec!["ETH"],
            vec!["", "Single"],
            vec!["(address,uint256)"],
        )
        .unwrap();
        let digest = HashAlgorithm::Keccak256.digest(b"swapETH(address,uint256)");
        let target = Target::from_digest(&digest);

        let record = search(grammar.candidates(), &HashAlgorithm::Keccak256, &target).unwrap();
        assert_eq!(record.candidate, "swapETH(address,uint256)");
        assert_eq!(record.position, 0);
        assert_eq!(record.digest, digest.to_string());
    }

    #[test]
    fn test_short_circuit_hash_count() {
        let grammar = Grammar::preset("router").unwrap();
        let k = 37;
        let expected = grammar.candidates().nth(k).unwrap();
        let target = Target::from_digest(&HashAlgorithm::Keccak256.digest(expected.as_bytes()));

        let hasher = CountingHasher::default();
        let record = search(grammar.candidates(), &hasher, &target).unwrap();

        // An earlier candidate could only win on a 32-bit collision.
        assert_eq!(record.candidate, expected);
        assert_eq!(record.position, k as u64);
        assert_eq!(hasher.calls(), k as u64 + 1);
    }

    #[test]
    fn test_exhaustion_hashes_everything() {
        let grammar = Grammar::standard(
            vec!["swap", "buy"],
            vec!["ETH", "Tokens"],
            vec!["", "Single"],
            vec!["(address,uint256)", "(uint256)"],
        )
        .unwrap();
        let target = Target::parse("00000000").unwrap();
        let hasher = CountingHasher::default();

        assert!(search(grammar.candidates(), &hasher, &target).is_none());
        assert_eq!(hasher.calls(), grammar.candidate_count());
    }

    #[test]
    fn test_empty_sequence() {
        let target = Target::parse("a9059cbb").unwrap();
        assert!(search(Vec::<String>::new(), &HashAlgorithm::Keccak256, &target).is_none());
    }

    #[test]
    fn test_known_selector_from_list() {
        let candidates = vec![
            "approve(address,uint256)".to_string(),
            "transfer(address,uint256)".to_string(),
        ];
        let target = Target::parse("0xa9059cbb").unwrap();
        let record = search(candidates, &HashAlgorithm::Keccak256, &target).unwrap();
        assert_eq!(record.candidate, "transfer(address,uint256)");
        assert_eq!(record.position, 1);
    }
}
