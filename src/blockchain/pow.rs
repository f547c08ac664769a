use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};

use super::DIFFICULTY;

/// How many candidates are tried between checks of the cancel flag.
const CANCEL_CHECK_INTERVAL: u64 = 1024;

/// Check that `sha256("{last_proof}{proof}")` starts with [`DIFFICULTY`] hex zeros.
pub fn valid_proof(last_proof: u64, proof: u64) -> bool {
    valid_proof_at(last_proof, proof, DIFFICULTY)
}

/// Same as [`valid_proof`] with an explicit number of leading hex zeros.
pub fn valid_proof_at(last_proof: u64, proof: u64, difficulty: usize) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let guess_hash = hex::encode(hasher.finalize());
    guess_hash.len() >= difficulty && guess_hash.bytes().take(difficulty).all(|c| c == b'0')
}

/// Find the smallest proof that satisfies [`valid_proof`] against `last_proof`.
///
/// CPU bound; callers on an async runtime should run it on a blocking worker.
pub fn proof_of_work(last_proof: u64) -> u64 {
    search(last_proof, DIFFICULTY, None).expect("uncancelled search always finds a proof")
}

/// Scan candidates from 0 upward and return the first one satisfying
/// [`valid_proof_at`]. Returns `None` only when `cancel` was raised.
pub fn search(last_proof: u64, difficulty: usize, cancel: Option<&AtomicBool>) -> Option<u64> {
    let mut candidate: u64 = 0;
    loop {
        if candidate % CANCEL_CHECK_INTERVAL == 0
            && cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return None;
        }
        if valid_proof_at(last_proof, candidate, difficulty) {
            return Some(candidate);
        }
        candidate = candidate.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_proof_is_valid() {
        for last in [0, 100, 35_293, u64::MAX] {
            let proof = proof_of_work(last);
            assert!(valid_proof(last, proof), "last_proof={last}");
        }
    }

    #[test]
    fn found_proof_is_the_smallest() {
        let proof = proof_of_work(100);
        assert!((0..proof).all(|p| !valid_proof(100, p)));
    }

    #[test]
    fn search_is_deterministic() {
        assert_eq!(proof_of_work(100), proof_of_work(100));
        assert_eq!(search(100, DIFFICULTY, None), Some(proof_of_work(100)));
    }

    #[test]
    fn uncancelled_flag_returns_same_value() {
        let flag = AtomicBool::new(false);
        assert_eq!(search(7, DIFFICULTY, Some(&flag)), Some(proof_of_work(7)));
    }

    #[test]
    fn raised_flag_stops_the_search() {
        let flag = AtomicBool::new(true);
        // 64 leading zeros is never reached; only the flag ends the scan.
        assert_eq!(search(1, 64, Some(&flag)), None);
    }

    #[test]
    fn lower_difficulty_is_injectable() {
        let proof = search(100, 1, None).unwrap();
        assert!(valid_proof_at(100, proof, 1));
        assert!(proof <= proof_of_work(100));
    }
}
