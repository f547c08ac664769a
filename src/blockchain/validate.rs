use log::debug;

use super::Block;
use super::pow::valid_proof;

/// Walk a candidate chain and check every link hash and proof-of-work pair.
///
/// The genesis block has no predecessor and is never inspected. Block indices
/// are not checked either; a chain is valid iff every consecutive pair links.
pub fn valid_chain(chain: &[Block]) -> bool {
    if chain.is_empty() {
        return false;
    }

    for pair in chain.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);

        let expected = prev.hash();
        if curr.previous_hash != expected {
            debug!(
                "chain rejected at block {}: previous_hash {} != {}",
                curr.index, curr.previous_hash, expected
            );
            return false;
        }

        if !valid_proof(prev.proof, curr.proof) {
            debug!(
                "chain rejected at block {}: proof {} does not follow {}",
                curr.index, curr.proof, prev.proof
            );
            return false;
        }
    }

    true
}
