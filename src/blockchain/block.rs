use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// A single block in the chain.
///
/// The declared field order is the canonical serialization order used by
/// [`Block::hash`]. Only integers and strings are serialized, so two processes
/// always produce the same preimage for equal blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix milliseconds (UTC)
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Create the genesis block. Its `previous_hash` is a sentinel, not a digest.
    pub fn genesis() -> Self {
        Self::new(
            1,
            Vec::new(),
            GENESIS_PROOF,
            String::from(GENESIS_PREVIOUS_HASH),
        )
    }

    /// Create a block stamped with the current time.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp_millis(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// Canonical SHA-256 of this block, hex encoded.
    pub fn hash(&self) -> String {
        let preimage = serde_json::to_vec(self).expect("serialize block");
        let mut hasher = Sha256::new();
        hasher.update(&preimage);
        hex::encode(hasher.finalize())
    }
}
