pub mod block;
pub mod model;
pub mod pow;
pub mod validate;

pub use block::Block;
pub use model::Ledger;
pub use validate::valid_chain;

/// Proof-of-Work difficulty (number of leading hex zeros).
pub const DIFFICULTY: usize = 4;

/// Proof carried by the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Sentinel `previous_hash` of the genesis block (not a real digest).
pub const GENESIS_PREVIOUS_HASH: &str = "1";
