pub mod model;

pub use model::Transaction;

/// Sender used for the block reward a node pays itself when mining.
pub const REWARD_SENDER: &str = "0";

/// Amount of the mining reward.
pub const MINING_REWARD: u64 = 1;
