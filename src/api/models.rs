use crate::blockchain::{Block, Ledger};
use crate::consensus::PeerClient;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state: the ledger plus what the handlers need around it.
pub struct AppState {
    /// Every read and write of the ledger goes through this lock. It is only
    /// held for in-memory work, never across peer I/O or proof search.
    pub ledger: Mutex<Ledger>,
    /// Serializes ledger writers: transaction intake, block commits and whole
    /// resolution passes. Always taken before `ledger`.
    pub writer: Mutex<()>,
    /// Held for the whole duration of a `/mine` request; one miner at a time.
    pub mining: Mutex<()>,
    pub node_id: String,
    pub peers: Arc<dyn PeerClient>,
}

impl AppState {
    pub fn new(node_id: impl Into<String>, peers: Arc<dyn PeerClient>) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            writer: Mutex::new(()),
            mining: Mutex::new(()),
            node_id: node_id.into(),
            peers,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: String,
    pub index: u64,
    pub transaction: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

/// Fields are optional so a missing one is reported as such, not as bad JSON.
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<serde_json::Number>,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct NodesResponse {
    pub message: String,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct NodeListResponse {
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse<'a> {
    pub message: String,
    pub chain: &'a [Block],
}
