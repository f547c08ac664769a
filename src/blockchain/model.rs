use log::{debug, info};
use serde_json::Number;
use std::collections::HashSet;
use url::Url;

use super::{Block, validate};
use crate::consensus::{self, PeerClient};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// In-memory ledger: the chain, the pending transactions and the known peers.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
    nodes: HashSet<String>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Initialize a ledger holding only the genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
            nodes: HashSet::new(),
        }
    }

    /// Queue a transaction for the next block.
    ///
    /// Returns the index of the block expected to hold it. This is a hint only:
    /// a block committed in between pushes it one block further.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<Number>,
    ) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.last_block().index + 1
    }

    /// Append a block holding every pending transaction.
    ///
    /// `previous_hash` defaults to the hash of the current last block. The block
    /// is trusted as built; no proof or link check happens here.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = previous_hash.unwrap_or_else(|| self.last_block().hash());
        let index = self.chain.len() as u64 + 1;
        let transactions = std::mem::take(&mut self.pending);

        let block = Block::new(index, transactions, proof, previous_hash);
        debug!(
            "block {} appended with {} transaction(s)",
            block.index,
            block.transactions.len()
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger should always hold at least the genesis block")
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn valid_chain(&self, chain: &[Block]) -> bool {
        validate::valid_chain(chain)
    }

    /// Register a peer by URL (`http://host:port`, or just `host:port`).
    /// Only the authority part is kept, so re-registering is a no-op.
    pub fn register_node(&mut self, address: &str) -> Result<(), LedgerError> {
        self.register_nodes(&[address])
    }

    /// Register several peers at once. Nothing is added if any address is invalid.
    pub fn register_nodes<S: AsRef<str>>(&mut self, addresses: &[S]) -> Result<(), LedgerError> {
        let authorities = addresses
            .iter()
            .map(|a| normalize_address(a.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        for authority in authorities {
            if self.nodes.insert(authority.clone()) {
                info!("registered node {authority}");
            }
        }
        Ok(())
    }

    /// Forget a peer. Returns whether it was registered.
    pub fn unregister_node(&mut self, address: &str) -> bool {
        match normalize_address(address) {
            Ok(authority) => self.nodes.remove(&authority),
            Err(_) => false,
        }
    }

    /// Registered peers, sorted for stable output.
    pub fn nodes(&self) -> Vec<String> {
        let mut nodes: Vec<String> = self.nodes.iter().cloned().collect();
        nodes.sort();
        nodes
    }

    /// Replace the chain with the longest valid one known to the peers.
    /// Returns whether the local chain was replaced.
    pub async fn resolve_conflicts<C: PeerClient + ?Sized>(&mut self, client: &C) -> bool {
        let nodes = self.nodes();
        match consensus::resolve(&nodes, self.chain.len(), client).await {
            Some(chain) => {
                self.replace_chain(chain);
                true
            }
            None => false,
        }
    }

    /// Swap in a chain picked by [`consensus::resolve`]. Pending transactions stay.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        info!(
            "local chain of length {} replaced by peer chain of length {}",
            self.chain.len(),
            chain.len()
        );
        self.chain = chain;
    }
}

fn normalize_address(address: &str) -> Result<String, LedgerError> {
    let invalid = |reason: String| LedgerError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let trimmed = address.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let url = Url::parse(&with_scheme).map_err(|e| invalid(e.to_string()))?;
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| invalid("missing host".into()))?;

    // Keep the scheme's default port; peers are always fetched as `http://{authority}`.
    Ok(match url.port_or_known_default() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
