//! Longest-valid-chain conflict resolution across registered peers.

pub mod client;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::blockchain::{Block, valid_chain};
use crate::error::PeerError;

pub use client::HttpPeerClient;

/// A peer's view of its chain, as served by its `GET /chain` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerChain {
    pub chain: Vec<Block>,
    pub length: usize,
}

/// Fetches the current chain of a peer.
#[async_trait]
pub trait PeerClient: Send + Sync {
    async fn fetch_chain(&self, node: &str) -> Result<PeerChain, PeerError>;
}

/// Scan every node and return the longest valid chain strictly longer than
/// `local_len`, or `None` when the local chain should stay.
///
/// Unreachable or misbehaving peers are skipped. Fork choice is by length
/// only; equal lengths never win.
pub async fn resolve<C: PeerClient + ?Sized>(
    nodes: &[String],
    local_len: usize,
    client: &C,
) -> Option<Vec<Block>> {
    let mut max_length = local_len;
    let mut new_chain = None;

    for node in nodes {
        let view = match client.fetch_chain(node).await {
            Ok(view) => view,
            Err(e) => {
                warn!("skipping node {node}: {e}");
                continue;
            }
        };

        if view.length != view.chain.len() {
            let e = PeerError::LengthMismatch {
                reported: view.length,
                actual: view.chain.len(),
            };
            warn!("skipping node {node}: {e}");
            continue;
        }

        if view.length > max_length && valid_chain(&view.chain) {
            debug!("node {node} offers a valid chain of length {}", view.length);
            max_length = view.length;
            new_chain = Some(view.chain);
        }
    }

    new_chain
}

#[cfg(test)]
pub(crate) mod mock {
    use super::{PeerChain, PeerClient};
    use crate::error::PeerError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned chains keyed by node authority. Unknown nodes answer 503.
    #[derive(Default)]
    pub struct MockPeerClient {
        chains: HashMap<String, PeerChain>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPeerClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_chain(mut self, node: &str, view: PeerChain) -> Self {
            self.chains.insert(node.to_string(), view);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            let mut calls = self.calls.lock().expect("mutex poisoned").clone();
            calls.sort();
            calls
        }
    }

    #[async_trait]
    impl PeerClient for MockPeerClient {
        async fn fetch_chain(&self, node: &str) -> Result<PeerChain, PeerError> {
            self.calls
                .lock()
                .expect("mutex poisoned")
                .push(node.to_string());
            self.chains.get(node).cloned().ok_or(PeerError::Status(503))
        }
    }
}
