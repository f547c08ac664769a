use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use super::{PeerChain, PeerClient};
use crate::error::PeerError;

/// Fetches peer chains over HTTP (`GET http://{node}/chain`).
#[derive(Clone)]
pub struct HttpPeerClient {
    http: reqwest::Client,
}

impl HttpPeerClient {
    /// Every request is bounded by `timeout` so a silent peer cannot stall a pass.
    pub fn new(timeout: Duration) -> Result<Self, PeerError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl PeerClient for HttpPeerClient {
    async fn fetch_chain(&self, node: &str) -> Result<PeerChain, PeerError> {
        let url = format!("http://{node}/chain");
        debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PeerError::Status(status.as_u16()));
        }
        Ok(response.json::<PeerChain>().await?)
    }
}
