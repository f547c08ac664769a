use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, error, info, warn};
use std::time::Instant;

use super::models::{AppState, MineResponse};
use crate::blockchain::pow::proof_of_work;
use crate::blockchain::{Block, Ledger};
use crate::transaction::{MINING_REWARD, REWARD_SENDER};

/// Mine a new block from the pending transactions:
/// - Snapshot the tip, then release the ledger lock
/// - Search the proof on the blocking pool
/// - Re-lock; if the tip moved (chain replaced meanwhile) mine again
/// - Otherwise add the reward to self and commit the block
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    // Concurrent /mine requests queue here.
    let _mining = state.mining.lock().await;

    loop {
        let (last_proof, last_hash) = {
            let ledger = state.ledger.lock().await;
            let tip = ledger.last_block();
            (tip.proof, tip.hash())
        };

        let t0 = Instant::now();
        let proof = match web::block(move || proof_of_work(last_proof)).await {
            Ok(proof) => proof,
            Err(e) => {
                error!("MINER - proof-of-work worker failed: {e}");
                return HttpResponse::InternalServerError().body("mining failed");
            }
        };
        debug!(
            "MINER - proof {proof} found after {} ms",
            t0.elapsed().as_millis()
        );

        let committed = {
            let _writer = state.writer.lock().await;
            let mut ledger = state.ledger.lock().await;
            try_commit(&mut ledger, last_hash, proof, &state.node_id)
        };
        let Some(block) = committed else {
            warn!("MINER - chain changed while mining; retrying against the new tip");
            continue;
        };

        info!(
            "MINER - forged block {} with {} transaction(s)",
            block.index,
            block.transactions.len()
        );
        return HttpResponse::Ok().json(MineResponse {
            message: "New block forged".to_string(),
            index: block.index,
            transaction: block.transactions,
            proof: block.proof,
            previous_hash: block.previous_hash,
        });
    }
}

/// Commit a block mined against `last_hash`, paying the reward to `node_id`.
/// Returns `None` and leaves the ledger untouched if the tip is no longer `last_hash`.
fn try_commit(
    ledger: &mut Ledger,
    last_hash: String,
    proof: u64,
    node_id: &str,
) -> Option<Block> {
    if ledger.last_block().hash() != last_hash {
        return None;
    }
    ledger.new_transaction(REWARD_SENDER, node_id, MINING_REWARD);
    Some(ledger.new_block(proof, Some(last_hash)).clone())
}
