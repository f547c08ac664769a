use actix_web::{HttpResponse, Responder, delete, get, post, web};
use log::{info, warn};

use super::models::{
    AppState, NodeListResponse, NodesResponse, RegisterNodesRequest, ResolveResponse,
};
use crate::consensus;

/// Register peer nodes by URL.
#[post("/nodes/register")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> impl Responder {
    let Some(nodes) = body.into_inner().nodes else {
        warn!("POST /nodes/register - rejected: no node list");
        return HttpResponse::BadRequest().body("Error: Please supply a valid list of nodes");
    };

    let mut ledger = state.ledger.lock().await;
    if let Err(e) = ledger.register_nodes(nodes.as_slice()) {
        warn!("POST /nodes/register - rejected: {e}");
        return HttpResponse::BadRequest().body(e.to_string());
    }

    HttpResponse::Created().json(NodesResponse {
        message: "New nodes have been added".to_string(),
        total_nodes: ledger.nodes(),
    })
}

/// Run consensus against every registered node.
///
/// The writer gate is held for the whole pass so no transaction or mined block
/// can land between the peer scan and the chain replacement. The ledger lock
/// itself is released while peers are fetched, so `/chain` keeps answering.
#[get("/nodes/resolve")]
pub async fn resolve_nodes(state: web::Data<AppState>) -> impl Responder {
    let _writer = state.writer.lock().await;

    let (nodes, local_len) = {
        let ledger = state.ledger.lock().await;
        (ledger.nodes(), ledger.len())
    };
    let winner = consensus::resolve(&nodes, local_len, &*state.peers).await;

    let mut ledger = state.ledger.lock().await;
    let message = match winner {
        Some(chain) => {
            ledger.replace_chain(chain);
            "Our chain was replaced"
        }
        None => "Our chain is authoritative",
    };
    info!("GET /nodes/resolve - {message} (length {})", ledger.len());

    HttpResponse::Ok().json(ResolveResponse {
        message: message.to_string(),
        chain: ledger.chain(),
    })
}

#[get("/nodes")]
pub async fn list_nodes(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().await;
    HttpResponse::Ok().json(NodeListResponse {
        nodes: ledger.nodes(),
    })
}

/// Evict a peer, e.g. one that has been unreachable for a while.
#[delete("/nodes/{node}")]
pub async fn remove_node(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let node = path.into_inner();
    let mut ledger = state.ledger.lock().await;
    if !ledger.unregister_node(&node) {
        return HttpResponse::NotFound().body(format!("Unknown node {node}"));
    }
    info!("DELETE /nodes - removed {node}");

    HttpResponse::Ok().json(NodesResponse {
        message: "Node has been removed".to_string(),
        total_nodes: ledger.nodes(),
    })
}
