mod api;
mod blockchain;
mod config;
mod consensus;
mod error;
mod transaction;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use api::AppState;
use config::Config;
use consensus::{HttpPeerClient, PeerClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = Config::from_env();
    let peers: Arc<dyn PeerClient> =
        Arc::new(HttpPeerClient::new(config.peer_timeout).map_err(std::io::Error::other)?);

    info!(
        "⛓️ Starting ledger node {} at http://{}:{}",
        config.node_id, config.host, config.port
    );

    let state = web::Data::new(AppState::new(config.node_id.clone(), peers));

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
