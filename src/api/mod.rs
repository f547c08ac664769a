mod chain;
mod health;
mod mining;
pub mod models;
mod nodes;
mod tx;

use actix_web::{
    HttpResponse,
    error::InternalError,
    web::{self, ServiceConfig},
};
use log::warn;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    // Undecodable bodies are the client's fault: answer 400 with the reason.
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        warn!("{} {} - rejected body: {err}", req.method(), req.path());
        let response = HttpResponse::BadRequest().body(err.to_string());
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .service(health::health_check)
        .service(mining::mine)
        .service(tx::post_transaction)
        .service(chain::get_chain)
        .service(nodes::register_nodes)
        .service(nodes::resolve_nodes)
        .service(nodes::list_nodes)
        .service(nodes::remove_node);
}
