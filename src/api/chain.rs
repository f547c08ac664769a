use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse};

/// Get the full chain. Peers fetch this route during conflict resolution.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().await;
    HttpResponse::Ok().json(ChainResponse {
        chain: ledger.chain(),
        length: ledger.len(),
    })
}

#[cfg(test)]
mod tests {
    use crate::api::{init_routes, test_utils};
    use crate::consensus::PeerChain;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn serves_genesis_chain() {
        let state = test_utils::state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;

        let req = test::TestRequest::get().uri("/chain").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        // The body is exactly what peers decode during resolution.
        let body: PeerChain = test::read_body_json(resp).await;
        assert_eq!(body.length, 1);
        assert_eq!(body.chain.len(), 1);
        assert_eq!(body.chain[0].index, 1);
        assert_eq!(body.chain[0].previous_hash, "1");
    }
}
