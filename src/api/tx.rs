use actix_web::{HttpResponse, Responder, post, web};
use log::{debug, warn};

use super::models::{AppState, MessageResponse, NewTxRequest};

/// Submit a new transaction into the pending set.
#[post("/transactions/new")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let NewTxRequest {
        sender,
        recipient,
        amount,
    } = body.into_inner();

    let (Some(sender), Some(recipient), Some(amount)) = (sender, recipient, amount) else {
        warn!("POST /transactions/new - rejected: missing values");
        return HttpResponse::BadRequest().body("Missing values");
    };

    let index = {
        let _writer = state.writer.lock().await;
        let mut ledger = state.ledger.lock().await;
        ledger.new_transaction(sender, recipient, amount)
    };
    debug!("POST /transactions/new - queued for block {index}");

    HttpResponse::Created().json(MessageResponse {
        message: format!("Transaction will be added to Block {index}"),
    })
}

#[cfg(test)]
mod tests {
    use crate::api::{init_routes, test_utils};
    use actix_web::{App, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn accepts_complete_transaction() {
        let state = test_utils::state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/transactions/new")
            .set_json(json!({"sender": "alice", "recipient": "bob", "amount": 5}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction will be added to Block 2");

        let ledger = state.ledger.lock().await;
        assert_eq!(ledger.pending().len(), 1);
        assert_eq!(ledger.pending()[0].recipient, "bob");
    }

    #[actix_web::test]
    async fn missing_field_is_bad_request() {
        let state = test_utils::state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/transactions/new")
            .set_json(json!({"sender": "alice", "amount": 5}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert!(state.ledger.lock().await.pending().is_empty());
    }

    #[actix_web::test]
    async fn accepts_fractional_and_negative_amounts() {
        let state = test_utils::state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;

        for amount in [json!(2.5), json!(-3)] {
            let req = test::TestRequest::post()
                .uri("/transactions/new")
                .set_json(json!({"sender": "a", "recipient": "b", "amount": amount}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
        }

        let ledger = state.ledger.lock().await;
        let amounts: Vec<String> = ledger
            .pending()
            .iter()
            .map(|tx| tx.amount.to_string())
            .collect();
        assert_eq!(amounts, vec!["2.5", "-3"]);
    }

    #[actix_web::test]
    async fn non_numeric_amount_is_bad_request() {
        let state = test_utils::state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/transactions/new")
            .set_json(json!({"sender": "a", "recipient": "b", "amount": "lots"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert!(state.ledger.lock().await.pending().is_empty());
    }
}
