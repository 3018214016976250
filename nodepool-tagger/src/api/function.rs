use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use domain_tagging::{model::vo::ReconcileOutcome, service::ReconcileService};

use super::dtos::ResponseBase;

/// Function invoke endpoint; the body is the raw event envelope.
#[tracing::instrument(skip_all)]
#[post("/call")]
pub async fn call(
    service: web::Data<dyn ReconcileService>,
    payload: web::Bytes,
) -> HttpResponse {
    match service.reconcile(&payload).await {
        Ok(outcome) => HttpResponse::Ok().json(ResponseBase::ok(Some(outcome))),
        Err(e) => {
            tracing::error!("{e}");
            let status = if e.is_local() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            HttpResponse::build(status)
                .json(ResponseBase::<ReconcileOutcome>::err(status.as_u16(), &e.to_string()))
        }
    }
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use domain_tagging::{exception::TaggerException, mock::MockReconcileService};

    use super::*;

    async fn invoke(service: MockReconcileService, body: &'static str) -> (StatusCode, serde_json::Value) {
        let service: Arc<dyn ReconcileService> = Arc::new(service);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .service(call)
                .service(health),
        )
        .await;
        let request = test::TestRequest::post().uri("/call").set_payload(body).to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn match_is_reported_in_body() {
        let mut service = MockReconcileService::new();
        service.expect_reconcile().times(1).returning(|_| {
            Ok(ReconcileOutcome::Tagged {
                instance_id: "i-3".to_string(),
                node_pool_id: "ocid1.nodepool.oc1..p2".to_string(),
                node_pool_name: "P2".to_string(),
            })
        });

        let (status, body) = invoke(service, r#"{"data": {"resourceId": "i-3"}}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"]["outcome"], "tagged");
        assert_eq!(body["content"]["instanceId"], "i-3");
        assert_eq!(body["content"]["nodePoolName"], "P2");
    }

    #[actix_web::test]
    async fn configuration_error_is_bad_request() {
        let mut service = MockReconcileService::new();
        service.expect_reconcile().returning(|_| {
            Err(TaggerException::Configuration {
                missing: vec!["tag_name"],
            })
        });

        let (status, body) = invoke(service, "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert!(body.get("content").is_none());
    }

    #[actix_web::test]
    async fn directory_failure_is_bad_gateway() {
        let mut service = MockReconcileService::new();
        service.expect_reconcile().returning(|_| {
            Err(TaggerException::DirectoryUnavailable {
                source: anyhow::anyhow!("timed out"),
            })
        });

        let (status, _) = invoke(service, "{}").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(response.status().is_success());
    }
}
