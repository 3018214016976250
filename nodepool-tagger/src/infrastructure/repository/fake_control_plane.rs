//! In-process stand-in for the container engine and compute endpoints.

use std::{collections::HashMap, sync::Arc, sync::Mutex};

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use url::Url;

pub struct RecordedUpdate {
    pub instance_id: String,
    pub body: Value,
    pub authorization: Option<String>,
    pub has_request_id: bool,
}

#[derive(Default)]
pub struct Recorded {
    pub updates: Mutex<Vec<RecordedUpdate>>,
}

pub fn start() -> (Url, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());
    let data = web::Data::from(recorded.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/20180222/nodePools", web::get().to(list_node_pools))
            .route("/20180222/nodePools/{id}", web::get().to(get_node_pool))
            .route("/20160918/instances/{id}", web::put().to(update_instance))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let address = server.addrs()[0];
    actix_web::rt::spawn(server.disable_signals().run());
    (Url::parse(&format!("http://{address}")).unwrap(), recorded)
}

async fn list_node_pools(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    match query.get("compartmentId").map(String::as_str) {
        Some("C") => HttpResponse::Ok().json(json!([
            { "id": "P1", "name": "pool-1", "clusterId": "cluster" }
        ])),
        _ => HttpResponse::Ok().json(json!([])),
    }
}

async fn get_node_pool(id: web::Path<String>) -> HttpResponse {
    if id.as_str() == "P1" {
        HttpResponse::Ok().json(json!({
            "id": "P1",
            "name": "pool-1",
            "nodes": [{ "id": "i-1", "name": "node-1", "lifecycleState": "ACTIVE" }]
        }))
    } else {
        HttpResponse::NotFound()
            .insert_header(("opc-request-id", "FAKE-REQUEST"))
            .json(json!({
                "code": "NotAuthorizedOrNotFound",
                "message": "Authorization failed or requested resource not found."
            }))
    }
}

async fn update_instance(
    id: web::Path<String>,
    request: HttpRequest,
    body: web::Json<Value>,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    let headers = request.headers();
    recorded.updates.lock().unwrap().push(RecordedUpdate {
        instance_id: id.as_str().to_owned(),
        body: body.into_inner(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        has_request_id: headers.contains_key("opc-request-id"),
    });
    HttpResponse::Ok().json(json!({ "id": id.into_inner() }))
}
