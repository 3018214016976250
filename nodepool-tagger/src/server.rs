use actix_web::web;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{HostConfig, ServiceProvider};

pub async fn run(service_provider: ServiceProvider, host: &HostConfig) {
    tokio::select! {
        _ = initialize_web_host(service_provider, host) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping tagger (ctrl-c handling).");
        }
    }
}

async fn initialize_web_host(sp: ServiceProvider, host: &HostConfig) {
    let reconcile_service = sp.reconcile_service();
    let server = actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(web::Data::from(reconcile_service.clone()))
            .service(api::function::call)
            .service(api::function::health)
    })
    .bind((host.bind_address.to_owned(), host.bind_port));
    let server = match server {
        Ok(server) => server,
        Err(e) => return error!("Cannot bind {}:{}: {e}", host.bind_address, host.bind_port),
    };
    info!("Listening on {}:{}.", host.bind_address, host.bind_port);
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {e}"),
    }
}
