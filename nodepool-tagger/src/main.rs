mod api;
mod infrastructure;
mod server;

use colored::Colorize;
use infrastructure::{
    build_config, telemetry::initialize_telemetry, NodePoolTaggerConfig, ServiceProvider,
};

#[tokio::main]
async fn main() {
    let config = build_config().and_then(|c| Ok(c.try_deserialize::<NodePoolTaggerConfig>()?));
    let config = match config {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Cannot build config".red());
            return;
        }
    };

    if let Err(e) = initialize_telemetry(&config.telemetry) {
        eprintln!("{}: {e}", "Cannot build logger".red());
        return;
    };

    let service_provider = match ServiceProvider::build(&config) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Cannot build Service Provider".red());
            return;
        }
    };

    server::run(service_provider, &config.host).await;
}
