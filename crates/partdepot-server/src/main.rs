//! Binary entrypoint for the partdepot inventory server.
//!
//! Reads configuration from environment variables:
//! - `PARTDEPOT_DB_PATH`: SQLite database file path (default: "partdepot.db")
//! - `PARTDEPOT_PORT`: Server listen port (default: "5252")

use partdepot_server::server::Server;
use partdepot_server::state::AppState;

fn main() {
    tracing_subscriber::fmt::init();

    let db_path =
        std::env::var("PARTDEPOT_DB_PATH").unwrap_or_else(|_| "partdepot.db".to_string());
    let port = std::env::var("PARTDEPOT_PORT").unwrap_or_else(|_| "5252".to_string());

    let state = AppState::new(&db_path).expect("failed to open inventory database");

    let addr = format!("0.0.0.0:{}", port);
    let server = Server::bind(addr.as_str(), state).expect("failed to bind listening socket");

    tracing::info!("partdepot server listening on {}", addr);
    server.run();
}
