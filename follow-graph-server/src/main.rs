use follow_graph_server::{Dependencies, config, server};
use tracing::info;

/// Main entry point for the follow graph server.
///
/// Initializes dotenv and logging, wires the application dependencies, and
/// serves the HTTP API.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("Starting follow graph server...");

    let dependencies = match Dependencies::new().await {
        Ok(dependencies) => dependencies,
        Err(e) => {
            eprintln!("Failed to initialize dependencies: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = server::create_app(dependencies.directory, dependencies.graph);
    let addr = config::server_addr();

    if let Err(e) = server::run_server(app, addr).await {
        eprintln!("Server error: {:?}", e);
        std::process::exit(1);
    }
}
