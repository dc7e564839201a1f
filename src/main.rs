use paper_alluvial::{HttpServer, Visualization, VizConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "PAPER_ALLUVIAL_CONFIG";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Paper Alluvial v{}", paper_alluvial::version());
    println!("==========================================");
    println!();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    start_server(config).await;
}

/// Config path: first argument, then `PAPER_ALLUVIAL_CONFIG`, else defaults
fn load_config() -> paper_alluvial::VizResult<VizConfig> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    match path {
        Some(path) => {
            info!("Loading config from {:?}", path);
            VizConfig::from_yaml_file(path)
        }
        None => Ok(VizConfig::default()),
    }
}

async fn start_server(config: VizConfig) {
    let server_config = config.server.clone();

    let viz = match Visualization::load(config).await {
        Ok(viz) => viz,
        Err(e) => {
            eprintln!("Failed to load paper index: {}", e);
            std::process::exit(1);
        }
    };

    if !viz.warnings().is_empty() {
        warn!("{} extraction warnings", viz.warnings().len());
    }
    println!(
        "Loaded {} papers: {} entities, {} relations",
        viz.store().len(),
        viz.graph().total_entities(),
        viz.graph().edge_count()
    );

    let server = HttpServer::new(Arc::new(RwLock::new(viz)), server_config);

    println!("Server ready. Press Ctrl+C to stop.");
    println!();

    if let Err(e) = server.start().await {
        eprintln!("Server error: {}", e);
    }
}
