use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use newsroom::api::{self, AppState};
use newsroom::app::App;
use newsroom::cli::{Cli, Commands};
use newsroom::config::Config;
use newsroom::sources::SourceRegistry;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `fetch` output stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newsroom=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::from_env()?;

    let registry = match &cli.sources {
        Some(path) => SourceRegistry::from_path(path)
            .with_context(|| format!("failed to load sources from {}", path))?,
        None => SourceRegistry::builtin(),
    };

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            cmd_serve(&config, registry).await
        }
        Commands::Fetch { limit } => cmd_fetch(&config, registry, limit).await,
        Commands::Sources => cmd_sources(&registry),
    }
}

async fn cmd_serve(config: &Config, registry: SourceRegistry) -> anyhow::Result<()> {
    let app = App::from_config(config, registry);
    let router = api::router(AppState::from(&app));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        addr = %addr,
        sources = app.registry.len(),
        window_secs = config.cache_ttl_secs,
        "Serving news"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}

async fn cmd_fetch(
    config: &Config,
    registry: SourceRegistry,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let app = App::from_config(config, registry);
    let items = app.cache.get_news().await;

    let shown = match limit {
        Some(n) => &items[..n.min(items.len())],
        None => &items[..],
    };

    println!("{}", serde_json::to_string_pretty(shown)?);

    Ok(())
}

fn cmd_sources(registry: &SourceRegistry) -> anyhow::Result<()> {
    if registry.is_empty() {
        println!("No sources configured.");
        return Ok(());
    }

    println!("Configured sources:\n");
    for source in registry.sources() {
        println!("  {} [{}, {}]", source.name, source.category, source.language);
        println!("    URL: {}", source.url);
    }

    Ok(())
}
