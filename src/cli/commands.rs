use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsroom")]
#[command(about = "Multi-source news aggregator with translation and a cached JSON endpoint")]
#[command(version)]
pub struct Cli {
    /// JSON file with the sources to aggregate (built-in list if not specified)
    #[arg(long, global = true, env = "NEWSROOM_SOURCES_PATH")]
    pub sources: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the news endpoint and page shell over HTTP
    Serve {
        /// Bind host (overrides NEWSROOM_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides NEWSROOM_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Aggregate all sources once and print the items as JSON
    Fetch {
        /// Only print the first N items
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the configured sources
    Sources,
}
