//! Neobrutalism MCP Server Binary
//!
//! Serves the local neobrutalism component catalog over stdio.
//!
//! ## Usage
//!
//! ```bash
//! # Run as MCP server (stdio)
//! neobrutal-mcp-server
//!
//! # Pick a framework (currently all served from the same catalog)
//! neobrutal-mcp-server --framework svelte
//! FRAMEWORK=vue neobrutal-mcp-server
//!
//! # Skip catalog discovery
//! NEOBRUTAL_COMPONENTS_DIR=./components neobrutal-mcp-server
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use neobrutal_core::{log_framework_selection, select_framework};
use neobrutal_mcp::{McpServer, ServerConfig, SERVER_DESCRIPTION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "neobrutal-mcp-server", version, about = SERVER_DESCRIPTION)]
struct Cli {
    /// Component framework: react, svelte or vue
    #[arg(short, long)]
    framework: Option<String>,

    /// Catalog root to serve instead of searching for one
    #[arg(long, env = "NEOBRUTAL_COMPONENTS_DIR")]
    components_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (to stderr so it doesn't interfere with stdio MCP)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neobrutal_mcp=info,neobrutal_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting Neobrutalism Components MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let env_framework = std::env::var("FRAMEWORK").ok();
    let selection = select_framework(cli.framework.as_deref(), env_framework.as_deref());
    log_framework_selection(selection.framework);

    let config = ServerConfig::builder()
        .framework(selection.framework)
        .components_dir(cli.components_dir)
        .build();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let server = Arc::new(McpServer::from_config(config)?);
        tracing::info!("Using local neobrutalism components - no API rate limiting");

        tracing::info!("MCP server ready, listening on stdio");
        server.run_stdio().await?;

        tracing::info!("stdin closed, shutting down");
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
