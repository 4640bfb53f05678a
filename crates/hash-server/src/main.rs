//! gethashes HTTP digest service
//!
//! Computes cryptographic digests of an uploaded file or a literal text
//! string and returns them as JSON.
//!
//! # Usage
//!
//! ```bash
//! gethashes [--bind <addr>] [--port <port>] [--staging-dir <path>] [--assets-dir <path>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `hash_server=info`)
//!
//! # Examples
//!
//! ```bash
//! curl -XPOST http://localhost:7001/string -d 'hash=all' -d 'ct=hello'
//! curl -XPOST http://localhost:7001/file -F file=@notes.txt -F hash=md5
//! ```

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use hash_server::{HashServer, ServerConfig};

/// HTTP digest service
#[derive(Parser)]
#[command(name = "gethashes")]
#[command(about = "HTTP service that computes cryptographic digests of strings and files")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 7001)]
    port: u16,

    /// Directory uploads are staged to (defaults to the system temp dir)
    #[arg(long)]
    staging_dir: Option<PathBuf>,

    /// Directory holding the landing page and /img assets
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hash_server=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        bind: args.bind,
        port: args.port,
        staging_dir: args.staging_dir.unwrap_or_else(std::env::temp_dir),
        assets_dir: args.assets_dir,
    };

    HashServer::new(config).run().await?;
    Ok(())
}
