use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hexa_crypto::HasherKind;

#[derive(Parser)]
#[command(
    name = "hexa",
    about = "Hexa: create and fetch content-addressed resources over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the id a hasher would assign to some content
    Hash(HashArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Hashing adapter: mock or blake3 (overrides the config file)
    #[arg(long)]
    pub hasher: Option<HasherKind>,
}

#[derive(Args)]
pub struct HashArgs {
    /// Content to hash
    pub content: String,
    /// Hashing adapter: mock or blake3
    #[arg(long, default_value = "mock")]
    pub hasher: HasherKind,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML configuration file to read instead of the defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
