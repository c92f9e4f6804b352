//! mintkit CLI
//!
//! Command-line interface for whitelist Merkle roots, inclusion proofs and
//! metadata provenance hashes.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mintkit::cli::{commands, Cli, CommandContext, Commands};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Completion { shell } = cli.command {
        return commands::completion::execute(shell);
    }

    let ctx = CommandContext::from_cli(&cli)?;

    // Execute the command
    match cli.command {
        Commands::Whitelist(args) => commands::whitelist::execute(&ctx, args),
        Commands::Proof(args) => commands::proof::execute(&ctx, args),
        Commands::Verify(args) => commands::verify::execute(&ctx, args),
        Commands::Provenance(args) => commands::provenance::execute(&ctx, args),
        Commands::Completion { .. } => unreachable!("handled above"),
    }
}
