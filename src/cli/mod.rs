//! Command-line interface for mintkit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod context;

pub use context::CommandContext;

/// mintkit - whitelist Merkle roots, proofs and provenance hashes
#[derive(Parser)]
#[command(
    name = "mintkit",
    version,
    about = "Whitelist Merkle roots, inclusion proofs and provenance hashes for NFT mints",
    long_about = "mintkit builds a sorted-pair keccak-256 Merkle tree over a whitelist, generates and verifies inclusion proofs for single addresses, and computes the provenance hash of a metadata directory."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file (default: ./mintkit.toml, then ~/.mintkit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory artifacts are written to and read from
    #[arg(long, global = true, env = "MINTKIT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the whitelist Merkle tree and write its root
    Whitelist(commands::whitelist::WhitelistArgs),

    /// Generate the Merkle proof for one whitelisted address
    Proof(commands::proof::ProofArgs),

    /// Verify a saved proof file
    Verify(commands::verify::VerifyArgs),

    /// Compute the provenance hash of a metadata directory
    Provenance(commands::provenance::ProvenanceArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_whitelist_defaults_input_file() {
        let cli = Cli::try_parse_from(["mintkit", "whitelist"]).unwrap();
        match cli.command {
            Commands::Whitelist(args) => assert_eq!(args.input, PathBuf::from("whitelist.txt")),
            _ => panic!("expected whitelist command"),
        }
    }

    #[test]
    fn test_proof_requires_address() {
        assert!(Cli::try_parse_from(["mintkit", "proof"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["mintkit", "provenance", "meta", "--quiet", "--output-dir", "out"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    }
}
