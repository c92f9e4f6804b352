use crate::cli::CommandContext;
use crate::core::artifact;
use crate::core::error::MintkitError;
use crate::core::types::Hash;
use crate::proofs::ProofRecord;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Proof file written by 'mintkit proof'
    #[arg(value_name = "PROOF")]
    pub proof: PathBuf,

    /// Root to verify against (default: the root recorded in the proof file)
    #[arg(long)]
    pub root: Option<String>,
}

/// Execute the verify command
pub fn execute(ctx: &CommandContext, args: VerifyArgs) -> Result<()> {
    let record: ProofRecord = artifact::read_json(&args.proof)?;

    let root = match &args.root {
        Some(text) => Hash::from_hex(text).map_err(|e| MintkitError::InvalidHash {
            input: text.clone(),
            reason: e.to_string(),
        })?,
        None => record.merkle_root,
    };

    if ctx.verbose {
        println!("  • Address: {}", record.address);
        println!("  • Leaf: {}", record.address.leaf());
        println!("  • Root: {}", root.to_string().cyan());
        println!("  • Proof elements: {}", record.proof.len());
    }

    let valid = record.verify_against(&root);
    tracing::info!(address = %record.address, root = %root, valid, "verified proof file");

    if !valid {
        if ctx.is_chatty() {
            println!("{}", "✗ Proof verification failed!".red());
            println!("  • The proof path does not reconstruct to {}", root);
        }
        bail!("Proof for {} does not verify against {}", record.address, root);
    }

    if ctx.is_chatty() {
        println!("{}", "✓ Proof verification successful!".green());
        println!("  • {} is included under {}", record.address, root);
    }
    Ok(())
}
