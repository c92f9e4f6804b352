use crate::cli::commands::rule;
use crate::cli::CommandContext;
use crate::core::artifact;
use crate::core::Address;
use crate::proofs::ProofRecord;
use crate::whitelist::WhitelistData;
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ProofArgs {
    /// Address to prove (0x followed by 40 hex digits, any case)
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Whitelist data file (default: <output-dir>/whitelist_data.json)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Print the proof record as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Execute the proof command
pub fn execute(ctx: &CommandContext, args: ProofArgs) -> Result<()> {
    let settings = &ctx.settings;
    let address = Address::parse(&args.address)?;

    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| settings.whitelist_data_path());
    let data = WhitelistData::load(&data_path).with_context(|| {
        format!(
            "Run 'mintkit whitelist <FILE>' first to create {}",
            data_path.display()
        )
    })?;

    let record = ProofRecord::generate(&data, &address)?;
    if !record.verified {
        bail!("Generated proof for {} failed verification", address);
    }

    let proof_path = ctx
        .output_dir()
        .join(record.file_name(&settings.proof.file_prefix));
    artifact::write_json(&proof_path, &record)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }
    if !ctx.is_chatty() {
        println!("{}", serde_json::to_string(&record.proof)?);
        return Ok(());
    }

    let hex_proof = record.proof.to_hex_strings();
    let proof_json = serde_json::to_string(&hex_proof)?;

    println!("\n{}\n", "✓ Merkle Proof Generated!".green().bold());
    rule();
    println!("{}: {}", "Address".bold(), args.address);
    println!("{}: {}", "Status".bold(), "Whitelisted".green());
    println!("{}: {}", "Merkle Root".bold(), record.merkle_root.to_string().cyan());
    println!("\n{}", "Proof Array:".bold());
    println!("{}", serde_json::to_string_pretty(&hex_proof)?);
    println!("\n{}: {}", "Verification".bold(), "Valid".green());

    println!("\n{}", "For Smart Contract (Solidity):".bold());
    println!(
        "   bytes32[] memory proof = new bytes32[]({});",
        hex_proof.len()
    );
    for (i, element) in hex_proof.iter().enumerate() {
        println!("   proof[{}] = {};", i, element);
    }
    println!("\n{}", "For JavaScript (ethers.js):".bold());
    println!("   const proof = {};", proof_json);
    println!("   await contract.mint(quantity, proof, {{ value: ethers.parseEther(\"0.1\") }});");
    println!("\n{}", "For CLI (cast):".bold());
    println!(
        "   cast send $CONTRACT \"mint(uint256,bytes32[])\" 1 \"{}\" --value 0.1ether",
        proof_json
    );
    rule();
    println!("\nProof saved to: {}\n", proof_path.display().to_string().cyan());

    Ok(())
}
