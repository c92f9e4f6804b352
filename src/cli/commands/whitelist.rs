use crate::cli::commands::{print_sample, rule};
use crate::cli::CommandContext;
use crate::core::artifact;
use crate::whitelist::{Whitelist, WhitelistData};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct WhitelistArgs {
    /// Text file with one address per line
    #[arg(value_name = "FILE", default_value = "whitelist.txt")]
    pub input: PathBuf,

    /// Print the whitelist data record as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Execute the whitelist command
pub fn execute(ctx: &CommandContext, args: WhitelistArgs) -> Result<()> {
    let settings = &ctx.settings;

    let whitelist = Whitelist::from_file(&args.input)
        .with_context(|| format!("Failed to load whitelist {}", args.input.display()))?;
    let tree = whitelist.build_tree_with_threshold(settings.whitelist.parallel_threshold)?;
    let data = WhitelistData::new(&whitelist, &tree);

    let root_path = settings.root_file_path();
    let data_path = settings.whitelist_data_path();
    artifact::write_atomic(&root_path, data.merkle_root.to_prefixed_hex().as_bytes())?;
    data.save(&data_path)?;

    tracing::info!(
        addresses = whitelist.len(),
        depth = tree.depth(),
        root = %data.merkle_root,
        "whitelist tree built"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }
    if !ctx.is_chatty() {
        println!("{}", data.merkle_root);
        return Ok(());
    }

    println!("\n{}\n", "✓ Whitelist Merkle Root Generated!".green().bold());
    rule();
    println!("{}", "Statistics:".bold());
    println!("   Total Addresses: {}", whitelist.len());
    println!("   Tree Depth: {}", tree.depth());
    println!("\n{}", "Merkle Root:".bold());
    println!("   {}", data.merkle_root.to_string().cyan());
    println!("\n{}", "Files Created:".bold());
    println!("   • {} (root only)", root_path.display());
    println!("   • {} (full data)", data_path.display());
    println!("\n{}", "Next Steps:".bold());
    println!("   1. Copy the Merkle Root above");
    println!("   2. Add to .env: WHITELIST_MERKLE_ROOT={}", data.merkle_root);
    println!("   3. Run 'mintkit proof <ADDRESS>' to create proofs for users");
    rule();

    println!("\n{}", "Sample Addresses:".bold());
    print_sample(whitelist.addresses(), 5);
    println!();

    Ok(())
}
