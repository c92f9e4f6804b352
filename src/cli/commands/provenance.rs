use crate::cli::commands::rule;
use crate::cli::CommandContext;
use crate::core::artifact;
use crate::provenance::{hash_directory, DigestScheme, ProvenanceRecord};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Per-file digests shown before the list is elided
const SHOWN_FILES: usize = 5;

#[derive(Args, Debug)]
pub struct ProvenanceArgs {
    /// Directory containing the metadata files
    #[arg(value_name = "DIR", default_value = "metadata")]
    pub dir: PathBuf,

    /// How per-file digests are combined (default from config: raw)
    #[arg(long, value_enum)]
    pub scheme: Option<DigestScheme>,

    /// Extension of eligible files, without the dot (default from config: json)
    #[arg(long)]
    pub extension: Option<String>,

    /// Print the provenance record as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Execute the provenance command
pub fn execute(ctx: &CommandContext, args: ProvenanceArgs) -> Result<()> {
    let settings = &ctx.settings;
    let scheme = args.scheme.unwrap_or(settings.provenance.scheme);
    let extension = args
        .extension
        .as_deref()
        .unwrap_or(&settings.provenance.extension)
        .trim_start_matches('.');

    if ctx.is_chatty() && !args.json {
        println!("\nUsing metadata directory: {}", args.dir.display());
    }

    let record = hash_directory(&args.dir, extension, scheme)?;

    let hash_path = settings.provenance_hash_path();
    let data_path = settings.provenance_data_path();
    artifact::write_atomic(&hash_path, record.provenance_hash.to_prefixed_hex().as_bytes())?;
    record.save(&data_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }
    if !ctx.is_chatty() {
        println!("{}", record.provenance_hash);
        return Ok(());
    }

    print_file_digests(&record);

    println!("\n{}\n", "✓ Provenance Hash Generated!".green().bold());
    rule();
    println!("{}", "Statistics:".bold());
    println!("   Total Files: {}", record.total_files);
    println!("   Algorithm: {}", record.algorithm);
    println!("\n{}", "Provenance Hash:".bold());
    println!("   {}", record.provenance_hash.to_string().cyan());
    println!("\n{}", "Files Created:".bold());
    println!("   • {} (hash only)", hash_path.display());
    println!("   • {} (full data for verification)", data_path.display());
    println!("\n{}", "Next Steps:".bold());
    println!("   1. Add to .env: PROVENANCE_HASH={}", record.provenance_hash);
    println!("   2. KEEP {} for post-reveal verification", data_path.display());
    println!("   3. Publish this hash BEFORE your sale starts");
    rule();
    println!();

    Ok(())
}

fn print_file_digests(record: &ProvenanceRecord) {
    println!("\n{}", "Processed Metadata Files:".bold());
    let last = record.total_files - 1;
    for (index, (file, hash)) in record.files.iter().zip(&record.file_hashes).enumerate() {
        if index < SHOWN_FILES || index == last {
            println!("   {:>4}. {} → {}...", index, file, &hash[..16]);
        } else if index == SHOWN_FILES {
            println!("   ... ({} more files)", record.total_files - SHOWN_FILES - 1);
        }
    }
}
