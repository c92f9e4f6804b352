use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

const BIN_NAME: &str = "mintkit";

/// Generate shell completion scripts.
///
/// The script goes to stdout and installation hints to stderr, so
/// `mintkit completion bash > file` yields a clean script.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());

    eprintln!("\n{}", "Installation Instructions:".bold());
    match shell {
        Shell::Bash => {
            eprintln!("  Add the following to your ~/.bashrc or ~/.bash_profile:");
            eprintln!("  {}", "eval \"$(mintkit completion bash)\"".cyan());
        },
        Shell::Zsh => {
            eprintln!("  Save the script in your fpath:");
            eprintln!(
                "  {}",
                "mintkit completion zsh > ~/.local/share/zsh/site-functions/_mintkit".cyan()
            );
        },
        Shell::Fish => {
            eprintln!("  Save the completion script:");
            eprintln!(
                "  {}",
                "mintkit completion fish > ~/.config/fish/completions/mintkit.fish".cyan()
            );
        },
        Shell::PowerShell => {
            eprintln!("  Add the following to your PowerShell profile:");
            eprintln!(
                "  {}",
                "Invoke-Expression (& mintkit completion powershell)".cyan()
            );
        },
        _ => {
            eprintln!(
                "  Please refer to your shell's documentation for installing completion scripts."
            );
        },
    }

    Ok(())
}
