//! CLI command implementations

pub mod completion;
pub mod proof;
pub mod provenance;
pub mod verify;
pub mod whitelist;

use colored::Colorize;

/// Width of the separator rules around result blocks
const RULE_WIDTH: usize = 57;

/// Print a horizontal rule
pub(crate) fn rule() {
    println!("{}", "━".repeat(RULE_WIDTH).green());
}

/// Print at most the first `head` items, then a count of the rest
pub(crate) fn print_sample<T: std::fmt::Display>(items: &[T], head: usize) {
    for (i, item) in items.iter().take(head).enumerate() {
        println!("   {}. {}", i + 1, item);
    }
    if items.len() > head {
        println!("   ... and {} more", items.len() - head);
    }
}
