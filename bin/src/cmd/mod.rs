//! CLI subcommand modules.
//!
//! This module contains the implementations for all ronda CLI subcommands.

use anyhow::Result;
use serde::Serialize;

pub(crate) mod cagr;
pub(crate) mod report;
pub(crate) mod trend;
pub(crate) mod ttm;

const BOX_WIDTH: usize = 62;

/// Print a boxed title.
pub(crate) fn print_header(title: &str) {
    println!("\n╔{}╗", "═".repeat(BOX_WIDTH));
    println!("║{:^width$}║", title, width = BOX_WIDTH);
    println!("╚{}╝\n", "═".repeat(BOX_WIDTH));
}

/// Print a section rule with a heading.
pub(crate) fn print_section(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", title);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a fraction as a signed percentage.
pub(crate) fn pct(fraction: f64) -> String {
    format!("{:+.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct() {
        assert_eq!(pct(0.1234), "+12.34%");
        assert_eq!(pct(-0.05), "-5.00%");
        assert_eq!(pct(0.0), "+0.00%");
    }
}
