//! Apply command implementation - rewrite migrations in place

use anyhow::Result;

use crate::cli::{GlobalArgs, GuardArgs};
use crate::commands::common::{display_path, scan_migrations};

/// Execute the apply command
pub(crate) fn execute(args: &GuardArgs, global: &GlobalArgs) -> Result<()> {
    let report = scan_migrations(args, global, true)?;

    for outcome in report.updated() {
        println!("Updated: {}", display_path(&outcome.path).display());
    }

    println!();
    println!(
        "Processed {} files with CREATE TRIGGER statements.",
        report.updated_count()
    );

    Ok(())
}

#[cfg(test)]
#[path = "apply_test.rs"]
mod tests;
