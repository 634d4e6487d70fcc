//! Check command implementation - report migrations missing guards

use anyhow::Result;

use crate::cli::{GlobalArgs, GuardArgs};
use crate::commands::common::{display_path, scan_migrations, ExitCode};

/// Execute the check command
pub(crate) fn execute(args: &GuardArgs, global: &GlobalArgs) -> Result<()> {
    let report = scan_migrations(args, global, false)?;

    for outcome in report.updated() {
        println!("Would update: {}", display_path(&outcome.path).display());
    }

    let pending = report.updated_count();
    println!();
    println!("{} files need DROP TRIGGER guards.", pending);

    if pending > 0 {
        return Err(ExitCode(1).into());
    }

    Ok(())
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
