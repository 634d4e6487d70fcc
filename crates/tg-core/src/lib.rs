//! tg-core - Core library for trigger-guard
//!
//! This crate discovers SQL migration files, detects `CREATE TRIGGER`
//! statements, and inserts `DROP TRIGGER IF EXISTS` guards ahead of them so
//! a migration set can be re-applied without duplicate-trigger failures.

pub mod config;
pub mod discovery;
pub mod error;
pub mod guard;
pub mod parser;
pub mod rewrite;
pub mod source_file;

pub use config::Config;
pub use discovery::discover_migrations;
pub use error::{GuardError, GuardResult};
pub use guard::DropGuardInjector;
pub use parser::{TriggerDeclaration, TriggerStatementParser};
pub use rewrite::{
    process_file, FileOutcome, FileRewriter, RewriteResult, RewriteStats, RunReport,
};
pub use source_file::SourceFile;
