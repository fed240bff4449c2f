use clap::{Args, Parser, Subcommand};
use lakepath::{
    config::CONFIG_ENV_VAR,
    dataset::{DEFAULT_SHOW_LIMIT, DEFAULT_SHOW_TRUNCATE},
};
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "lakepath",
    version,
    about = "Derive staging/bronze paths and catalog ids for data lake tables"
)]
pub struct Cli {
    /// Settings file with a `[paths]` table; defaults apply when omitted.
    #[arg(long, global = true, env = CONFIG_ENV_VAR, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write `[debug]` lines to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print staging path, bronze path and catalog id for tables of one database.
    Describe(DescribeArgs),

    /// Print the employee demo table.
    Demo(DemoArgs),
}

///
/// DescribeArgs
///

#[derive(Debug, Args)]
pub struct DescribeArgs {
    #[arg(long, short)]
    pub database: String,

    /// Table name; repeat for several tables.
    #[arg(long = "table", short, required = true)]
    pub tables: Vec<String>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

///
/// DemoArgs
///

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Maximum number of rows to print.
    #[arg(long, default_value_t = DEFAULT_SHOW_LIMIT)]
    pub limit: usize,

    /// Cut cells longer than this many characters; 0 disables.
    #[arg(long, default_value_t = DEFAULT_SHOW_TRUNCATE)]
    pub truncate: usize,

    /// Also print the schema tree.
    #[arg(long)]
    pub schema: bool,
}

/// Parse failures that are real errors, as opposed to `--help` and
/// `--version` output which clap also reports through `Err`.
#[must_use]
pub fn is_usage_error(err: &clap::Error) -> bool {
    err.use_stderr()
}

///
/// TESTS
///
