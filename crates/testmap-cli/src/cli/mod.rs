//! Command-line interface definition for testmap.
//!
//! `testmap [ROOT]` walks `ROOT` (default `test`), lists every suite and test
//! declared there and prints the result as JSON. Flags override `testmap.toml`
//! and `TESTMAP_*` environment variables; see [`crate::config`].

mod enums;
mod tests;

use std::path::PathBuf;

use clap::Parser;

pub use enums::UiArg;

/// testmap - list mocha suites and tests without running them
#[derive(Parser, Debug)]
#[command(
    name = "testmap",
    version,
    about = "List mocha suites and tests without running them",
    long_about = "testmap loads every test file under ROOT, records each describe/it/hook\n\
                  declaration with the file and line it came from, and prints the suites,\n\
                  the tests and the declaration tree as JSON. Test and hook bodies never run."
)]
pub struct Cli {
    /// Test directory or file to scan
    ///
    /// A path without extension is also tried with each configured extension
    /// appended. Defaults to `test`.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// File extension to include (repeatable, or comma separated)
    #[arg(short = 'e', long = "extension", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Only scan the top level of ROOT
    #[arg(long)]
    pub no_recursive: bool,

    /// Mocha interface the files are written against
    #[arg(long, value_enum, value_name = "UI")]
    pub ui: Option<UiArg>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Path to a config file (defaults to ./testmap.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory; relative paths and reported source files use it
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
