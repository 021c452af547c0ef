//! Command-line arguments for the splitter.
//!
//! Declarative `clap` derive structure. There are no subcommands (the tool
//! has one job) and every argument has the fixed default the contract repo
//! uses, so a bare invocation is the normal case.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "testsplit",
    version,
    about = "Splits a monolithic test file into themed suite files, preserving every test verbatim."
)]
pub struct SplitArgs {
    /// The source file containing the test definitions to extract.
    #[arg(default_value = "contracts/src/tests/test_integration.cairo")]
    pub input: PathBuf,

    /// Directory the suite files are written to.
    #[arg(long, default_value = "contracts/src/tests")]
    pub out_dir: PathBuf,

    /// YAML group table overriding the built-in one.
    #[arg(long)]
    pub groups: Option<PathBuf>,
}
