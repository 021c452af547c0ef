//! The testsplit command-line interface.
//!
//! This module is the entry point for the tool and orchestrates the core
//! library: read the input, scan it into the registry, assemble the groups,
//! report diagnostics, write the suite files.

use clap::Parser;
use std::{fs, process};

use crate::cli::args::SplitArgs;
use crate::errors::SplitError;
use crate::grouper;
use crate::groups::{GroupSpec, DEFAULT_GROUPS};
use crate::scanner::Scanner;
use crate::writer;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = SplitArgs::parse();

    if let Err(e) = split(&args) {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

fn split(args: &SplitArgs) -> Result<(), SplitError> {
    let source = fs::read_to_string(&args.input).map_err(|source| SplitError::ReadInput {
        path: args.input.clone(),
        source,
    })?;

    let spec = match &args.groups {
        Some(path) => GroupSpec::from_yaml_file(path)?,
        None => DEFAULT_GROUPS.clone(),
    };

    let origin = args.input.display().to_string();
    let registry = Scanner::default().scan(&source, &origin)?;

    let report = grouper::assemble(&registry, &spec);
    output::print_report(&report);

    let written = writer::write_all(&report.documents, &args.out_dir)?;
    output::print_summary(registry.len(), written.len());

    Ok(())
}
