//! Handles all user-facing output for the CLI.
//!
//! Centralizing the printing here keeps the pipeline code free of
//! presentation concerns and the output consistent: warnings in yellow on
//! stderr, informational notes in cyan, the final summary in green.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::grouper::GroupReport;

/// Prints one warning line per identifier a group requested but the scan
/// did not find, and one note per extracted test no group claims.
pub fn print_report(report: &GroupReport) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    for (group, name) in &report.missing {
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        let _ = write_label(&mut stderr, "warning");
        let _ = stderr.reset();
        eprintln!(": test `{name}` requested by group `{group}` was not found");
    }
    for name in &report.ungrouped {
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
        let _ = write_label(&mut stderr, "note");
        let _ = stderr.reset();
        eprintln!(": extracted test `{name}` is not listed in any group");
    }
}

/// Prints the end-of-run summary.
pub fn print_summary(extracted: usize, written: usize) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    println!("Extracted {extracted} tests, wrote {written} suite files.");
    let _ = stdout.reset();
}

fn write_label(stream: &mut StandardStream, label: &str) -> std::io::Result<()> {
    use std::io::Write;
    write!(stream, "{label}")
}
