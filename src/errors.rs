//! Unified, `miette`-based error type for the splitter.
//!
//! Every failure mode in the pipeline is a variant of [`SplitError`].
//! Structural errors carry the scanned source and a labeled span so the
//! offending marker line is shown in context; I/O and configuration errors
//! carry the path they failed on. Lookup misses are *not* errors; they are
//! diagnostics collected by the grouper and reported as warnings.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SplitError {
    /// A test marker was found but end-of-input arrived before the body's
    /// delimiters balanced back to depth zero.
    #[error("unterminated test block: marker at line {marker_line} never closes")]
    #[diagnostic(
        code(testsplit::scan::unterminated_block),
        help("every test body must close all `{{` it opens before end of file")
    )]
    UnterminatedBlock {
        marker_line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("this marker's block is never closed")]
        span: SourceSpan,
    },

    /// A test marker was found but no declaration line followed it.
    #[error("test marker at line {marker_line} is not followed by a declaration")]
    #[diagnostic(
        code(testsplit::scan::missing_signature),
        help("a `fn <name>(...)` line must follow the marker")
    )]
    MissingSignature {
        marker_line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("no declaration follows this marker")]
        span: SourceSpan,
    },

    /// Two tests share a name and the duplicate policy rejects collisions.
    #[error("duplicate test definition: `{name}` at line {marker_line}")]
    #[diagnostic(
        code(testsplit::scan::duplicate_definition),
        help("rename one of the tests, or scan with an overwrite policy")
    )]
    DuplicateDefinition {
        name: String,
        marker_line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("second definition of `{name}`")]
        span: SourceSpan,
    },

    #[error("failed to read {path}")]
    #[diagnostic(code(testsplit::io::read))]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    #[diagnostic(code(testsplit::io::write))]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid group table in {path}")]
    #[diagnostic(
        code(testsplit::config::groups),
        help("the table is a YAML list of {{ name, members }} entries")
    )]
    GroupConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Builds a `NamedSource` for attaching scanned text to a diagnostic.
pub fn to_error_source(origin: &str, source: &str) -> NamedSource<String> {
    NamedSource::new(origin, source.to_string())
}

/// Byte span of the given 0-based line within `source`, for span labels.
pub fn line_span(source: &str, line_idx: usize) -> SourceSpan {
    let mut offset = 0;
    for (i, line) in source.lines().enumerate() {
        if i == line_idx {
            return SourceSpan::new(offset.into(), line.len().max(1));
        }
        offset += line.len() + 1;
    }
    SourceSpan::new(offset.saturating_sub(1).into(), 1)
}
