//! Structural scanner: locates each test definition in a flat line stream.
//!
//! The scanner is a three-state machine driven by two lexical cues only:
//! a marker token and delimiter nesting depth. There is no parser here.
//! Per position: seek the marker line, seek the declaration line that names
//! the test, then consume body lines until the running delimiter depth
//! returns to zero. Everything from the marker line through the balancing
//! close line is captured byte-for-byte as one [`Block`].
//!
//! Depth counting is deliberately naive: delimiters inside string or comment
//! literals count the same as structural ones. That is documented behavior,
//! not a bug. The counting sits behind [`DepthLexer`] so a literal-aware
//! lexer can be swapped in later without touching the registry or grouper.

use crate::errors::{line_span, to_error_source, SplitError};
use crate::registry::Registry;

// ============================================================================
// SYNTAX CONVENTION
// ============================================================================

/// The lexical convention a test definition follows in the source dialect.
#[derive(Debug, Clone)]
pub struct Syntax {
    /// Literal token whose presence on a line marks the start of a test.
    pub marker: &'static str,
    /// Keyword that begins the declaration line naming the test.
    pub keyword: &'static str,
    /// Delimiter that begins the parameter list on the declaration line.
    pub params_open: char,
    /// Structural open/close delimiters tracked for nesting depth.
    pub open: char,
    pub close: char,
}

impl Default for Syntax {
    /// The Cairo convention used by the contract test sources.
    fn default() -> Self {
        Syntax {
            marker: "#[test]",
            keyword: "fn ",
            params_open: '(',
            open: '{',
            close: '}',
        }
    }
}

// ============================================================================
// DEPTH LEXER SEAM
// ============================================================================

/// Counts delimiter occurrences on a single line.
///
/// The seam for substituting a stricter tokenizer: the state machine only
/// sees `(opens, closes)` per line and never inspects characters itself.
pub trait DepthLexer {
    fn count(&self, line: &str) -> (usize, usize);
}

/// Default lexer: counts every delimiter occurrence on the line, with no
/// awareness of string or comment literals.
#[derive(Debug, Clone)]
pub struct LexicalBraces {
    open: char,
    close: char,
}

impl LexicalBraces {
    pub fn new(open: char, close: char) -> Self {
        LexicalBraces { open, close }
    }
}

impl DepthLexer for LexicalBraces {
    fn count(&self, line: &str) -> (usize, usize) {
        let opens = line.chars().filter(|&c| c == self.open).count();
        let closes = line.chars().filter(|&c| c == self.close).count();
        (opens, closes)
    }
}

// ============================================================================
// EXTRACTED BLOCK
// ============================================================================

/// The exact text of one test definition, marker line through balanced close.
///
/// Invariant: the cumulative delimiter depth over `lines` is zero, and the
/// depth never dips below zero between body entry and the closing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Identifier extracted from the declaration line.
    pub name: String,
    /// Raw lines, verbatim, in source order.
    pub lines: Vec<String>,
    /// 1-based line number of the marker line, kept for diagnostics.
    pub marker_line: usize,
}

impl Block {
    /// The block's raw text with lines rejoined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

// ============================================================================
// DUPLICATE POLICY
// ============================================================================

/// What happens when a second definition reuses an existing identifier.
///
/// The source's historical behavior is last-write-wins; that stays the
/// default. The alternatives exist so the choice is explicit and testable
/// rather than an accident of map insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later definition replaces the earlier one.
    #[default]
    Overwrite,
    /// Earlier definition is kept; the later one is discarded.
    KeepFirst,
    /// A collision aborts the scan.
    Reject,
}

// ============================================================================
// SCANNER
// ============================================================================

/// Walks the input once and builds the [`Registry`] of extracted blocks.
pub struct Scanner {
    syntax: Syntax,
    policy: DuplicatePolicy,
    lexer: Box<dyn DepthLexer>,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new(Syntax::default(), DuplicatePolicy::Overwrite)
    }
}

impl Scanner {
    pub fn new(syntax: Syntax, policy: DuplicatePolicy) -> Self {
        let lexer = Box::new(LexicalBraces::new(syntax.open, syntax.close));
        Scanner {
            syntax,
            policy,
            lexer,
        }
    }

    /// Replaces the depth lexer, keeping syntax and policy.
    pub fn with_lexer(mut self, lexer: Box<dyn DepthLexer>) -> Self {
        self.lexer = lexer;
        self
    }

    /// Scans `source` (named `origin` in diagnostics) into a registry.
    ///
    /// End-of-input while a block is still open is a structural error: the
    /// scan aborts identifying the marker line, rather than silently keeping
    /// a partial block.
    pub fn scan(&self, source: &str, origin: &str) -> Result<Registry, SplitError> {
        let lines: Vec<&str> = source.lines().collect();
        let mut registry = Registry::new();

        let mut i = 0;
        while i < lines.len() {
            if !lines[i].contains(self.syntax.marker) {
                i += 1;
                continue;
            }
            let start = i;

            // Seek the declaration line; attribute lines in between are
            // retained as part of the block.
            while i < lines.len() && !lines[i].trim().starts_with(self.syntax.keyword) {
                i += 1;
            }
            if i == lines.len() {
                return Err(SplitError::MissingSignature {
                    marker_line: start + 1,
                    src: to_error_source(origin, source),
                    span: line_span(source, start),
                });
            }
            let name = self.extract_identifier(lines[i]);

            // Consume the body until depth balances back to zero.
            let mut depth: i64 = 0;
            let mut entered = false;
            let mut end = None;
            while i < lines.len() {
                let (opens, closes) = self.lexer.count(lines[i]);
                depth += opens as i64 - closes as i64;
                if opens > 0 {
                    entered = true;
                }
                if entered && depth == 0 {
                    end = Some(i);
                    break;
                }
                i += 1;
            }
            let end = end.ok_or_else(|| SplitError::UnterminatedBlock {
                marker_line: start + 1,
                src: to_error_source(origin, source),
                span: line_span(source, start),
            })?;

            let block = Block {
                name,
                lines: lines[start..=end].iter().map(|l| l.to_string()).collect(),
                marker_line: start + 1,
            };
            self.insert(&mut registry, block, source, origin)?;
            i = end + 1;
        }

        Ok(registry)
    }

    /// Identifier = text after the keyword, up to the parameter-list open
    /// delimiter (or end of line), trimmed.
    fn extract_identifier(&self, decl_line: &str) -> String {
        let trimmed = decl_line.trim();
        let after = &trimmed[self.syntax.keyword.len()..];
        match after.find(self.syntax.params_open) {
            Some(idx) => after[..idx].trim().to_string(),
            None => after.trim().to_string(),
        }
    }

    fn insert(
        &self,
        registry: &mut Registry,
        block: Block,
        source: &str,
        origin: &str,
    ) -> Result<(), SplitError> {
        match self.policy {
            DuplicatePolicy::Overwrite => {
                registry.insert(block);
            }
            DuplicatePolicy::KeepFirst => {
                if registry.lookup(&block.name).is_none() {
                    registry.insert(block);
                }
            }
            DuplicatePolicy::Reject => {
                if registry.lookup(&block.name).is_some() {
                    return Err(SplitError::DuplicateDefinition {
                        span: line_span(source, block.marker_line - 1),
                        src: to_error_source(origin, source),
                        marker_line: block.marker_line,
                        name: block.name,
                    });
                }
                registry.insert(block);
            }
        }
        Ok(())
    }
}
