// Structural scanner behavior: block delimiting, exact-text preservation,
// duplicate policies, and structural failure modes.

use testsplit::scanner::{Block, DepthLexer, DuplicatePolicy, Scanner, Syntax};
use testsplit::SplitError;

const SOURCE: &str = "\
// integration tests

#[test]
fn test_alpha() {
    assert(result == 5, 'alpha');
}

#[test]
#[available_gas(2000000)]
fn test_beta() {
    if condition {
        do_thing();
    }
}
";

fn scan(source: &str) -> testsplit::registry::Registry {
    Scanner::default().scan(source, "test.cairo").unwrap()
}

#[test]
fn test_scan_finds_all_definitions() {
    let registry = scan(SOURCE);
    assert_eq!(registry.len(), 2);
    assert!(registry.lookup("test_alpha").is_some());
    assert!(registry.lookup("test_beta").is_some());
}

#[test]
fn test_block_text_is_byte_exact_from_marker_to_close() {
    let registry = scan(SOURCE);
    let alpha = registry.lookup("test_alpha").unwrap();
    assert_eq!(
        alpha.text(),
        "#[test]\nfn test_alpha() {\n    assert(result == 5, 'alpha');\n}"
    );
    assert_eq!(alpha.marker_line, 3);
}

#[test]
fn test_decorator_lines_between_marker_and_signature_are_retained() {
    let registry = scan(SOURCE);
    let beta = registry.lookup("test_beta").unwrap();
    assert_eq!(beta.lines[0], "#[test]");
    assert_eq!(beta.lines[1], "#[available_gas(2000000)]");
    assert_eq!(beta.lines[2], "fn test_beta() {");
}

#[test]
fn test_nested_braces_close_at_outermost_balance() {
    // depth walks 1 -> 2 -> 1 -> 0; the block must end at the outer close.
    let registry = scan(SOURCE);
    let beta = registry.lookup("test_beta").unwrap();
    assert_eq!(beta.lines.last().unwrap(), "}");
    assert_eq!(beta.lines.len(), 7);
}

#[test]
fn test_single_line_body_closes_on_its_own_line() {
    let source = "#[test]\nfn test_tiny() { assert(true, 'x'); }\n";
    let registry = scan(source);
    let tiny = registry.lookup("test_tiny").unwrap();
    assert_eq!(tiny.lines.len(), 2);
}

#[test]
fn test_identifier_is_trimmed_between_keyword_and_params() {
    let source = "#[test]\n    fn   test_spaced  () {\n}\n";
    let registry = scan(source);
    assert!(registry.lookup("test_spaced").is_some());
}

#[test]
fn test_non_test_functions_are_ignored() {
    let source = "\
fn helper() {
    setup();
}

#[test]
fn test_only_me() {
    helper();
}
";
    let registry = scan(source);
    assert_eq!(registry.len(), 1);
    assert!(registry.lookup("helper").is_none());
}

#[test]
fn test_duplicate_default_keeps_second_occurrence() {
    let source = "\
#[test]
fn test_dup() {
    first();
}

#[test]
fn test_dup() {
    second();
}
";
    let registry = scan(source);
    assert_eq!(registry.len(), 1);
    let block = registry.lookup("test_dup").unwrap();
    assert!(block.text().contains("second();"));
    assert!(!block.text().contains("first();"));
}

#[test]
fn test_duplicate_keep_first_retains_first_occurrence() {
    let source = "\
#[test]
fn test_dup() {
    first();
}

#[test]
fn test_dup() {
    second();
}
";
    let scanner = Scanner::new(Syntax::default(), DuplicatePolicy::KeepFirst);
    let registry = scanner.scan(source, "test.cairo").unwrap();
    assert!(registry.lookup("test_dup").unwrap().text().contains("first();"));
}

#[test]
fn test_duplicate_reject_aborts_naming_the_collision() {
    let source = "\
#[test]
fn test_dup() {
    first();
}

#[test]
fn test_dup() {
    second();
}
";
    let scanner = Scanner::new(Syntax::default(), DuplicatePolicy::Reject);
    let err = scanner.scan(source, "test.cairo").unwrap_err();
    match err {
        SplitError::DuplicateDefinition { name, marker_line, .. } => {
            assert_eq!(name, "test_dup");
            assert_eq!(marker_line, 6);
        }
        other => panic!("expected DuplicateDefinition, got {other:?}"),
    }
}

#[test]
fn test_unterminated_body_is_fatal_and_names_the_marker_line() {
    let source = "\
#[test]
fn test_ok() {
    fine();
}

#[test]
fn test_broken() {
    never_closed();
";
    let err = Scanner::default().scan(source, "test.cairo").unwrap_err();
    match err {
        SplitError::UnterminatedBlock { marker_line, .. } => assert_eq!(marker_line, 6),
        other => panic!("expected UnterminatedBlock, got {other:?}"),
    }
}

#[test]
fn test_marker_without_signature_is_fatal() {
    let source = "#[test]\n#[available_gas(1)]\n";
    let err = Scanner::default().scan(source, "test.cairo").unwrap_err();
    match err {
        SplitError::MissingSignature { marker_line, .. } => assert_eq!(marker_line, 1),
        other => panic!("expected MissingSignature, got {other:?}"),
    }
}

#[test]
fn test_braces_inside_string_literals_are_counted() {
    // Documented lexical behavior: the close brace inside the string ends
    // the block early. A literal-aware lexer would extend past it.
    let source = "\
#[test]
fn test_stringy() {
    let s = \"}\";
    more();
}
";
    let registry = scan(source);
    let block = registry.lookup("test_stringy").unwrap();
    assert_eq!(block.lines.last().unwrap(), "    let s = \"}\";");
    assert!(!block.text().contains("more();"));
}

/// A stricter lexer that skips double-quoted string contents. Exercises the
/// substitution seam without changing any registry or grouper contract.
struct QuoteAwareBraces;

impl DepthLexer for QuoteAwareBraces {
    fn count(&self, line: &str) -> (usize, usize) {
        let mut opens = 0;
        let mut closes = 0;
        let mut in_string = false;
        for c in line.chars() {
            match c {
                '"' => in_string = !in_string,
                '{' if !in_string => opens += 1,
                '}' if !in_string => closes += 1,
                _ => {}
            }
        }
        (opens, closes)
    }
}

#[test]
fn test_substituted_lexer_extends_past_string_braces() {
    let source = "\
#[test]
fn test_stringy() {
    let s = \"}\";
    more();
}
";
    let scanner = Scanner::default().with_lexer(Box::new(QuoteAwareBraces));
    let registry = scanner.scan(source, "test.cairo").unwrap();
    let block = registry.lookup("test_stringy").unwrap();
    assert_eq!(block.lines.last().unwrap(), "}");
    assert!(block.text().contains("more();"));
}

#[test]
fn test_empty_input_yields_empty_registry() {
    let registry = scan("");
    assert!(registry.is_empty());
}

#[test]
fn test_registry_order_is_final_write_order() {
    let source = "\
#[test]
fn test_a() {
    one();
}

#[test]
fn test_b() {
    two();
}

#[test]
fn test_a() {
    three();
}
";
    let registry = scan(source);
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["test_b", "test_a"]);
}

#[test]
fn test_block_depth_sums_to_zero() {
    let registry = scan(SOURCE);
    for name in ["test_alpha", "test_beta"] {
        let block: &Block = registry.lookup(name).unwrap();
        let depth: i64 = block
            .lines
            .iter()
            .map(|l| {
                l.chars().filter(|&c| c == '{').count() as i64
                    - l.chars().filter(|&c| c == '}').count() as i64
            })
            .sum();
        assert_eq!(depth, 0, "block {name} is not balanced");
    }
}
