// Error reporting and panic-mode recovery

use toyfront::parser::{parse_source, Diagnostic, DiagnosticKind, Parser};

fn diagnostics(source: &str) -> Vec<Diagnostic> {
    match parse_source(source) {
        Ok(_) => Vec::new(),
        Err(failure) => failure.diagnostics,
    }
}

#[test]
fn test_missing_semicolon_after_declaration() {
    let diags = diagnostics("int x { output x }");

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::Syntax);
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[0].lexeme, "{");
    assert!(diags[0].message.contains("';'"), "{}", diags[0].message);
}

#[test]
fn test_unknown_character() {
    let diags = diagnostics("output 1 @");

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::Lexical);
    assert_eq!(diags[0].lexeme, "@");
    assert_eq!(diags[0].line, 1);
}

#[test]
fn test_bare_equals_and_fallout() {
    let diags = diagnostics("output 1 = 2; output x");

    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].kind, DiagnosticKind::Lexical);
    assert_eq!(diags[0].lexeme, "=");
    assert!(diags[0].message.contains("'=='"));
    assert_eq!(diags[1].kind, DiagnosticKind::Syntax);
    assert_eq!(diags[1].lexeme, ";");
    assert_eq!(diags[1].message, "expected end of input, found ';'");
}

#[test]
fn test_comparison_operands_must_match() {
    let diags = diagnostics("output 1 == x");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "expected number, found identifier");

    let diags = diagnostics("output x == 1");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "expected identifier, found number");
}

#[test]
fn test_empty_and_blank_input_terminate() {
    for source in ["", "   ", "\n\n\t\n"] {
        let diags = diagnostics(source);

        assert_eq!(diags.len(), 1, "source {:?}", source);
        assert_eq!(diags[0].message, "expected a statement, found end of input");
    }
}

#[test]
fn test_garbage_input_terminates() {
    let sources = [
        "@@@@",
        "= = = =",
        "} } } ;",
        "then else do",
        "1 2 3 x y z",
        "{ { { {",
        "if if if",
        "int int int",
        "; ; ; output",
    ];

    for source in sources {
        let diags = diagnostics(source);
        assert!(!diags.is_empty(), "source {:?} parsed", source);
    }
}

#[test]
fn test_diagnostics_in_source_order() {
    let source = "int a\nfloat b;\n{ output a = 1\n; output @\n; input 5 == b }";
    let diags = diagnostics(source);

    assert!(diags.len() >= 3, "{:?}", diags);
    let lines: Vec<usize> = diags.iter().map(|d| d.line).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn test_errors_on_separate_lines_all_reported() {
    let diags = diagnostics("int x\n{ output x }\n@");

    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].line, 2);
    assert_eq!(diags[0].kind, DiagnosticKind::Syntax);
    assert_eq!(diags[1].line, 3);
    assert_eq!(diags[1].kind, DiagnosticKind::Lexical);
}

#[test]
fn test_recovery_is_traced() {
    let (result, trace) = Parser::new("int x { output x }").parse_traced();

    assert!(result.is_err());
    assert_eq!(trace.recoveries(), 1);
}

#[test]
fn test_failure_display_lists_each_diagnostic() {
    let failure = parse_source("output 1 = 2; output x").unwrap_err();
    let rendered = failure.to_string();

    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.starts_with("Lexical error at line 1 ('='):"));
}

#[test]
fn test_long_garbage_run_terminates() {
    let source = "; ".repeat(100_000);
    let diags = diagnostics(&source);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].lexeme, ";");
}

#[test]
fn test_long_garbage_inside_block_terminates() {
    let source = format!("{{ output 1 {}}}", "1 ; } ".repeat(50_000));

    assert!(!diagnostics(&source).is_empty());
}
