//! Console rendering for the non-interactive modes
//!
//! Everything here returns a `String`; the binary decides which stream it
//! goes to.

use crate::parser::{ParseFailure, Scanner, SyntaxNode, Trace};
use rustc_hash::FxHashMap;
use std::fmt::Write;

/// One line per token, end of input included
pub fn render_tokens(source: &str) -> String {
    let mut out = String::new();
    for token in Scanner::new(source).tokenize() {
        let _ = writeln!(out, "{}", token);
    }
    out
}

/// The tree on success, every diagnostic plus a summary on failure
pub fn render_outcome(result: &Result<SyntaxNode, ParseFailure>) -> String {
    let mut out = String::new();

    match result {
        Ok(tree) => {
            let _ = writeln!(out, "--- Syntax tree ---");
            let _ = write!(out, "{}", tree);
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", render_stats(tree));
            let _ = writeln!(out, "Analysis completed successfully.");
        }
        Err(failure) => {
            for diagnostic in failure.iter() {
                let _ = writeln!(out, "{}", diagnostic);
            }
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Analysis finished with errors; syntax tree not shown. Total errors: {}",
                failure.len()
            );
        }
    }

    out
}

/// The derivation trace, one event per line
pub fn render_trace(trace: &Trace) -> String {
    let mut out = String::new();
    for event in trace.events() {
        let _ = writeln!(out, "{}", event);
    }
    out
}

/// How many nodes carry each label
pub fn label_counts(tree: &SyntaxNode) -> FxHashMap<&str, usize> {
    let mut counts = FxHashMap::default();
    tree.walk(&mut |node, _| {
        *counts.entry(node.label()).or_insert(0) += 1;
    });
    counts
}

/// Statement counts by kind, e.g. `3 node(s): 1 OutputStatement`
fn render_stats(tree: &SyntaxNode) -> String {
    let counts = label_counts(tree);
    let mut statements: Vec<(&str, usize)> = counts
        .iter()
        .filter(|(label, _)| label.ends_with("Statement"))
        .map(|(label, count)| (*label, *count))
        .collect();
    statements.sort();

    let listed: Vec<String> = statements
        .iter()
        .map(|(label, count)| format!("{} {}", count, label))
        .collect();

    format!("{} node(s): {}", tree.node_count(), listed.join(", "))
}
