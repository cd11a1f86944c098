//! Toy-language front end
//!
//! This module turns source text into a syntax tree, collecting every lexical
//! and syntactic defect in one pass:
//! - [`token`]: the token model
//! - [`scanner`]: tokenization (source text → tokens), one token per call
//! - [`parse`]: the [`Parser`] with its lookahead, matching and recovery
//! - [`tree`]: syntax-tree nodes
//! - [`diagnostic`]: reported defects and the failure value
//! - [`trace`]: the derivation trace
//!
//! # Parser Implementation
//!
//! Hand-written predictive recursive descent over an LL(1) grammar, with
//! panic-mode recovery on a fixed synchronizing set. No external parser
//! generator dependencies.
//!
//! ```
//! use toyfront::parser::parse_source;
//!
//! let tree = parse_source("int x; output x").unwrap();
//! assert_eq!(tree.terminals(), vec!["int", "x", ";", "output", "x"]);
//!
//! let failure = parse_source("int x { output x }").unwrap_err();
//! assert_eq!(failure.len(), 1);
//! ```

mod declarations;
mod expressions;
mod statements;

pub mod diagnostic;
pub mod parse;
pub mod scanner;
pub mod token;
pub mod trace;
pub mod tree;

pub use diagnostic::{Diagnostic, DiagnosticKind, ParseFailure};
pub use parse::Parser;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use trace::{Trace, TraceEvent};
pub use tree::SyntaxNode;

/// Scan and parse `source` in one call.
pub fn parse_source(source: &str) -> Result<SyntaxNode, ParseFailure> {
    Parser::new(source).parse()
}
