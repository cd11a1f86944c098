//! # Introduction
//!
//! toyfront is the front end for a minimal imperative toy language: integer
//! and float declarations, `if/then/else`, `while/do`, blocks, `input`,
//! `output` and a single `==` comparison. It turns source text into a syntax
//! tree and reports every lexical and syntactic defect it finds in one pass
//! instead of stopping at the first.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Parser (LL(1) + panic-mode recovery) → SyntaxNode | Diagnostics
//! ```
//!
//! 1. [`parser`] — token model, scanner, recursive descent parser, syntax
//!    tree, diagnostics and the derivation trace.
//! 2. [`report`] — plain-text rendering used by the console modes.
//! 3. [`cli`] — command-line options for the binary.
//! 4. [`ui`] — ratatui viewer for source, tree, diagnostics and trace; not
//!    part of the stable library API.
//!
//! ## Language
//!
//! ```text
//! Program      := Declarations Statement <eof>
//! Declarations := (int | float) id ';' Declarations | ε
//! Statement    := if Expr then Statement else Statement
//!               | while Expr do Statement
//!               | '{' Statement StatementTail
//!               | input Expr
//!               | output Expr
//! StatementTail:= '}' | ';' Statement StatementTail
//! Expr         := num ExprTail | id ExprTail
//! ExprTail     := '==' num | '==' id | ε
//! ```

pub mod cli;
pub mod parser;
pub mod report;
pub mod ui;
