//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct: the single buffered lookahead
//! token, terminal matching, diagnostic recording and panic-mode recovery.
//!
//! # Parser Architecture
//!
//! The grammar is LL(1) and each nonterminal is one method:
//! - `declarations`: `Program` and `Declarations`
//! - `statements`: `Statement` and `StatementTail`
//! - `expressions`: `Expr` and `ExprTail`
//!
//! Every nonterminal method builds and returns its node even when it fails,
//! so the recursion never has to propagate "no tree". Whether the result is
//! usable is decided once, at the end of [`Parser::parse`], from the
//! diagnostic list.
//!
//! # Recovery
//!
//! A mismatch records a [`Diagnostic`] and then synchronizes: tokens are
//! discarded until the lookahead is one of [`SYNC_SET`]. The method that saw
//! the mismatch then carries on with its own rule. Two rules keep this finite
//! and quiet:
//! - A synchronization that starts on the token where the previous one
//!   stopped discards that token first, unless it begins a statement. Two
//!   failures in a row on the same token therefore make progress, and a
//!   statement keyword is always left for a rule that consumes it.
//! - Until the next successful match, further syntax mismatches are not
//!   reported; they are fallout of the one already on the list.

use super::diagnostic::{Diagnostic, ParseFailure};
use super::scanner::Scanner;
use super::token::{Token, TokenKind};
use super::trace::{Trace, TraceEvent};
use super::tree::SyntaxNode;

/// Tokens recovery may stop on: statement and declaration starters, the
/// statement terminators, and end of input.
pub const SYNC_SET: [TokenKind; 10] = [
    TokenKind::Semicolon,
    TokenKind::RBrace,
    TokenKind::LBrace,
    TokenKind::Eof,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Input,
    TokenKind::Output,
    TokenKind::Int,
    TokenKind::Float,
];

pub fn is_sync_point(kind: TokenKind) -> bool {
    SYNC_SET.contains(&kind)
}

/// Predictive recursive descent parser for the toy language
pub struct Parser {
    scanner: Scanner,
    pub(crate) lookahead: Token,
    /// Number of tokens pulled from the scanner so far; identifies the
    /// lookahead's position in the stream.
    pulled: usize,
    /// Where the last synchronization stopped
    anchor: Option<usize>,
    /// Set by a syntax diagnostic, cleared by the next successful match
    recovering: bool,
    diagnostics: Vec<Diagnostic>,
    trace: Trace,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_scanner(Scanner::new(source))
    }

    /// Build a parser over an existing scanner and buffer its first token.
    pub fn with_scanner(scanner: Scanner) -> Self {
        let mut parser = Self {
            scanner,
            lookahead: Token::new(TokenKind::Eof, "EOF", 1),
            pulled: 0,
            anchor: None,
            recovering: false,
            diagnostics: Vec::new(),
            trace: Trace::new(),
        };
        parser.lookahead = parser.pull();
        parser
    }

    /// Parse the whole program.
    ///
    /// Returns the tree only if no diagnostic was recorded; otherwise every
    /// diagnostic, in discovery order.
    pub fn parse(self) -> Result<SyntaxNode, ParseFailure> {
        self.parse_traced().0
    }

    /// Like [`Parser::parse`], also returning the derivation trace.
    pub fn parse_traced(mut self) -> (Result<SyntaxNode, ParseFailure>, Trace) {
        let root = self.parse_program();
        debug_assert!(self.lookahead.is(TokenKind::Eof));

        let result = if self.diagnostics.is_empty() {
            Ok(root)
        } else {
            Err(ParseFailure {
                diagnostics: self.diagnostics,
            })
        };

        (result, self.trace)
    }

    // ===== Token handling =====

    /// Pull one token from the scanner, reporting it if it is a lexical error.
    fn pull(&mut self) -> Token {
        let token = self.scanner.next_token();
        self.pulled += 1;

        if token.is(TokenKind::Error) {
            let message = if token.lexeme() == "=" {
                "unrecognized symbol '='; comparison is written '=='".to_string()
            } else {
                format!("unrecognized character '{}'", token.lexeme())
            };
            self.diagnostics
                .push(Diagnostic::lexical(token.line(), token.lexeme(), message));
        }

        token
    }

    /// Replace the lookahead with the next token, returning the old one.
    fn bump(&mut self) -> Token {
        let next = self.pull();
        std::mem::replace(&mut self.lookahead, next)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.is(kind)
    }

    /// Match a terminal.
    ///
    /// On success the token is consumed and returned. On failure a diagnostic
    /// is recorded and the parser synchronizes before returning `None`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            let token = self.bump();
            self.recovering = false;
            self.trace.push(TraceEvent::Consumed {
                kind,
                lexeme: token.lexeme().to_string(),
                line: token.line(),
            });
            Some(token)
        } else {
            self.report_expected(&kind.to_string());
            self.synchronize();
            None
        }
    }

    /// [`Parser::expect`], appending the matched terminal to `node`.
    pub(crate) fn expect_into(&mut self, kind: TokenKind, node: &mut SyntaxNode) -> bool {
        match self.expect(kind) {
            Some(token) => {
                node.push(SyntaxNode::from_token(&token));
                true
            }
            None => false,
        }
    }

    pub(crate) fn production(&mut self, rule: &'static str) {
        self.trace.push(TraceEvent::Production(rule));
    }

    // ===== Error handling =====

    /// Record a syntax diagnostic for the current lookahead.
    ///
    /// Lexical-error tokens were already reported when scanned, and mismatches
    /// while recovering are not reported again.
    pub(crate) fn report_expected(&mut self, expected: &str) {
        if self.lookahead.is(TokenKind::Error) || self.recovering {
            return;
        }

        let message = format!("expected {}, found {}", expected, self.lookahead.kind());
        self.diagnostics.push(Diagnostic::syntax(
            self.lookahead.line(),
            self.lookahead.lexeme(),
            message,
        ));
        self.recovering = true;
    }

    /// Panic-mode recovery: discard tokens up to the next sync point.
    pub(crate) fn synchronize(&mut self) {
        let mut discarded = Vec::new();

        let kind = self.lookahead.kind();
        if self.anchor == Some(self.pulled) && kind != TokenKind::Eof && !kind.starts_statement() {
            discarded.push(self.bump());
        }

        while !is_sync_point(self.lookahead.kind()) {
            discarded.push(self.bump());
        }

        self.anchor = Some(self.pulled);
        self.trace.push(TraceEvent::Synchronized {
            discarded,
            resumed_at: self.lookahead.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_is_buffered() {
        let parser = Parser::new("  output 1");

        assert!(parser.check(TokenKind::Output));
        assert_eq!(parser.pulled, 1);
    }

    #[test]
    fn test_expect_consumes_on_match() {
        let mut parser = Parser::new("output x");

        let token = parser.expect(TokenKind::Output).unwrap();
        assert_eq!(token.lexeme(), "output");
        assert!(parser.check(TokenKind::Id));
        assert!(parser.diagnostics.is_empty());
    }

    #[test]
    fn test_mismatch_synchronizes() {
        let mut parser = Parser::new("x 1 2 ; output y");

        assert!(parser.expect(TokenKind::Output).is_none());
        assert_eq!(parser.diagnostics.len(), 1);
        assert!(parser.check(TokenKind::Semicolon));
        assert_eq!(parser.trace.recoveries(), 1);
    }

    #[test]
    fn test_sync_point_is_kept() {
        let mut parser = Parser::new("{ output x }");

        assert!(parser.expect(TokenKind::Semicolon).is_none());
        assert!(parser.check(TokenKind::LBrace));
    }

    #[test]
    fn test_second_failure_on_same_token_advances() {
        let mut parser = Parser::new("; output x");

        assert!(parser.expect(TokenKind::Id).is_none());
        assert!(parser.check(TokenKind::Semicolon));

        assert!(parser.expect(TokenKind::Id).is_none());
        assert!(parser.check(TokenKind::Output));
        // The second mismatch is fallout of the first
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn test_lexical_error_reported_once() {
        let mut parser = Parser::new("@ output x");

        assert_eq!(parser.diagnostics.len(), 1);
        assert!(parser.expect(TokenKind::Output).is_none());
        assert_eq!(parser.diagnostics.len(), 1);
        assert!(parser.check(TokenKind::Output));
    }

    #[test]
    fn test_recovery_stops_at_eof() {
        let mut parser = Parser::new("1 2 3");

        assert!(parser.expect(TokenKind::Id).is_none());
        assert!(parser.check(TokenKind::Eof));
        assert!(parser.expect(TokenKind::Id).is_none());
        assert!(parser.check(TokenKind::Eof));
    }
}
