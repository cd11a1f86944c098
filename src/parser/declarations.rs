//! Program and declaration parsing
//!
//! # Grammar
//!
//! ```text
//! Program      := Declarations Statement <eof>
//! Declarations := (int | float) id ';' Declarations | ε
//! ```
//!
//! `Declarations` takes the ε-branch when the lookahead starts a statement.

use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use crate::parser::tree::SyntaxNode;

impl Parser {
    /// Parse the start symbol.
    ///
    /// Anything left after the statement is reported once as trailing input;
    /// statements and declarations found there are still parsed so later
    /// defects surface in the same run.
    pub(crate) fn parse_program(&mut self) -> SyntaxNode {
        self.production("Program -> Declarations Statement <eof>");
        let mut node = SyntaxNode::production("Program");

        node.push(self.parse_declarations());
        node.push(self.parse_statement());

        while self.expect(TokenKind::Eof).is_none() {
            let kind = self.lookahead.kind();
            if kind.starts_statement() {
                node.push(self.parse_statement());
            } else if kind.is_type_keyword() {
                node.push(self.parse_declarations());
            }
        }

        node
    }

    /// Parse a (possibly empty) declaration list
    ///
    /// Each declaration, and each recovery that resumes the list, opens one
    /// more nested `Declarations` level. The levels are gathered in a loop and
    /// nested once the list ends.
    pub(crate) fn parse_declarations(&mut self) -> SyntaxNode {
        let mut levels = Vec::new();

        loop {
            let mut node = SyntaxNode::production("Declarations");

            match self.lookahead.kind() {
                kind @ (TokenKind::Int | TokenKind::Float) => {
                    self.production("Declarations -> (int | float) id ; Declarations");
                    self.expect_into(kind, &mut node);
                    self.expect_into(TokenKind::Id, &mut node);
                    self.expect_into(TokenKind::Semicolon, &mut node);
                }
                kind if kind.starts_statement() || kind == TokenKind::Eof => {
                    // A missing statement at end of input is reported by `Statement`
                    self.production("Declarations -> ε");
                    return SyntaxNode::nest_right(levels, node);
                }
                _ => {
                    self.report_expected("a declaration or statement");
                    self.synchronize();
                    if self.check(TokenKind::Eof) {
                        return SyntaxNode::nest_right(levels, node);
                    }
                }
            }

            levels.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse::Parser;
    use crate::parser::token::TokenKind;

    #[test]
    fn test_declaration_chain() {
        let mut parser = Parser::new("int a; float b; output a");
        let decls = parser.parse_declarations();

        assert_eq!(decls.terminals(), vec!["int", "a", ";", "float", "b", ";"]);
        let nested = decls.child("Declarations").unwrap();
        let innermost = nested.child("Declarations").unwrap();
        assert!(innermost.children().is_empty());
    }

    #[test]
    fn test_recovery_keeps_nesting() {
        // `;` is not a declaration; the list resumes after it
        let mut parser = Parser::new("; int a; output a");
        let decls = parser.parse_declarations();

        assert_eq!(decls.children()[0].label(), "Declarations");
        assert_eq!(decls.terminals(), vec!["int", "a", ";"]);
        assert!(parser.check(TokenKind::Output));
    }

    #[test]
    fn test_empty_declarations() {
        let mut parser = Parser::new("output 1");
        let decls = parser.parse_declarations();

        assert_eq!(decls.label(), "Declarations");
        assert!(decls.children().is_empty());
    }
}
