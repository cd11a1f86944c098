//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! Statement     := if Expr then Statement else Statement
//!                | while Expr do Statement
//!                | '{' Statement StatementTail
//!                | input Expr
//!                | output Expr
//! StatementTail := '}' | ';' Statement StatementTail
//! ```

use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use crate::parser::tree::SyntaxNode;

impl Parser {
    /// Parse a statement, dispatching on the lookahead
    pub(crate) fn parse_statement(&mut self) -> SyntaxNode {
        match self.lookahead.kind() {
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::LBrace => self.parse_block_statement(),
            TokenKind::Input => self.parse_io_statement(TokenKind::Input),
            TokenKind::Output => self.parse_io_statement(TokenKind::Output),
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Id
            | TokenKind::Num
            | TokenKind::Then
            | TokenKind::Else
            | TokenKind::Do
            | TokenKind::EqEq
            | TokenKind::RBrace
            | TokenKind::Semicolon
            | TokenKind::Eof
            | TokenKind::Error => self.recover_statement(),
        }
    }

    /// No statement starts here. Report, skip ahead, and retry if recovery
    /// landed on a statement keyword.
    fn recover_statement(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::production("Statement");

        self.report_expected("a statement");
        self.synchronize();

        if self.lookahead.kind().starts_statement() {
            node.push(self.parse_statement());
        }

        node
    }

    fn parse_if_statement(&mut self) -> SyntaxNode {
        self.production("Statement -> if Expr then Statement else Statement");
        let mut node = SyntaxNode::production("IfStatement");

        self.expect_into(TokenKind::If, &mut node);
        node.push(self.parse_expr());
        self.expect_into(TokenKind::Then, &mut node);
        node.push(self.parse_statement());
        self.expect_into(TokenKind::Else, &mut node);
        node.push(self.parse_statement());

        node
    }

    fn parse_while_statement(&mut self) -> SyntaxNode {
        self.production("Statement -> while Expr do Statement");
        let mut node = SyntaxNode::production("WhileStatement");

        self.expect_into(TokenKind::While, &mut node);
        node.push(self.parse_expr());
        self.expect_into(TokenKind::Do, &mut node);
        node.push(self.parse_statement());

        node
    }

    fn parse_block_statement(&mut self) -> SyntaxNode {
        self.production("Statement -> { Statement StatementTail");
        let mut node = SyntaxNode::production("BlockStatement");

        self.expect_into(TokenKind::LBrace, &mut node);
        node.push(self.parse_statement());
        node.push(self.parse_statement_tail());

        node
    }

    /// `input Expr` or `output Expr`
    fn parse_io_statement(&mut self, keyword: TokenKind) -> SyntaxNode {
        let (rule, label) = if keyword == TokenKind::Input {
            ("Statement -> input Expr", "InputStatement")
        } else {
            ("Statement -> output Expr", "OutputStatement")
        };
        self.production(rule);
        let mut node = SyntaxNode::production(label);

        self.expect_into(keyword, &mut node);
        node.push(self.parse_expr());

        node
    }

    /// Parse the rest of a block after one statement
    ///
    /// Every `; Statement` opens one more nested `StatementTail`; the chain is
    /// built in a loop and nested once the block closes.
    pub(crate) fn parse_statement_tail(&mut self) -> SyntaxNode {
        let mut levels = Vec::new();

        loop {
            let mut node = SyntaxNode::production("StatementTail");

            match self.lookahead.kind() {
                TokenKind::RBrace => {
                    self.production("StatementTail -> }");
                    self.expect_into(TokenKind::RBrace, &mut node);
                    return SyntaxNode::nest_right(levels, node);
                }
                TokenKind::Semicolon => {
                    self.production("StatementTail -> ; Statement StatementTail");
                    self.expect_into(TokenKind::Semicolon, &mut node);
                    node.push(self.parse_statement());
                }
                _ => {
                    self.report_expected("';' or '}'");
                    self.synchronize();

                    match self.lookahead.kind() {
                        TokenKind::Eof => return SyntaxNode::nest_right(levels, node),
                        // Separator missing between two statements
                        kind if kind.starts_statement() => node.push(self.parse_statement()),
                        _ => {}
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
    fn test_tail_nests_one_level_per_statement() {
        let mut parser = Parser::new("; output 1 ; input x }");
        let tail = parser.parse_statement_tail();

        assert_eq!(tail.terminals(), vec![";", "output", "1", ";", "input", "x", "}"]);
        let second = tail.child("StatementTail").unwrap();
        let last = second.child("StatementTail").unwrap();
        assert_eq!(last.terminals(), vec!["}"]);
        assert!(parser.check(TokenKind::Eof));
    }

    #[test]
    fn test_tail_resumes_after_missing_separator() {
        let mut parser = Parser::new("output 2 }");
        let tail = parser.parse_statement_tail();

        assert_eq!(tail.child("OutputStatement").unwrap().terminals(), vec!["output", "2"]);
        assert_eq!(tail.terminals(), vec!["output", "2", "}"]);
    }
}
