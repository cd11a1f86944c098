//! Expression parsing
//!
//! # Grammar
//!
//! ```text
//! Expr     := num ExprTail | id ExprTail
//! ExprTail := '==' num | '==' id | ε
//! ```
//!
//! Both sides of `==` must be the same category: a comparison that starts
//! with a number needs a number on the right, one that starts with an
//! identifier needs an identifier.

use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use crate::parser::tree::SyntaxNode;

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::production("Expr");

        match self.lookahead.kind() {
            operand @ (TokenKind::Num | TokenKind::Id) => {
                self.production(if operand == TokenKind::Num {
                    "Expr -> num ExprTail"
                } else {
                    "Expr -> id ExprTail"
                });
                self.expect_into(operand, &mut node);
                node.push(self.parse_expr_tail(operand));
            }
            _ => {
                self.report_expected("a number or identifier");
                self.synchronize();
            }
        }

        node
    }

    /// Optional `== operand`; `operand` is the category of the left side.
    fn parse_expr_tail(&mut self, operand: TokenKind) -> SyntaxNode {
        let mut node = SyntaxNode::production("ExprTail");

        if self.check(TokenKind::EqEq) {
            self.production(if operand == TokenKind::Num {
                "ExprTail -> == num"
            } else {
                "ExprTail -> == id"
            });
            self.expect_into(TokenKind::EqEq, &mut node);
            self.expect_into(operand, &mut node);
        } else {
            self.production("ExprTail -> ε");
        }

        node
    }
}
