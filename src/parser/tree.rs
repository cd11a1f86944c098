//! Syntax-tree node model
//!
//! The tree is a plain ownership hierarchy: every [`SyntaxNode`] owns its
//! children directly, in the left-to-right order of the grammar rule that
//! produced them. Nodes are only ever appended to during descent.

use super::token::Token;
use std::fmt;

/// A node in the syntax tree.
///
/// Terminal nodes carry the matched lexeme and have no children; production
/// nodes carry no lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    label: String,
    literal: Option<String>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a production (non-terminal) node
    pub fn production(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            literal: None,
            children: Vec::new(),
        }
    }

    /// Create a terminal node
    pub fn terminal(label: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            literal: Some(literal.into()),
            children: Vec::new(),
        }
    }

    /// Terminal node for a matched token, labelled by its kind
    pub fn from_token(token: &Token) -> Self {
        Self::terminal(token.kind().label(), token.lexeme())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.literal.is_some()
    }

    /// Append a child. Terminals never get children.
    pub(crate) fn push(&mut self, child: SyntaxNode) {
        debug_assert!(!self.is_terminal(), "terminal nodes are leaves");
        self.children.push(child);
    }

    /// First direct child with the given label
    pub fn child(&self, label: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Nest `levels` from the right: each level becomes the last child of
    /// the one before it, and `innermost` closes the chain.
    ///
    /// List productions such as `Declarations` are collected flat and folded
    /// here, so their length never costs parser stack.
    pub(crate) fn nest_right(levels: Vec<SyntaxNode>, innermost: SyntaxNode) -> SyntaxNode {
        levels.into_iter().rev().fold(innermost, |inner, mut level| {
            level.push(inner);
            level
        })
    }

    /// Lexemes of all terminal nodes, left to right
    pub fn terminals(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node, _| {
            if let Some(literal) = node.literal() {
                out.push(literal);
            }
        });
        out
    }

    /// Pre-order walk, calling `visit` with each node and its depth
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a SyntaxNode, usize)) {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_, _| count += 1);
        count
    }

    /// One `(depth, text)` pair per node, in pre-order
    pub fn render_lines(&self) -> Vec<(usize, String)> {
        let mut lines = Vec::new();
        self.walk(&mut |node, depth| {
            let text = match node.literal() {
                Some(literal) => format!("└── [TOKEN: {}] {}", node.label, literal),
                None => format!("├── (NODE: {})", node.label),
            };
            lines.push((depth, text));
        });
        lines
    }
}

// Block and declaration chains nest one level per item
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, text) in self.render_lines() {
            writeln!(f, "{}{}", "│   ".repeat(depth), text)?;
        }
        Ok(())
    }
}
