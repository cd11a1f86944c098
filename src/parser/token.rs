//! Token model shared by the scanner and the parser.

use std::fmt;

/// Every kind of lexical unit the scanner can produce.
///
/// The set is closed: the parser matches on it exhaustively, so adding a kind
/// shows up as a compile error at every dispatch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Type keywords
    Int,
    Float,

    Id,
    Num,

    // Keywords
    If,
    Then,
    Else,
    While,
    Do,
    Input,
    Output,

    EqEq,      // ==
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;

    Eof,
    /// Input outside the lexical alphabet, or a bare `=`.
    Error,
}

impl TokenKind {
    /// Looks up a keyword by its spelling.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "int" => TokenKind::Int,
            "float" => TokenKind::Float,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "input" => TokenKind::Input,
            "output" => TokenKind::Output,
            _ => return None,
        };
        Some(kind)
    }

    /// True for the kinds that can begin a statement.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::While
                | TokenKind::LBrace
                | TokenKind::Input
                | TokenKind::Output
        )
    }

    /// True for the kinds that begin a declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float)
    }

    /// Label used for terminal nodes in the syntax tree.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Int | TokenKind::Float => "Type",
            TokenKind::Id => "Id",
            TokenKind::Num => "Num",
            TokenKind::If => "If",
            TokenKind::Then => "Then",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::Do => "Do",
            TokenKind::Input => "Input",
            TokenKind::Output => "Output",
            TokenKind::EqEq => "EqEq",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Eof => "Eof",
            TokenKind::Error => "Error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::Float => write!(f, "'float'"),
            TokenKind::Id => write!(f, "identifier"),
            TokenKind::Num => write!(f, "number"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Then => write!(f, "'then'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Do => write!(f, "'do'"),
            TokenKind::Input => write!(f, "'input'"),
            TokenKind::Output => write!(f, "'output'"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Error => write!(f, "invalid symbol"),
        }
    }
}

/// A single lexical unit: its kind, the exact source text, and the 1-based
/// line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}, {}> (line {})", self.kind, self.lexeme, self.line)
    }
}
