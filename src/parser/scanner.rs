//! Scanner (tokenizer) for toy-language source text
//!
//! Produces one [`Token`] per call to [`Scanner::next_token`]. Input outside
//! the lexical alphabet is never an error return: it becomes a
//! [`TokenKind::Error`] token and the cursor still moves past it, so the
//! parser decides how to report and recover.

use super::token::{Token, TokenKind};

/// Pull-based scanner over an in-memory source buffer
pub struct Scanner {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Scanner {
    /// Create a new scanner for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Scan the whole input, end-of-input token included.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Get next token
    ///
    /// After end of input has been reached every further call returns another
    /// end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let line = self.line;
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, "EOF", line),
        };

        match ch {
            ';' => Token::new(TokenKind::Semicolon, ";", line),
            '{' => Token::new(TokenKind::LBrace, "{", line),
            '}' => Token::new(TokenKind::RBrace, "}", line),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::EqEq, "==", line)
                } else {
                    // No assignment operator in this language
                    Token::new(TokenKind::Error, "=", line)
                }
            }
            c if c.is_alphabetic() => self.identifier_or_keyword(c, line),
            c if c.is_ascii_digit() => self.number_literal(c, line),
            other => Token::new(TokenKind::Error, other.to_string(), line),
        }
    }

    /// Scan identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, line: usize) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphabetic() || ch.is_ascii_digit() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = TokenKind::keyword(&ident).unwrap_or(TokenKind::Id);
        Token::new(kind, ident, line)
    }

    /// Scan numeric literal (digit runs only)
    fn number_literal(&mut self, first_digit: char, line: usize) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Num, digits, line)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character, counting lines
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
        }

        Some(ch)
    }
}
