// Scanner behaviour over whole inputs

use toyfront::parser::{Scanner, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Scanner::new(source)
        .tokenize()
        .iter()
        .map(|t| t.kind())
        .collect()
}

#[test]
fn test_sample_statement_tokens() {
    let source = "if counter == 1 then output 1 else output 0";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::If,
            TokenKind::Id,
            TokenKind::EqEq,
            TokenKind::Num,
            TokenKind::Then,
            TokenKind::Output,
            TokenKind::Num,
            TokenKind::Else,
            TokenKind::Output,
            TokenKind::Num,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_scanning_is_deterministic() {
    let source = "int a;\nfloat b;\n{ input a ; output b == 7 @ }";

    let first = Scanner::new(source).tokenize();
    let second = Scanner::new(source).tokenize();

    assert_eq!(first, second);
}

#[test]
fn test_every_token_makes_progress() {
    // Each non-whitespace character ends up in exactly one lexeme
    let source = "x1=@=={;}#  42abc\n\tthen";

    let tokens = Scanner::new(source).tokenize();
    let scanned: String = tokens
        .iter()
        .filter(|t| !t.is(TokenKind::Eof))
        .map(|t| t.lexeme())
        .collect();
    let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(scanned, expected);
    assert_eq!(tokens.iter().filter(|t| t.is(TokenKind::Eof)).count(), 1);
}

#[test]
fn test_error_tokens_keep_their_line() {
    let tokens = Scanner::new("output 1\n\n  @\n= x").tokenize();
    let errors: Vec<(&str, usize)> = tokens
        .iter()
        .filter(|t| t.is(TokenKind::Error))
        .map(|t| (t.lexeme(), t.line()))
        .collect();

    assert_eq!(errors, vec![("@", 3), ("=", 4)]);
}

#[test]
fn test_number_then_letters_split() {
    // A digit run ends at the first non-digit
    let tokens = Scanner::new("42abc").tokenize();

    assert_eq!(tokens[0].lexeme(), "42");
    assert!(tokens[0].is(TokenKind::Num));
    assert_eq!(tokens[1].lexeme(), "abc");
    assert!(tokens[1].is(TokenKind::Id));
}

#[test]
fn test_eof_lexeme_and_line() {
    let tokens = Scanner::new("output x\n\n").tokenize();
    let eof = tokens.last().unwrap();

    assert!(eof.is(TokenKind::Eof));
    assert_eq!(eof.lexeme(), "EOF");
    assert_eq!(eof.line(), 3);
}
