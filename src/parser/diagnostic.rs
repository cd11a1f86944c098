//! Diagnostics collected during a parse, and the failure value returned when
//! any were recorded.

use std::fmt;

/// Category of a defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Character outside the lexical alphabet, or a bare `=`
    Lexical,
    /// Lookahead does not fit the current grammar position
    Syntax,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "Lexical"),
            DiagnosticKind::Syntax => write!(f, "Syntax"),
        }
    }
}

/// One reported defect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub lexeme: String,
    pub message: String,
}

impl Diagnostic {
    pub fn lexical(line: usize, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Lexical,
            line,
            lexeme: lexeme.into(),
            message: message.into(),
        }
    }

    pub fn syntax(line: usize, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            line,
            lexeme: lexeme.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error at line {} ('{}'): {}",
            self.kind, self.line, self.lexeme, self.message
        )
    }
}

/// Returned instead of a tree when the input had defects.
///
/// Holds every diagnostic in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseFailure {
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}
