//! Derivation trace
//!
//! A record of what the parser did, in order: productions applied, terminals
//! consumed, and every panic-mode recovery with the tokens it threw away.

use super::token::{Token, TokenKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A grammar rule was selected, e.g. `"Statement -> output Expr"`
    Production(&'static str),
    /// A terminal was matched and consumed
    Consumed {
        kind: TokenKind,
        lexeme: String,
        line: usize,
    },
    /// Recovery discarded `discarded` and resumed on `resumed_at`
    Synchronized {
        discarded: Vec<Token>,
        resumed_at: Token,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Production(rule) => write!(f, "--> apply rule: {}", rule),
            TraceEvent::Consumed { kind, lexeme, .. } => {
                write!(f, "    |-> consumed terminal: {} ({:?})", lexeme, kind)
            }
            TraceEvent::Synchronized {
                discarded,
                resumed_at,
            } => {
                let skipped: Vec<&str> = discarded.iter().map(Token::lexeme).collect();
                write!(
                    f,
                    "    !! recovery skipped [{}], resuming at '{}' (line {})",
                    skipped.join(" "),
                    resumed_at.lexeme(),
                    resumed_at.line()
                )
            }
        }
    }
}

/// Ordered list of [`TraceEvent`]s for one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Rules applied, in order
    pub fn productions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Production(rule) => Some(*rule),
            _ => None,
        })
    }

    /// Number of recovery runs
    pub fn recoveries(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::Synchronized { .. }))
            .count()
    }
}
