//! Shared error sink for one source-file run.
//!
//! Every stage (lexer, parser, analyzer) reports into the same `ErrorHandler`
//! instead of stopping at the first problem, so a single run surfaces as many
//! independent errors as possible. Execution is gated on the sink being empty.
use std::fmt;

use thiserror::Error;

use crate::lexer::line_column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownToken,
    UnexpectedToken,
    UndefinedSymbol,
    MultipleDefinition,
    IncompatibleTypes,
    ArgumentMismatch,
    NoGive,
    GiveNotAllowed,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::UnknownToken => "UnknownTokenError",
            ErrorKind::UnexpectedToken => "UnexpectedTokenError",
            ErrorKind::UndefinedSymbol => "UndefinedSymbolError",
            ErrorKind::MultipleDefinition => "MultipleDefinitionError",
            ErrorKind::IncompatibleTypes => "IncompatibleTypesError",
            ErrorKind::ArgumentMismatch => "ArgumentMismatchError",
            ErrorKind::NoGive => "NoGiveError",
            ErrorKind::GiveNotAllowed => "GiveNotAllowedError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    /// Character offset into the source text.
    pub pos: usize,
}

#[derive(Debug, Default)]
pub struct ErrorHandler {
    errors: Vec<Diagnostic>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        ErrorHandler::default()
    }

    pub fn error(&mut self, kind: ErrorKind, message: impl Into<String>, pos: usize) {
        let diagnostic = Diagnostic {
            kind,
            message: message.into(),
            pos,
        };
        tracing::debug!(kind = %diagnostic.kind, pos, "{}", diagnostic.message);
        self.errors.push(diagnostic);
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.errors.iter().filter(move |d| d.kind == kind)
    }

    /// Render every diagnostic with its 2D position in `source`.
    pub fn describe(&self, source: &str) -> Vec<String> {
        self.errors
            .iter()
            .map(|d| {
                let position = match line_column(source, d.pos) {
                    Some((line, col)) => format!("({}, {})", line, col),
                    None => "none".to_string(),
                };
                format!("{}. Error Position: {}", d, position)
            })
            .collect()
    }
}
