use crate::ast::*;
use crate::diagnostics::{ErrorHandler, ErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::types::Type;

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the lexer on demand. A mismatched required token is
/// recorded in the shared `ErrorHandler` and skipped, so `parse` always yields
/// a complete `Program` even for broken input.
pub struct Parser<'e> {
    lexer: Lexer,
    current: Token,
    errors: &'e mut ErrorHandler,
}

mod core;
mod expr;
mod statements;
