use super::*;

impl<'e> Parser<'e> {
    pub fn new(mut lexer: Lexer, errors: &'e mut ErrorHandler) -> Self {
        let current = lexer.next_token(errors);
        Parser {
            lexer,
            current,
            errors,
        }
    }

    pub(super) fn current(&self) -> &Token {
        &self.current
    }

    pub(super) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token(self.errors);
        std::mem::replace(&mut self.current, next)
    }

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        &self.current.kind == kind
    }

    pub(super) fn unexpected(&mut self, expected: impl std::fmt::Display) {
        let message = format!("Expected {} instead of {}", expected, self.current.kind);
        self.errors
            .error(ErrorKind::UnexpectedToken, message, self.current.pos);
    }

    /// Consume `kind`. On a mismatch the error is recorded and the offending
    /// token is skipped anyway.
    pub(super) fn expect(&mut self, kind: &TokenKind) -> Token {
        if !self.check(kind) {
            self.unexpected(kind);
        }
        self.advance()
    }

    /// One or more `kind` tokens.
    pub(super) fn consume_all(&mut self, kind: &TokenKind) {
        self.expect(kind);
        self.consume_all_optional(kind);
    }

    /// Zero or more `kind` tokens.
    pub(super) fn consume_all_optional(&mut self, kind: &TokenKind) {
        while self.check(kind) {
            self.advance();
        }
    }

    pub fn parse(&mut self, program_name: &str) -> Program {
        self.consume_all_optional(&TokenKind::Newline);
        let statements = self.parse_statements();
        self.expect(&TokenKind::Eof);

        tracing::debug!(
            program = program_name,
            statements = statements.len(),
            "parsed program"
        );
        Program {
            name: program_name.to_string(),
            statements,
        }
    }

    /// Newline-separated statements, ending at the first token that starts
    /// none of the statement forms.
    pub(super) fn parse_statements(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while let Some(stmt) = self.parse_statement() {
            statements.push(stmt);
            self.consume_all(&TokenKind::Newline);
        }
        statements
    }

    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        if self.current.kind.is_type_keyword() {
            return Some(Stmt::Declaration(self.parse_declaration()));
        }

        if matches!(self.current.kind, TokenKind::Ident(_)) {
            let target = self.parse_variable();
            match self.current.kind {
                TokenKind::Assign => {
                    self.advance();
                    let value = self.parse_expression();
                    return Some(Stmt::Assignment(Assignment { target, value }));
                }
                TokenKind::LParen => {
                    let args = self.parse_call_arguments();
                    return Some(Stmt::Call(FunctionCall {
                        callee: target,
                        args,
                        resolved: None,
                    }));
                }
                _ => {
                    self.expect(&TokenKind::Assign);
                }
            }
        }

        match self.current.kind {
            TokenKind::Fn => Some(Stmt::FunctionDef(self.parse_function())),
            TokenKind::Give => Some(Stmt::Give(self.parse_give())),
            TokenKind::If => Some(Stmt::If(self.parse_if())),
            _ => None,
        }
    }
}
