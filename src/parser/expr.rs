use super::*;

impl<'e> Parser<'e> {
    /// `term (('+' | '-' | '&&' | '||') term)*`
    ///
    /// All four operators share one precedence level and associate left.
    pub(super) fn parse_expression(&mut self) -> Expr {
        let mut left = self.parse_term();

        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                TokenKind::AndAnd => BinOp::And,
                TokenKind::OrOr => BinOp::Or,
                _ => break,
            };
            let pos = self.advance().pos;
            let right = self.parse_term();
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }

        left
    }

    /// `factor (('*' | '/') factor)*`
    pub(super) fn parse_term(&mut self) -> Expr {
        let mut left = self.parse_factor();

        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            let pos = self.advance().pos;
            let right = self.parse_factor();
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }

        left
    }

    pub(super) fn parse_factor(&mut self) -> Expr {
        let pos = self.current().pos;
        match self.current().kind {
            TokenKind::Plus | TokenKind::Minus => {
                let op = if self.check(&TokenKind::Plus) {
                    UnaryOp::Plus
                } else {
                    UnaryOp::Minus
                };
                self.advance();
                let operand = self.parse_factor();
                Expr::Unary {
                    op,
                    operand: Box::new(operand),
                    pos,
                }
            }
            TokenKind::Int(i) => {
                self.advance();
                Expr::Literal(Literal::Int(i), pos)
            }
            TokenKind::Float(x) => {
                self.advance();
                Expr::Literal(Literal::Float(x), pos)
            }
            TokenKind::Bool(b) => {
                self.advance();
                Expr::Literal(Literal::Bool(b), pos)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression();
                self.expect(&TokenKind::RParen);
                Expr::Parenthesized(Box::new(inner), pos)
            }
            TokenKind::Ident(_) => {
                let var = self.parse_variable();
                if self.check(&TokenKind::LParen) {
                    let args = self.parse_call_arguments();
                    Expr::Call(FunctionCall {
                        callee: var,
                        args,
                        resolved: None,
                    })
                } else {
                    Expr::Variable(var)
                }
            }
            _ => {
                // Left in place: the enclosing statement skips it.
                self.unexpected("an expression");
                Expr::Missing(pos)
            }
        }
    }

    /// `( [expression (, expression)*] )`
    pub(super) fn parse_call_arguments(&mut self) -> Vec<Expr> {
        self.expect(&TokenKind::LParen);
        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expression());
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(&TokenKind::RParen);
        args
    }
}
