use super::*;

impl<'e> Parser<'e> {
    pub(super) fn parse_type(&mut self) -> Option<Type> {
        let ty = match self.current().kind {
            TokenKind::DynType => Type::Dynamic,
            TokenKind::IntType => Type::Int,
            TokenKind::BoolType => Type::Bool,
            TokenKind::FloatType => Type::Float,
            _ => {
                self.unexpected("a type");
                return None;
            }
        };
        self.advance();
        Some(ty)
    }

    /// Identifier name, or an empty name after recording the mismatch.
    pub(super) fn expect_ident(&mut self) -> String {
        if let TokenKind::Ident(name) = &self.current().kind {
            let name = name.clone();
            self.advance();
            return name;
        }
        self.unexpected("an identifier");
        self.advance();
        String::new()
    }

    pub(super) fn parse_variable(&mut self) -> Variable {
        let pos = self.current().pos;
        let name = self.expect_ident();
        Variable::new(name, pos)
    }

    /// `type name [= expression]`, also used for parameters.
    pub(super) fn parse_declaration(&mut self) -> Declaration {
        let pos = self.current().pos;
        let ty = self.parse_type().unwrap_or(Type::Dynamic);
        let name = self.expect_ident();
        let init = if self.check(&TokenKind::Assign) {
            self.advance();
            Some(self.parse_expression())
        } else {
            None
        };
        Declaration {
            ty,
            name,
            init,
            pos,
        }
    }

    /// `( [declaration (, declaration)*] )`
    fn parse_parameters(&mut self) -> Vec<Declaration> {
        self.expect(&TokenKind::LParen);
        let mut params = Vec::new();
        while self.current().kind.is_type_keyword() {
            params.push(self.parse_declaration());
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(&TokenKind::RParen);
        params
    }

    /// `fn name ( params ) [-> type] NEWLINE+ statements ;`
    pub(super) fn parse_function(&mut self) -> FunctionDef {
        self.expect(&TokenKind::Fn);
        let pos = self.current().pos;
        let name = self.expect_ident();
        let params = self.parse_parameters();

        let give_type = if self.check(&TokenKind::Arrow) {
            self.advance();
            self.parse_type()
        } else {
            None
        };

        self.consume_all(&TokenKind::Newline);
        let body = self.parse_statements();
        self.expect(&TokenKind::Semicolon);

        FunctionDef {
            name,
            params,
            give_type,
            body,
            pos,
        }
    }

    pub(super) fn parse_give(&mut self) -> Give {
        let pos = self.expect(&TokenKind::Give).pos;
        let value = self.parse_expression();
        Give { value, pos }
    }

    /// `if ( expression ) NEWLINE statements ;`
    pub(super) fn parse_if(&mut self) -> If {
        let pos = self.expect(&TokenKind::If).pos;
        self.expect(&TokenKind::LParen);
        let condition = self.parse_expression();
        self.expect(&TokenKind::RParen);
        self.expect(&TokenKind::Newline);
        let body = self.parse_statements();
        self.expect(&TokenKind::Semicolon);
        If {
            condition,
            body,
            pos,
        }
    }
}
