use std::fmt;

use crate::diagnostics::{ErrorHandler, ErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),
    Bool(bool),
    // Identifiers
    Ident(String),
    // Keywords
    Fn,
    Give,
    If,
    DynType,
    IntType,
    BoolType,
    FloatType,
    // Operators
    Arrow,  // ->
    EqEq,   // ==
    Gte,    // >=
    Lte,    // <=
    AndAnd, // &&
    OrOr,   // ||
    Assign, // =
    Gt,     // >
    Lt,     // <
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    // Punctuation
    LParen,    // (
    RParen,    // )
    Comma,     // ,
    Semicolon, // ;
    // Structure
    Newline,
    Eof,
}

impl TokenKind {
    /// `dyn`, `int`, `bool` or `float`.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::DynType | TokenKind::IntType | TokenKind::BoolType | TokenKind::FloatType
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(i) => write!(f, "int literal {}", i),
            TokenKind::Float(x) => write!(f, "float literal {:?}", x),
            TokenKind::Bool(b) => write!(f, "bool literal {}", b),
            TokenKind::Ident(name) => write!(f, "identifier '{}'", name),
            TokenKind::Fn => f.write_str("'fn'"),
            TokenKind::Give => f.write_str("'give'"),
            TokenKind::If => f.write_str("'if'"),
            TokenKind::DynType => f.write_str("'dyn'"),
            TokenKind::IntType => f.write_str("'int'"),
            TokenKind::BoolType => f.write_str("'bool'"),
            TokenKind::FloatType => f.write_str("'float'"),
            TokenKind::Arrow => f.write_str("'->'"),
            TokenKind::EqEq => f.write_str("'=='"),
            TokenKind::Gte => f.write_str("'>='"),
            TokenKind::Lte => f.write_str("'<='"),
            TokenKind::AndAnd => f.write_str("'&&'"),
            TokenKind::OrOr => f.write_str("'||'"),
            TokenKind::Assign => f.write_str("'='"),
            TokenKind::Gt => f.write_str("'>'"),
            TokenKind::Lt => f.write_str("'<'"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Semicolon => f.write_str("';'"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Eof => f.write_str("end of file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset of the token's first character.
    pub pos: usize,
}

fn keyword(s: &str) -> Option<TokenKind> {
    match s {
        "fn" => Some(TokenKind::Fn),
        "dyn" => Some(TokenKind::DynType),
        "int" => Some(TokenKind::IntType),
        "bool" => Some(TokenKind::BoolType),
        "float" => Some(TokenKind::FloatType),
        "true" => Some(TokenKind::Bool(true)),
        "false" => Some(TokenKind::Bool(false)),
        "give" => Some(TokenKind::Give),
        "if" => Some(TokenKind::If),
        _ => None,
    }
}

/// 1-based `(line, column)` of a character offset, found by scanning from the
/// start of `text`. `None` when the offset is past the end.
pub fn line_column(text: &str, offset: usize) -> Option<(usize, usize)> {
    let mut line = 1;
    let mut col = 1;
    let mut chars = text.chars();
    for _ in 0..offset {
        match chars.next()? {
            '\n' => {
                line += 1;
                col = 1;
            }
            _ => col += 1,
        }
    }
    chars.next()?;
    Some((line, col))
}

/// Pull-based lexer: the parser asks for one token at a time.
pub struct Lexer {
    text: String,
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            text: source.to_string(),
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    pub fn position_to_line_column(&self, offset: usize) -> Option<(usize, usize)> {
        line_column(&self.text, offset)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += 1;
        Some(ch)
    }

    /// Lex every remaining token, `Eof` included.
    pub fn tokenize(&mut self, errors: &mut ErrorHandler) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token(errors);
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                return tokens;
            }
        }
    }

    /// Next token, or `Eof` forever once the text is exhausted. Unknown
    /// characters are reported to `errors` and skipped.
    pub fn next_token(&mut self, errors: &mut ErrorHandler) -> Token {
        loop {
            self.skip_whitespace();

            let ch = match self.current() {
                Some(c) => c,
                None => {
                    return Token {
                        kind: TokenKind::Eof,
                        pos: self.pos,
                    }
                }
            };

            if ch == '#' {
                self.skip_comment();
                continue;
            }

            if ch.is_ascii_digit() {
                return self.scan_number(errors);
            }

            if ch.is_alphabetic() {
                return self.scan_word();
            }

            if let Some(tok) = self.scan_operator() {
                return tok;
            }

            errors.error(
                ErrorKind::UnknownToken,
                format!("Character '{}' is not known", ch),
                self.pos,
            );
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(' ' | '\t' | '\r')) {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        while !matches!(self.current(), Some('\n') | None) {
            self.advance();
        }
    }

    fn scan_digits(&mut self, into: &mut String) {
        while let Some(c) = self.current() {
            if c.is_ascii_digit() {
                into.push(c);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self, errors: &mut ErrorHandler) -> Token {
        let pos = self.pos;
        let mut num_str = String::new();
        self.scan_digits(&mut num_str);

        if self.current() == Some('.') {
            num_str.push('.');
            self.advance();
            self.scan_digits(&mut num_str);
            // "1." is accepted and reads as 1.0
            let value = num_str.parse::<f64>().unwrap_or_default();
            return Token {
                kind: TokenKind::Float(value),
                pos,
            };
        }

        let value = match num_str.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                errors.error(
                    ErrorKind::UnknownToken,
                    format!("Integer literal '{}' is too large", num_str),
                    pos,
                );
                0
            }
        };
        Token {
            kind: TokenKind::Int(value),
            pos,
        }
    }

    fn scan_word(&mut self) -> Token {
        let pos = self.pos;
        let mut word = String::new();

        while let Some(c) = self.current() {
            if c.is_alphabetic() {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let kind = keyword(&word).unwrap_or(TokenKind::Ident(word));
        Token { kind, pos }
    }

    fn scan_operator(&mut self) -> Option<Token> {
        let pos = self.pos;
        let ch = self.current()?;
        let next = self.peek(1);

        let (kind, width) = match (ch, next) {
            ('-', Some('>')) => (TokenKind::Arrow, 2),
            ('=', Some('=')) => (TokenKind::EqEq, 2),
            ('>', Some('=')) => (TokenKind::Gte, 2),
            ('<', Some('=')) => (TokenKind::Lte, 2),
            ('&', Some('&')) => (TokenKind::AndAnd, 2),
            ('|', Some('|')) => (TokenKind::OrOr, 2),
            ('=', _) => (TokenKind::Assign, 1),
            ('>', _) => (TokenKind::Gt, 1),
            ('<', _) => (TokenKind::Lt, 1),
            ('+', _) => (TokenKind::Plus, 1),
            ('-', _) => (TokenKind::Minus, 1),
            ('*', _) => (TokenKind::Star, 1),
            ('/', _) => (TokenKind::Slash, 1),
            ('(', _) => (TokenKind::LParen, 1),
            (')', _) => (TokenKind::RParen, 1),
            (',', _) => (TokenKind::Comma, 1),
            (';', _) => (TokenKind::Semicolon, 1),
            ('\n', _) => (TokenKind::Newline, 1),
            _ => return None,
        };

        self.pos += width;
        Some(Token { kind, pos })
    }
}
