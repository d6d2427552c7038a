use std::fmt;

use crate::types::{binary_result, unary_result, Type};

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Literal {
    pub fn ty(&self) -> Type {
        match self {
            Literal::Int(_) => Type::Int,
            Literal::Float(_) => Type::Float,
            Literal::Bool(_) => Type::Bool,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Eq => "==",
            BinOp::Gt => ">",
            BinOp::Gte => ">=",
            BinOp::Lt => "<",
            BinOp::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

/// A name reference. `resolved` is filled in by the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub pos: usize,
    pub resolved: Option<Type>,
}

impl Variable {
    pub fn new(name: impl Into<String>, pos: usize) -> Self {
        Variable {
            name: name.into(),
            pos,
            resolved: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub callee: Variable,
    pub args: Vec<Expr>,
    /// The callee's give type, once analyzed.
    pub resolved: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal, usize),
    Variable(Variable),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        pos: usize,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        pos: usize,
    },
    Parenthesized(Box<Expr>, usize),
    Call(FunctionCall),
    /// Placeholder for an expression the parser could not read.
    Missing(usize),
}

impl Expr {
    /// Static type, derived from literals, analyzer annotations and the
    /// operator table. `None` when unknown or ill-typed.
    pub fn ty(&self) -> Option<Type> {
        match self {
            Expr::Literal(lit, _) => Some(lit.ty()),
            Expr::Variable(var) => var.resolved,
            Expr::Binary {
                op, left, right, ..
            } => binary_result(*op, left.ty()?, right.ty()?),
            Expr::Unary { op, operand, .. } => unary_result(*op, operand.ty()?),
            Expr::Parenthesized(inner, _) => inner.ty(),
            Expr::Call(call) => call.resolved,
            Expr::Missing(_) => None,
        }
    }

    pub fn pos(&self) -> usize {
        match self {
            Expr::Literal(_, pos)
            | Expr::Binary { pos, .. }
            | Expr::Unary { pos, .. }
            | Expr::Parenthesized(_, pos)
            | Expr::Missing(pos) => *pos,
            Expr::Variable(var) => var.pos,
            Expr::Call(call) => call.callee.pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub ty: Type,
    pub name: String,
    pub init: Option<Expr>,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Variable,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Declaration>,
    pub give_type: Option<Type>,
    pub body: Vec<Stmt>,
    pub pos: usize,
}

impl FunctionDef {
    /// First `give` among the directly listed statements of the body.
    pub fn direct_give(&self) -> Option<&Give> {
        self.body.iter().find_map(|stmt| match stmt {
            Stmt::Give(give) => Some(give),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Give {
    pub value: Expr,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(Assignment),
    FunctionDef(FunctionDef),
    Call(FunctionCall),
    Give(Give),
    If(If),
}

impl Stmt {
    pub fn pos(&self) -> usize {
        match self {
            Stmt::Declaration(decl) => decl.pos,
            Stmt::Assignment(assign) => assign.target.pos,
            Stmt::FunctionDef(def) => def.pos,
            Stmt::Call(call) => call.callee.pos,
            Stmt::Give(give) => give.pos,
            Stmt::If(stmt) => stmt.pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn pos(&self) -> usize {
        0
    }
}

// ---------------------------------------------------------------------------
// Tree printer (diagnostic only, not meant to be re-parsed)
// ---------------------------------------------------------------------------

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = depth * 2)
}

fn type_or_unknown(ty: Option<Type>) -> String {
    ty.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string())
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match expr {
        Expr::Literal(lit, _) => writeln!(f, "Literal {} : {}", lit, lit.ty()),
        Expr::Variable(var) => {
            writeln!(f, "Variable {} : {}", var.name, type_or_unknown(var.resolved))
        }
        Expr::Binary {
            op, left, right, ..
        } => {
            writeln!(f, "BinaryOperation {} : {}", op.symbol(), type_or_unknown(expr.ty()))?;
            write_expr(f, left, depth + 1)?;
            write_expr(f, right, depth + 1)
        }
        Expr::Unary { op, operand, .. } => {
            writeln!(f, "UnaryOperation {} : {}", op.symbol(), type_or_unknown(expr.ty()))?;
            write_expr(f, operand, depth + 1)
        }
        Expr::Parenthesized(inner, _) => {
            writeln!(f, "Parenthesized")?;
            write_expr(f, inner, depth + 1)
        }
        Expr::Call(call) => write_call(f, call, depth),
        Expr::Missing(_) => writeln!(f, "<missing>"),
    }
}

fn write_call(f: &mut fmt::Formatter<'_>, call: &FunctionCall, depth: usize) -> fmt::Result {
    writeln!(
        f,
        "FunctionCall {} : {}",
        call.callee.name,
        type_or_unknown(call.resolved)
    )?;
    for arg in &call.args {
        write_expr(f, arg, depth + 1)?;
    }
    Ok(())
}

fn write_declaration(f: &mut fmt::Formatter<'_>, decl: &Declaration, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "Declaration {} {}", decl.ty, decl.name)?;
    if let Some(init) = &decl.init {
        write_expr(f, init, depth + 1)?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[Stmt], depth: usize) -> fmt::Result {
    for stmt in body {
        write_stmt(f, stmt, depth)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Declaration(decl) => write_declaration(f, decl, depth),
        Stmt::Assignment(assign) => {
            indent(f, depth)?;
            writeln!(f, "Assignment {}", assign.target.name)?;
            write_expr(f, &assign.value, depth + 1)
        }
        Stmt::FunctionDef(def) => {
            indent(f, depth)?;
            match def.give_type {
                Some(ty) => writeln!(f, "FunctionDef {} -> {}", def.name, ty)?,
                None => writeln!(f, "FunctionDef {}", def.name)?,
            }
            for param in &def.params {
                write_declaration(f, param, depth + 1)?;
            }
            write_block(f, &def.body, depth + 1)
        }
        Stmt::Call(call) => {
            indent(f, depth)?;
            write_call(f, call, depth)
        }
        Stmt::Give(give) => {
            indent(f, depth)?;
            writeln!(f, "Give")?;
            write_expr(f, &give.value, depth + 1)
        }
        Stmt::If(stmt) => {
            indent(f, depth)?;
            writeln!(f, "If")?;
            write_expr(f, &stmt.condition, depth + 1)?;
            write_block(f, &stmt.body, depth + 1)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, 0)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program {}", self.name)?;
        write_block(f, &self.statements, 1)
    }
}
