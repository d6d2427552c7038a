/// Boink semantic analyzer.
///
/// One top-down pass over the parsed program:
///   - builds a tree of `SymbolTable` scopes (global, one per function, one per `if` body),
///   - resolves every name and caches its type on the AST node,
///   - validates declarations, assignments, calls, gives and operators.
///
/// Problems are reported into the shared `ErrorHandler`; analysis never stops
/// early. A human-readable log of definitions, assignments and calls is kept
/// alongside and mirrored to `tracing` at debug level.
use crate::ast::{
    Assignment, Declaration, Expr, FunctionCall, FunctionDef, Give, If, Program, Stmt,
};
use crate::diagnostics::{ErrorHandler, ErrorKind};
use crate::types::{binary_result, unary_result, Type};

mod scope;

pub use scope::{
    lookup, lookup_in_record, FunctionSymbol, ScopeId, Symbol, SymbolTable, VarSymbol,
};
use scope::type_list;

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub struct Analyzer<'e> {
    errors: &'e mut ErrorHandler,
    scopes: Vec<SymbolTable>,
    current: ScopeId,
    log: Vec<String>,
}

fn type_or_none(ty: Option<Type>) -> String {
    ty.map(|t| t.to_string()).unwrap_or_else(|| "none".to_string())
}

impl<'e> Analyzer<'e> {
    pub fn new(errors: &'e mut ErrorHandler) -> Self {
        Analyzer {
            errors,
            scopes: vec![SymbolTable::new("global", None, None)],
            current: ScopeId(0),
            log: Vec::new(),
        }
    }

    /// Analyze `program`, annotating its variables and calls in place.
    pub fn visit(&mut self, program: &mut Program) {
        self.current = ScopeId(0);
        self.visit_block(&mut program.statements);
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn into_log(self) -> Vec<String> {
        self.log
    }

    /// Every scope created so far; index 0 is the global scope.
    pub fn scopes(&self) -> &[SymbolTable] {
        &self.scopes
    }
}

// ---------------------------------------------------------------------------
// Scope bookkeeping
// ---------------------------------------------------------------------------

impl<'e> Analyzer<'e> {
    fn current_scope(&self) -> &SymbolTable {
        &self.scopes[self.current.0]
    }

    fn current_scope_mut(&mut self) -> &mut SymbolTable {
        &mut self.scopes[self.current.0]
    }

    fn lookup(&self, name: &str) -> Option<Symbol> {
        lookup(&self.scopes, self.current, name).cloned()
    }

    fn push_scope(&mut self, name: &str, owner: FunctionSymbol) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes
            .push(SymbolTable::new(name, Some(owner), Some(self.current)));
        id
    }

    fn push_block_scope(&mut self, name: &str) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        let owner = self.current_scope().owner.clone();
        self.scopes.push(SymbolTable::block(name, owner, self.current));
        id
    }

    fn define(&mut self, symbol: Symbol) {
        let entry = format!(
            "{:<15}: {} defined in scope '{}'.",
            "DEFINITION",
            symbol,
            self.current_scope().scope_name
        );
        self.current_scope_mut().define(symbol);
        self.record(entry);
    }

    fn record(&mut self, entry: String) {
        tracing::debug!("{}", entry);
        self.log.push(entry);
    }

    fn error(&mut self, kind: ErrorKind, message: String, pos: usize) {
        self.errors.error(kind, message, pos);
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

impl<'e> Analyzer<'e> {
    /// Visit statements in order. The active scope is restored after each one
    /// so a function body never leaks into its siblings.
    fn visit_block(&mut self, statements: &mut [Stmt]) {
        let scope = self.current;
        for stmt in statements {
            self.visit_stmt(stmt);
            self.current = scope;
        }
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Declaration(decl) => self.visit_declaration(decl),
            Stmt::Assignment(assign) => self.visit_assignment(assign),
            Stmt::FunctionDef(def) => self.visit_function(def),
            Stmt::Call(call) => self.visit_call(call),
            Stmt::Give(give) => self.visit_give(give),
            Stmt::If(stmt) => self.visit_if(stmt),
        }
    }

    fn visit_declaration(&mut self, decl: &mut Declaration) {
        if lookup_in_record(&self.scopes, self.current, &decl.name).is_some() {
            self.error(
                ErrorKind::MultipleDefinition,
                format!("Variable '{}' is already defined", decl.name),
                decl.pos,
            );
            return;
        }

        self.define(Symbol::Var(VarSymbol {
            ty: decl.ty,
            name: decl.name.clone(),
        }));

        if let Some(init) = &mut decl.init {
            self.visit_expr(init);
            let found = init.ty();
            if found != Some(decl.ty) {
                self.error(
                    ErrorKind::IncompatibleTypes,
                    format!(
                        "Type {} and {} are not compatible for assignment",
                        type_or_none(found),
                        decl.ty
                    ),
                    decl.pos,
                );
                return;
            }
            self.record(format!(
                "{:<15}: Assigned {} to {}.",
                "ASSIGNMENT",
                type_or_none(found),
                decl.ty
            ));
        }
    }

    fn visit_assignment(&mut self, assign: &mut Assignment) {
        let symbol = self.lookup(&assign.target.name);
        self.visit_expr(&mut assign.value);

        let symbol = match symbol {
            Some(symbol) => symbol,
            None => {
                self.error(
                    ErrorKind::UndefinedSymbol,
                    format!("Variable '{}' is not defined", assign.target.name),
                    assign.target.pos,
                );
                return;
            }
        };

        let target_ty = symbol.ty();
        assign.target.resolved = Some(target_ty);
        let found = assign.value.ty();
        if found != Some(target_ty) {
            self.error(
                ErrorKind::IncompatibleTypes,
                format!(
                    "Type {} and {} are not compatible for assignment",
                    type_or_none(found),
                    target_ty
                ),
                assign.target.pos,
            );
            return;
        }
        self.record(format!(
            "{:<15}: Assigned {} to {}.",
            "ASSIGNMENT",
            type_or_none(found),
            target_ty
        ));
    }

    /// Defines the function in the enclosing scope, then analyzes parameters
    /// and body in a fresh scope owned by it. Functions must be defined before
    /// they are called, and names they use must be declared before them.
    fn visit_function(&mut self, def: &mut FunctionDef) {
        if self.lookup(&def.name).is_some() {
            self.error(
                ErrorKind::MultipleDefinition,
                format!("Function '{}' is already defined", def.name),
                def.pos,
            );
            return;
        }

        let symbol = FunctionSymbol {
            name: def.name.clone(),
            params: def.params.iter().map(|p| p.ty).collect(),
            give_type: def.give_type,
        };
        self.define(Symbol::Function(symbol.clone()));

        let scope = self.push_scope(&def.name, symbol);
        self.current = scope;
        for param in &mut def.params {
            self.visit_declaration(param);
        }
        self.visit_block(&mut def.body);

        if let Some(give_type) = def.give_type {
            if def.direct_give().is_none() {
                self.error(
                    ErrorKind::NoGive,
                    format!(
                        "Function '{}' doesn't give any value even though it has a give type of {}",
                        def.name, give_type
                    ),
                    def.pos,
                );
            }
        }
    }

    fn visit_give(&mut self, give: &mut Give) {
        self.visit_expr(&mut give.value);

        let owner = match self.current_scope().owner.clone() {
            Some(owner) => owner,
            None => {
                self.error(
                    ErrorKind::GiveNotAllowed,
                    "'give' is not allowed here because it is not inside of a function"
                        .to_string(),
                    give.pos,
                );
                return;
            }
        };

        let give_type = match owner.give_type {
            Some(ty) => ty,
            None => {
                self.error(
                    ErrorKind::IncompatibleTypes,
                    format!(
                        "'give' is not allowed because function '{}' has no give type",
                        owner.name
                    ),
                    give.pos,
                );
                return;
            }
        };

        let found = give.value.ty();
        if found != Some(give_type) {
            self.error(
                ErrorKind::IncompatibleTypes,
                format!(
                    "Type {} and {} are not compatible for giving",
                    type_or_none(found),
                    give_type
                ),
                give.pos,
            );
        }
    }

    /// The condition must be a bool. The body is analyzed in a block scope, so
    /// names it declares are gone after the `if`, but it may not redeclare a
    /// name of the record it runs in.
    fn visit_if(&mut self, stmt: &mut If) {
        self.visit_expr(&mut stmt.condition);
        if let Some(found) = stmt.condition.ty() {
            if found != Type::Bool {
                self.error(
                    ErrorKind::IncompatibleTypes,
                    format!("Condition of 'if' must be bool, found {}", found),
                    stmt.condition.pos(),
                );
            }
        }
        let outer = self.current;
        self.current = self.push_block_scope("if");
        self.visit_block(&mut stmt.body);
        self.current = outer;
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

impl<'e> Analyzer<'e> {
    fn visit_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Literal(..) | Expr::Missing(_) => {}
            Expr::Variable(var) => match self.lookup(&var.name) {
                Some(symbol) => var.resolved = Some(symbol.ty()),
                None => self.error(
                    ErrorKind::UndefinedSymbol,
                    format!("Variable '{}' is not defined", var.name),
                    var.pos,
                ),
            },
            Expr::Binary {
                op,
                left,
                right,
                pos,
            } => {
                self.visit_expr(left);
                self.visit_expr(right);
                if let (Some(l), Some(r)) = (left.ty(), right.ty()) {
                    if binary_result(*op, l, r).is_none() {
                        self.error(
                            ErrorKind::IncompatibleTypes,
                            format!(
                                "Operator '{}' is not defined for {} and {}",
                                op.symbol(),
                                l,
                                r
                            ),
                            *pos,
                        );
                    }
                }
            }
            Expr::Unary { op, operand, pos } => {
                self.visit_expr(operand);
                if let Some(ty) = operand.ty() {
                    if unary_result(*op, ty).is_none() {
                        self.error(
                            ErrorKind::IncompatibleTypes,
                            format!("Operator '{}' is not defined for {}", op.symbol(), ty),
                            *pos,
                        );
                    }
                }
            }
            Expr::Parenthesized(inner, _) => self.visit_expr(inner),
            Expr::Call(call) => self.visit_call(call),
        }
    }

    fn visit_call(&mut self, call: &mut FunctionCall) {
        let symbol = match self.lookup(&call.callee.name) {
            Some(Symbol::Function(symbol)) => symbol,
            Some(Symbol::Var(var)) => {
                self.error(
                    ErrorKind::UndefinedSymbol,
                    format!("'{}' is a {} variable, not a function", var.name, var.ty),
                    call.callee.pos,
                );
                return;
            }
            None => {
                self.error(
                    ErrorKind::UndefinedSymbol,
                    format!("Function '{}' is not defined", call.callee.name),
                    call.callee.pos,
                );
                return;
            }
        };

        call.callee.resolved = Some(Type::Function);
        call.resolved = symbol.give_type;

        for arg in &mut call.args {
            self.visit_expr(arg);
        }

        let expected = symbol.params.len();
        let given = call.args.len();
        if given > expected {
            self.error(
                ErrorKind::ArgumentMismatch,
                format!(
                    "Too many arguments for function call: '{}' takes {}, got {}",
                    symbol.name, expected, given
                ),
                call.callee.pos,
            );
            return;
        }
        if given < expected {
            self.error(
                ErrorKind::ArgumentMismatch,
                format!(
                    "Too few arguments for function call: '{}' takes {}, got {}",
                    symbol.name, expected, given
                ),
                call.callee.pos,
            );
            return;
        }

        for (arg, param) in call.args.iter().zip(&symbol.params) {
            let found = arg.ty();
            if found != Some(*param) {
                self.error(
                    ErrorKind::IncompatibleTypes,
                    format!(
                        "Type {} and {} are not compatible for argument of '{}'",
                        type_or_none(found),
                        param,
                        symbol.name
                    ),
                    arg.pos(),
                );
                return;
            }
        }

        self.record(format!(
            "{:<15}: Function {} called with arguments {}",
            "CALL",
            symbol.name,
            type_list(&symbol.params)
        ));
    }
}
