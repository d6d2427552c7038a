use std::collections::HashMap;
use std::fmt;

use crate::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct VarSymbol {
    pub ty: Type,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSymbol {
    pub name: String,
    pub params: Vec<Type>,
    pub give_type: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Var(VarSymbol),
    Function(FunctionSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Var(var) => &var.name,
            Symbol::Function(func) => &func.name,
        }
    }

    /// Type of the name when used as a value.
    pub fn ty(&self) -> Type {
        match self {
            Symbol::Var(var) => var.ty,
            Symbol::Function(_) => Type::Function,
        }
    }
}

pub(crate) fn type_list(types: &[Type]) -> String {
    let names: Vec<String> = types.iter().map(|t| t.to_string()).collect();
    format!("[{}]", names.join(", "))
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Var(var) => write!(f, "{} {}", var.ty, var.name),
            Symbol::Function(func) => {
                write!(f, "fn {} {}", type_list(&func.params), func.name)?;
                if let Some(ty) = func.give_type {
                    write!(f, " -> {}", ty)?;
                }
                Ok(())
            }
        }
    }
}

/// Index of a scope inside the analyzer's scope arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) usize);

/// One lexical scope. The global scope has no owner and no parent; every
/// function body gets a scope owned by that function's symbol. An `if` body
/// gets a block scope that inherits the enclosing owner.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    pub scope_name: String,
    pub owner: Option<FunctionSymbol>,
    pub parent: Option<ScopeId>,
    /// Block scopes share the activation record of their parent at runtime.
    pub is_block: bool,
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new(
        scope_name: impl Into<String>,
        owner: Option<FunctionSymbol>,
        parent: Option<ScopeId>,
    ) -> Self {
        SymbolTable {
            scope_name: scope_name.into(),
            owner,
            parent,
            is_block: false,
            symbols: HashMap::new(),
        }
    }

    pub fn block(
        scope_name: impl Into<String>,
        owner: Option<FunctionSymbol>,
        parent: ScopeId,
    ) -> Self {
        SymbolTable {
            is_block: true,
            ..SymbolTable::new(scope_name, owner, Some(parent))
        }
    }

    pub fn define(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name().to_string(), symbol);
    }

    pub fn lookup_only_current_scope(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Resolve `name` starting at `scope` and walking outward through parents.
pub fn lookup<'s>(scopes: &'s [SymbolTable], scope: ScopeId, name: &str) -> Option<&'s Symbol> {
    let mut cursor = Some(scope);
    while let Some(ScopeId(idx)) = cursor {
        let table = scopes.get(idx)?;
        if let Some(symbol) = table.lookup_only_current_scope(name) {
            return Some(symbol);
        }
        cursor = table.parent;
    }
    None
}

/// Resolve `name` in the scopes that share one activation record with
/// `scope`: the scope itself, its enclosing block scopes and the first
/// function or global scope around them.
pub fn lookup_in_record<'s>(
    scopes: &'s [SymbolTable],
    scope: ScopeId,
    name: &str,
) -> Option<&'s Symbol> {
    let mut cursor = Some(scope);
    while let Some(ScopeId(idx)) = cursor {
        let table = scopes.get(idx)?;
        if let Some(symbol) = table.lookup_only_current_scope(name) {
            return Some(symbol);
        }
        if !table.is_block {
            return None;
        }
        cursor = table.parent;
    }
    None
}
