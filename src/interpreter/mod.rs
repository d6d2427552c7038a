use crate::ast::*;
use crate::types::Type;
pub use crate::value::{RuntimeError, Value, Variable};

mod core;
mod eval;
mod exec;
mod ops;
mod stack;

pub use self::core::MAX_CALL_DEPTH;
pub use stack::{ActivationRecord, CallStack};

/// Tree-walking interpreter over an analyzed `Program`.
///
/// Every procedure entry (the program itself or a function call) pushes an
/// `ActivationRecord` whose parent is the caller's record. Names not bound
/// locally are copied down from the parent chain on first access, so a
/// callee can shadow and mutate inherited names without touching the caller.
pub struct Interpreter<'a> {
    program: &'a Program,
    stack: CallStack<'a>,
    /// The program's record, kept after the run finishes.
    globals: ActivationRecord<'a>,
}
