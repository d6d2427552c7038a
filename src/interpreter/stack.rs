use std::fmt;

use super::{RuntimeError, Variable};

/// Local memory of one procedure activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRecord<'a> {
    pub name: String,
    /// 1 for the program, caller's level + 1 for a function call.
    pub nesting_level: usize,
    /// Index of the caller's record on the call stack.
    pub parent: Option<usize>,
    members: Vec<Variable<'a>>,
}

impl<'a> ActivationRecord<'a> {
    pub fn new(name: impl Into<String>, nesting_level: usize, parent: Option<usize>) -> Self {
        ActivationRecord {
            name: name.into(),
            nesting_level,
            parent,
            members: Vec::new(),
        }
    }

    /// Bind a variable, replacing any binding of the same name.
    pub fn set(&mut self, var: Variable<'a>) {
        match self.members.iter_mut().find(|m| m.name == var.name) {
            Some(slot) => *slot = var,
            None => self.members.push(var),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Variable<'a>> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable<'a>> {
        self.members.iter_mut().find(|m| m.name == name)
    }

    /// Bindings in the order they were made.
    pub fn members(&self) -> &[Variable<'a>] {
        &self.members
    }
}

impl fmt::Display for ActivationRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.nesting_level, self.name)?;
        for var in &self.members {
            write!(f, "\n   {:<15}: {}", var.name, var)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CallStack<'a> {
    records: Vec<ActivationRecord<'a>>,
}

impl<'a> CallStack<'a> {
    pub fn new() -> Self {
        CallStack {
            records: Vec::new(),
        }
    }

    /// Push `record`, returning its index for use as a child's parent.
    pub fn push(&mut self, record: ActivationRecord<'a>) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn pop(&mut self) -> Option<ActivationRecord<'a>> {
        self.records.pop()
    }

    pub fn peek(&self) -> Option<&ActivationRecord<'a>> {
        self.records.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut ActivationRecord<'a>> {
        self.records.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The binding for `name` as seen from the topmost record.
    ///
    /// When the top record lacks it, the parent chain is searched and the
    /// first binding found is copied into every record between the holder
    /// and the top. Later reads and writes hit the local copy only.
    pub fn resolve(&mut self, name: &str) -> Result<&mut Variable<'a>, RuntimeError> {
        let top = self
            .records
            .len()
            .checked_sub(1)
            .ok_or_else(|| RuntimeError::Internal("call stack is empty".to_string()))?;

        let mut missing = Vec::new();
        let mut cursor = Some(top);
        let found = loop {
            let idx = cursor.ok_or_else(|| {
                RuntimeError::Internal(format!("'{}' is not bound in any activation record", name))
            })?;
            let record = &self.records[idx];
            if let Some(var) = record.get(name) {
                break var.clone();
            }
            missing.push(idx);
            cursor = record.parent;
        };

        for idx in missing.into_iter().rev() {
            self.records[idx].set(found.clone());
        }

        self.records[top]
            .get_mut(name)
            .ok_or_else(|| RuntimeError::Internal(format!("'{}' vanished from the top record", name)))
    }
}

impl fmt::Display for CallStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CALL STACK")?;
        for record in self.records.iter().rev() {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
