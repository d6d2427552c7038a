use super::*;

/// Deepest activation record a call may create. The program record is level 1.
pub const MAX_CALL_DEPTH: usize = 128;

impl<'a> Interpreter<'a> {
    /// Build an interpreter and run `program` to completion.
    ///
    /// `program` must have passed analysis with no errors.
    pub fn new(program: &'a Program) -> Result<Self, RuntimeError> {
        let mut interp = Interpreter {
            program,
            stack: CallStack::new(),
            globals: ActivationRecord::new(program.name.clone(), 1, None),
        };
        interp.run()?;
        Ok(interp)
    }

    fn run(&mut self) -> Result<(), RuntimeError> {
        let program = self.program;
        let name = program.name.as_str();
        self.stack.push(ActivationRecord::new(name, 1, None));
        self.trace_start(name);
        let result = self.exec_block(&program.statements);
        self.trace_end(name);
        if let Some(record) = self.stack.pop() {
            self.globals = record;
        }
        result
    }

    /// The program's activation record as it stood when the run ended.
    pub fn globals(&self) -> &ActivationRecord<'a> {
        &self.globals
    }

    pub fn global(&self, name: &str) -> Option<Value<'a>> {
        self.globals.get(name).and_then(|var| var.value)
    }

    /// Call a top-level function with already evaluated arguments, as if the
    /// call appeared at the end of the program.
    pub fn call(
        &mut self,
        name: &str,
        args: Vec<Value<'a>>,
    ) -> Result<Option<Value<'a>>, RuntimeError> {
        let def = match self.global(name) {
            Some(Value::Function(def)) => def,
            _ => return Err(RuntimeError::NotCallable(name.to_string())),
        };
        let program_name = self.program.name.clone();
        let globals = std::mem::replace(
            &mut self.globals,
            ActivationRecord::new(program_name, 1, None),
        );
        self.stack.push(globals);
        let result = self.invoke(def, args);
        if let Some(record) = self.stack.pop() {
            self.globals = record;
        }
        result
    }

    /// Run `def` in a new activation record whose parent is the current top.
    ///
    /// Only the directly listed statements are scanned for a `give`; the
    /// first one ends the call and its value is returned.
    pub(super) fn invoke(
        &mut self,
        def: &'a FunctionDef,
        args: Vec<Value<'a>>,
    ) -> Result<Option<Value<'a>>, RuntimeError> {
        let (parent, level) = match self.stack.peek() {
            Some(caller) => (Some(self.stack.depth() - 1), caller.nesting_level + 1),
            None => (None, 1),
        };
        if level > MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded(
                def.name.clone(),
                MAX_CALL_DEPTH,
            ));
        }

        let mut record = ActivationRecord::new(def.name.clone(), level, parent);
        for (param, value) in def.params.iter().zip(args) {
            record.set(Variable::new(param.name.clone(), param.ty, Some(value)));
        }

        self.stack.push(record);
        self.trace_start(&def.name);
        let result = self.run_body(def);
        self.trace_end(&def.name);
        self.stack.pop();
        result
    }

    fn run_body(&mut self, def: &'a FunctionDef) -> Result<Option<Value<'a>>, RuntimeError> {
        for stmt in &def.body {
            if let Stmt::Give(give) = stmt {
                return self.eval(&give.value).map(Some);
            }
            self.exec_stmt(stmt)?;
        }
        Ok(None)
    }

    pub(super) fn top_mut(&mut self) -> Result<&mut ActivationRecord<'a>, RuntimeError> {
        self.stack
            .peek_mut()
            .ok_or_else(|| RuntimeError::Internal("call stack is empty".to_string()))
    }

    fn trace_start(&self, name: &str) {
        tracing::info!(
            "------- START OF FUNCTION {} -------\n{}\n",
            name,
            self.stack
        );
    }

    fn trace_end(&self, name: &str) {
        tracing::info!(
            "-------- END OF FUNCTION {} --------\n{}\n",
            name,
            self.stack
        );
    }
}
