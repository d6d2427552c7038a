use super::*;

impl<'a> Interpreter<'a> {
    pub(super) fn exec_block(&mut self, statements: &'a [Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    pub(super) fn exec_stmt(&mut self, stmt: &'a Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Declaration(decl) => {
                let value = match &decl.init {
                    Some(init) => Some(self.eval(init)?),
                    None => None,
                };
                self.top_mut()?
                    .set(Variable::new(decl.name.clone(), decl.ty, value));
            }
            Stmt::Assignment(assign) => {
                let value = self.eval(&assign.value)?;
                self.stack.resolve(&assign.target.name)?.value = Some(value);
            }
            Stmt::FunctionDef(def) => {
                self.top_mut()?.set(Variable::new(
                    def.name.clone(),
                    Type::Function,
                    Some(Value::Function(def)),
                ));
            }
            Stmt::Call(call) => {
                self.eval_call(call)?;
            }
            Stmt::Give(give) => {
                // Reached only inside an `if`; the value goes nowhere.
                self.eval(&give.value)?;
            }
            Stmt::If(stmt) => {
                if self.eval(&stmt.condition)? == Value::Bool(true) {
                    self.exec_block(&stmt.body)?;
                }
            }
        }
        Ok(())
    }
}
