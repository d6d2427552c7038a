use super::*;

impl<'a> Interpreter<'a> {
    pub(super) fn eval(&mut self, expr: &'a Expr) -> Result<Value<'a>, RuntimeError> {
        match expr {
            Expr::Literal(lit, _) => Ok(match lit {
                Literal::Int(i) => Value::Int(*i),
                Literal::Float(x) => Value::Float(*x),
                Literal::Bool(b) => Value::Bool(*b),
            }),
            Expr::Variable(var) => self.stack.resolve(&var.name)?.get(),
            Expr::Binary {
                op, left, right, ..
            } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                ops::binary(*op, l, r)
            }
            Expr::Unary { op, operand, .. } => {
                let value = self.eval(operand)?;
                ops::unary(*op, value)
            }
            Expr::Parenthesized(inner, _) => self.eval(inner),
            Expr::Call(call) => self
                .eval_call(call)?
                .ok_or_else(|| RuntimeError::MissingValue(call.callee.name.clone())),
            Expr::Missing(pos) => Err(RuntimeError::Internal(format!(
                "unparsed expression at offset {}",
                pos
            ))),
        }
    }

    /// Arguments are evaluated in the caller's record before the callee's
    /// record is pushed.
    pub(super) fn eval_call(
        &mut self,
        call: &'a FunctionCall,
    ) -> Result<Option<Value<'a>>, RuntimeError> {
        let def = match self.stack.resolve(&call.callee.name)?.get()? {
            Value::Function(def) => def,
            _ => return Err(RuntimeError::NotCallable(call.callee.name.clone())),
        };

        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval(arg)?);
        }
        self.invoke(def, args)
    }
}
