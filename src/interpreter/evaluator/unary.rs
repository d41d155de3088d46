use crate::{
    ast::Operator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation; the operand must be a number.
    /// - `Not`: boolean negation; the operand must be a boolean.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(Operator::Negate, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Context::eval_unary(Operator::Not, &Value::Bool(false)).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Context::eval_unary(Operator::Not, &Value::Number(1.0)).is_err());
    /// ```
    pub fn eval_unary(op: Operator, value: &Value) -> EvalResult<Value> {
        match op {
            Operator::Negate => Ok(Value::Number(-value.as_number(op)?)),
            Operator::Not => Ok(Value::Bool(!value.as_bool(op)?)),
            _ => unreachable!("binary operator {op} evaluated as unary"),
        }
    }
}
