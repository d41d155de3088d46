use crate::{
    ast::Operator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands must be booleans. They are always both evaluated before
    /// the operator runs, so `false and x` still fails when `x` is undefined.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(Operator::Or, &Value::Bool(false), &Value::Bool(true));
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// assert!(Context::eval_logic(Operator::And, &Value::Bool(true), &Value::Number(1.0)).is_err());
    /// ```
    pub fn eval_logic(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        let left = left.as_bool(op)?;
        let right = right.as_bool(op)?;

        match op {
            Operator::And => Ok(Value::Bool(left && right)),
            Operator::Or => Ok(Value::Bool(left || right)),
            _ => unreachable!("eval_logic used with non logical operator {op}"),
        }
    }
}
