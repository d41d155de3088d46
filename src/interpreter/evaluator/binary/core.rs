use crate::{
    ast::Operator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are handled by `eval_arithmetic`, equality and
    /// relational operators by `eval_comparison`, and `and`/`or` by
    /// `eval_logic`. Both operands have already been evaluated, so logical
    /// operators never short-circuit.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand, pushed first.
    /// - `right`: Right operand, pushed last.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(Operator::Add, &Value::Number(3.0), &Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Operator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Negate, Not,
            NotEqual, Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right)
            },
            And | Or => Self::eval_logic(op, left, right),
            Not | Negate => unreachable!("unary operator {op} evaluated as binary"),
        }
    }
}
