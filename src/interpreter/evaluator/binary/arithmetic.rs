use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{checked_repeat, f64_to_repeat_count},
};

impl Context {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// - `+` adds two numbers; any other combination concatenates the display
    ///   forms of both operands, so `"a" + 1` is `"a1"`.
    /// - `*` multiplies two numbers, or repeats a string by a number truncated
    ///   toward zero (in either operand order).
    /// - `-` and `/` require two numbers. Dividing by zero is an error.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let s = Context::eval_arithmetic(Operator::Mul, &Value::from("ab"), &Value::Number(3.0));
    /// assert_eq!(s.unwrap(), Value::from("ababab"));
    ///
    /// let s = Context::eval_arithmetic(Operator::Add, &Value::from("a"), &Value::Number(1.0));
    /// assert_eq!(s.unwrap(), Value::from("a1"));
    /// ```
    pub fn eval_arithmetic(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Number, Str};

        match op {
            Operator::Add => Ok(match (left, right) {
                                    (Number(a), Number(b)) => Number(a + b),
                                    _ => Str(format!("{left}{right}")),
                                }),
            Operator::Mul => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(a * b)),
                (Str(text), Number(count)) | (Number(count), Str(text)) => {
                    let count = f64_to_repeat_count(*count)?;
                    Ok(Str(checked_repeat(text, count)?))
                },
                _ => {
                    Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                                   left.type_name(),
                                                                   right.type_name()) })
                },
            },
            Operator::Sub => Ok(Number(left.as_number(op)? - right.as_number(op)?)),
            Operator::Div => {
                let dividend = left.as_number(op)?;
                let divisor = right.as_number(op)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Number(dividend / divisor))
            },
            _ => unreachable!("eval_arithmetic used with non arithmetic operator {op}"),
        }
    }
}
