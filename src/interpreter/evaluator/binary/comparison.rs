use std::cmp::Ordering;

use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Orders two values of the same kind.
///
/// Numbers compare numerically (`None` when either is `NaN`), strings
/// lexicographically by code point and booleans with `false < true`. Values of
/// different kinds have no order.
fn same_kind_ordering(op: Operator, left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        _ => Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {} with {op}",
                                                            left.type_name(),
                                                            right.type_name()) }),
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values; values of different kinds are
    /// never equal. Relational operators require both operands to be of the
    /// same kind.
    ///
    /// # Example
    /// ```
    /// use calcline::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let less = Context::eval_comparison(Operator::Less, &Value::from("a"), &Value::from("b"));
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let equal = Context::eval_comparison(Operator::Equal, &Value::from("1"), &Value::Number(1.0));
    /// assert_eq!(equal.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        Ok(Value::Bool(match op {
                           Operator::Equal => left == right,
                           Operator::NotEqual => left != right,
                           Operator::Less => {
                               same_kind_ordering(op, left, right)? == Some(Ordering::Less)
                           },
                           Operator::Greater => {
                               same_kind_ordering(op, left, right)? == Some(Ordering::Greater)
                           },
                           Operator::LessEqual => {
                               matches!(same_kind_ordering(op, left, right)?,
                                        Some(Ordering::Less | Ordering::Equal))
                           },
                           Operator::GreaterEqual => {
                               matches!(same_kind_ordering(op, left, right)?,
                                        Some(Ordering::Greater | Ordering::Equal))
                           },
                           _ => unreachable!("eval_comparison used with non comparison operator"),
                       }))
    }
}
