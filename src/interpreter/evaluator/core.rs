use tracing::debug;

use crate::{
    ast::Statement,
    error::{InterpretError, RuntimeError},
    interpreter::{
        environment::Environment,
        lexer::{Token, lex},
        parser::statement::parse_statement,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a successfully executed line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value of a print statement or bare expression.
    Value(Value),
    /// Confirmation of an assignment statement.
    Assigned {
        /// Name of the variable that was written.
        name:  String,
        /// The value now bound to it.
        value: Value,
    },
}

impl Outcome {
    /// The value carried by the outcome, whichever statement produced it.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Value(value) | Self::Assigned { value, .. } => value,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Assigned { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

/// Stores the runtime evaluation context.
///
/// A `Context` is one interpreter session: it owns the environment that
/// persists between lines. Independent contexts never share variables.
///
/// ## Usage
///
/// Create one `Context` and feed it lines through [`Context::execute_line`].
/// Each call runs to completion before returning.
#[derive(Debug, Default)]
pub struct Context {
    /// Variables assigned so far in this session.
    pub environment: Environment,
}

impl Context {
    /// Creates a new evaluation context with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexes, classifies and executes one line of source text.
    ///
    /// A blank line yields `Ok(None)`. An assignment only touches the
    /// environment once its right-hand side has been evaluated successfully,
    /// so a failing line never changes the session's state.
    ///
    /// # Errors
    /// Returns the lexing, syntax or runtime error that stopped execution.
    ///
    /// # Example
    /// ```
    /// use calcline::{Context, Outcome, interpreter::value::core::Value};
    ///
    /// let mut context = Context::new();
    ///
    /// let assigned = context.execute_line("x = 5").unwrap().unwrap();
    /// assert_eq!(assigned.to_string(), "x = 5");
    ///
    /// let result = context.execute_line("print x + 1").unwrap();
    /// assert_eq!(result, Some(Outcome::Value(Value::Number(6.0))));
    ///
    /// assert_eq!(context.execute_line("   ").unwrap(), None);
    /// ```
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>, InterpretError> {
        let tokens = lex(line)?;
        let Some(statement) = parse_statement(&tokens)? else {
            return Ok(None);
        };

        Ok(Some(self.eval_statement(&statement)?))
    }

    /// Executes a classified statement.
    ///
    /// # Errors
    /// Returns any error raised while evaluating the statement's expression.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Outcome> {
        match statement {
            Statement::Print(expr) | Statement::Expression(expr) => {
                self.eval_postfix(expr).map(Outcome::Value)
            },
            Statement::Assignment { name, expr } => {
                let value = self.eval_postfix(expr)?;
                debug!(%name, %value, "assigning variable");
                self.environment.assign(name.clone(), value.clone());

                Ok(Outcome::Assigned { name: name.clone(),
                                       value })
            },
        }
    }

    /// Evaluates a postfix expression with a value stack.
    ///
    /// Literals push themselves, identifiers push their current value and
    /// operators replace their operands with the result. The expression is
    /// valid only if exactly one value is left at the end.
    ///
    /// # Errors
    /// - `UndefinedVariable` if an identifier was never assigned.
    /// - `InvalidExpression` if an operator lacks operands or more than one
    ///   value remains.
    /// - Any error raised by the operators themselves.
    pub fn eval_postfix(&self, postfix: &[Token]) -> EvalResult<Value> {
        let mut stack: Vec<Value> = Vec::with_capacity(postfix.len());

        for token in postfix {
            let value = match token {
                Token::Identifier(name) => self.eval_variable(name)?,
                Token::Operator(op) if op.is_unary() => {
                    let operand = pop_operand(&mut stack)?;
                    Self::eval_unary(*op, &operand)?
                },
                Token::Operator(op) => {
                    let right = pop_operand(&mut stack)?;
                    let left = pop_operand(&mut stack)?;
                    Self::eval_binary(*op, &left, &right)?
                },
                literal => Value::from_literal(literal).ok_or(RuntimeError::InvalidExpression)?,
            };
            stack.push(value);
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(value), true) => Ok(value),
            _ => Err(RuntimeError::InvalidExpression),
        }
    }

    /// Looks up a variable in the environment.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if `name` was never assigned.
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}

/// Pops the next operand, failing if the expression ran out of values.
fn pop_operand(stack: &mut Vec<Value>) -> EvalResult<Value> {
    stack.pop().ok_or(RuntimeError::InvalidExpression)
}
