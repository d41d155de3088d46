use crate::interpreter::lexer::Token;

/// Operators recognised by the lexer.
///
/// Every operator symbol the lexer can produce maps to exactly one variant, and
/// every variant has an entry in the fixed precedence table returned by
/// [`Operator::spec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition or string concatenation (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication or string repetition (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Equality (`==`).
    Equal,
    /// Inequality (`!=`).
    NotEqual,
    /// Less than (`<`).
    Less,
    /// Greater than (`>`).
    Greater,
    /// Less than or equal (`<=`).
    LessEqual,
    /// Greater than or equal (`>=`).
    GreaterEqual,
    /// Logical conjunction (`and`).
    And,
    /// Logical disjunction (`or`).
    Or,
    /// Logical negation (`!`).
    Not,
    /// Arithmetic negation (prefix `-`).
    Negate,
}

/// Direction in which operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `!!a` groups as `!(!a)`.
    Right,
}

/// Binding information for a single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Higher values bind tighter.
    pub precedence:    i8,
    /// Tie-breaking direction for equal precedence.
    pub associativity: Associativity,
}

impl Operator {
    /// Returns the precedence and associativity of the operator.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::{Associativity, Operator};
    ///
    /// assert!(Operator::Mul.spec().precedence > Operator::Add.spec().precedence);
    /// assert_eq!(Operator::Negate.spec().associativity, Associativity::Right);
    /// ```
    #[must_use]
    pub const fn spec(self) -> OperatorSpec {
        use Associativity::{Left, Right};

        let (precedence, associativity) = match self {
            Self::Negate => (4, Right),
            Self::Not => (3, Right),
            Self::Mul | Self::Div => (2, Left),
            Self::Add | Self::Sub => (1, Left),
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual => (0, Left),
            Self::And => (-1, Left),
            Self::Or => (-2, Left),
        };

        OperatorSpec { precedence,
                       associativity }
    }

    /// Returns `true` for operators that take a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not | Self::Negate)
    }

    /// Source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub | Self::Negate => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "!",
        }
    }

    /// Looks up the operator spelled by `symbol`, with `-` always read as
    /// subtraction.
    ///
    /// The lexer decides between subtraction and negation from the
    /// surrounding tokens.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("-"), Some(Operator::Sub));
    /// assert_eq!(Operator::from_symbol("!"), Some(Operator::Not));
    /// assert_eq!(Operator::from_symbol("AND"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            "and" => Self::And,
            "or" => Self::Or,
            "!" => Self::Not,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression in postfix (reverse Polish) order.
///
/// Produced by [`crate::interpreter::parser::postfix::to_postfix`]; operands
/// always precede the operator that consumes them.
pub type Postfix = Vec<Token>;

/// A classified input line, ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print <expr>`: evaluates the expression and yields its value.
    Print(Postfix),
    /// `<name> = <expr>`: evaluates the expression and binds it to `name`.
    Assignment {
        /// Name of the variable being written.
        name: String,
        /// Right-hand side in postfix form.
        expr: Postfix,
    },
    /// A bare expression.
    Expression(Postfix),
}
