/// Shared parser types.
pub mod core;

/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm over classified tokens, using the
/// precedence and associativity table attached to each operator.
pub mod postfix;

/// Statement classification.
///
/// Decides whether a line is a print statement, an assignment or a bare
/// expression and converts the expression part to postfix form.
pub mod statement;
