use std::fmt::{self, Display};

use super::expressions::CallableRef;

/// Expression Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExprType {
    Bool,
    Call,
    Function,
    Int,
    List,
    Name,
    Unit,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Expression tree produced by the parser.
///
/// Every construct in the language lowers to one of these. Operators,
/// juxtaposition, dotted chains, keyword messages and blocks all become
/// `Call` nodes; multiple arguments travel as a `List`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a variable, operator or keyword selector
    Name(String),
    Bool(bool),
    Int(i64),
    /// The value of `()`
    Unit,
    /// Apply `function` to `argument`
    Call {
        function: Box<Expr>,
        argument: Box<Expr>,
    },
    /// Arguments or statements in order. Comma grouping never builds a
    /// one-element list (`(x)` is just `x`), but keyword messages and blocks do.
    List(Vec<Expr>),
    /// Host function installed by an evaluator; never produced by the parser
    Callable(CallableRef),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Name(_) => ExprType::Name,
            Expr::Bool(_) => ExprType::Bool,
            Expr::Int(_) => ExprType::Int,
            Expr::Unit => ExprType::Unit,
            Expr::Call { .. } => ExprType::Call,
            Expr::List(_) => ExprType::List,
            Expr::Callable(_) => ExprType::Function,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Unit => write!(f, "()"),
            Expr::Call { function, argument } => write!(f, "{}({})", function, argument),
            Expr::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Expr::Callable(callable) => write!(f, "<fn {}>", callable.name()),
        }
    }
}
