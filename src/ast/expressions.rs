use std::{fmt, rc::Rc};

use super::ast::Expr;

// CONSTRUCTORS

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn call(function: Expr, argument: Expr) -> Self {
        Expr::Call {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }

    pub fn unit() -> Self {
        Expr::Unit
    }
}

// CALLABLES

/// A function implemented by the host rather than written in source.
///
/// Evaluators implement this for their built-ins and wrap them in
/// [`CallableRef`] to store them inside an [`Expr`].
pub trait CallableExpr {
    /// Name used when the callable is printed.
    fn name(&self) -> &str;
    /// Applies the callable to an already-evaluated argument.
    fn call(&self, argument: &Expr) -> Expr;
}

/// Shared handle to a [`CallableExpr`]. Two handles are equal only when
/// they point at the same callable.
#[derive(Clone)]
pub struct CallableRef(Rc<dyn CallableExpr>);

impl CallableRef {
    pub fn new<T: CallableExpr + 'static>(callable: T) -> Self {
        CallableRef(Rc::new(callable))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn call(&self, argument: &Expr) -> Expr {
        self.0.call(argument)
    }
}

impl PartialEq for CallableRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CallableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallableRef").field(&self.0.name()).finish()
    }
}
