//! Unit tests for the expression tree.

use super::{
    ast::{Expr, ExprType},
    expressions::{CallableExpr, CallableRef},
};

struct Identity;

impl CallableExpr for Identity {
    fn name(&self) -> &str {
        "id"
    }

    fn call(&self, argument: &Expr) -> Expr {
        argument.clone()
    }
}

#[test]
fn test_expr_types() {
    assert_eq!(Expr::name("a").get_expr_type(), ExprType::Name);
    assert_eq!(Expr::Bool(true).get_expr_type(), ExprType::Bool);
    assert_eq!(Expr::Int(3).get_expr_type(), ExprType::Int);
    assert_eq!(Expr::unit().get_expr_type(), ExprType::Unit);
    assert_eq!(
        Expr::call(Expr::name("f"), Expr::Int(1)).get_expr_type(),
        ExprType::Call
    );
    assert_eq!(
        Expr::list(vec![Expr::Int(1), Expr::Int(2)]).get_expr_type(),
        ExprType::List
    );
    assert_eq!(
        Expr::Callable(CallableRef::new(Identity)).get_expr_type(),
        ExprType::Function
    );
}

#[test]
fn test_display_literals() {
    assert_eq!(Expr::name("foo").to_string(), "foo");
    assert_eq!(Expr::Bool(false).to_string(), "false");
    assert_eq!(Expr::Int(42).to_string(), "42");
    assert_eq!(Expr::unit().to_string(), "()");
}

#[test]
fn test_display_nested_calls() {
    let expr = Expr::call(
        Expr::name("+"),
        Expr::list(vec![Expr::name("a"), Expr::call(Expr::name("f"), Expr::Int(1))]),
    );

    assert_eq!(expr.to_string(), "+([a, f(1)])");
}

#[test]
fn test_callable_equality_is_identity() {
    let first = CallableRef::new(Identity);
    let second = CallableRef::new(Identity);

    assert_eq!(first, first.clone());
    assert_ne!(first, second);
    assert_eq!(first.call(&Expr::Int(7)), Expr::Int(7));
    assert_eq!(Expr::Callable(first).to_string(), "<fn id>");
}
