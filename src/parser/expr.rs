use log::trace;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, RESERVED_NAMES},
};

use super::source::TokenSource;

/// First token taken by the last successful match.
///
/// A source that reports a match without handing back the token is an error,
/// not an empty name.
fn matched_token<S: TokenSource>(source: &S) -> Result<Token, Error> {
    match source.last_match().first() {
        Some(token) => Ok(token.clone()),
        None => Err(error_here(source, ErrorImpl::EmptyMatch)),
    }
}

fn error_here<S: TokenSource>(source: &S, error: ErrorImpl) -> Error {
    Error::new(error, source.position())
}

/// `keyword (',' keyword)*`
///
/// A single element is returned as is; two or more become a `List`.
pub fn parse_sequence<S: TokenSource>(source: &mut S) -> Result<Expr, Error> {
    trace!("parse_sequence: at {}", source.position().0);

    let mut exprs = vec![parse_keyword_expr(source)?];

    while source.matches(TokenKind::Comma) {
        exprs.push(parse_keyword_expr(source)?);
    }

    if exprs.len() == 1 {
        return Ok(exprs.remove(0));
    }

    Ok(Expr::list(exprs))
}

/// `(KEYWORD operator)+ | operator`
///
/// `if: a then: b` becomes `if:then:([a, b])`.
pub fn parse_keyword_expr<S: TokenSource>(source: &mut S) -> Result<Expr, Error> {
    if !source.check(TokenKind::Keyword) {
        return parse_operator_expr(source);
    }

    trace!("parse_keyword_expr: at {}", source.position().0);

    let mut selector = String::new();
    let mut args = vec![];

    while source.matches(TokenKind::Keyword) {
        selector.push_str(&matched_token(source)?.value);
        args.push(parse_operator_expr(source)?);
    }

    Ok(Expr::call(Expr::Name(selector), Expr::list(args)))
}

/// `call (OPERATOR call)*`, folded to the left.
pub fn parse_operator_expr<S: TokenSource>(source: &mut S) -> Result<Expr, Error> {
    let mut expr = parse_call_expr(source)?;

    while source.matches(TokenKind::Operator) {
        let operator = matched_token(source)?.value;
        trace!("parse_operator_expr: `{}` at {}", operator, source.position().0);

        let right = parse_call_expr(source)?;
        expr = Expr::call(Expr::Name(operator), Expr::list(vec![expr, right]));
    }

    Ok(expr)
}

/// `dotted+`, applied right to left: `a b c` is `a(b(c))`.
pub fn parse_call_expr<S: TokenSource>(source: &mut S) -> Result<Expr, Error> {
    let mut stack = vec![];

    while let Some(expr) = parse_dotted_expr(source)? {
        stack.push(expr);
    }

    let Some(mut result) = stack.pop() else {
        return Err(error_here(source, ErrorImpl::ExpectedPrimary));
    };

    while let Some(function) = stack.pop() {
        result = Expr::call(function, result);
    }

    Ok(result)
}

/// `primary ('.' primary)*`, where `a.b` is `b(a)`.
///
/// Returns `None` without consuming anything when no primary starts here.
pub fn parse_dotted_expr<S: TokenSource>(source: &mut S) -> Result<Option<Expr>, Error> {
    let Some(mut expr) = parse_primary_expr(source)? else {
        return Ok(None);
    };

    while source.matches(TokenKind::Dot) {
        let Some(function) = parse_primary_expr(source)? else {
            return Err(error_here(source, ErrorImpl::ExpectedExpressionAfterDot));
        };

        expr = Expr::call(function, expr);
    }

    Ok(Some(expr))
}

pub fn parse_primary_expr<S: TokenSource>(source: &mut S) -> Result<Option<Expr>, Error> {
    if source.matches(TokenKind::Name) {
        let name = matched_token(source)?.value;

        return Ok(Some(match RESERVED_NAMES.get(name.as_str()) {
            Some(value) => Expr::Bool(*value),
            None => Expr::Name(name),
        }));
    }

    if source.matches(TokenKind::Number) {
        let token = matched_token(source)?;

        return match token.value.parse::<i64>() {
            Ok(value) => Ok(Some(Expr::Int(value))),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            )),
        };
    }

    if source.matches(TokenKind::LeftParen) {
        return parse_grouping_expr(source).map(Some);
    }

    if source.matches(TokenKind::LeftBrace) {
        return parse_block_expr(source).map(Some);
    }

    Ok(None)
}

/// Everything after an opening `(`.
fn parse_grouping_expr<S: TokenSource>(source: &mut S) -> Result<Expr, Error> {
    if source.matches(TokenKind::RightParen) {
        return Ok(Expr::unit());
    }

    // `(+)` and `(key:)` name an operator or keyword without applying it
    if source.matches_pair(TokenKind::Operator, TokenKind::RightParen)
        || source.matches_pair(TokenKind::Keyword, TokenKind::RightParen)
    {
        return Ok(Expr::Name(matched_token(source)?.value));
    }

    let expr = parse_sequence(source)?;

    if !source.matches(TokenKind::RightParen) {
        return Err(error_here(source, ErrorImpl::UnclosedParenthesis));
    }

    Ok(expr)
}

/// Everything after an opening `{`: `sequence (';' sequence)*` then `}`.
///
/// `{ a; b }` is sugar for `do([a, b])`. The statements are always a
/// `List`, even when there is only one.
fn parse_block_expr<S: TokenSource>(source: &mut S) -> Result<Expr, Error> {
    trace!("parse_block_expr: at {}", source.position().0);

    let mut statements = vec![parse_sequence(source)?];

    while source.matches(TokenKind::Semicolon) {
        statements.push(parse_sequence(source)?);
    }

    if !source.matches(TokenKind::RightBrace) {
        return Err(error_here(source, ErrorImpl::UnclosedBrace));
    }

    Ok(Expr::call(Expr::name("do"), Expr::list(statements)))
}
