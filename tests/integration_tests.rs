//! End-to-end tests: source text through the lexer and parser, and the
//! grammar driven by a token source defined outside the crate.

use std::rc::Rc;

use lark::{
    ast::ast::{Expr, ExprType},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::{
        expr::parse_sequence,
        parser::{parse, parse_source},
        source::TokenSource,
    },
    Position, Span,
};

/// Token source over a plain slice, to check the grammar only relies on
/// the trait.
struct SliceSource {
    tokens: Vec<Token>,
    pos: usize,
    last: usize,
}

impl SliceSource {
    fn new(source: &str) -> Self {
        SliceSource {
            tokens: tokenize(source.to_string(), None).unwrap(),
            pos: 0,
            last: 0,
        }
    }
}

impl TokenSource for SliceSource {
    fn check(&self, kind: TokenKind) -> bool {
        self.tokens.get(self.pos).map(|token| token.kind) == Some(kind)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if !self.check(kind) {
            return false;
        }
        self.last = self.pos;
        self.pos += 1;
        true
    }

    fn matches_pair(&mut self, first: TokenKind, second: TokenKind) -> bool {
        let second_matches = self.tokens.get(self.pos + 1).map(|token| token.kind) == Some(second);
        if !self.check(first) || !second_matches {
            return false;
        }
        self.last = self.pos;
        self.pos += 2;
        true
    }

    fn last_match(&self) -> &[Token] {
        &self.tokens[self.last..self.pos]
    }

    fn position(&self) -> Position {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
            .span
            .start
            .clone()
    }
}

/// Reports matches but never hands back the matched tokens.
struct ForgetfulSource {
    inner: SliceSource,
}

impl TokenSource for ForgetfulSource {
    fn check(&self, kind: TokenKind) -> bool {
        self.inner.check(kind)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.inner.matches(kind)
    }

    fn matches_pair(&mut self, first: TokenKind, second: TokenKind) -> bool {
        self.inner.matches_pair(first, second)
    }

    fn last_match(&self) -> &[Token] {
        &[]
    }

    fn position(&self) -> Position {
        self.inner.position()
    }
}

#[test]
fn test_program_with_every_construct() {
    let source = "{\n  sum: (+) (1, 2);\n  if: x.even then: print x else: ()\n}";
    let expr = parse_source(source, "program.lark").unwrap();

    let expected = Expr::call(
        Expr::name("do"),
        Expr::list(vec![
            Expr::call(
                Expr::name("sum:"),
                Expr::list(vec![Expr::call(
                    Expr::name("+"),
                    Expr::list(vec![Expr::Int(1), Expr::Int(2)]),
                )]),
            ),
            Expr::call(
                Expr::name("if:then:else:"),
                Expr::list(vec![
                    Expr::call(Expr::name("even"), Expr::name("x")),
                    Expr::call(Expr::name("print"), Expr::name("x")),
                    Expr::Unit,
                ]),
            ),
        ]),
    );

    assert_eq!(expr, expected);
    assert_eq!(expr.get_expr_type(), ExprType::Call);
}

#[test]
fn test_display_of_parsed_tree() {
    let expr = parse_source("a + b c, d.e", "test.lark").unwrap();

    assert_eq!(expr.to_string(), "[+([a, b(c)]), e(d)]");
}

#[test]
fn test_custom_token_source_matches_builtin_parser() {
    let source = "k1: a b k2: c + 1, (x.y)";

    let mut slice_source = SliceSource::new(source);
    let from_trait = parse_sequence(&mut slice_source).unwrap();
    let from_parser = parse_source(source, "test.lark").unwrap();

    assert_eq!(from_trait, from_parser);
    assert!(slice_source.check(TokenKind::EOF));
}

#[test]
fn test_errors_report_source_position() {
    let source = "{ a;\n  (b c }";
    let error = parse_source(source, "broken.lark").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnclosedParenthesis);
    assert_eq!(error.get_position().0, 12);
    assert_eq!(error.get_position().1.as_str(), "broken.lark");

    let (line, _, column) = lark::get_line_at_position(source, error.get_position().0).unwrap();
    assert_eq!((line, column), (2, 7));
}

#[test]
fn test_lexer_errors_surface_through_parse_source() {
    let error: Error = parse_source("a # b", "test.lark").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "#".to_string()
        }
    );
}

#[test]
fn test_failed_parse_returns_no_tree() {
    for source in ["(a", "{a;b", "a.", "", "a b )"] {
        assert!(parse_source(source, "test.lark").is_err(), "{:?} parsed", source);
    }
}

#[test]
fn test_parse_hand_built_tokens() {
    let file = Rc::new("tokens.lark".to_string());
    let span = Span {
        start: Position(0, Rc::clone(&file)),
        end: Position(0, Rc::clone(&file)),
    };
    let token = |kind, value: &str| Token {
        kind,
        value: value.to_string(),
        span: span.clone(),
    };

    let tokens = vec![
        token(TokenKind::LeftParen, "("),
        token(TokenKind::Keyword, "at:"),
        token(TokenKind::RightParen, ")"),
        token(TokenKind::Name, "xs"),
        token(TokenKind::EOF, "EOF"),
    ];

    assert_eq!(
        parse(tokens, file).unwrap(),
        Expr::call(Expr::name("at:"), Expr::name("xs"))
    );
}

#[test]
fn test_match_without_tokens_is_an_error() {
    for source in ["foo", "42", "(+)", "k: a", "a + b"] {
        let mut forgetful = ForgetfulSource {
            inner: SliceSource::new(source),
        };

        let error = parse_sequence(&mut forgetful).unwrap_err();
        assert_eq!(error.kind(), &ErrorImpl::EmptyMatch, "{:?}", source);
    }
}
