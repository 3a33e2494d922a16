//! Token cursor over a lexed token vector, and the parse entry points.

use std::{ops::Range, rc::Rc};

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{expr::parse_sequence, source::TokenSource};

/// Cursor over a vector of tokens.
///
/// Tracks the current position and the range of tokens taken by the last
/// successful match so the grammar can read their text.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Tokens consumed by the last successful match
    last_match: Range<usize>,
    /// The name of the source being parsed
    file: Rc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            last_match: 0..0,
            file,
        }
    }

    /// Returns the current token, if any remain.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// True once only `EOF` (or nothing) is left.
    pub fn at_end(&self) -> bool {
        match self.current_token() {
            Some(token) => token.kind == TokenKind::EOF,
            None => true,
        }
    }

    fn kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|token| token.kind)
    }

    fn take(&mut self, count: usize) {
        self.last_match = self.pos..self.pos + count;
        self.pos += count;
    }
}

impl TokenSource for Parser {
    fn check(&self, kind: TokenKind) -> bool {
        self.kind_at(0) == Some(kind)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if !self.check(kind) {
            return false;
        }

        self.take(1);
        true
    }

    fn matches_pair(&mut self, first: TokenKind, second: TokenKind) -> bool {
        if self.kind_at(0) != Some(first) || self.kind_at(1) != Some(second) {
            return false;
        }

        self.take(2);
        true
    }

    fn last_match(&self) -> &[Token] {
        &self.tokens[self.last_match.clone()]
    }

    fn position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }
}

/// Parses a complete token stream into a single expression.
///
/// The whole stream must form one sequence: anything other than `EOF`
/// left over afterwards is reported as `UnexpectedToken`.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, file);
    let expr = parse_sequence(&mut parser)?;

    if let Some(token) = parser.current_token().filter(|_| !parser.at_end()) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            parser.position(),
        ));
    }

    debug!("parsed {} tokens from {}", parser.consumed(), parser.file);

    Ok(expr)
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str, file: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse(tokens, Rc::new(file.to_string()))
}
