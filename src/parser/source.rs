//! The cursor interface the grammar reads tokens through.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A forward-only token cursor with at most two tokens of lookahead.
///
/// Matching is all-or-nothing: a failed `matches` or `matches_pair` leaves
/// the cursor exactly where it was.
pub trait TokenSource {
    /// Returns true if the next token has `kind`, without consuming it.
    fn check(&self, kind: TokenKind) -> bool;

    /// Consumes the next token if it has `kind`.
    fn matches(&mut self, kind: TokenKind) -> bool;

    /// Consumes the next two tokens if they have `first` and `second` kinds.
    fn matches_pair(&mut self, first: TokenKind, second: TokenKind) -> bool;

    /// Tokens consumed by the most recent successful match.
    fn last_match(&self) -> &[Token];

    /// Source position of the next unconsumed token.
    fn position(&self) -> Position;
}
