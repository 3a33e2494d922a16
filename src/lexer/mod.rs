//! Lexical analysis.
//!
//! Converts source text into the flat token stream the parser consumes:
//! names, keywords (`name:`), integer literals, operator runs and the
//! punctuation `, . ; ( ) { }`. Whitespace and `//` comments are skipped.

pub mod lexer;
pub mod tokens;
