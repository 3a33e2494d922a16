//! Parser module for building the expression tree.
//!
//! The grammar is a fixed precedence cascade, loosest first:
//!
//! - sequence: `keyword (',' keyword)*`
//! - keyword message: `(KEYWORD operator)+ | operator`
//! - infix operators, left-associative: `call (OPERATOR call)*`
//! - juxtaposition, right-associative: `dotted+`
//! - dotted pipeline: `primary ('.' primary)*`
//! - primary: names, numbers, `()`, `(op)`, `(key:)`, `( ... )`, `{ ... }`
//!
//! Each level is a free function in [`expr`] over any [`source::TokenSource`].

pub mod expr;
pub mod parser;
pub mod source;
