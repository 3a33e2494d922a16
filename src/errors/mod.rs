//! Error types for lexing and parsing.
//!
//! Every failure carries the source position where it was detected, a
//! stable name for reporting and, where useful, a suggestion for the user.

pub mod errors;
