use std::rc::Rc;

use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Rc<Vec<RegexPattern>>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    // Every pattern is anchored, so a match always starts at the cursor
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regexes"),
        handler,
    }
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            pos: 0,
            tokens: vec![],
            // Order matters: comments before the `/` operator, keywords before names
            patterns: Rc::new(vec![
                pattern(r"^\s+", skip_handler),
                pattern(r"^//[^\n]*", skip_handler),
                pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*:", keyword_handler),
                pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*", name_handler),
                pattern(r"^[0-9]+", number_handler),
                pattern(r"^[-+*/%<>=!&|^~?@$\\]+", operator_handler),
                pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
                pattern(r"^\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
                pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
                pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(")),
                pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")")),
                pattern(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::LeftBrace, "{")),
                pattern(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::RightBrace, "}")),
            ]),
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The character under the cursor, if any.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn push_matched(&mut self, kind: TokenKind, regex: &Regex) {
        let value = self.matched(regex);
        let span = self.span_of(value.len());
        let len = value.len();

        self.push(MK_TOKEN!(kind, value, span));
        self.advance_n(len);
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let len = lexer.matched(regex).len();
    lexer.advance_n(len);
}

fn keyword_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_matched(TokenKind::Keyword, regex);
}

fn name_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_matched(TokenKind::Name, regex);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_matched(TokenKind::Number, regex);
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_matched(TokenKind::Operator, regex);
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let patterns = Rc::clone(&lex.patterns);

    while !lex.at_eof() {
        let pattern = patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());

    Ok(lex.tokens)
}
