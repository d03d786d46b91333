use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_FIXED_LEXER, MK_TOKEN,
};

use super::{
    chars::{is_alnum, is_newline, is_symbol, is_whitespace},
    tokens::{Token, TokenKind, DIRECTIVE_LOOKUP, OPERATOR_LOOKUP, RESERVED_LOOKUP},
};

lazy_static! {
    static ref WORD: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref DIRECTIVE: Regex = Regex::new("^#[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref DIGITS: Regex = Regex::new("^[0-9]+").unwrap();
    static ref DOUBLE: Regex = Regex::new("^[0-9]+\\.[0-9]+").unwrap();
}

/// What a sub-lexer recognised at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub len: usize,
}

pub type SubLexer = fn(&Lexer) -> Result<Option<Lexeme>, Error>;

#[derive(Clone)]
pub struct SubLexerEntry {
    name: &'static str,
    lex: SubLexer,
}

#[derive(Clone)]
pub struct Lexer {
    sub_lexers: Vec<SubLexerEntry>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            column: 0,
            tokens: vec![],
            // Order matters: keywords before identifiers, suffixed numbers
            // before plain numbers, comments before the division operator.
            sub_lexers: vec![
                SubLexerEntry { name: "comment", lex: lex_comment_or_division },
                SubLexerEntry { name: "string", lex: lex_quoted_literal },
                SubLexerEntry { name: "newline", lex: lex_newline },
                SubLexerEntry { name: "whitespace", lex: lex_whitespace },
                SubLexerEntry { name: "eof", lex: lex_eof },
                SubLexerEntry { name: "keyword", lex: lex_keyword },
                SubLexerEntry { name: "directive", lex: lex_directive },
                SubLexerEntry { name: "number", lex: lex_numeric_literal },
                SubLexerEntry { name: "identifier", lex: lex_identifier },
                SubLexerEntry { name: "operator", lex: lex_operator },
                SubLexerEntry { name: "delimiter", lex: lex_delimiter },
                SubLexerEntry { name: "semicolon", lex: MK_FIXED_LEXER!(TokenKind::Semicolon, ";") },
                SubLexerEntry { name: "colon", lex: lex_colon },
                SubLexerEntry { name: "comma", lex: MK_FIXED_LEXER!(TokenKind::Comma, ",") },
                SubLexerEntry { name: "period", lex: lex_period },
                SubLexerEntry { name: "at", lex: MK_FIXED_LEXER!(TokenKind::CommercialAt, "@") },
            ],
            source: source.to_string(),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len() || self.at(0) == Some(0)
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column + 1)
    }

    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.position())
    }

    fn current_char(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    fn next_lexeme(&self) -> Result<Option<Lexeme>, Error> {
        for entry in self.sub_lexers.iter() {
            if let Some(lexeme) = (entry.lex)(self)? {
                trace!(sub_lexer = entry.name, kind = %lexeme.kind, len = lexeme.len, "matched");
                return Ok(Some(lexeme));
            }
        }

        Ok(None)
    }

    /// Consumes the lexeme and records its token, moving the line/column
    /// counters past every character of its literal.
    fn push(&mut self, lexeme: Lexeme) {
        let literal = self.source[self.pos..self.pos + lexeme.len].to_string();

        for c in literal.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        self.pos += lexeme.len;
        self.tokens
            .push(MK_TOKEN!(lexeme.kind, literal, self.line, self.column));
    }
}

fn lex_comment_or_division(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let rest = lexer.remainder();

    if let Some(body) = rest.strip_prefix("///") {
        return match body.find("///") {
            Some(end) => Ok(Some(Lexeme { kind: TokenKind::BlockComment, len: end + 6 })),
            None => Err(lexer.error(ErrorImpl::UnterminatedLiteral {
                character: '/',
                detail: String::from("block comment is never closed with `///`"),
            })),
        };
    }

    if rest.starts_with("//") {
        let len = rest
            .bytes()
            .position(|b| is_newline(b) || b == 0)
            .unwrap_or(rest.len());
        return Ok(Some(Lexeme { kind: TokenKind::LineComment, len }));
    }

    if rest.starts_with("/=") {
        Ok(Some(Lexeme { kind: TokenKind::DivisionAssignment, len: 2 }))
    } else if rest.starts_with('/') {
        Ok(Some(Lexeme { kind: TokenKind::Division, len: 1 }))
    } else {
        Ok(None)
    }
}

fn lex_quoted_literal(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let bytes = lexer.remainder().as_bytes();
    let quote = match bytes.first() {
        Some(&q) if q == b'"' || q == b'\'' => q,
        _ => return Ok(None),
    };

    let mut index = 1;
    loop {
        match bytes.get(index) {
            None | Some(0) => {
                return Err(lexer.error(ErrorImpl::UnterminatedLiteral {
                    character: quote as char,
                    detail: format!("no closing `{}` before end of input", quote as char),
                }))
            }
            // An escaped character never closes the literal.
            Some(b'\\') => index += 2,
            Some(&b) if b == quote => break,
            Some(_) => index += 1,
        }
    }

    let len = index + 1;
    if bytes.get(len) == Some(&b'c') {
        Ok(Some(Lexeme { kind: TokenKind::ByteLiteral, len: len + 1 }))
    } else {
        Ok(Some(Lexeme { kind: TokenKind::StringLiteral, len }))
    }
}

fn lex_newline(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    match lexer.at(0) {
        Some(c) if is_newline(c) => Ok(Some(Lexeme { kind: TokenKind::Newline, len: 1 })),
        _ => Ok(None),
    }
}

fn lex_whitespace(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let len = lexer
        .remainder()
        .bytes()
        .take_while(|b| is_whitespace(*b))
        .count();

    if len == 0 {
        Ok(None)
    } else {
        Ok(Some(Lexeme { kind: TokenKind::Whitespace, len }))
    }
}

fn lex_eof(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    if lexer.at_eof() {
        Ok(Some(Lexeme { kind: TokenKind::Eof, len: 0 }))
    } else {
        Ok(None)
    }
}

fn lex_keyword(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    Ok(WORD.find(lexer.remainder()).and_then(|word| {
        RESERVED_LOOKUP.get(word.as_str()).map(|kind| Lexeme {
            kind: *kind,
            len: word.len(),
        })
    }))
}

fn lex_directive(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    Ok(DIRECTIVE.find(lexer.remainder()).and_then(|word| {
        DIRECTIVE_LOOKUP.get(word.as_str()).map(|kind| Lexeme {
            kind: *kind,
            len: word.len(),
        })
    }))
}

fn lex_numeric_literal(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let rest = lexer.remainder();
    let digits = match DIGITS.find(rest) {
        Some(found) => found.end(),
        None => return Ok(None),
    };
    let bytes = rest.as_bytes();

    // `0b` and `1b` are the two boolean literals.
    if digits == 1
        && bytes[1..].starts_with(b"b")
        && (bytes[0] == b'0' || bytes[0] == b'1')
        && !bytes.get(2).is_some_and(|b| is_alnum(*b))
    {
        return Ok(Some(Lexeme { kind: TokenKind::BoolLiteral, len: 2 }));
    }

    let (kind, len) = match bytes.get(digits) {
        Some(b'u') => (TokenKind::UnsignedLiteral, digits + 1),
        Some(b'c') => (TokenKind::ByteLiteral, digits + 1),
        // `1...` is a number followed by an ellipsis, not a decimal point.
        Some(b'.') if !rest[digits..].starts_with("...") => match DOUBLE.find(rest) {
            Some(double) => (TokenKind::DoubleLiteral, double.end()),
            None => (TokenKind::NumberLiteral, digits),
        },
        _ => (TokenKind::NumberLiteral, digits),
    };

    if let Some(&next) = bytes.get(len) {
        if is_alnum(next) {
            return Err(lexer.error(ErrorImpl::MalformedNumber {
                character: next as char,
                literal: rest[..=len].to_string(),
            }));
        }
    }

    Ok(Some(Lexeme { kind, len }))
}

fn lex_identifier(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    Ok(WORD.find(lexer.remainder()).map(|word| Lexeme {
        kind: TokenKind::Identifier,
        len: word.len(),
    }))
}

fn lex_operator(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    if !lexer.at(0).is_some_and(is_symbol) {
        return Ok(None);
    }

    let rest = lexer.remainder();
    Ok(OPERATOR_LOOKUP
        .iter()
        .find(|(spelling, _)| rest.starts_with(spelling))
        .map(|(spelling, kind)| Lexeme {
            kind: *kind,
            len: spelling.len(),
        }))
}

fn lex_delimiter(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let kind = match lexer.at(0) {
        Some(b'(') => TokenKind::OpenParen,
        Some(b')') => TokenKind::CloseParen,
        Some(b'[') => TokenKind::OpenBracket,
        Some(b']') => TokenKind::CloseBracket,
        Some(b'{') => TokenKind::OpenBrace,
        Some(b'}') => TokenKind::CloseBrace,
        _ => return Ok(None),
    };

    Ok(Some(Lexeme { kind, len: 1 }))
}

fn lex_colon(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let rest = lexer.remainder();
    if rest.starts_with("::") {
        Ok(Some(Lexeme { kind: TokenKind::DoubleColon, len: 2 }))
    } else if rest.starts_with(':') {
        Ok(Some(Lexeme { kind: TokenKind::Colon, len: 1 }))
    } else {
        Ok(None)
    }
}

fn lex_period(lexer: &Lexer) -> Result<Option<Lexeme>, Error> {
    let rest = lexer.remainder();
    if rest.starts_with("...") {
        Ok(Some(Lexeme { kind: TokenKind::Ellipsis, len: 3 }))
    } else if rest.starts_with('.') {
        Ok(Some(Lexeme { kind: TokenKind::Period, len: 1 }))
    } else {
        Ok(None)
    }
}

/// Lexes the whole buffer, keeping whitespace, newline and comment tokens.
///
/// Concatenating the literals of the returned tokens reproduces the source up
/// to the end of file (the end of the buffer or the first NUL byte).
pub fn tokenize_with_trivia(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    loop {
        match lex.next_lexeme()? {
            Some(lexeme) => {
                let kind = lexeme.kind;
                lex.push(lexeme);
                if kind == TokenKind::Eof {
                    break;
                }
            }
            None => {
                return Err(lex.error(ErrorImpl::UnrecognisedCharacter {
                    character: lex.current_char(),
                    detail: String::from("no lexing rule matches this character"),
                }));
            }
        }
    }

    Ok(lex.tokens)
}

/// Lexes the whole buffer. The result ends with a single `Eof` token and
/// contains no whitespace, newline or comment tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = tokenize_with_trivia(source)?;
    tokens.retain(|token| !token.kind.is_trivia());
    Ok(tokens)
}
