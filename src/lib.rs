#![allow(clippy::module_inception)]

use std::fmt::Display;

use tracing::info;

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A line/column pair inside the source buffer. Lines are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexes and parses a whole source buffer into a `Program` tree.
pub fn compile_source(source: &str) -> Result<Ast, Error> {
    let tokens = tokenize(source)?;
    info!(tokens = tokens.len(), "tokenized source");

    let program = parse(tokens)?;
    info!(declarations = program.children().len(), "parsed program");

    Ok(program)
}

/// Returns the 1-based line number and the text of that line.
pub fn get_line_at_position(source: &str, line: usize) -> Option<(usize, String)> {
    source
        .split_inclusive('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| (line, text.to_string()))
}

/// Renders a diagnostic for `error` against the source it came from.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> main.lk
           |
        20 | def int@a: $;
           | -----------^
    */

    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some((_, line_text)) = get_line_at_position(source, position.line) {
        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = position.column.saturating_sub(removed_whitespace).max(1);
        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    for context in error.get_context() {
        out.push_str(&format!("{:>padding$} while {}\n", "=", context));
    }

    out
}

/// Prints the diagnostic produced by [`render_error`] to stderr.
pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
