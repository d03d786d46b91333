use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    /// Descriptions added by enclosing parse functions, innermost first.
    context: Vec<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context: Vec::new(),
        }
    }

    /// Wraps the error with a description of the enclosing operation.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    /// True when the failure is an invariant violation inside the parser
    /// rather than a mistake in the user's source.
    pub fn is_logic_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::ProgrammerLogic { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::MismatchedDelimiter { .. } => "MismatchedDelimiter",
            ErrorImpl::UnclosedScope { .. } => "UnclosedScope",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidPrimaryToken { .. } => "InvalidPrimaryToken",
            ErrorImpl::OperatorFollowingOperator { .. } => "OperatorFollowingOperator",
            ErrorImpl::PrefixFollowingOperand { .. } => "PrefixFollowingOperand",
            ErrorImpl::OperandFollowingOperand { .. } => "OperandFollowingOperand",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::UnsupportedDirective { .. } => "UnsupportedDirective",
            ErrorImpl::ProgrammerLogic { .. } => "ProgrammerLogic",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedLiteral { .. } => ErrorTip::Suggestion(String::from(
                "did you forget the closing delimiter?",
            )),
            ErrorImpl::MalformedNumber { literal, .. } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, valid suffixes are `u` and `c`",
                literal
            )),
            ErrorImpl::MismatchedDelimiter { expected, found, .. } => {
                ErrorTip::Suggestion(format!("Expected `{}` but found `{}`", expected, found))
            }
            ErrorImpl::UnclosedScope { open } => {
                ErrorTip::Suggestion(format!("`{}` is never closed", open))
            }
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::InvalidPrimaryToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot appear in an expression",
                token
            )),
            ErrorImpl::OperatorFollowingOperator { token } => ErrorTip::Suggestion(format!(
                "Operator `{}` is missing its left operand",
                token
            )),
            ErrorImpl::PrefixFollowingOperand { token } => ErrorTip::Suggestion(format!(
                "Prefix operator `{}` follows an operand, did you miss an operator?",
                token
            )),
            ErrorImpl::OperandFollowingOperand { token } => ErrorTip::Suggestion(format!(
                "Unexpected operand `{}`, did you miss an operator or a semicolon?",
                token
            )),
            ErrorImpl::MissingOperand { token } => {
                ErrorTip::Suggestion(format!("Operator `{}` is missing its right operand", token))
            }
            ErrorImpl::EmptyExpression => ErrorTip::None,
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::InvalidStatement { message, .. } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnsupportedDirective { directive } => ErrorTip::Suggestion(format!(
                "`{}` is lexed but cannot appear here",
                directive
            )),
            ErrorImpl::ProgrammerLogic { file, line, .. } => ErrorTip::Suggestion(format!(
                "This is a bug in the compiler (raised at {}:{})",
                file, line
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)?;
        for context in &self.context {
            write!(f, "\n  while {}", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}: {detail}")]
    UnrecognisedCharacter { character: char, detail: String },
    #[error("unterminated literal starting with {character:?}: {detail}")]
    UnterminatedLiteral { character: char, detail: String },
    #[error("malformed numeric literal {literal:?}: unexpected {character:?}")]
    MalformedNumber { character: char, literal: String },
    #[error("mismatched delimiter: expected `{expected}` to close the scope opened at {open}, found `{found}`")]
    MismatchedDelimiter {
        expected: String,
        found: String,
        open: Position,
    },
    #[error("unclosed scope: `{open}` is never closed")]
    UnclosedScope { open: String },
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },
    #[error("invalid token in primary expression: `{token}`")]
    InvalidPrimaryToken { token: String },
    #[error("operator `{token}` follows another operator")]
    OperatorFollowingOperator { token: String },
    #[error("prefix operator `{token}` follows an operand")]
    PrefixFollowingOperand { token: String },
    #[error("operand `{token}` follows another operand")]
    OperandFollowingOperand { token: String },
    #[error("expected an operand after `{token}`")]
    MissingOperand { token: String },
    #[error("expected an expression")]
    EmptyExpression,
    #[error("unexpected trailing token `{token}` after expression")]
    TrailingTokens { token: String },
    #[error("invalid statement at `{token}`: {message}")]
    InvalidStatement { token: String, message: String },
    #[error("directive `{directive}` is not supported here")]
    UnsupportedDirective { directive: String },
    #[error("parser invariant violated: {detail} ({file}:{line})")]
    ProgrammerLogic {
        detail: String,
        file: &'static str,
        line: u32,
    },
}
