use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{ast::kinds::NodeKind, Position};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("none", TokenKind::NoneLiteral);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("def", TokenKind::Def);
        map.insert("fn", TokenKind::Fn);
        map.insert("class", TokenKind::Class);
        map.insert("lib", TokenKind::Lib);
        map.insert("use", TokenKind::Use);
        map.insert("import", TokenKind::Import);
        map.insert("namespace", TokenKind::Namespace);
        map.insert("const", TokenKind::Const);
        map.insert("static", TokenKind::Static);
        map.insert("ref", TokenKind::Ref);
        map.insert("private", TokenKind::Private);
        map.insert("public", TokenKind::Public);
        map.insert("int", TokenKind::Int);
        map.insert("uint", TokenKind::Uint);
        map.insert("real", TokenKind::Real);
        map.insert("bool", TokenKind::Bool);
        map.insert("byte", TokenKind::Byte);
        map.insert("char", TokenKind::Char);
        map.insert("str", TokenKind::Str);
        map.insert("array", TokenKind::Array);
        map.insert("ptr", TokenKind::Ptr);
        map
    };

    pub static ref DIRECTIVE_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("#include", TokenKind::Include);
        map.insert("#macro", TokenKind::Macro);
        map.insert("#endmacro", TokenKind::EndMacro);
        map.insert("#def", TokenKind::Define);
        map.insert("#undef", TokenKind::Undefine);
        map.insert("#ifdef", TokenKind::IfDefined);
        map.insert("#ifndef", TokenKind::IfNotDefined);
        map.insert("#endif", TokenKind::EndIf);
        map
    };

    /// Operator spellings, longest first so the first prefix match is the
    /// longest one.
    pub static ref OPERATOR_LOOKUP: Vec<(&'static str, TokenKind)> = {
        let mut operators = vec![
            ("<<=", TokenKind::LeftShiftAssignment),
            (">>=", TokenKind::RightShiftAssignment),
            ("<=>", TokenKind::ThreeWayComparison),
            ("++", TokenKind::Increment),
            ("--", TokenKind::Decrement),
            ("+=", TokenKind::AdditionAssignment),
            ("-=", TokenKind::SubtractionAssignment),
            ("*=", TokenKind::MultiplicationAssignment),
            ("%=", TokenKind::RemainderAssignment),
            ("&=", TokenKind::BitwiseAndAssignment),
            ("|=", TokenKind::BitwiseOrAssignment),
            ("^=", TokenKind::BitwiseXorAssignment),
            ("==", TokenKind::Equal),
            ("!=", TokenKind::NotEqual),
            ("<=", TokenKind::LessThanOrEqual),
            (">=", TokenKind::GreaterThanOrEqual),
            ("&&", TokenKind::LogicalAnd),
            ("||", TokenKind::LogicalOr),
            ("<<", TokenKind::LeftShift),
            (">>", TokenKind::RightShift),
            ("+", TokenKind::Addition),
            ("-", TokenKind::Subtraction),
            ("*", TokenKind::Multiplication),
            ("%", TokenKind::Remainder),
            ("=", TokenKind::SimpleAssignment),
            ("<", TokenKind::LessThan),
            (">", TokenKind::GreaterThan),
            ("!", TokenKind::LogicalNot),
            ("&", TokenKind::BitwiseAnd),
            ("|", TokenKind::BitwiseOr),
            ("^", TokenKind::BitwiseXor),
            ("~", TokenKind::BitwiseNot),
        ];
        operators.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        operators
    };

    static ref EOF_TOKEN: Token = Token {
        kind: TokenKind::Eof,
        literal: String::new(),
        line: 0,
        column: 0,
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    None,
    Invalid,
    Eof,

    Whitespace,
    Newline,
    LineComment,
    BlockComment,

    NumberLiteral,
    DoubleLiteral,
    StringLiteral,
    ByteLiteral,
    BoolLiteral,
    UnsignedLiteral,
    NoneLiteral,
    Identifier,

    Addition,       // +
    Subtraction,    // -
    Multiplication, // *
    Division,       // /
    Remainder,      // %
    Increment,      // ++
    Decrement,      // --
    Negation,       // - in operand position, only produced by the closure buffer

    SimpleAssignment,         // =
    AdditionAssignment,       // +=
    SubtractionAssignment,    // -=
    MultiplicationAssignment, // *=
    DivisionAssignment,       // /=
    RemainderAssignment,      // %=
    BitwiseAndAssignment,     // &=
    BitwiseOrAssignment,      // |=
    BitwiseXorAssignment,     // ^=
    LeftShiftAssignment,      // <<=
    RightShiftAssignment,     // >>=

    Equal,              // ==
    NotEqual,           // !=
    LessThan,           // <
    GreaterThan,        // >
    LessThanOrEqual,    // <=
    GreaterThanOrEqual, // >=
    ThreeWayComparison, // <=>

    LogicalAnd, // &&
    LogicalOr,  // ||
    LogicalNot, // !

    BitwiseAnd, // &
    BitwiseOr,  // |
    BitwiseXor, // ^
    BitwiseNot, // ~
    LeftShift,  // <<
    RightShift, // >>

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,

    Semicolon,
    Colon,
    DoubleColon,
    Comma,
    Period,
    Ellipsis,
    CommercialAt,

    // Reserved
    If,
    Elif,
    Else,
    While,
    For,
    Return,
    Break,
    Continue,
    Def,
    Fn,
    Class,
    Lib,
    Use,
    Import,
    Namespace,

    // Modifiers
    Const,
    Static,
    Ref,
    Private,
    Public,

    // Built-in types
    Int,
    Uint,
    Real,
    Bool,
    Byte,
    Char,
    Str,
    Array,
    Ptr,

    // Directives
    Include,
    Macro,
    EndMacro,
    Define,
    Undefine,
    IfDefined,
    IfNotDefined,
    EndIf,
}

/// How operators of equal priority group.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Assoc {
    None,
    Left,
    Right,
}

/// How many operands an operator takes and where they sit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    None,
    Prefix,
    Binary,
    Postfix,
}

/// Binding strength, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Priority {
    None,
    Assignment,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Comparison,
    ThreeWay,
    Shift,
    Term,
    Factor,
    Prefix,
    Postfix,
    Access,
    Max,
}

impl TokenKind {
    pub fn node_kind(&self) -> NodeKind {
        use TokenKind as T;
        match self {
            T::NumberLiteral => NodeKind::NumberLiteral,
            T::DoubleLiteral => NodeKind::DoubleLiteral,
            T::StringLiteral => NodeKind::StringLiteral,
            T::ByteLiteral => NodeKind::ByteLiteral,
            T::BoolLiteral => NodeKind::BoolLiteral,
            T::UnsignedLiteral => NodeKind::UnsignedLiteral,
            T::NoneLiteral => NodeKind::NoneLiteral,
            T::Identifier => NodeKind::Identifier,

            T::Addition => NodeKind::Addition,
            T::Subtraction => NodeKind::Subtraction,
            T::Multiplication => NodeKind::Multiplication,
            T::Division => NodeKind::Division,
            T::Remainder => NodeKind::Remainder,
            T::Increment => NodeKind::Increment,
            T::Decrement => NodeKind::Decrement,
            T::Negation => NodeKind::Negation,

            T::SimpleAssignment => NodeKind::SimpleAssignment,
            T::AdditionAssignment => NodeKind::AdditionAssignment,
            T::SubtractionAssignment => NodeKind::SubtractionAssignment,
            T::MultiplicationAssignment => NodeKind::MultiplicationAssignment,
            T::DivisionAssignment => NodeKind::DivisionAssignment,
            T::RemainderAssignment => NodeKind::RemainderAssignment,
            T::BitwiseAndAssignment => NodeKind::BitwiseAndAssignment,
            T::BitwiseOrAssignment => NodeKind::BitwiseOrAssignment,
            T::BitwiseXorAssignment => NodeKind::BitwiseXorAssignment,
            T::LeftShiftAssignment => NodeKind::LeftShiftAssignment,
            T::RightShiftAssignment => NodeKind::RightShiftAssignment,

            T::Equal => NodeKind::Equal,
            T::NotEqual => NodeKind::NotEqual,
            T::LessThan => NodeKind::LessThan,
            T::GreaterThan => NodeKind::GreaterThan,
            T::LessThanOrEqual => NodeKind::LessThanOrEqual,
            T::GreaterThanOrEqual => NodeKind::GreaterThanOrEqual,
            T::ThreeWayComparison => NodeKind::ThreeWayComparison,

            T::LogicalAnd => NodeKind::LogicalAnd,
            T::LogicalOr => NodeKind::LogicalOr,
            T::LogicalNot => NodeKind::LogicalNot,

            T::BitwiseAnd => NodeKind::BitwiseAnd,
            T::BitwiseOr => NodeKind::BitwiseOr,
            T::BitwiseXor => NodeKind::BitwiseXor,
            T::BitwiseNot => NodeKind::BitwiseNot,
            T::LeftShift => NodeKind::LeftShift,
            T::RightShift => NodeKind::RightShift,

            T::OpenParen => NodeKind::FunctionCall,
            T::OpenBracket => NodeKind::IndexOperator,
            T::OpenBrace => NodeKind::ListingOperator,

            T::Period => NodeKind::Period,
            T::DoubleColon => NodeKind::DoubleColon,
            T::Ellipsis => NodeKind::Ellipsis,

            T::If => NodeKind::IfStatement,
            T::Elif => NodeKind::ElifStatement,
            T::Else => NodeKind::ElseStatement,
            T::While => NodeKind::WhileStatement,
            T::For => NodeKind::ForStatement,
            T::Return => NodeKind::ReturnStatement,
            T::Break => NodeKind::BreakStatement,
            T::Continue => NodeKind::ContinueStatement,
            T::Def => NodeKind::VariableDeclaration,
            T::Fn => NodeKind::MethodDeclaration,
            T::Class => NodeKind::ClassDeclaration,
            T::Lib => NodeKind::LibraryDeclaration,
            T::Import => NodeKind::ImportDeclaration,
            T::Include => NodeKind::IncludeDirective,

            T::Const => NodeKind::Const,
            T::Static => NodeKind::Static,
            T::Ref => NodeKind::Ref,
            T::Private => NodeKind::Private,
            T::Public => NodeKind::Public,

            T::Int => NodeKind::Int,
            T::Uint => NodeKind::Uint,
            T::Real => NodeKind::Real,
            T::Bool => NodeKind::Bool,
            T::Byte => NodeKind::Byte,
            T::Char => NodeKind::Char,
            T::Str => NodeKind::Str,
            T::Array => NodeKind::Array,
            T::Ptr => NodeKind::Ptr,

            T::None
            | T::Invalid
            | T::Eof
            | T::Whitespace
            | T::Newline
            | T::LineComment
            | T::BlockComment
            | T::CloseParen
            | T::CloseBrace
            | T::CloseBracket
            | T::Semicolon
            | T::Colon
            | T::Comma
            | T::CommercialAt
            | T::Use
            | T::Namespace
            | T::Macro
            | T::EndMacro
            | T::Define
            | T::Undefine
            | T::IfDefined
            | T::IfNotDefined
            | T::EndIf => NodeKind::Invalid,
        }
    }

    pub fn assoc(&self) -> Assoc {
        use TokenKind as T;
        match self.operation() {
            Operation::Prefix => Assoc::Right,
            Operation::Postfix => Assoc::Left,
            Operation::Binary => match self {
                T::SimpleAssignment
                | T::AdditionAssignment
                | T::SubtractionAssignment
                | T::MultiplicationAssignment
                | T::DivisionAssignment
                | T::RemainderAssignment
                | T::BitwiseAndAssignment
                | T::BitwiseOrAssignment
                | T::BitwiseXorAssignment
                | T::LeftShiftAssignment
                | T::RightShiftAssignment => Assoc::Right,
                _ => Assoc::Left,
            },
            Operation::None => Assoc::None,
        }
    }

    pub fn operation(&self) -> Operation {
        use TokenKind as T;
        match self {
            T::LogicalNot | T::BitwiseNot | T::Negation => Operation::Prefix,
            T::Increment | T::Decrement => Operation::Postfix,
            T::OpenParen | T::OpenBracket | T::OpenBrace => Operation::Postfix,
            T::Addition
            | T::Subtraction
            | T::Multiplication
            | T::Division
            | T::Remainder
            | T::SimpleAssignment
            | T::AdditionAssignment
            | T::SubtractionAssignment
            | T::MultiplicationAssignment
            | T::DivisionAssignment
            | T::RemainderAssignment
            | T::BitwiseAndAssignment
            | T::BitwiseOrAssignment
            | T::BitwiseXorAssignment
            | T::LeftShiftAssignment
            | T::RightShiftAssignment
            | T::Equal
            | T::NotEqual
            | T::LessThan
            | T::GreaterThan
            | T::LessThanOrEqual
            | T::GreaterThanOrEqual
            | T::ThreeWayComparison
            | T::LogicalAnd
            | T::LogicalOr
            | T::BitwiseAnd
            | T::BitwiseOr
            | T::BitwiseXor
            | T::LeftShift
            | T::RightShift
            | T::Period
            | T::DoubleColon => Operation::Binary,
            _ => Operation::None,
        }
    }

    pub fn priority(&self) -> Priority {
        use TokenKind as T;
        match self {
            T::SimpleAssignment
            | T::AdditionAssignment
            | T::SubtractionAssignment
            | T::MultiplicationAssignment
            | T::DivisionAssignment
            | T::RemainderAssignment
            | T::BitwiseAndAssignment
            | T::BitwiseOrAssignment
            | T::BitwiseXorAssignment
            | T::LeftShiftAssignment
            | T::RightShiftAssignment => Priority::Assignment,
            T::LogicalOr => Priority::LogicalOr,
            T::LogicalAnd => Priority::LogicalAnd,
            T::BitwiseOr => Priority::BitwiseOr,
            T::BitwiseXor => Priority::BitwiseXor,
            T::BitwiseAnd => Priority::BitwiseAnd,
            T::Equal | T::NotEqual => Priority::Equality,
            T::LessThan | T::GreaterThan | T::LessThanOrEqual | T::GreaterThanOrEqual => {
                Priority::Comparison
            }
            T::ThreeWayComparison => Priority::ThreeWay,
            T::LeftShift | T::RightShift => Priority::Shift,
            T::Addition | T::Subtraction => Priority::Term,
            T::Multiplication | T::Division | T::Remainder => Priority::Factor,
            T::LogicalNot | T::BitwiseNot | T::Negation => Priority::Prefix,
            T::Increment | T::Decrement => Priority::Postfix,
            T::OpenParen | T::OpenBracket | T::OpenBrace => Priority::Postfix,
            T::Period | T::DoubleColon => Priority::Access,
            _ if self.is_singular_operand() || self.is_keyword() => Priority::Max,
            _ => Priority::None,
        }
    }

    /// The source spelling of the kind, or a description for kinds without a
    /// fixed spelling. Used in diagnostics.
    pub fn spelling(&self) -> &'static str {
        use TokenKind as T;
        match self {
            T::None => "none-token",
            T::Invalid => "invalid token",
            T::Eof => "end of input",
            T::Whitespace => "whitespace",
            T::Newline => "newline",
            T::LineComment => "line comment",
            T::BlockComment => "block comment",
            T::NumberLiteral => "number literal",
            T::DoubleLiteral => "double literal",
            T::StringLiteral => "string literal",
            T::ByteLiteral => "byte literal",
            T::BoolLiteral => "bool literal",
            T::UnsignedLiteral => "unsigned literal",
            T::NoneLiteral => "none",
            T::Identifier => "identifier",
            T::Addition => "+",
            T::Subtraction => "-",
            T::Multiplication => "*",
            T::Division => "/",
            T::Remainder => "%",
            T::Increment => "++",
            T::Decrement => "--",
            T::Negation => "-",
            T::SimpleAssignment => "=",
            T::AdditionAssignment => "+=",
            T::SubtractionAssignment => "-=",
            T::MultiplicationAssignment => "*=",
            T::DivisionAssignment => "/=",
            T::RemainderAssignment => "%=",
            T::BitwiseAndAssignment => "&=",
            T::BitwiseOrAssignment => "|=",
            T::BitwiseXorAssignment => "^=",
            T::LeftShiftAssignment => "<<=",
            T::RightShiftAssignment => ">>=",
            T::Equal => "==",
            T::NotEqual => "!=",
            T::LessThan => "<",
            T::GreaterThan => ">",
            T::LessThanOrEqual => "<=",
            T::GreaterThanOrEqual => ">=",
            T::ThreeWayComparison => "<=>",
            T::LogicalAnd => "&&",
            T::LogicalOr => "||",
            T::LogicalNot => "!",
            T::BitwiseAnd => "&",
            T::BitwiseOr => "|",
            T::BitwiseXor => "^",
            T::BitwiseNot => "~",
            T::LeftShift => "<<",
            T::RightShift => ">>",
            T::OpenParen => "(",
            T::CloseParen => ")",
            T::OpenBrace => "{",
            T::CloseBrace => "}",
            T::OpenBracket => "[",
            T::CloseBracket => "]",
            T::Semicolon => ";",
            T::Colon => ":",
            T::DoubleColon => "::",
            T::Comma => ",",
            T::Period => ".",
            T::Ellipsis => "...",
            T::CommercialAt => "@",
            T::If => "if",
            T::Elif => "elif",
            T::Else => "else",
            T::While => "while",
            T::For => "for",
            T::Return => "return",
            T::Break => "break",
            T::Continue => "continue",
            T::Def => "def",
            T::Fn => "fn",
            T::Class => "class",
            T::Lib => "lib",
            T::Use => "use",
            T::Import => "import",
            T::Namespace => "namespace",
            T::Const => "const",
            T::Static => "static",
            T::Ref => "ref",
            T::Private => "private",
            T::Public => "public",
            T::Int => "int",
            T::Uint => "uint",
            T::Real => "real",
            T::Bool => "bool",
            T::Byte => "byte",
            T::Char => "char",
            T::Str => "str",
            T::Array => "array",
            T::Ptr => "ptr",
            T::Include => "#include",
            T::Macro => "#macro",
            T::EndMacro => "#endmacro",
            T::Define => "#def",
            T::Undefine => "#undef",
            T::IfDefined => "#ifdef",
            T::IfNotDefined => "#ifndef",
            T::EndIf => "#endif",
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.is_modifier_keyword()
            || self.is_declarative_keyword()
            || self.is_type_keyword()
            || matches!(
                self,
                TokenKind::If
                    | TokenKind::Elif
                    | TokenKind::Else
                    | TokenKind::While
                    | TokenKind::For
                    | TokenKind::Return
                    | TokenKind::Break
                    | TokenKind::Continue
                    | TokenKind::Namespace
                    | TokenKind::NoneLiteral
            )
    }

    pub fn is_modifier_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Const
                | TokenKind::Static
                | TokenKind::Ref
                | TokenKind::Private
                | TokenKind::Public
        )
    }

    pub fn is_declarative_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Def
                | TokenKind::Fn
                | TokenKind::Class
                | TokenKind::Lib
                | TokenKind::Use
                | TokenKind::Import
        )
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Uint
                | TokenKind::Real
                | TokenKind::Bool
                | TokenKind::Byte
                | TokenKind::Char
                | TokenKind::Str
                | TokenKind::Array
                | TokenKind::Ptr
        )
    }

    pub fn is_directive(&self) -> bool {
        matches!(
            self,
            TokenKind::Include
                | TokenKind::Macro
                | TokenKind::EndMacro
                | TokenKind::Define
                | TokenKind::Undefine
                | TokenKind::IfDefined
                | TokenKind::IfNotDefined
                | TokenKind::EndIf
        )
    }

    /// Kinds the lexer produces internally but drops from its output.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    pub fn is_opening_scope(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen | TokenKind::OpenBrace | TokenKind::OpenBracket
        )
    }

    pub fn is_closing_scope(&self) -> bool {
        matches!(
            self,
            TokenKind::CloseParen | TokenKind::CloseBrace | TokenKind::CloseBracket
        )
    }

    /// The closer matching an opening delimiter.
    pub fn closer(&self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            TokenKind::OpenBrace => Some(TokenKind::CloseBrace),
            TokenKind::OpenBracket => Some(TokenKind::CloseBracket),
            _ => None,
        }
    }

    /// A token that is a complete operand on its own.
    pub fn is_singular_operand(&self) -> bool {
        self.is_type_keyword()
            || matches!(
                self,
                TokenKind::NumberLiteral
                    | TokenKind::DoubleLiteral
                    | TokenKind::StringLiteral
                    | TokenKind::ByteLiteral
                    | TokenKind::BoolLiteral
                    | TokenKind::UnsignedLiteral
                    | TokenKind::NoneLiteral
                    | TokenKind::Identifier
            )
    }

    pub fn is_singular_prefix_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::LogicalNot | TokenKind::BitwiseNot | TokenKind::Negation
        )
    }

    /// A token that may begin a primary expression.
    pub fn is_primary_opening(&self) -> bool {
        self.is_singular_operand()
            || self.is_singular_prefix_operator()
            || matches!(self, TokenKind::OpenParen | TokenKind::Subtraction)
    }

    pub fn is_numeric_literal(&self) -> bool {
        matches!(self, TokenKind::NumberLiteral | TokenKind::DoubleLiteral)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} ({}:{})",
            self.kind, self.literal, self.line, self.column
        )
    }
}

impl Token {
    /// The synthetic end-of-file token returned for out-of-range reads.
    pub fn eof() -> &'static Token {
        &EOF_TOKEN
    }

    /// A token that did not come from the source, placed at `position`.
    pub fn synthetic(kind: TokenKind, literal: &str, position: Position) -> Token {
        Token {
            kind,
            literal: literal.to_string(),
            line: position.line,
            column: position.column,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The literal for literal-carrying kinds, the spelling otherwise.
    pub fn describe(&self) -> &str {
        if self.literal.is_empty() {
            self.kind.spelling()
        } else {
            &self.literal
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn node_kind(&self) -> NodeKind {
        self.kind.node_kind()
    }

    pub fn priority(&self) -> Priority {
        self.kind.priority()
    }

    pub fn operation(&self) -> Operation {
        self.kind.operation()
    }

    pub fn assoc(&self) -> Assoc {
        self.kind.assoc()
    }
}
