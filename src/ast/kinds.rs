use std::fmt::Display;

/// Node Kinds
///
/// Every kind of node the parser can produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeKind {
    Invalid,
    Program,

    // Literals and operands
    NumberLiteral,
    DoubleLiteral,
    StringLiteral,
    ByteLiteral,
    BoolLiteral,
    UnsignedLiteral,
    NoneLiteral,
    Identifier,

    // Arithmetic
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Increment,
    Decrement,
    Negation,

    // Assignment
    SimpleAssignment,
    AdditionAssignment,
    SubtractionAssignment,
    MultiplicationAssignment,
    DivisionAssignment,
    RemainderAssignment,
    BitwiseAndAssignment,
    BitwiseOrAssignment,
    BitwiseXorAssignment,
    LeftShiftAssignment,
    RightShiftAssignment,

    // Comparison and logic
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    ThreeWayComparison,
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    LeftShift,
    RightShift,

    // Access and application
    Period,
    DoubleColon,
    Ellipsis,
    FunctionCall,
    IndexOperator,
    ListingOperator,
    Arguments,

    // Modifiers
    Modifiers,
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

    // Declarations
    Type,
    VariableDeclaration,
    VariableDefinition,
    MethodDeclaration,
    MethodSignature,
    MethodParameters,
    MethodParameter,
    MethodReturnType,
    MethodDefinition,
    ClassDeclaration,
    ClassDefinition,
    LibraryDeclaration,
    LibraryDefinition,
    TypeAlias,
    LibraryAlias,
    LibraryInclusion,
    NamespaceInclusion,
    ImportDeclaration,
    IncludeDirective,

    // Statements
    ExpressionStatement,
    ConditionalStatement,
    IfStatement,
    ElifStatement,
    ElseStatement,
    Condition,
    Block,
    WhileStatement,
    ForStatement,
    ForInit,
    ForIncrement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
}

impl NodeKind {
    /// True for the kinds a top level or class body may hold.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::VariableDeclaration
                | NodeKind::MethodDeclaration
                | NodeKind::ClassDeclaration
                | NodeKind::LibraryDeclaration
                | NodeKind::TypeAlias
                | NodeKind::LibraryAlias
                | NodeKind::LibraryInclusion
                | NodeKind::NamespaceInclusion
                | NodeKind::ImportDeclaration
                | NodeKind::IncludeDirective
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
