use crate::lexer::tokens::{Token, TokenKind};

use super::{
    declarations::{
        EnumerationTypeDecl, FunctionDecl, NamespaceDecl, SymbolDecl, TypeDecl, ValueDecl,
    },
    statements::{
        AssertStmt, AssignmentStmt, CallStmt, CheckStmt, IfStmt, MatchStmt, RaiseStmt,
        RepeatForStmt, RepeatUntilStmt, RepeatWhileStmt, ReturnStmt, UnlessStmt,
    },
};

/// Every node remembers the token it starts at, for position reporting.
pub trait Node {
    fn first_token(&self) -> &Token;
}

/// Declarations and statements, which may carry annotations around their tag.
pub trait CodeElementNode: Node {
    fn leading_annotations(&self) -> &[Annotation];
    fn trailing_annotations(&self) -> &[Annotation];
}

/// Metadata attached before a code element or after a `:`.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// A `/** ... */` documentation comment.
    Documentation(Token),
    /// A bare name such as `exported`.
    Named(Token),
}

impl Annotation {
    pub fn token(&self) -> &Token {
        match self {
            Annotation::Documentation(token) | Annotation::Named(token) => token,
        }
    }

    pub fn text(&self) -> &str {
        &self.token().text
    }
}

/// A dotted name such as `a.b.c`. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    entries: Vec<Token>,
}

pub type CodeElementName = Path;

impl Path {
    pub fn new(first: Token) -> Self {
        Path { entries: vec![first] }
    }

    /// Returns a new path with `entry` appended.
    pub fn extend_path(&self, entry: Token) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Path { entries }
    }

    pub fn entries(&self) -> &[Token] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last(&self) -> &Token {
        &self.entries[self.entries.len() - 1]
    }

    /// The dotted source spelling, e.g. `"a.b.c"`.
    pub fn joined(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Node for Path {
    fn first_token(&self) -> &Token {
        &self.entries[0]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UseDeclaration {
    pub first_token: Token,
    pub path: Path,
    pub synonym: Option<Token>,
}

impl Node for UseDeclaration {
    fn first_token(&self) -> &Token {
        &self.first_token
    }
}

/// The parse root.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub use_declarations: Vec<UseDeclaration>,
    pub code_elements: Vec<CodeElement>,
    pub eof: Token,
}

impl CompilationUnit {
    /// The first top-level element. `parse` guarantees there is exactly one.
    pub fn code_element(&self) -> Option<&CodeElement> {
        self.code_elements.first()
    }
}

/// Code element types, one per parser plugin.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CodeElementType {
    Module,
    Package,
    Function,
    Behavior,
    Constant,
    Value,
    Variable,
    EnumerationType,
    Symbol,
    ObjectType,
    StructureType,
    VariantType,
    GraphType,
    EdgeType,
    VertexType,
    If,
    Unless,
    Match,
    Check,
    Assert,
    Call,
    Return,
    Raise,
    RepeatFor,
    RepeatUntil,
    RepeatWhile,
    Assignment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CodeElement {
    Namespace(NamespaceDecl),
    Function(FunctionDecl),
    Value(ValueDecl),
    EnumerationType(EnumerationTypeDecl),
    Symbol(SymbolDecl),
    Type(TypeDecl),
    If(IfStmt),
    Unless(UnlessStmt),
    Match(MatchStmt),
    Check(CheckStmt),
    Assert(AssertStmt),
    Call(CallStmt),
    Return(ReturnStmt),
    Raise(RaiseStmt),
    RepeatFor(RepeatForStmt),
    RepeatUntil(RepeatUntilStmt),
    RepeatWhile(RepeatWhileStmt),
    Assignment(AssignmentStmt),
}

impl CodeElement {
    fn node(&self) -> &dyn CodeElementNode {
        match self {
            CodeElement::Namespace(node) => node,
            CodeElement::Function(node) => node,
            CodeElement::Value(node) => node,
            CodeElement::EnumerationType(node) => node,
            CodeElement::Symbol(node) => node,
            CodeElement::Type(node) => node,
            CodeElement::If(node) => node,
            CodeElement::Unless(node) => node,
            CodeElement::Match(node) => node,
            CodeElement::Check(node) => node,
            CodeElement::Assert(node) => node,
            CodeElement::Call(node) => node,
            CodeElement::Return(node) => node,
            CodeElement::Raise(node) => node,
            CodeElement::RepeatFor(node) => node,
            CodeElement::RepeatUntil(node) => node,
            CodeElement::RepeatWhile(node) => node,
            CodeElement::Assignment(node) => node,
        }
    }

    pub fn get_code_element_type(&self) -> CodeElementType {
        match self {
            CodeElement::Namespace(node) => node.kind,
            CodeElement::Function(node) => node.kind,
            CodeElement::Value(node) => node.kind,
            CodeElement::EnumerationType(_) => CodeElementType::EnumerationType,
            CodeElement::Symbol(_) => CodeElementType::Symbol,
            CodeElement::Type(node) => node.kind,
            CodeElement::If(_) => CodeElementType::If,
            CodeElement::Unless(_) => CodeElementType::Unless,
            CodeElement::Match(_) => CodeElementType::Match,
            CodeElement::Check(_) => CodeElementType::Check,
            CodeElement::Assert(_) => CodeElementType::Assert,
            CodeElement::Call(_) => CodeElementType::Call,
            CodeElement::Return(_) => CodeElementType::Return,
            CodeElement::Raise(_) => CodeElementType::Raise,
            CodeElement::RepeatFor(_) => CodeElementType::RepeatFor,
            CodeElement::RepeatUntil(_) => CodeElementType::RepeatUntil,
            CodeElement::RepeatWhile(_) => CodeElementType::RepeatWhile,
            CodeElement::Assignment(_) => CodeElementType::Assignment,
        }
    }

    /// The declared name, for elements that have one.
    pub fn name(&self) -> Option<&CodeElementName> {
        match self {
            CodeElement::Namespace(node) => Some(&node.name),
            CodeElement::Function(node) => Some(&node.name),
            CodeElement::Value(node) => Some(&node.name),
            CodeElement::EnumerationType(node) => Some(&node.name),
            CodeElement::Symbol(node) => Some(&node.name),
            CodeElement::Type(node) => Some(&node.name),
            _ => None,
        }
    }

    /// Nested code elements, in source order. Empty for leaf elements.
    pub fn code_elements(&self) -> &[CodeElement] {
        match self {
            CodeElement::Namespace(node) => &node.code_elements,
            CodeElement::Function(node) => &node.code_elements,
            CodeElement::EnumerationType(node) => &node.symbols,
            CodeElement::Type(node) => &node.code_elements,
            CodeElement::Check(node) => &node.checked_code_elements,
            CodeElement::RepeatFor(node) => &node.code_elements,
            CodeElement::RepeatUntil(node) => &node.code_elements,
            CodeElement::RepeatWhile(node) => &node.code_elements,
            _ => &[],
        }
    }
}

impl Node for CodeElement {
    fn first_token(&self) -> &Token {
        self.node().first_token()
    }
}

impl CodeElementNode for CodeElement {
    fn leading_annotations(&self) -> &[Annotation] {
        self.node().leading_annotations()
    }
    fn trailing_annotations(&self) -> &[Annotation] {
        self.node().trailing_annotations()
    }
}

/// Whether a token kind can serve as a leading annotation.
pub fn is_annotation_kind(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Documentation | TokenKind::Identifier)
}
