use crate::{lexer::tokens::Token, IMPL_CODE_ELEMENT};

use super::{
    ast::{Annotation, CodeElement, CodeElementName, CodeElementType},
    expressions::Expr,
};

/// `module` or `package`, told apart by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub kind: CodeElementType,
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
    pub code_elements: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
}

/// `function` or `behavior`, told apart by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub kind: CodeElementType,
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub name: CodeElementName,
    pub parameters: Vec<Parameter>,
    pub trailing_annotations: Vec<Annotation>,
    pub code_elements: Vec<CodeElement>,
}

/// `constant`, `value` or `variable`, told apart by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDecl {
    pub kind: CodeElementType,
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationTypeDecl {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
    pub symbols: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolDecl {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
}

/// Object, structure, variant, graph, edge and vertex types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: CodeElementType,
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
    pub code_elements: Vec<CodeElement>,
}

IMPL_CODE_ELEMENT!(
    NamespaceDecl,
    FunctionDecl,
    ValueDecl,
    EnumerationTypeDecl,
    SymbolDecl,
    TypeDecl,
);
