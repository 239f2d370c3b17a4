use crate::{lexer::tokens::Token, IMPL_CODE_ELEMENT};

use super::{
    ast::{Annotation, CodeElement, CodeElementName, Path},
    expressions::Expr,
};

/// A guarded block: the `if`/`else if` branches of an `if`, or a `where` case of a `match`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardedBlock {
    pub first_token: Token,
    pub guard: Expr,
    pub code_elements: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    /// The `if` branch followed by every `else if` branch, in order.
    pub branches: Vec<GuardedBlock>,
    pub else_code_elements: Option<Vec<CodeElement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnlessStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub guard: Expr,
    pub code_elements: Vec<CodeElement>,
    pub else_code_elements: Option<Vec<CodeElement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub subject: Expr,
    pub cases: Vec<GuardedBlock>,
    pub else_code_elements: Option<Vec<CodeElement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectBlock {
    pub first_token: Token,
    pub name: CodeElementName,
    pub trailing_annotations: Vec<Annotation>,
    pub code_elements: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub checked_code_elements: Vec<CodeElement>,
    pub detect_blocks: Vec<DetectBlock>,
    pub regardless_code_elements: Option<Vec<CodeElement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub condition: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub callee: Path,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaiseStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub error: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatForStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub variable: CodeElementName,
    pub iterable: Expr,
    pub code_elements: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatUntilStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub condition: Expr,
    pub code_elements: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatWhileStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub condition: Expr,
    pub code_elements: Vec<CodeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub first_token: Token,
    pub leading_annotations: Vec<Annotation>,
    pub trailing_annotations: Vec<Annotation>,
    pub assignee: Path,
    pub operator: Token,
    pub value: Expr,
}

IMPL_CODE_ELEMENT!(
    IfStmt,
    UnlessStmt,
    MatchStmt,
    CheckStmt,
    AssertStmt,
    CallStmt,
    ReturnStmt,
    RaiseStmt,
    RepeatForStmt,
    RepeatUntilStmt,
    RepeatWhileStmt,
    AssignmentStmt,
);
