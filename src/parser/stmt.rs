use crate::{
    ast::{
        ast::{Annotation, CodeElement},
        statements::{
            AssertStmt, AssignmentStmt, CallStmt, CheckStmt, DetectBlock, GuardedBlock, IfStmt,
            MatchStmt, RaiseStmt, RepeatForStmt, RepeatUntilStmt, RepeatWhileStmt, ReturnStmt,
            UnlessStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{can_begin_expression, parse_arguments, parse_required_expression},
    parser::Parser,
};

const ASSIGNMENT_OPERATORS: [TokenKind; 7] = [
    TokenKind::Equals,
    TokenKind::PlusEquals,
    TokenKind::DashEquals,
    TokenKind::StarEquals,
    TokenKind::SlashEquals,
    TokenKind::AmpersandEquals,
    TokenKind::CaretEquals,
];

/// `else BODY`, if present.
fn parse_else_block(parser: &mut Parser) -> Result<Option<Vec<CodeElement>>, Error> {
    if parser.advance_over_tag("else").is_some() {
        Ok(Some(parser.parse_code_elements()?))
    } else {
        Ok(None)
    }
}

// if EXPR BODY (else if EXPR BODY)* [else BODY] end
pub fn parse_if_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let guard = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;

    let mut branches = vec![GuardedBlock {
        first_token: first_token.clone(),
        guard,
        code_elements,
    }];
    let mut else_code_elements = None;

    while parser.advance_over_tag("else").is_some() {
        match parser.advance_over_tag("if") {
            Some(if_token) => {
                let guard = parse_required_expression(parser)?;
                let code_elements = parser.parse_code_elements()?;
                branches.push(GuardedBlock {
                    first_token: if_token,
                    guard,
                    code_elements,
                });
            }
            None => {
                else_code_elements = Some(parser.parse_code_elements()?);
                break;
            }
        }
    }
    parser.consume_end()?;

    Ok(CodeElement::If(IfStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        branches,
        else_code_elements,
    }))
}

// unless EXPR BODY [else BODY] end
pub fn parse_unless_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let guard = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;
    let else_code_elements = parse_else_block(parser)?;
    parser.consume_end()?;

    Ok(CodeElement::Unless(UnlessStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        guard,
        code_elements,
        else_code_elements,
    }))
}

// match EXPR (where EXPR BODY)* [else BODY] end
pub fn parse_match_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let subject = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    let mut cases = vec![];
    while let Some(where_token) = parser.advance_over_tag("where") {
        let guard = parse_required_expression(parser)?;
        let code_elements = parser.parse_code_elements()?;
        cases.push(GuardedBlock {
            first_token: where_token,
            guard,
            code_elements,
        });
    }

    let else_code_elements = parse_else_block(parser)?;
    parser.consume_end()?;

    Ok(CodeElement::Match(MatchStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        subject,
        cases,
        else_code_elements,
    }))
}

// check ANN BODY (detect NAME ANN BODY)* [regardless BODY] end
pub fn parse_check_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let checked_code_elements = parser.parse_code_elements()?;

    let mut detect_blocks = vec![];
    while let Some(detect_token) = parser.advance_over_tag("detect") {
        let name = parser.parse_code_element_name()?;
        let trailing_annotations = parser.parse_trailing_annotations()?;
        let code_elements = parser.parse_code_elements()?;
        detect_blocks.push(DetectBlock {
            first_token: detect_token,
            name,
            trailing_annotations,
            code_elements,
        });
    }

    let regardless_code_elements = match parser.advance_over_tag("regardless") {
        Some(_) => Some(parser.parse_code_elements()?),
        None => None,
    };
    parser.consume_end()?;

    Ok(CodeElement::Check(CheckStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        checked_code_elements,
        detect_blocks,
        regardless_code_elements,
    }))
}

pub fn parse_assert_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let condition = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    Ok(CodeElement::Assert(AssertStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        condition,
    }))
}

// call PATH ( [EXPR (, EXPR)*] )
pub fn parse_call_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let callee = parser.parse_path()?;
    parser.stream().consume_expected_token(TokenKind::OpenParen)?;
    let arguments = parse_arguments(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    Ok(CodeElement::Call(CallStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        callee,
        arguments,
    }))
}

/// A bare `return` followed by an annotated code element on a later line,
/// such as `exported value x = 1`. The identifier is an annotation there.
fn is_followed_by_annotated_element(parser: &mut Parser, first_token: &Token) -> bool {
    let annotation = parser.stream().look_ahead_1_token();
    if annotation.kind != TokenKind::Identifier || annotation.line() <= first_token.line() {
        return false;
    }

    let following = parser.stream().look_ahead_2_token().clone();
    following.kind == TokenKind::Identifier
        || following.kind == TokenKind::Documentation
        || parser.is_plugin_tag(&following)
}

pub fn parse_return_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let value = if can_begin_expression(parser)
        && !is_followed_by_annotated_element(parser, &first_token)
    {
        Some(parse_required_expression(parser)?)
    } else {
        None
    };
    let trailing_annotations = parser.parse_trailing_annotations()?;

    Ok(CodeElement::Return(ReturnStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        value,
    }))
}

pub fn parse_raise_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let error = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    Ok(CodeElement::Raise(RaiseStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        error,
    }))
}

// repeat for NAME ANN in EXPR BODY end
pub fn parse_repeat_for_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let variable = parser.parse_code_element_name()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    parser.stream().consume_expected_token_value(TokenKind::Identifier, "in")?;
    let iterable = parse_required_expression(parser)?;
    let code_elements = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::RepeatFor(RepeatForStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        variable,
        iterable,
        code_elements,
    }))
}

// repeat until EXPR BODY end
pub fn parse_repeat_until_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let condition = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::RepeatUntil(RepeatUntilStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        condition,
        code_elements,
    }))
}

// repeat while EXPR BODY end
pub fn parse_repeat_while_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let condition = parse_required_expression(parser)?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::RepeatWhile(RepeatWhileStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        condition,
        code_elements,
    }))
}

// set PATH (= += -= *= /= &= ^=) EXPR
pub fn parse_assignment_stmt(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let assignee = parser.parse_path()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    let operator = if parser.stream().look_ahead_1_token().is_one_of_many(&ASSIGNMENT_OPERATORS) {
        parser.stream().consume_buffered_token()
    } else {
        parser.stream().consume_expected_token(TokenKind::Equals)?
    };
    let value = parse_required_expression(parser)?;

    Ok(CodeElement::Assignment(AssignmentStmt {
        first_token,
        leading_annotations,
        trailing_annotations,
        assignee,
        operator,
        value,
    }))
}
