use crate::{
    ast::expressions::{
        CallExpr, Expr, IdentifierExpr, LiteralExpr, LiteralKind, MemberExpr, OperatorExpr,
        PrefixExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Whether the next token has a NUD, i.e. can start an expression.
pub fn can_begin_expression(parser: &mut Parser) -> bool {
    let kind = parser.stream().look_ahead_1_token().kind;
    parser.get_nud_lookup().contains_key(&kind)
}

/// Consumes one token and parses the expression it begins. Yields `None`
/// when that token cannot begin an expression.
pub fn parse_expression(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    parse_expr(parser, BindingPower::Default)
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Option<Expr>, Error> {
    // First parse NUD
    let token = parser.stream().consume_token();
    let nud_fn = match parser.get_nud_lookup().get(&token.kind) {
        Some(nud_fn) => *nud_fn,
        None => return Ok(None),
    };

    let mut left = nud_fn(parser, token)?;

    // While the next token binds tighter than `bp`, keep extending the left side
    loop {
        let kind = parser.stream().look_ahead_1_token().kind;
        let next_bp = *parser.get_bp_lookup().get(&kind).unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        let operator = parser.stream().consume_buffered_token();
        left = led_fn(parser, left, operator, next_bp)?;
    }

    Ok(Some(left))
}

pub fn parse_required_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_required_expr(parser, BindingPower::Default)
}

/// Like [`parse_expr`], but a token that cannot begin an expression is an error.
pub fn parse_required_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.stream().look_ahead_1_token().clone();

    match parse_expr(parser, bp)? {
        Some(expr) => Ok(expr),
        None => Err(Error::new(
            ErrorImpl::ExpectedExpression { token: token.text },
            token.position,
        )),
    }
}

pub fn parse_literal_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    match LiteralKind::from_token_kind(token.kind) {
        Some(kind) => Ok(Expr::Literal(LiteralExpr { kind, token })),
        None => Err(Error::new(
            ErrorImpl::ExpectedExpression { token: token.text },
            token.position,
        )),
    }
}

pub fn parse_identifier_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Identifier(IdentifierExpr { token }))
}

pub fn parse_grouping_expr(parser: &mut Parser, _open: Token) -> Result<Expr, Error> {
    let expr = parse_required_expression(parser)?;
    parser.stream().consume_expected_token(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser, operator: Token) -> Result<Expr, Error> {
    let operand = parse_required_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_operator_expr(
    parser: &mut Parser,
    left: Expr,
    operator: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let right = parse_required_expr(parser, bp)?;

    Ok(Expr::Operator(OperatorExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// `^` groups to the right: `a ^ b ^ c` is `a ^ (b ^ c)`.
pub fn parse_exponent_expr(
    parser: &mut Parser,
    left: Expr,
    operator: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let right = parse_required_expr(parser, BindingPower::Multiplicative)?;

    Ok(Expr::Operator(OperatorExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    if parser.stream().advance_over_look_ahead_1_token(TokenKind::CloseParen) {
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_required_expression(parser)?);

        if !parser.stream().advance_over_look_ahead_1_token(TokenKind::Comma) {
            break;
        }
    }

    parser.stream().consume_expected_token(TokenKind::CloseParen)?;
    Ok(arguments)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expr,
    _open: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let arguments = parse_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: Expr,
    operator: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let member = parser.stream().consume_expected_token(TokenKind::Identifier)?;

    Ok(Expr::Member(MemberExpr {
        object: Box::new(left),
        operator,
        member,
    }))
}
