use std::collections::HashMap;

use crate::{
    ast::{ast::{Annotation, CodeElement}, expressions::Expr},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{declarations::*, expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Coalesce,
    BitwiseOr,
    BitwiseAnd,
    Relational,
    Range,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Call,
    Member,
    Primary,
}

/// Parses everything after a plugin's tag. Receives the leading annotations
/// gathered before the tag and the tag token itself.
pub type CodeElementHandler =
    fn(&mut Parser, Vec<Annotation>, Token) -> Result<CodeElement, Error>;
/// Parses an expression starting with the already consumed token.
pub type NUDHandler = fn(&mut Parser, Token) -> Result<Expr, Error>;
/// Continues `left` past the already consumed operator token.
pub type LEDHandler = fn(&mut Parser, Expr, Token, BindingPower) -> Result<Expr, Error>;

/// A registered construct: the tag it is dispatched on, an optional fixed
/// second word, and the auxiliary tags only its own handler interprets.
#[derive(Clone, Copy)]
pub struct ParserPlugin {
    pub tag: &'static str,
    pub second_tag: Option<&'static str>,
    pub auxiliary_tags: &'static [&'static str],
    pub handler: CodeElementHandler,
}

impl ParserPlugin {
    pub const fn new(tag: &'static str, handler: CodeElementHandler) -> Self {
        ParserPlugin {
            tag,
            second_tag: None,
            auxiliary_tags: &[],
            handler,
        }
    }

    pub const fn two_word(
        tag: &'static str,
        second_tag: &'static str,
        handler: CodeElementHandler,
    ) -> Self {
        ParserPlugin {
            tag,
            second_tag: Some(second_tag),
            auxiliary_tags: &[],
            handler,
        }
    }

    pub const fn with_auxiliary_tags(mut self, auxiliary_tags: &'static [&'static str]) -> Self {
        self.auxiliary_tags = auxiliary_tags;
        self
    }
}

pub const PLUGINS: [ParserPlugin; 27] = [
    ParserPlugin::new("module", parse_module_decl),
    ParserPlugin::new("package", parse_package_decl),
    ParserPlugin::new("function", parse_function_decl),
    ParserPlugin::new("behavior", parse_behavior_decl),
    ParserPlugin::new("constant", parse_constant_decl),
    ParserPlugin::new("value", parse_value_decl),
    ParserPlugin::new("variable", parse_variable_decl),
    ParserPlugin::two_word("enumeration", "type", parse_enumeration_type_decl),
    ParserPlugin::new("symbol", parse_symbol_decl),
    ParserPlugin::two_word("object", "type", parse_object_type_decl),
    ParserPlugin::two_word("structure", "type", parse_structure_type_decl),
    ParserPlugin::two_word("variant", "type", parse_variant_type_decl),
    ParserPlugin::two_word("graph", "type", parse_graph_type_decl),
    ParserPlugin::two_word("edge", "type", parse_edge_type_decl),
    ParserPlugin::two_word("vertex", "type", parse_vertex_type_decl),
    ParserPlugin::new("if", parse_if_stmt).with_auxiliary_tags(&["else"]),
    ParserPlugin::new("unless", parse_unless_stmt).with_auxiliary_tags(&["else"]),
    ParserPlugin::new("match", parse_match_stmt).with_auxiliary_tags(&["where", "else"]),
    ParserPlugin::new("check", parse_check_stmt).with_auxiliary_tags(&["detect", "regardless"]),
    ParserPlugin::new("assert", parse_assert_stmt),
    ParserPlugin::new("call", parse_call_stmt),
    ParserPlugin::new("return", parse_return_stmt),
    ParserPlugin::new("raise", parse_raise_stmt),
    ParserPlugin::two_word("repeat", "for", parse_repeat_for_stmt),
    ParserPlugin::two_word("repeat", "until", parse_repeat_until_stmt),
    ParserPlugin::two_word("repeat", "while", parse_repeat_while_stmt),
    ParserPlugin::new("set", parse_assignment_stmt),
];

pub fn create_plugin_lookups(parser: &mut Parser) {
    for plugin in PLUGINS {
        parser.plugin(plugin);
    }
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and references
    for kind in [
        TokenKind::True,
        TokenKind::False,
        TokenKind::BinaryIntegerLiteral,
        TokenKind::DecimalIntegerLiteral,
        TokenKind::HexIntegerLiteral,
        TokenKind::NumberLiteral,
        TokenKind::VersionLiteral,
        TokenKind::DoubleQuotedText,
        TokenKind::SingleQuotedText,
        TokenKind::DoubleQuotedMultilineText,
        TokenKind::SingleQuotedMultilineText,
        TokenKind::CodeLiteral,
        TokenKind::DateTimeLiteral,
        TokenKind::RegularExpressionLiteral,
        TokenKind::TemplateLiteral,
        TokenKind::SelfKeyword,
        TokenKind::Undefined,
        TokenKind::AnonymousLiteral,
    ] {
        parser.nud(kind, parse_literal_expr);
    }
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Prefix
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::BitwiseNot, parse_prefix_expr);
    parser.nud(TokenKind::Dollar, parse_prefix_expr);

    parser.led(TokenKind::QuestionQuestion, BindingPower::Coalesce, parse_operator_expr);

    // Bitwise
    parser.led(TokenKind::BitwiseOr, BindingPower::BitwiseOr, parse_operator_expr);
    parser.led(TokenKind::BitwiseNor, BindingPower::BitwiseOr, parse_operator_expr);
    parser.led(TokenKind::BitwiseXor, BindingPower::BitwiseOr, parse_operator_expr);
    parser.led(TokenKind::BitwiseAnd, BindingPower::BitwiseAnd, parse_operator_expr);
    parser.led(TokenKind::BitwiseNand, BindingPower::BitwiseAnd, parse_operator_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_operator_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_operator_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_operator_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_operator_expr);
    parser.led(TokenKind::EqualsEquals, BindingPower::Relational, parse_operator_expr);
    parser.led(TokenKind::TildeEquals, BindingPower::Relational, parse_operator_expr);
    parser.led(TokenKind::Compare, BindingPower::Relational, parse_operator_expr);

    parser.led(TokenKind::RangeInclusive, BindingPower::Range, parse_operator_expr);
    parser.led(TokenKind::RangeExclusive, BindingPower::Range, parse_operator_expr);

    parser.led(TokenKind::ShiftLeft, BindingPower::Shift, parse_operator_expr);
    parser.led(TokenKind::ShiftRight, BindingPower::Shift, parse_operator_expr);
    parser.led(TokenKind::ZeroShiftRight, BindingPower::Shift, parse_operator_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_operator_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_operator_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_operator_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_operator_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_operator_expr);
    parser.led(TokenKind::Caret, BindingPower::Exponent, parse_exponent_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Member
    parser.led(TokenKind::Dot, BindingPower::Member, parse_member_expr);
    parser.led(TokenKind::DotQuestion, BindingPower::Member, parse_member_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type PluginLookup = HashMap<String, Vec<ParserPlugin>>;
pub type AuxiliaryLookup = HashMap<&'static str, &'static str>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
