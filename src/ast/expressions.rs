use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::tokens::{Token, TokenKind};

use super::ast::Node;

lazy_static! {
    static ref VERSION_PATTERN: Regex = Regex::new(
        r"^([0-9_]+)\.([0-9_]+)\.([0-9_]+)(?:-([A-Za-z0-9_]+))?(?:\+([A-Za-z0-9_]+))?$"
    )
    .unwrap();
    static ref DATE_TIME_PATTERN: Regex = Regex::new(
        r"^\$(?:(\d{4})-(\d{2})-(\d{2}))?(?:T(\d{2}):(\d{2})(?::(\d{2})(?:\.(\d+))?)?(Z|[+-]\d{2}:\d{2})?)?\$$"
    )
    .unwrap();
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Identifier,
    Prefix,
    Operator,
    Call,
    Member,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Prefix(PrefixExpr),
    Operator(OperatorExpr),
    Call(CallExpr),
    Member(MemberExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Operator(_) => ExprType::Operator,
            Expr::Call(_) => ExprType::Call,
            Expr::Member(_) => ExprType::Member,
        }
    }
}

impl Node for Expr {
    fn first_token(&self) -> &Token {
        match self {
            Expr::Literal(expr) => &expr.token,
            Expr::Identifier(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.operator,
            Expr::Operator(expr) => expr.left.first_token(),
            Expr::Call(expr) => expr.callee.first_token(),
            Expr::Member(expr) => expr.object.first_token(),
        }
    }
}

// LITERALS

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LiteralKind {
    Boolean,
    BinaryInteger,
    DecimalInteger,
    HexInteger,
    Number,
    Text,
    MultilineText,
    DateTime,
    Version,
    RegularExpression,
    Template,
    Code,
    SelfReference,
    Undefined,
    Anonymous,
}

impl LiteralKind {
    /// The literal kind a token maps to, if it is a literal at all.
    pub fn from_token_kind(kind: TokenKind) -> Option<LiteralKind> {
        let literal = match kind {
            TokenKind::True | TokenKind::False => LiteralKind::Boolean,
            TokenKind::BinaryIntegerLiteral => LiteralKind::BinaryInteger,
            TokenKind::DecimalIntegerLiteral => LiteralKind::DecimalInteger,
            TokenKind::HexIntegerLiteral => LiteralKind::HexInteger,
            TokenKind::NumberLiteral => LiteralKind::Number,
            TokenKind::DoubleQuotedText | TokenKind::SingleQuotedText => LiteralKind::Text,
            TokenKind::DoubleQuotedMultilineText | TokenKind::SingleQuotedMultilineText => {
                LiteralKind::MultilineText
            }
            TokenKind::DateTimeLiteral => LiteralKind::DateTime,
            TokenKind::VersionLiteral => LiteralKind::Version,
            TokenKind::RegularExpressionLiteral => LiteralKind::RegularExpression,
            TokenKind::TemplateLiteral => LiteralKind::Template,
            TokenKind::CodeLiteral => LiteralKind::Code,
            TokenKind::SelfKeyword => LiteralKind::SelfReference,
            TokenKind::Undefined => LiteralKind::Undefined,
            TokenKind::AnonymousLiteral => LiteralKind::Anonymous,
            _ => return None,
        };

        Some(literal)
    }
}

/// Literal Expression
/// A literal value kept as its source token; typed views decode it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateTime {
    pub date: Option<(u32, u32, u32)>,
    pub time: Option<(u32, u32, u32)>,
    pub fraction: Option<String>,
    pub zone: Option<String>,
}

impl LiteralExpr {
    pub fn as_bool(&self) -> Option<bool> {
        match self.token.kind {
            TokenKind::True => Some(true),
            TokenKind::False => Some(false),
            _ => None,
        }
    }

    /// Integer value of a binary, decimal or hex literal. Digit separators and
    /// size suffixes are ignored; `None` on overflow.
    pub fn as_integer(&self) -> Option<u64> {
        let text = self.token.text.replace('_', "");

        match self.kind {
            LiteralKind::BinaryInteger => u64::from_str_radix(&text[2..], 2).ok(),
            LiteralKind::HexInteger => u64::from_str_radix(&text[2..], 16).ok(),
            LiteralKind::DecimalInteger => text
                .trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .parse()
                .ok(),
            _ => None,
        }
    }

    /// Decoded content of a text literal, with quotes removed and escapes applied.
    ///
    /// `\u{NAME}` decodes only when NAME reads as a hexadecimal code point, so
    /// `\u{ACE}` is U+0ACE. Any other name, such as `\u{LATIN}`, is kept
    /// verbatim for a later pass that knows the character names.
    pub fn text_value(&self) -> Option<String> {
        let quote_length = match self.kind {
            LiteralKind::Text => 1,
            LiteralKind::MultilineText => 3,
            _ => return None,
        };

        let text = &self.token.text;
        let body = text.get(quote_length..text.len().checked_sub(quote_length)?)?;
        unescape(body)
    }

    pub fn version(&self) -> Option<Version> {
        if self.kind != LiteralKind::Version {
            return None;
        }

        let captures = VERSION_PATTERN.captures(&self.token.text)?;
        let group = |index: usize| captures.get(index).map(|m| m.as_str().to_string());

        Some(Version {
            major: group(1)?,
            minor: group(2)?,
            patch: group(3)?,
            prerelease: group(4),
            build: group(5),
        })
    }

    pub fn date_time(&self) -> Option<DateTime> {
        if self.kind != LiteralKind::DateTime {
            return None;
        }

        let captures = DATE_TIME_PATTERN.captures(&self.token.text)?;
        let number = |index: usize| {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u32>().ok())
        };

        let date = match (number(1), number(2), number(3)) {
            (Some(year), Some(month), Some(day)) => Some((year, month, day)),
            _ => None,
        };
        let time = match (number(4), number(5)) {
            (Some(hour), Some(minute)) => Some((hour, minute, number(6).unwrap_or(0))),
            _ => None,
        };

        Some(DateTime {
            date,
            time,
            fraction: captures.get(7).map(|m| m.as_str().to_string()),
            zone: captures.get(8).map(|m| m.as_str().to_string()),
        })
    }
}

/// Applies the escape sequences of a text literal body.
fn unescape(body: &str) -> Option<String> {
    let mut result = String::new();
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next()? {
            'b' => result.push('\u{8}'),
            'f' => result.push('\u{c}'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            '"' => result.push('"'),
            '\'' => result.push('\''),
            '\\' => result.push('\\'),
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let name: String = chars.by_ref().take_while(|c| *c != '}').collect();
                // Named code points are kept verbatim; only hex names decode.
                match u32::from_str_radix(&name, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => result.push(decoded),
                    None => result.push_str(&format!("\\u{{{}}}", name)),
                }
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                result.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
            }
            _ => return None,
        }
    }

    Some(result)
}

/// Identifier Expression
/// A reference to a named entity.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub token: Token,
}

/// Prefix Expression
/// A unary operator applied to its operand, e.g. `-x` or `~not~ flags`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

/// Operator Expression
/// A binary operator with its left and right operands.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Member Expression
/// Field access with `.` or the optional form `.?`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub operator: Token,
    pub member: Token,
}
