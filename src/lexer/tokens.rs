use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("as", TokenKind::As);
        map.insert("end", TokenKind::End);
        map.insert("false", TokenKind::False);
        map.insert("module", TokenKind::Module);
        map.insert("package", TokenKind::Package);
        map.insert("self", TokenKind::SelfKeyword);
        map.insert("true", TokenKind::True);
        map.insert("undefined", TokenKind::Undefined);
        map.insert("use", TokenKind::Use);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    WhiteSpace,
    LineComment,
    BlockComment,
    Documentation,

    Identifier,
    Tag,

    // Literals
    AnonymousLiteral,
    BinaryIntegerLiteral,
    DecimalIntegerLiteral,
    HexIntegerLiteral,
    NumberLiteral,
    VersionLiteral,
    DoubleQuotedText,
    SingleQuotedText,
    DoubleQuotedMultilineText,
    SingleQuotedMultilineText,
    CodeLiteral,
    DateTimeLiteral,
    RegularExpressionLiteral,
    TemplateLiteral,

    // Brackets
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    GraphStart, // [%%
    GraphEnd,   // %%]

    Comma,
    Semicolon,

    // Dot family
    Dot,            // .
    RangeInclusive, // ..
    RangeExclusive, // ..<
    DotDotDot,      // ...
    DotQuestion,    // .?

    // Dash family
    Dash,                  // -
    DashEquals,            // -=
    RightArrow,            // ->
    RightLongArrow,        // -->
    RightLongDoubleArrow,  // -->>
    LongLine,              // ---
    RightLongDiamondArrow, // --<>

    // Colon family
    Colon,             // :
    ColonColon,        // ::
    ColonGreater,      // :>
    ColonColonGreater, // ::>

    // Equals family
    Equals,                   // =
    FatArrow,                 // =>
    EqualsEquals,             // ==
    RightFatLongArrow,        // ==>
    RightFatLongDoubleArrow,  // ==>>
    RightFatLongDiamondArrow, // ==<>

    // Less-than family
    Less,                    // <
    LessEquals,              // <=
    Compare,                 // <=>
    LeftFatLongArrow,        // <==
    LeftRightFatLongArrow,   // <==>
    LeftArrow,               // <-
    LeftRightArrow,          // <->
    LeftLongArrow,           // <--
    LeftRightLongArrow,      // <-->
    LeftTildeArrow,          // <~
    LeftRightTildeArrow,     // <~>
    LeftTildeLongArrow,      // <~~
    LeftRightTildeLongArrow, // <~~>
    LeftColonArrow,          // <:
    LeftRightColonArrow,     // <:>

    Greater,       // >
    GreaterEquals, // >=

    // Tilde family
    Tilde,                 // ~
    TildeEquals,           // ~=
    TildeArrow,            // ~>
    TildeLongArrow,        // ~~>
    TildeLongDoubleArrow,  // ~~>>
    TildeLongLine,         // ~~~
    TildeLongDiamondArrow, // ~~<>
    BitwiseAnd,            // ~and~
    BitwiseNand,           // ~nand~
    BitwiseNor,            // ~nor~
    BitwiseNot,            // ~not~
    BitwiseOr,             // ~or~
    ShiftLeft,             // ~shl~
    ShiftRight,            // ~shr~
    BitwiseXor,            // ~xor~
    ZeroShiftRight,        // ~zshr~

    Ampersand,        // &
    AmpersandEquals,  // &=
    Star,             // *
    StarEquals,       // *=
    Caret,            // ^
    CaretEquals,      // ^=
    Percent,          // %
    Plus,             // +
    PlusEquals,       // +=
    Slash,            // /
    SlashEquals,      // /=
    Question,         // ?
    QuestionQuestion, // ??
    At,               // @
    AtBar,            // @|
    Bar,              // |
    Dollar,           // $ (to-string prefix)

    // Reserved
    As,
    End,
    False,
    Module,
    Package,
    SelfKeyword,
    True,
    Undefined,
    Use,

    // Lexical errors
    ErrorInvalidIdentifier,
    ErrorInvalidTextLiteral,
    ErrorUnclosedTextLiteral,
    ErrorUnclosedCodeLiteral,
    ErrorUnclosedTemplateLiteral,
    ErrorUnclosedBlockComment,
    ErrorUnclosedRegularExpression,
    ErrorInvalidTimeLiteral,
    ErrorUnclosedTimeLiteral,
    ErrorUnexpectedCharacter,
}

impl TokenKind {
    /// Whether this kind comes from the reserved word table.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::As
                | TokenKind::End
                | TokenKind::False
                | TokenKind::Module
                | TokenKind::Package
                | TokenKind::SelfKeyword
                | TokenKind::True
                | TokenKind::Undefined
                | TokenKind::Use
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenKind::ErrorInvalidIdentifier
                | TokenKind::ErrorInvalidTextLiteral
                | TokenKind::ErrorUnclosedTextLiteral
                | TokenKind::ErrorUnclosedCodeLiteral
                | TokenKind::ErrorUnclosedTemplateLiteral
                | TokenKind::ErrorUnclosedBlockComment
                | TokenKind::ErrorUnclosedRegularExpression
                | TokenKind::ErrorInvalidTimeLiteral
                | TokenKind::ErrorUnclosedTimeLiteral
                | TokenKind::ErrorUnexpectedCharacter
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::AnonymousLiteral
                | TokenKind::BinaryIntegerLiteral
                | TokenKind::DecimalIntegerLiteral
                | TokenKind::HexIntegerLiteral
                | TokenKind::NumberLiteral
                | TokenKind::VersionLiteral
                | TokenKind::DoubleQuotedText
                | TokenKind::SingleQuotedText
                | TokenKind::DoubleQuotedMultilineText
                | TokenKind::SingleQuotedMultilineText
                | TokenKind::CodeLiteral
                | TokenKind::DateTimeLiteral
                | TokenKind::RegularExpressionLiteral
                | TokenKind::TemplateLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::SelfKeyword
                | TokenKind::Undefined
        )
    }

    /// White space and comments, which the token stream never yields.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::WhiteSpace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexical unit. Tokens are never mutated once read; see [`Token::revise_kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact slice of source text the token was scanned from.
    pub text: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` ({}) at {}", self.text, self.kind, self.position)
    }
}

impl Token {
    /// Returns a copy of this token reclassified as `kind`; text and position are kept.
    pub fn revise_kind(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            text: self.text.clone(),
            position: self.position.clone(),
        }
    }

    /// The name a tag token dispatches under. `#name` hash tags drop their prefix.
    pub fn tag_name(&self) -> &str {
        self.text.strip_prefix('#').unwrap_or(&self.text)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}
