use std::rc::Rc;

use crate::{Position, MK_TOKEN};

use super::{
    scanner::Scanner,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Word operators spelled between tildes, e.g. `~shl~`. The opening tilde is
/// consumed before these are matched.
const WORD_OPERATORS: [(&str, TokenKind); 9] = [
    ("and~", TokenKind::BitwiseAnd),
    ("nand~", TokenKind::BitwiseNand),
    ("nor~", TokenKind::BitwiseNor),
    ("not~", TokenKind::BitwiseNot),
    ("or~", TokenKind::BitwiseOr),
    ("shl~", TokenKind::ShiftLeft),
    ("shr~", TokenKind::ShiftRight),
    ("xor~", TokenKind::BitwiseXor),
    ("zshr~", TokenKind::ZeroShiftRight),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Drop white space runs instead of emitting `WhiteSpace` tokens.
    pub skip_white_space: bool,
    /// Drop line and block comments. Documentation comments are always kept.
    pub skip_comments: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            skip_white_space: true,
            skip_comments: true,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Escape {
    Valid,
    Invalid,
    Unclosed,
}

#[derive(Debug, Clone)]
pub struct Lexer {
    scanner: Scanner,
    file: Rc<String>,
    options: LexerOptions,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        Lexer::with_options(source, file, LexerOptions::default())
    }

    pub fn with_options(source: String, file: Option<String>, options: LexerOptions) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            scanner: Scanner::new(source),
            file: file_name,
            options,
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// Reads the next token. At the end of input this keeps returning `EOF`.
    pub fn read_token(&mut self) -> Token {
        loop {
            if self.scanner.is_eof() {
                return self.emit(TokenKind::EOF);
            }

            let kind = self.read_any_token();
            if self.skips(kind) {
                self.scanner.begin_next_token();
                continue;
            }

            return self.emit(kind);
        }
    }

    /// Reads every token up to and including the single `EOF` token.
    pub fn read_all_tokens(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        loop {
            let token = self.read_token();
            let at_end = token.kind == TokenKind::EOF;
            tokens.push(token);

            if at_end {
                return tokens;
            }
        }
    }

    fn skips(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::WhiteSpace => self.options.skip_white_space,
            TokenKind::LineComment | TokenKind::BlockComment => self.options.skip_comments,
            _ => false,
        }
    }

    fn emit(&mut self, kind: TokenKind) -> Token {
        let token = MK_TOKEN!(
            kind,
            self.scanner.token_text().to_string(),
            Position::new(
                Rc::clone(&self.file),
                self.scanner.start_line(),
                self.scanner.start_column()
            )
        );
        self.scanner.begin_next_token();
        token
    }

    fn read_any_token(&mut self) -> TokenKind {
        let ch = match self.scanner.scan_char() {
            Some(ch) => ch,
            None => return TokenKind::EOF,
        };

        match ch {
            c if is_white_space(c) => {
                self.scanner.advance_while(is_white_space);
                TokenKind::WhiteSpace
            }
            c if is_identifier_start(c) => self.scan_identifier_or_keyword(),
            '_' => self.scan_underscore(),
            c if c.is_ascii_digit() => self.scan_number(c),
            '"' | '\'' => self.scan_text(ch),
            '`' => self.scan_code(),
            '$' => self.scan_date_time(),
            '#' => self.scan_hash_tag(),
            '~' => self.scan_tilde(),
            '.' => self.scan_dot(),
            '-' => self.scan_dash(),
            ':' => self.scan_colon(),
            '=' => self.scan_equals(),
            '<' => self.scan_less(),
            '/' => self.scan_slash(),
            '>' => self.either('=', TokenKind::GreaterEquals, TokenKind::Greater),
            '&' => self.either('=', TokenKind::AmpersandEquals, TokenKind::Ampersand),
            '*' => self.either('=', TokenKind::StarEquals, TokenKind::Star),
            '^' => self.either('=', TokenKind::CaretEquals, TokenKind::Caret),
            '+' => self.either('=', TokenKind::PlusEquals, TokenKind::Plus),
            '?' => self.either('?', TokenKind::QuestionQuestion, TokenKind::Question),
            '@' => self.either('|', TokenKind::AtBar, TokenKind::At),
            '%' => {
                if self.scanner.has_look_ahead_text("%]") {
                    self.scanner.advance_same_line(2);
                    TokenKind::GraphEnd
                } else {
                    TokenKind::Percent
                }
            }
            '[' => {
                if self.scanner.has_look_ahead_text("%%") {
                    self.scanner.advance_same_line(2);
                    TokenKind::GraphStart
                } else {
                    TokenKind::OpenBracket
                }
            }
            '{' => {
                if self.scanner.has_look_ahead_text("{{") {
                    self.scanner.advance_same_line(2);
                    self.scan_template()
                } else {
                    TokenKind::OpenCurly
                }
            }
            '|' => TokenKind::Bar,
            ']' => TokenKind::CloseBracket,
            '}' => TokenKind::CloseCurly,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            _ => TokenKind::ErrorUnexpectedCharacter,
        }
    }

    /// Two-way choice on the next character.
    fn either(&mut self, next: char, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char(next) {
            long
        } else {
            short
        }
    }

    fn scan_identifier_body(&mut self) {
        self.scanner.advance_while(is_identifier_body);
        self.scanner.advance_over_look_ahead_1_char('\'');
    }

    fn scan_identifier_or_keyword(&mut self) -> TokenKind {
        self.scan_identifier_body();

        match RESERVED_LOOKUP.get(self.scanner.token_text()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        }
    }

    // At most two leading underscores; underscores alone are the anonymous literal.
    fn scan_underscore(&mut self) -> TokenKind {
        if self.scanner.advance_if(is_identifier_start) {
            self.scan_identifier_body();
            return TokenKind::Identifier;
        }

        if self.scanner.has_look_ahead_1_char('_') {
            let identifier_follows = self
                .scanner
                .look_ahead_2_char()
                .is_some_and(is_identifier_start);

            self.scanner.advance_same_line(1);
            self.scan_identifier_body();

            return if identifier_follows {
                TokenKind::Identifier
            } else {
                TokenKind::ErrorInvalidIdentifier
            };
        }

        if self
            .scanner
            .look_ahead_1_char()
            .is_some_and(is_identifier_body)
        {
            self.scan_identifier_body();
            return TokenKind::ErrorInvalidIdentifier;
        }

        TokenKind::AnonymousLiteral
    }

    fn scan_number(&mut self, first: char) -> TokenKind {
        if first == '0' {
            let radix = self.scanner.look_ahead_1_char();
            let leading = self.scanner.look_ahead_2_char();

            if matches!(radix, Some('b' | 'B')) && leading.is_some_and(is_binary_digit) {
                self.scanner.advance_same_line(1);
                self.scanner.advance_while(|c| is_binary_digit(c) || c == '_');
                return TokenKind::BinaryIntegerLiteral;
            }

            if matches!(radix, Some('x' | 'X')) && leading.is_some_and(|c| c.is_ascii_hexdigit()) {
                self.scanner.advance_same_line(1);
                self.scanner.advance_while(|c| c.is_ascii_hexdigit() || c == '_');
                return TokenKind::HexIntegerLiteral;
            }
        }

        self.scanner.advance_while(is_digit_or_underscore);

        if self.has_dot_digit() {
            self.scanner.advance_same_line(1);
            self.scanner.advance_while(is_digit_or_underscore);

            if self.has_dot_digit() {
                self.scanner.advance_same_line(1);
                self.scanner.advance_while(is_digit_or_underscore);
                self.scan_version_label('-');
                self.scan_version_label('+');
                return TokenKind::VersionLiteral;
            }

            self.scan_exponent();
            self.scanner.advance_if(is_number_size_suffix);
            return TokenKind::NumberLiteral;
        }

        if self.scan_exponent() {
            self.scanner.advance_if(is_number_size_suffix);
            return TokenKind::NumberLiteral;
        }

        self.scanner.advance_if(|c| c == 'u' || c == 'U');
        self.scanner.advance_if(is_integer_size_suffix);
        TokenKind::DecimalIntegerLiteral
    }

    fn has_dot_digit(&self) -> bool {
        self.scanner.has_look_ahead_1_char('.')
            && self
                .scanner
                .look_ahead_2_char()
                .is_some_and(|c| c.is_ascii_digit())
    }

    fn scan_exponent(&mut self) -> bool {
        if !matches!(self.scanner.look_ahead_1_char(), Some('e' | 'E')) {
            return false;
        }

        let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());

        if is_digit(self.scanner.look_ahead_2_char()) {
            self.scanner.advance_same_line(1);
        } else if matches!(self.scanner.look_ahead_2_char(), Some('+' | '-'))
            && is_digit(self.scanner.look_ahead_3_char())
        {
            self.scanner.advance_same_line(2);
        } else {
            return false;
        }

        self.scanner.advance_while(|c| c.is_ascii_digit());
        true
    }

    /// Optional `-prerelease` or `+build` label of a version literal.
    fn scan_version_label(&mut self, introducer: char) {
        if !self.scanner.has_look_ahead_1_char(introducer) {
            return;
        }

        match self.scanner.look_ahead_2_char() {
            Some(c) if is_identifier_start(c) => {
                self.scanner.advance_same_line(1);
                self.scanner.advance_while(is_identifier_body);
            }
            Some(c) if c.is_ascii_digit() => {
                self.scanner.advance_same_line(1);
                self.scanner.advance_while(|c| c.is_ascii_digit());
            }
            _ => {}
        }
    }

    fn scan_text(&mut self, quote: char) -> TokenKind {
        let (kind, multiline_kind) = if quote == '"' {
            (TokenKind::DoubleQuotedText, TokenKind::DoubleQuotedMultilineText)
        } else {
            (TokenKind::SingleQuotedText, TokenKind::SingleQuotedMultilineText)
        };

        if self.scanner.has_look_ahead_k_char(1, quote)
            && self.scanner.has_look_ahead_k_char(2, quote)
        {
            self.scanner.advance_same_line(2);
            return self.scan_multiline_text(quote, multiline_kind);
        }

        let mut valid = true;

        loop {
            match self.scanner.look_ahead_1_char() {
                None | Some('\n' | '\r') => return TokenKind::ErrorUnclosedTextLiteral,
                Some(c) if c == quote => {
                    self.scanner.advance_same_line(1);
                    return if valid { kind } else { TokenKind::ErrorInvalidTextLiteral };
                }
                Some('\\') => {
                    self.scanner.advance_same_line(1);
                    match self.scan_escape(false) {
                        Escape::Valid => {}
                        Escape::Invalid => valid = false,
                        Escape::Unclosed => return TokenKind::ErrorUnclosedTextLiteral,
                    }
                }
                Some(_) => {
                    self.scanner.scan_char();
                }
            }
        }
    }

    fn scan_multiline_text(&mut self, quote: char, kind: TokenKind) -> TokenKind {
        let mut valid = true;

        loop {
            match self.scanner.look_ahead_1_char() {
                None => return TokenKind::ErrorUnclosedTextLiteral,
                Some(c)
                    if c == quote
                        && self.scanner.has_look_ahead_k_char(2, quote)
                        && self.scanner.has_look_ahead_k_char(3, quote) =>
                {
                    self.scanner.advance_same_line(3);
                    return if valid { kind } else { TokenKind::ErrorInvalidTextLiteral };
                }
                Some('\\') => {
                    self.scanner.advance_same_line(1);
                    match self.scan_escape(true) {
                        Escape::Valid => {}
                        Escape::Invalid => valid = false,
                        Escape::Unclosed => return TokenKind::ErrorUnclosedTextLiteral,
                    }
                }
                Some(_) => {
                    self.scanner.scan_char();
                }
            }
        }
    }

    /// Scans the escape sequence following a consumed backslash.
    fn scan_escape(&mut self, multiline: bool) -> Escape {
        let ends_literal = |c: Option<char>| match c {
            None => true,
            Some('\n' | '\r') => !multiline,
            Some(_) => false,
        };

        match self.scanner.look_ahead_1_char() {
            c if ends_literal(c) => Escape::Unclosed,
            Some('b' | 'f' | 'n' | 'r' | 't' | '"' | '\'' | '\\') => {
                self.scanner.advance_same_line(1);
                Escape::Valid
            }
            Some('u') if self.scanner.has_look_ahead_k_char(2, '{') => {
                self.scanner.advance_same_line(2);

                let mut name_length = 0;
                while self.scanner.advance_if(|c| c.is_alphanumeric()) {
                    name_length += 1;
                }

                if name_length > 0 && self.scanner.advance_over_look_ahead_1_char('}') {
                    Escape::Valid
                } else if ends_literal(self.scanner.look_ahead_1_char()) {
                    Escape::Unclosed
                } else {
                    Escape::Invalid
                }
            }
            Some('u') => {
                self.scanner.advance_same_line(1);

                for _ in 0..4 {
                    if !self.scanner.advance_if(|c| c.is_ascii_hexdigit()) {
                        return if ends_literal(self.scanner.look_ahead_1_char()) {
                            Escape::Unclosed
                        } else {
                            Escape::Invalid
                        };
                    }
                }

                Escape::Valid
            }
            Some(_) => {
                self.scanner.scan_char();
                Escape::Invalid
            }
            None => Escape::Unclosed,
        }
    }

    fn scan_code(&mut self) -> TokenKind {
        loop {
            match self.scanner.scan_char() {
                None => return TokenKind::ErrorUnclosedCodeLiteral,
                Some('`') => return TokenKind::CodeLiteral,
                Some(_) => {}
            }
        }
    }

    fn scan_template(&mut self) -> TokenKind {
        loop {
            if self.scanner.has_look_ahead_text("}}}") {
                self.scanner.advance_same_line(3);
                return TokenKind::TemplateLiteral;
            }

            if self.scanner.scan_char().is_none() {
                return TokenKind::ErrorUnclosedTemplateLiteral;
            }
        }
    }

    fn scan_digits(&mut self, count: usize) -> bool {
        (0..count).all(|_| self.scanner.advance_if(|c| c.is_ascii_digit()))
    }

    fn scan_two_digit_pair(&mut self, separator: char) -> bool {
        self.scan_digits(2)
            && self.scanner.advance_over_look_ahead_1_char(separator)
            && self.scan_digits(2)
    }

    /// `$[YYYY-MM-DD][Thh:mm[:ss[.fff]][(+|-)hh:mm|Z]]$`, or the bare `$` operator.
    fn scan_date_time(&mut self) -> TokenKind {
        let mut has_date = false;
        let mut has_time = false;

        if self
            .scanner
            .look_ahead_1_char()
            .is_some_and(|c| c.is_ascii_digit())
        {
            let date = self.scan_digits(4)
                && self.scanner.advance_over_look_ahead_1_char('-')
                && self.scan_two_digit_pair('-');

            if !date {
                return TokenKind::ErrorInvalidTimeLiteral;
            }
            has_date = true;
        }

        if self.scanner.has_look_ahead_1_char('T')
            && self
                .scanner
                .look_ahead_2_char()
                .is_some_and(|c| c.is_ascii_digit())
        {
            self.scanner.advance_same_line(1);

            if !self.scan_two_digit_pair(':') {
                return TokenKind::ErrorInvalidTimeLiteral;
            }

            if self.scanner.advance_over_look_ahead_1_char(':') {
                if !self.scan_digits(2) {
                    return TokenKind::ErrorInvalidTimeLiteral;
                }

                if self.scanner.advance_over_look_ahead_1_char('.') {
                    if !self.scan_digits(1) {
                        return TokenKind::ErrorInvalidTimeLiteral;
                    }
                    self.scanner.advance_while(|c| c.is_ascii_digit());
                }
            }

            if self.scanner.advance_if(|c| c == '+' || c == '-') {
                if !self.scan_two_digit_pair(':') {
                    return TokenKind::ErrorInvalidTimeLiteral;
                }
            } else {
                self.scanner.advance_over_look_ahead_1_char('Z');
            }

            has_time = true;
        }

        if !has_date && !has_time {
            return TokenKind::Dollar;
        }

        if self.scanner.advance_over_look_ahead_1_char('$') {
            TokenKind::DateTimeLiteral
        } else {
            TokenKind::ErrorUnclosedTimeLiteral
        }
    }

    fn scan_hash_tag(&mut self) -> TokenKind {
        if self
            .scanner
            .look_ahead_1_char()
            .is_some_and(|c| is_identifier_start(c) || c == '_')
        {
            self.scan_identifier_body();
            TokenKind::Tag
        } else {
            TokenKind::ErrorUnexpectedCharacter
        }
    }

    fn scan_tilde(&mut self) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char('/') {
            return self.scan_regular_expression();
        }

        for (word, kind) in WORD_OPERATORS {
            if self.scanner.has_look_ahead_text(word) {
                self.scanner.advance_same_line(word.len());
                return kind;
            }
        }

        if self.scanner.advance_over_look_ahead_1_char('=') {
            return TokenKind::TildeEquals;
        }
        if self.scanner.advance_over_look_ahead_1_char('>') {
            return TokenKind::TildeArrow;
        }

        if self.scanner.has_look_ahead_1_char('~') {
            match self.scanner.look_ahead_2_char() {
                Some('>') => {
                    self.scanner.advance_same_line(2);
                    return self.either(
                        '>',
                        TokenKind::TildeLongDoubleArrow,
                        TokenKind::TildeLongArrow,
                    );
                }
                Some('~') => {
                    self.scanner.advance_same_line(2);
                    return TokenKind::TildeLongLine;
                }
                Some('<') if self.scanner.has_look_ahead_k_char(3, '>') => {
                    self.scanner.advance_same_line(3);
                    return TokenKind::TildeLongDiamondArrow;
                }
                _ => {}
            }
        }

        TokenKind::Tilde
    }

    fn scan_regular_expression(&mut self) -> TokenKind {
        loop {
            match self.scanner.look_ahead_1_char() {
                None | Some('\n' | '\r') => return TokenKind::ErrorUnclosedRegularExpression,
                Some('/') => {
                    self.scanner.advance_same_line(1);
                    self.scanner.advance_while(|c| matches!(c, 'i' | 'g' | 'm'));
                    return TokenKind::RegularExpressionLiteral;
                }
                Some(_) => {
                    self.scanner.scan_char();
                }
            }
        }
    }

    fn scan_dot(&mut self) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char('.') {
            if self.scanner.advance_over_look_ahead_1_char('<') {
                TokenKind::RangeExclusive
            } else {
                self.either('.', TokenKind::DotDotDot, TokenKind::RangeInclusive)
            }
        } else {
            self.either('?', TokenKind::DotQuestion, TokenKind::Dot)
        }
    }

    fn scan_dash(&mut self) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char('=') {
            return TokenKind::DashEquals;
        }
        if self.scanner.advance_over_look_ahead_1_char('>') {
            return TokenKind::RightArrow;
        }

        if self.scanner.has_look_ahead_1_char('-') {
            match self.scanner.look_ahead_2_char() {
                Some('>') => {
                    self.scanner.advance_same_line(2);
                    return self.either(
                        '>',
                        TokenKind::RightLongDoubleArrow,
                        TokenKind::RightLongArrow,
                    );
                }
                Some('-') => {
                    self.scanner.advance_same_line(2);
                    return TokenKind::LongLine;
                }
                Some('<') if self.scanner.has_look_ahead_k_char(3, '>') => {
                    self.scanner.advance_same_line(3);
                    return TokenKind::RightLongDiamondArrow;
                }
                _ => {}
            }
        }

        TokenKind::Dash
    }

    fn scan_colon(&mut self) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char(':') {
            self.either('>', TokenKind::ColonColonGreater, TokenKind::ColonColon)
        } else {
            self.either('>', TokenKind::ColonGreater, TokenKind::Colon)
        }
    }

    fn scan_equals(&mut self) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char('>') {
            return TokenKind::FatArrow;
        }

        if self.scanner.advance_over_look_ahead_1_char('=') {
            if self.scanner.advance_over_look_ahead_1_char('>') {
                return self.either(
                    '>',
                    TokenKind::RightFatLongDoubleArrow,
                    TokenKind::RightFatLongArrow,
                );
            }
            if self.scanner.has_look_ahead_text("<>") {
                self.scanner.advance_same_line(2);
                return TokenKind::RightFatLongDiamondArrow;
            }
            return TokenKind::EqualsEquals;
        }

        TokenKind::Equals
    }

    fn scan_less(&mut self) -> TokenKind {
        match self.scanner.look_ahead_1_char() {
            Some('=') => match self.scanner.look_ahead_2_char() {
                Some('=') => {
                    self.scanner.advance_same_line(2);
                    self.either('>', TokenKind::LeftRightFatLongArrow, TokenKind::LeftFatLongArrow)
                }
                Some('>') => {
                    self.scanner.advance_same_line(2);
                    TokenKind::Compare
                }
                _ => {
                    self.scanner.advance_same_line(1);
                    TokenKind::LessEquals
                }
            },
            Some('-') => self.scan_left_arrow(
                '-',
                [
                    TokenKind::LeftArrow,
                    TokenKind::LeftRightArrow,
                    TokenKind::LeftLongArrow,
                    TokenKind::LeftRightLongArrow,
                ],
            ),
            Some('~') => self.scan_left_arrow(
                '~',
                [
                    TokenKind::LeftTildeArrow,
                    TokenKind::LeftRightTildeArrow,
                    TokenKind::LeftTildeLongArrow,
                    TokenKind::LeftRightTildeLongArrow,
                ],
            ),
            Some(':') => {
                self.scanner.advance_same_line(1);
                self.either('>', TokenKind::LeftRightColonArrow, TokenKind::LeftColonArrow)
            }
            _ => TokenKind::Less,
        }
    }

    /// `<s`, `<s>`, `<ss`, `<ss>` for a shaft character `s`, in that order in `kinds`.
    fn scan_left_arrow(&mut self, shaft: char, kinds: [TokenKind; 4]) -> TokenKind {
        let [short, short_both, long, long_both] = kinds;

        if self.scanner.has_look_ahead_k_char(2, shaft) {
            self.scanner.advance_same_line(2);
            self.either('>', long_both, long)
        } else {
            self.scanner.advance_same_line(1);
            self.either('>', short_both, short)
        }
    }

    fn scan_slash(&mut self) -> TokenKind {
        if self.scanner.advance_over_look_ahead_1_char('/') {
            self.scanner.advance_while(|c| c != '\n');
            return TokenKind::LineComment;
        }

        if self.scanner.advance_over_look_ahead_1_char('*') {
            let documentation = self.scanner.has_look_ahead_1_char('*')
                && !self.scanner.has_look_ahead_k_char(2, '/');

            loop {
                if self.scanner.has_look_ahead_text("*/") {
                    self.scanner.advance_same_line(2);
                    return if documentation {
                        TokenKind::Documentation
                    } else {
                        TokenKind::BlockComment
                    };
                }

                if self.scanner.scan_char().is_none() {
                    return TokenKind::ErrorUnclosedBlockComment;
                }
            }
        }

        self.either('=', TokenKind::SlashEquals, TokenKind::Slash)
    }
}

fn is_white_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic()
}

fn is_identifier_body(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_digit_or_underscore(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

fn is_number_size_suffix(c: char) -> bool {
    matches!(c, 'd' | 'D' | 'f' | 'F' | 'g' | 'G')
}

fn is_integer_size_suffix(c: char) -> bool {
    matches!(c, 'i' | 'I' | 'l' | 'L' | 's' | 'S' | 'y' | 'Y')
}

/// Lexes the whole source with default options.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).read_all_tokens()
}
