use tracing::trace;

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    tagging::TaggingLexer,
    tokens::{Token, TokenKind},
};

/// Number of ring buffer slots. One slot always stays free, so up to
/// `BUFFER_CAPACITY - 1` tokens of lookahead are available.
pub const BUFFER_CAPACITY: usize = 5;

/// Token lookahead over a [`TaggingLexer`], backed by a fixed ring buffer.
///
/// `next` and `last` are equal exactly when nothing is buffered. Slots are
/// refilled lazily, only when a requested lookahead is not yet buffered.
/// White space and comments are dropped here, so a lexer that keeps trivia
/// can still feed the parser.
#[derive(Debug, Clone)]
pub struct TokenStream {
    lexer: TaggingLexer,
    buffer: [Option<Token>; BUFFER_CAPACITY],
    next: usize,
    last: usize,
}

impl TokenStream {
    pub fn new(lexer: TaggingLexer) -> Self {
        TokenStream {
            lexer,
            buffer: Default::default(),
            next: 0,
            last: 0,
        }
    }

    pub fn register_tag(&mut self, text: &str) {
        self.lexer.register_tag(text);
    }

    fn buffered(&self) -> usize {
        (self.last + BUFFER_CAPACITY - self.next) % BUFFER_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.next == self.last
    }

    fn read_significant_token(&mut self) -> Token {
        loop {
            let token = self.lexer.read_token();
            if !token.kind.is_trivia() {
                return token;
            }
        }
    }

    fn fill(&mut self, k: usize) {
        assert!(
            k >= 1 && k < BUFFER_CAPACITY,
            "lookahead of {k} tokens exceeds the token buffer"
        );

        while self.buffered() < k {
            self.buffer[self.last] = Some(self.read_significant_token());
            self.last = (self.last + 1) % BUFFER_CAPACITY;
        }
    }

    fn look_ahead_k_token(&mut self, k: usize) -> &Token {
        self.fill(k);

        match &self.buffer[(self.next + k - 1) % BUFFER_CAPACITY] {
            Some(token) => token,
            None => unreachable!("filled ring buffer slot is empty"),
        }
    }

    pub fn look_ahead_1_token(&mut self) -> &Token {
        self.look_ahead_k_token(1)
    }

    pub fn look_ahead_2_token(&mut self) -> &Token {
        self.look_ahead_k_token(2)
    }

    pub fn has_look_ahead_1_token(&mut self, kind: TokenKind) -> bool {
        self.look_ahead_1_token().kind == kind
    }

    pub fn has_look_ahead_1_token_value(&mut self, kind: TokenKind, text: &str) -> bool {
        let token = self.look_ahead_1_token();
        token.kind == kind && token.text == text
    }

    /// Consumes the next token if and only if it has the given kind.
    pub fn advance_over_look_ahead_1_token(&mut self, kind: TokenKind) -> bool {
        if self.has_look_ahead_1_token(kind) {
            self.consume_buffered_token();
            true
        } else {
            false
        }
    }

    /// Consumes a token that a previous lookahead has already buffered.
    pub fn consume_buffered_token(&mut self) -> Token {
        debug_assert!(!self.is_empty(), "no buffered token to consume");
        self.consume_token()
    }

    pub fn consume_token(&mut self) -> Token {
        let token = if self.is_empty() {
            self.read_significant_token()
        } else {
            let slot = self.buffer[self.next].take();
            self.next = (self.next + 1) % BUFFER_CAPACITY;

            match slot {
                Some(token) => token,
                None => self.read_significant_token(),
            }
        };

        trace!(
            kind = %token.kind,
            text = %token.text,
            line = token.line(),
            column = token.column(),
            "consumed token"
        );
        token
    }

    pub fn consume_expected_token(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.has_look_ahead_1_token(kind) {
            return Ok(self.consume_buffered_token());
        }

        Err(self.mismatch(kind, None))
    }

    pub fn consume_expected_token_value(
        &mut self,
        kind: TokenKind,
        text: &str,
    ) -> Result<Token, Error> {
        if self.has_look_ahead_1_token_value(kind, text) {
            return Ok(self.consume_buffered_token());
        }

        Err(self.mismatch(kind, Some(text)))
    }

    fn mismatch(&mut self, expected_kind: TokenKind, expected_text: Option<&str>) -> Error {
        let actual = self.look_ahead_1_token();

        Error::new(
            ErrorImpl::UnexpectedToken {
                expected_kind,
                expected_text: expected_text.map(String::from),
                actual_kind: actual.kind,
                actual_text: actual.text.clone(),
            },
            actual.position.clone(),
        )
    }
}
