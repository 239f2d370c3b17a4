use std::collections::HashSet;

use tracing::trace;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Wraps a [`Lexer`] and reclassifies identifiers whose text has been
/// registered as a tag into `Tag` tokens.
///
/// Parser plugins register the words they dispatch on, so the lexer itself
/// never needs to know the full keyword set.
#[derive(Debug, Clone)]
pub struct TaggingLexer {
    lexer: Lexer,
    tags: HashSet<String>,
}

impl TaggingLexer {
    pub fn new(lexer: Lexer) -> Self {
        TaggingLexer {
            lexer,
            tags: HashSet::new(),
        }
    }

    pub fn register_tag(&mut self, text: &str) {
        if self.tags.insert(text.to_string()) {
            trace!(tag = text, "registered tag");
        }
    }

    pub fn is_registered(&self, text: &str) -> bool {
        self.tags.contains(text)
    }

    pub fn read_token(&mut self) -> Token {
        let token = self.lexer.read_token();

        if token.kind == TokenKind::Identifier && self.tags.contains(&token.text) {
            token.revise_kind(TokenKind::Tag)
        } else {
            token
        }
    }

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
}
