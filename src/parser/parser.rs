//! Core parser shared by every code element plugin.
//!
//! The parser owns the token stream and the lookup tables. Code elements are
//! dispatched by tag: `parse_code_element` gathers leading annotations, finds
//! the plugin registered for the next tag and hands over to its handler, which
//! calls back into the parser for names, annotations, expressions and nested
//! sequences of code elements.
//!
//! Lookup tables:
//! - Plugins by primary tag text
//! - Auxiliary tags, which end a sequence of code elements
//! - NUD (null denotation) and LED (left denotation) expression handlers
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{
        ast::{
            is_annotation_kind, Annotation, CodeElement, CodeElementName, CompilationUnit, Path,
            UseDeclaration,
        },
        declarations::Parameter,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{Lexer, LexerOptions},
        stream::TokenStream,
        tagging::TaggingLexer,
        tokens::{Token, TokenKind},
    },
};

use super::lookups::{
    create_plugin_lookups, create_token_lookups, AuxiliaryLookup, BPLookup, BindingPower,
    LEDHandler, LEDLookup, NUDHandler, NUDLookup, ParserPlugin, PluginLookup,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Buffered tokens from the tagging lexer
    stream: TokenStream,
    /// Plugins keyed by the tag text they are dispatched on
    plugin_lookup: PluginLookup,
    /// Auxiliary tag text to the primary tag of the plugin that owns it
    auxiliary_lookup: AuxiliaryLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `source` with every known plugin registered.
    ///
    /// # Arguments
    ///
    /// * `source` - The full source text
    /// * `file` - Label used in token positions and diagnostics
    pub fn new(source: String, file: Option<String>) -> Self {
        Parser::with_options(source, file, LexerOptions::default())
    }

    pub fn with_options(source: String, file: Option<String>, options: LexerOptions) -> Self {
        let lexer = Lexer::with_options(source, file, options);

        let mut parser = Parser {
            stream: TokenStream::new(TaggingLexer::new(lexer)),
            plugin_lookup: HashMap::new(),
            auxiliary_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_plugin_lookups(&mut parser);
        create_token_lookups(&mut parser);
        parser
    }

    pub fn stream(&mut self) -> &mut TokenStream {
        &mut self.stream
    }

    pub fn get_plugin_lookup(&self) -> &PluginLookup {
        &self.plugin_lookup
    }

    pub fn get_auxiliary_lookup(&self) -> &AuxiliaryLookup {
        &self.auxiliary_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a code element plugin and the tags it uses.
    ///
    /// Two-word plugins are also reachable through the underscore-joined
    /// spelling of their words, e.g. `enumeration_type`.
    pub fn plugin(&mut self, plugin: ParserPlugin) {
        self.stream.register_tag(plugin.tag);

        for &auxiliary_tag in plugin.auxiliary_tags {
            self.stream.register_tag(auxiliary_tag);
            self.auxiliary_lookup.entry(auxiliary_tag).or_insert(plugin.tag);
        }

        if let Some(second_tag) = plugin.second_tag {
            let joined = format!("{}_{}", plugin.tag, second_tag);
            self.stream.register_tag(&joined);
            self.plugin_lookup
                .entry(joined)
                .or_default()
                .push(ParserPlugin {
                    second_tag: None,
                    ..plugin
                });
        }

        self.plugin_lookup
            .entry(plugin.tag.to_string())
            .or_default()
            .push(plugin);
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Consumes documentation comments and bare identifiers, in order.
    pub fn parse_leading_annotations(&mut self) -> Vec<Annotation> {
        let mut annotations = vec![];

        while is_annotation_kind(self.stream.look_ahead_1_token().kind) {
            let token = self.stream.consume_buffered_token();
            annotations.push(match token.kind {
                TokenKind::Documentation => Annotation::Documentation(token),
                _ => Annotation::Named(token),
            });
        }

        annotations
    }

    /// Consumes `: annotation` pairs, one annotation per colon.
    pub fn parse_trailing_annotations(&mut self) -> Result<Vec<Annotation>, Error> {
        let mut annotations = vec![];

        while self.stream.advance_over_look_ahead_1_token(TokenKind::Colon) {
            match self.stream.look_ahead_1_token().kind {
                TokenKind::Documentation => {
                    let documentation = self.stream.consume_buffered_token();
                    annotations.push(Annotation::Documentation(documentation))
                }
                TokenKind::Identifier => {
                    annotations.push(Annotation::Named(self.stream.consume_buffered_token()))
                }
                actual_kind => {
                    let token = self.stream.look_ahead_1_token();
                    return Err(Error::new(
                        ErrorImpl::ExpectedAnnotation {
                            actual_kind,
                            actual_text: token.text.clone(),
                        },
                        token.position.clone(),
                    ));
                }
            }
        }

        Ok(annotations)
    }

    pub fn parse_path(&mut self) -> Result<Path, Error> {
        let mut path = Path::new(self.stream.consume_expected_token(TokenKind::Identifier)?);

        while self.stream.advance_over_look_ahead_1_token(TokenKind::Dot) {
            path = path.extend_path(self.stream.consume_expected_token(TokenKind::Identifier)?);
        }

        Ok(path)
    }

    pub fn parse_code_element_name(&mut self) -> Result<CodeElementName, Error> {
        self.parse_path()
    }

    /// `( [name ANN (, name ANN)*] )`
    pub fn parse_parameters(&mut self) -> Result<Vec<Parameter>, Error> {
        let mut parameters = vec![];

        self.stream.consume_expected_token(TokenKind::OpenParen)?;
        if self.stream.advance_over_look_ahead_1_token(TokenKind::CloseParen) {
            return Ok(parameters);
        }

        loop {
            let name = self.parse_code_element_name()?;
            let trailing_annotations = self.parse_trailing_annotations()?;
            parameters.push(Parameter {
                name,
                trailing_annotations,
            });

            if !self.stream.advance_over_look_ahead_1_token(TokenKind::Comma) {
                break;
            }
        }

        self.stream.consume_expected_token(TokenKind::CloseParen)?;
        Ok(parameters)
    }

    /// Parses one declaration or statement by dispatching on its tag.
    pub fn parse_code_element(&mut self) -> Result<CodeElement, Error> {
        let leading_annotations = self.parse_leading_annotations();
        let token = self.stream.look_ahead_1_token().clone();

        if token.kind.is_error() {
            return Err(Error::new(
                ErrorImpl::LexicalError {
                    kind: token.kind,
                    text: token.text,
                },
                token.position,
            ));
        }

        if token.kind == TokenKind::Tag || token.kind.is_keyword() {
            if let Some(plugin) = self.select_plugin(token.tag_name())? {
                let tag = self.stream.consume_buffered_token();
                if let Some(second_tag) = plugin.second_tag {
                    self.stream
                        .consume_expected_token_value(TokenKind::Identifier, second_tag)?;
                }

                debug!(
                    tag = plugin.tag,
                    second_tag = ?plugin.second_tag,
                    position = %tag.position,
                    "dispatching code element"
                );
                return (plugin.handler)(self, leading_annotations, tag);
            }

            if let Some(owner) = self.auxiliary_lookup.get(token.tag_name()) {
                return Err(Error::new(
                    ErrorImpl::MisplacedAuxiliaryTag {
                        tag: token.tag_name().to_string(),
                        owner: owner.to_string(),
                    },
                    token.position,
                ));
            }
        }

        Err(Error::new(
            ErrorImpl::UnrecognisedCodeElement { token: token.text },
            token.position,
        ))
    }

    /// Picks the plugin for a tag, looking at the following token when several
    /// plugins share the tag and differ by their second word.
    fn select_plugin(&mut self, tag: &str) -> Result<Option<ParserPlugin>, Error> {
        let candidates = match self.plugin_lookup.get(tag) {
            Some(candidates) => candidates.clone(),
            None => return Ok(None),
        };

        if candidates.iter().all(|plugin| plugin.second_tag.is_none()) {
            return Ok(candidates.first().copied());
        }

        let second = self.stream.look_ahead_2_token();
        let selected = candidates
            .iter()
            .find(|plugin| plugin.second_tag == Some(second.text.as_str()))
            .or_else(|| candidates.iter().find(|plugin| plugin.second_tag.is_none()));

        match selected {
            Some(plugin) => Ok(Some(*plugin)),
            None => Err(Error::new(
                ErrorImpl::UnrecognisedCodeElement {
                    token: format!("{} {}", tag, second.text),
                },
                second.position.clone(),
            )),
        }
    }

    /// Whether a sequence of code elements ends here: at `end`, at the end of
    /// input, or at any auxiliary tag.
    pub fn is_at_sequence_end(&mut self) -> bool {
        let token = self.stream.look_ahead_1_token();

        match token.kind {
            TokenKind::End | TokenKind::EOF => true,
            TokenKind::Tag => self.auxiliary_lookup.contains_key(token.tag_name()),
            _ => false,
        }
    }

    /// Whether `token` is a tag or keyword some plugin is dispatched on.
    pub fn is_plugin_tag(&self, token: &Token) -> bool {
        (token.kind == TokenKind::Tag || token.kind.is_keyword())
            && self.plugin_lookup.contains_key(token.tag_name())
    }

    /// Parses code elements until `end`, the end of input or an auxiliary tag.
    /// The terminator is left for the caller.
    pub fn parse_code_elements(&mut self) -> Result<Vec<CodeElement>, Error> {
        let mut code_elements = vec![];

        while !self.is_at_sequence_end() {
            code_elements.push(self.parse_code_element()?);
        }

        Ok(code_elements)
    }

    pub fn has_look_ahead_tag(&mut self, tag: &str) -> bool {
        let token = self.stream.look_ahead_1_token();
        token.kind == TokenKind::Tag && token.tag_name() == tag
    }

    /// Consumes the next token if it is the tag `tag`.
    pub fn advance_over_tag(&mut self, tag: &str) -> Option<Token> {
        if self.has_look_ahead_tag(tag) {
            Some(self.stream.consume_buffered_token())
        } else {
            None
        }
    }

    pub fn consume_end(&mut self) -> Result<Token, Error> {
        self.stream.consume_expected_token(TokenKind::End)
    }

    fn parse_use_declarations(&mut self) -> Result<Vec<UseDeclaration>, Error> {
        let mut use_declarations = vec![];

        while self.stream.has_look_ahead_1_token(TokenKind::Use) {
            let first_token = self.stream.consume_buffered_token();
            let path = self.parse_path()?;
            let synonym = if self.stream.advance_over_look_ahead_1_token(TokenKind::As) {
                Some(self.stream.consume_expected_token(TokenKind::Identifier)?)
            } else {
                None
            };

            use_declarations.push(UseDeclaration {
                first_token,
                path,
                synonym,
            });
        }

        Ok(use_declarations)
    }

    /// `use` declarations followed by exactly one code element.
    pub fn parse_compilation_unit(&mut self) -> Result<CompilationUnit, Error> {
        let use_declarations = self.parse_use_declarations()?;
        let code_element = self.parse_code_element()?;
        let eof = self.stream.consume_expected_token(TokenKind::EOF)?;

        debug!(use_declarations = use_declarations.len(), "parsed compilation unit");
        Ok(CompilationUnit {
            use_declarations,
            code_elements: vec![code_element],
            eof,
        })
    }

    /// `use` declarations followed by any number of code elements. A stray
    /// `end` or auxiliary tag at the top level is an error.
    pub fn parse_script_unit(&mut self) -> Result<CompilationUnit, Error> {
        let use_declarations = self.parse_use_declarations()?;

        let mut code_elements = vec![];
        while !self.stream.has_look_ahead_1_token(TokenKind::EOF) {
            code_elements.push(self.parse_code_element()?);
        }
        let eof = self.stream.consume_expected_token(TokenKind::EOF)?;

        debug!(
            use_declarations = use_declarations.len(),
            code_elements = code_elements.len(),
            "parsed script"
        );
        Ok(CompilationUnit {
            use_declarations,
            code_elements,
            eof,
        })
    }
}

/// Parses a source file holding `use` declarations and one top-level code element.
///
/// # Arguments
///
/// * `source` - The full source text
/// * `file` - Label used in token positions and diagnostics
///
/// # Returns
///
/// The compilation unit, or the first syntax error encountered.
pub fn parse(source: String, file: Option<String>) -> Result<CompilationUnit, Error> {
    Parser::new(source, file).parse_compilation_unit()
}

/// Like [`parse`], but accepts any number of top-level code elements.
pub fn parse_script(source: String, file: Option<String>) -> Result<CompilationUnit, Error> {
    Parser::new(source, file).parse_script_unit()
}
