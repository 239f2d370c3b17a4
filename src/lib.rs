#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based source location together with the label of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub file: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Rc<String>, line: u32, column: u32) -> Self {
        Position { file, line, column }
    }

    pub fn null() -> Self {
        Position::new(Rc::new(String::from("<null>")), 0, 0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth((line as usize).checked_sub(1)?)
        .map(|text| text.trim_end_matches('\r'))
}

/// Formats a syntax error as a caret diagnostic against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (expected Identifier, found `end` (End))
/// -> main.src
///   |
/// 3 | function end
///   | ---------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line(source, position.line).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\n\n    Testing { }\n";
        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 2), Some("second"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("    Testing { }"));
        assert_eq!(super::get_line(source, 0), None);
        assert_eq!(super::get_line(source, 9), None);
    }

    #[test]
    fn test_position_display() {
        let position = Position::new(Rc::new("main.src".to_string()), 3, 14);
        assert_eq!(position.to_string(), "main.src:3:14");
    }

    #[test]
    fn test_render_error() {
        let source = "module a\n  function end\nend";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected_kind: TokenKind::Identifier,
                expected_text: None,
                actual_kind: TokenKind::End,
                actual_text: "end".to_string(),
            },
            Position::new(Rc::new("main.src".to_string()), 2, 12),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: UnexpectedToken ("));
        assert_eq!(lines[1], "-> main.src");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | function end");
        assert_eq!(lines[4], "  | ---------^");
    }
}
