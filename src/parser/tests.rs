//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Namespaces, functions, values, enumerations and types
//! - Statements with auxiliary tags (if/else, match/where, check/detect)
//! - Two-word tags and their disambiguation
//! - Expressions and operator precedence
//! - Syntax errors

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Annotation, CodeElement, CodeElementNode, CodeElementType, Node},
        expressions::{Expr, LiteralKind},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::LexerOptions, tokens::TokenKind},
};

use super::{
    declarations::{parse_object_type_decl, parse_symbol_decl},
    expr::{parse_expression, parse_required_expression},
    lookups::ParserPlugin,
    parser::{parse, parse_script, Parser},
};

fn parse_one(source: &str) -> CodeElement {
    let unit = parse(source.to_string(), Some("test.src".to_string()))
        .unwrap_or_else(|error| panic!("failed to parse {:?}: {}", source, error));
    unit.code_elements[0].clone()
}

fn parse_many(source: &str) -> Vec<CodeElement> {
    parse_script(source.to_string(), Some("test.src".to_string()))
        .unwrap_or_else(|error| panic!("failed to parse {:?}: {}", source, error))
        .code_elements
}

fn parse_error(source: &str) -> Error {
    match parse_script(source.to_string(), Some("test.src".to_string())) {
        Ok(unit) => panic!("expected an error, parsed {:?}", unit),
        Err(error) => error,
    }
}

fn annotation_texts(annotations: &[Annotation]) -> Vec<&str> {
    annotations.iter().map(|annotation| annotation.text()).collect()
}

fn kinds(elements: &[CodeElement]) -> Vec<CodeElementType> {
    elements.iter().map(|element| element.get_code_element_type()).collect()
}

/// Fully parenthesised rendering of an expression tree.
fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal(literal) => literal.token.text.clone(),
        Expr::Identifier(identifier) => identifier.token.text.clone(),
        Expr::Prefix(prefix) => format!("({}{})", prefix.operator.text, render(&prefix.operand)),
        Expr::Operator(operator) => format!(
            "({} {} {})",
            render(&operator.left),
            operator.operator.text,
            render(&operator.right)
        ),
        Expr::Call(call) => format!(
            "{}({})",
            render(&call.callee),
            call.arguments.iter().map(render).collect::<Vec<_>>().join(", ")
        ),
        Expr::Member(member) => format!(
            "{}{}{}",
            render(&member.object),
            member.operator.text,
            member.member.text
        ),
    }
}

fn render_expression(source: &str) -> String {
    let mut parser = Parser::new(source.to_string(), None);
    let expr = parse_required_expression(&mut parser)
        .unwrap_or_else(|error| panic!("failed to parse {:?}: {}", source, error));

    assert!(
        parser.stream().has_look_ahead_1_token(TokenKind::EOF),
        "expression {:?} was not fully consumed",
        source
    );
    render(&expr)
}

#[test]
fn test_parse_module_with_annotations() {
    let source = "/** The module */
exported module a.b : stable
  function f(x : int, y) : pure
    return x + y * 2
  end
  value answer : public = 42
end";

    let CodeElement::Namespace(module) = parse_one(source) else {
        panic!("expected a module");
    };

    assert_eq!(module.kind, CodeElementType::Module);
    assert_eq!(module.name.joined(), "a.b");
    assert_eq!(module.name.len(), 2);
    assert_eq!(
        annotation_texts(&module.leading_annotations),
        vec!["/** The module */", "exported"]
    );
    assert!(matches!(module.leading_annotations[0], Annotation::Documentation(_)));
    assert_eq!(annotation_texts(&module.trailing_annotations), vec!["stable"]);
    assert_eq!(
        kinds(&module.code_elements),
        vec![CodeElementType::Function, CodeElementType::Value]
    );

    let CodeElement::Function(function) = &module.code_elements[0] else {
        panic!("expected a function");
    };
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[0].name.joined(), "x");
    assert_eq!(annotation_texts(&function.parameters[0].trailing_annotations), vec!["int"]);
    assert!(function.parameters[1].trailing_annotations.is_empty());
    assert_eq!(annotation_texts(&function.trailing_annotations), vec!["pure"]);

    let CodeElement::Return(ret) = &function.code_elements[0] else {
        panic!("expected a return");
    };
    assert_eq!(ret.value.as_ref().map(render).as_deref(), Some("(x + (y * 2))"));
}

#[test]
fn test_package_and_behavior() {
    let CodeElement::Namespace(package) = parse_one("package p\n  behavior b()\n  end\nend") else {
        panic!("expected a package");
    };

    assert_eq!(package.kind, CodeElementType::Package);
    assert_eq!(kinds(&package.code_elements), vec![CodeElementType::Behavior]);
    assert!(package.leading_annotations.is_empty());
    assert!(package.trailing_annotations.is_empty());
}

#[test]
fn test_value_declarations() {
    let elements = parse_many("constant pi = 3.14\nvariable count\nvalue name : text = \"x\"");

    assert_eq!(
        kinds(&elements),
        vec![CodeElementType::Constant, CodeElementType::Variable, CodeElementType::Value]
    );

    let CodeElement::Value(count) = &elements[1] else {
        panic!("expected a variable");
    };
    assert!(count.initializer.is_none());

    let CodeElement::Value(name) = &elements[2] else {
        panic!("expected a value");
    };
    assert_eq!(annotation_texts(&name.trailing_annotations), vec!["text"]);
    let Some(Expr::Literal(literal)) = &name.initializer else {
        panic!("expected a literal initializer");
    };
    assert_eq!(literal.kind, LiteralKind::Text);
    assert_eq!(literal.text_value().as_deref(), Some("x"));
}

#[test]
fn test_enumeration_type() {
    let source = "enumeration type Color : exported\n  symbol red\n  symbol green : default\nend";
    let CodeElement::EnumerationType(enumeration) = parse_one(source) else {
        panic!("expected an enumeration");
    };

    assert_eq!(enumeration.name.joined(), "Color");
    assert_eq!(annotation_texts(&enumeration.trailing_annotations), vec!["exported"]);
    assert_eq!(
        kinds(&enumeration.symbols),
        vec![CodeElementType::Symbol, CodeElementType::Symbol]
    );
    assert_eq!(
        annotation_texts(enumeration.symbols[1].trailing_annotations()),
        vec!["default"]
    );
}

#[test]
fn test_joined_two_word_tag() {
    let element = parse_one("enumeration_type a.b.C\nend");

    assert_eq!(element.get_code_element_type(), CodeElementType::EnumerationType);
    assert_eq!(element.name().map(|name| name.joined()).as_deref(), Some("a.b.C"));
}

#[test]
fn test_type_declarations() {
    let source = "object type Point
  value x
  value y
end
structure type S
end
variant type V
end
graph type G
end
edge type E
end
vertex type N
end";

    let elements = parse_many(source);

    assert_eq!(
        kinds(&elements),
        vec![
            CodeElementType::ObjectType,
            CodeElementType::StructureType,
            CodeElementType::VariantType,
            CodeElementType::GraphType,
            CodeElementType::EdgeType,
            CodeElementType::VertexType,
        ]
    );
    assert_eq!(elements[0].code_elements().len(), 2);
}

#[test]
fn test_if_else_chain() {
    let source = "if a < 1
  return 1
else if a < 2
  return 2
else
  return 3
end";

    let CodeElement::If(stmt) = parse_one(source) else {
        panic!("expected an if statement");
    };

    assert_eq!(stmt.branches.len(), 2);
    assert_eq!(render(&stmt.branches[0].guard), "(a < 1)");
    assert_eq!(render(&stmt.branches[1].guard), "(a < 2)");
    assert_eq!(stmt.branches[1].first_token.text, "if");
    assert_eq!(stmt.branches[1].first_token.line(), 3);
    assert_eq!(stmt.else_code_elements.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_nested_if_owns_its_else() {
    let source = "if a
  if b
    return 1
  else
    return 2
  end
else
  return 3
end";

    let CodeElement::If(outer) = parse_one(source) else {
        panic!("expected an if statement");
    };

    assert_eq!(outer.branches.len(), 1);
    let CodeElement::If(inner) = &outer.branches[0].code_elements[0] else {
        panic!("expected a nested if statement");
    };
    assert!(inner.else_code_elements.is_some());
    assert!(outer.else_code_elements.is_some());
}

#[test]
fn test_unless() {
    let source = "unless done\n  call log(\"x\")\nelse\n  return\nend";
    let CodeElement::Unless(stmt) = parse_one(source) else {
        panic!("expected an unless statement");
    };

    assert_eq!(render(&stmt.guard), "done");
    assert_eq!(kinds(&stmt.code_elements), vec![CodeElementType::Call]);

    let else_code_elements = stmt.else_code_elements.expect("else block");
    let CodeElement::Return(ret) = &else_code_elements[0] else {
        panic!("expected a return");
    };
    assert!(ret.value.is_none());
}

#[test]
fn test_match() {
    let source = "match color
where red
  return 1
where green
  return 2
else
  return 0
end";

    let CodeElement::Match(stmt) = parse_one(source) else {
        panic!("expected a match statement");
    };

    assert_eq!(render(&stmt.subject), "color");
    assert_eq!(stmt.cases.len(), 2);
    assert_eq!(render(&stmt.cases[1].guard), "green");
    assert_eq!(stmt.cases[1].first_token.text, "where");
    assert!(stmt.else_code_elements.is_some());
}

#[test]
fn test_check_detect_regardless() {
    let source = "check
  call risky()
detect failure : logged
  raise failure
regardless
  call cleanup()
end";

    let CodeElement::Check(stmt) = parse_one(source) else {
        panic!("expected a check statement");
    };

    assert_eq!(kinds(&stmt.checked_code_elements), vec![CodeElementType::Call]);
    assert_eq!(stmt.detect_blocks.len(), 1);

    let detect = &stmt.detect_blocks[0];
    assert_eq!(detect.name.joined(), "failure");
    assert_eq!(annotation_texts(&detect.trailing_annotations), vec!["logged"]);
    assert_eq!(kinds(&detect.code_elements), vec![CodeElementType::Raise]);
    assert_eq!(
        stmt.regardless_code_elements.as_deref().map(kinds),
        Some(vec![CodeElementType::Call])
    );
}

#[test]
fn test_check_without_detect() {
    let CodeElement::Check(stmt) = parse_one("check : guarded\n  assert ready\nend") else {
        panic!("expected a check statement");
    };

    assert_eq!(annotation_texts(&stmt.trailing_annotations), vec!["guarded"]);
    assert!(stmt.detect_blocks.is_empty());
    assert!(stmt.regardless_code_elements.is_none());
}

#[test]
fn test_repeat_variants() {
    let source = "repeat for item : element in items
  call visit(item)
end
repeat until done
  set count += 1
end
repeat while count < 10
  set count = count + 1
end";

    let elements = parse_many(source);
    assert_eq!(
        kinds(&elements),
        vec![
            CodeElementType::RepeatFor,
            CodeElementType::RepeatUntil,
            CodeElementType::RepeatWhile,
        ]
    );

    let CodeElement::RepeatFor(repeat) = &elements[0] else {
        panic!("expected repeat for");
    };
    assert_eq!(repeat.variable.joined(), "item");
    assert_eq!(annotation_texts(&repeat.trailing_annotations), vec!["element"]);
    assert_eq!(render(&repeat.iterable), "items");

    let CodeElement::RepeatWhile(repeat) = &elements[2] else {
        panic!("expected repeat while");
    };
    assert_eq!(render(&repeat.condition), "(count < 10)");
}

#[test]
fn test_repeat_with_unknown_second_word() {
    let error = parse_error("repeat forever\nend");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedCodeElement {
            token: "repeat forever".to_string()
        }
    );
    assert_eq!(error.get_position().column, 8);
}

#[test]
fn test_second_word_must_be_a_plain_word() {
    let mut parser = Parser::new("shape kind Box\nend".to_string(), None);
    parser.plugin(ParserPlugin::two_word("shape", "kind", parse_object_type_decl));
    let unit = parser.parse_compilation_unit().expect("parse");
    assert_eq!(
        unit.code_element().map(|element| element.get_code_element_type()),
        Some(CodeElementType::ObjectType)
    );

    let mut parser = Parser::new("shape kind Box\nend".to_string(), None);
    parser.plugin(ParserPlugin::two_word("shape", "kind", parse_object_type_decl));
    parser.plugin(ParserPlugin::new("kind", parse_symbol_decl));
    let error = parser.parse_compilation_unit().unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected_kind: TokenKind::Identifier,
            expected_text: Some("kind".to_string()),
            actual_kind: TokenKind::Tag,
            actual_text: "kind".to_string(),
        }
    );
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_call_statement() {
    let CodeElement::Call(stmt) = parse_one("call io.print(\"x\", 1 + 2) : traced") else {
        panic!("expected a call statement");
    };

    assert_eq!(stmt.callee.joined(), "io.print");
    assert_eq!(
        stmt.arguments.iter().map(render).collect::<Vec<_>>(),
        vec!["\"x\"", "(1 + 2)"]
    );
    assert_eq!(annotation_texts(&stmt.trailing_annotations), vec!["traced"]);
}

#[test]
fn test_assignment_operators() {
    let elements = parse_many("set a = 1\nset a.b -= 2\nset c ^= 3");

    let operators: Vec<TokenKind> = elements
        .iter()
        .map(|element| match element {
            CodeElement::Assignment(stmt) => stmt.operator.kind,
            other => panic!("expected an assignment, got {:?}", other),
        })
        .collect();

    assert_eq!(
        operators,
        vec![TokenKind::Equals, TokenKind::DashEquals, TokenKind::CaretEquals]
    );

    let error = parse_error("set a < 1");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected_kind: TokenKind::Equals,
            actual_kind: TokenKind::Less,
            ..
        }
    ));
}

#[test]
fn test_statement_leading_annotations() {
    let source = "function f()\n  /** doc */ audited assert x > 0\nend";
    let CodeElement::Function(function) = parse_one(source) else {
        panic!("expected a function");
    };

    let stmt = &function.code_elements[0];
    assert_eq!(stmt.get_code_element_type(), CodeElementType::Assert);
    assert_eq!(annotation_texts(stmt.leading_annotations()), vec!["/** doc */", "audited"]);
    assert_eq!(stmt.first_token().text, "assert");
    assert_eq!((stmt.first_token().line(), stmt.first_token().column()), (2, 22));
}

#[test]
fn test_bare_return_before_annotated_element() {
    let source = "function f()\n  return\n  exported value x = 1\n  return\n  \
                  deprecated audited function g()\n  end\n  return y\nend";
    let CodeElement::Function(function) = parse_one(source) else {
        panic!("expected a function");
    };

    assert_eq!(
        kinds(&function.code_elements),
        vec![
            CodeElementType::Return,
            CodeElementType::Value,
            CodeElementType::Return,
            CodeElementType::Function,
            CodeElementType::Return,
        ]
    );

    let values: Vec<Option<String>> = function
        .code_elements
        .iter()
        .filter_map(|element| match element {
            CodeElement::Return(stmt) => Some(stmt.value.as_ref().map(render)),
            _ => None,
        })
        .collect();
    assert_eq!(values, vec![None, None, Some("y".to_string())]);

    assert_eq!(
        annotation_texts(function.code_elements[1].leading_annotations()),
        vec!["exported"]
    );
    assert_eq!(
        annotation_texts(function.code_elements[3].leading_annotations()),
        vec!["deprecated", "audited"]
    );
}

#[test]
fn test_hash_tag_dispatch() {
    let element = parse_one("#function f()\nend");

    assert_eq!(element.get_code_element_type(), CodeElementType::Function);
    assert_eq!(element.first_token().text, "#function");
}

#[test]
fn test_use_declarations() {
    let unit = parse(
        "use x.y\nuse a.b.c as d\nmodule m\nend".to_string(),
        Some("test.src".to_string()),
    )
    .expect("compilation unit");

    assert_eq!(unit.use_declarations.len(), 2);
    assert_eq!(unit.use_declarations[0].path.joined(), "x.y");
    assert!(unit.use_declarations[0].synonym.is_none());
    assert_eq!(
        unit.use_declarations[1].synonym.as_ref().map(|token| token.text.as_str()),
        Some("d")
    );
    assert_eq!(unit.eof.kind, TokenKind::EOF);
}

#[test]
fn test_parse_script_accepts_empty_source() {
    let unit = parse_script(String::new(), None).expect("empty script");

    assert!(unit.code_elements.is_empty());
    assert!(unit.code_element().is_none());
}

#[test]
fn test_plugin_registry() {
    let parser = Parser::new(String::new(), None);

    assert_eq!(parser.get_plugin_lookup().get("repeat").map(Vec::len), Some(3));
    assert!(parser.get_plugin_lookup().contains_key("enumeration_type"));
    assert!(parser.get_plugin_lookup().contains_key("set"));
    assert!(!parser.get_plugin_lookup().contains_key("else"));
    assert_eq!(parser.get_auxiliary_lookup().get("else"), Some(&"if"));
    assert_eq!(parser.get_auxiliary_lookup().get("where"), Some(&"match"));
    assert_eq!(parser.get_auxiliary_lookup().get("detect"), Some(&"check"));
    assert_eq!(parser.get_auxiliary_lookup().get("regardless"), Some(&"check"));
}

#[test]
fn test_parser_skips_retained_trivia() {
    let options = LexerOptions {
        skip_white_space: false,
        skip_comments: false,
    };
    let source = "// header\nmodule m /* inline */\n  value x = 1 // trailing\nend\n";
    let mut parser = Parser::with_options(source.to_string(), None, options);

    let unit = parser.parse_compilation_unit().expect("parse");
    let module = unit.code_element().expect("module");
    assert_eq!(module.get_code_element_type(), CodeElementType::Module);
    assert_eq!(kinds(module.code_elements()), vec![CodeElementType::Value]);
    assert_eq!(unit.eof.kind, TokenKind::EOF);

    let mut parser = Parser::with_options("module m end".to_string(), None, options);
    assert!(parser.parse_compilation_unit().is_ok());
}

#[test]
fn test_expression_precedence() {
    assert_eq!(render_expression("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(render_expression("a - b - c"), "((a - b) - c)");
    assert_eq!(render_expression("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
    assert_eq!(render_expression("a ^ b * c"), "((a ^ b) * c)");
    assert_eq!(render_expression("(a + b) * c"), "((a + b) * c)");
    assert_eq!(render_expression("-a * b"), "((-a) * b)");
    assert_eq!(render_expression("~not~ flags ~and~ mask"), "((~not~flags) ~and~ mask)");
    assert_eq!(render_expression("$ count"), "($count)");
    assert_eq!(render_expression("a ?? b ~or~ c"), "(a ?? (b ~or~ c))");
    assert_eq!(render_expression("x < y ~and~ z"), "((x < y) ~and~ z)");
    assert_eq!(render_expression("1 .. n + 1"), "(1 .. (n + 1))");
    assert_eq!(render_expression("a ~shl~ 2 == b"), "((a ~shl~ 2) == b)");
}

#[test]
fn test_call_and_member_expressions() {
    assert_eq!(render_expression("f(a, b).c.?d"), "f(a, b).c.?d");
    assert_eq!(render_expression("a.b(c)"), "a.b(c)");
    assert_eq!(render_expression("f()"), "f()");
    assert_eq!(render_expression("-a.b"), "(-a.b)");
}

#[test]
fn test_literal_expressions() {
    for (source, kind) in [
        ("true", LiteralKind::Boolean),
        ("0b101", LiteralKind::BinaryInteger),
        ("42", LiteralKind::DecimalInteger),
        ("0xFF", LiteralKind::HexInteger),
        ("1.5e3", LiteralKind::Number),
        ("'text'", LiteralKind::Text),
        ("\"\"\"long\"\"\"", LiteralKind::MultilineText),
        ("$2024-01-31$", LiteralKind::DateTime),
        ("1.2.3", LiteralKind::Version),
        ("~/a+/", LiteralKind::RegularExpression),
        ("{{{ t }}}", LiteralKind::Template),
        ("`code`", LiteralKind::Code),
        ("self", LiteralKind::SelfReference),
        ("undefined", LiteralKind::Undefined),
        ("_", LiteralKind::Anonymous),
    ] {
        let mut parser = Parser::new(source.to_string(), None);
        match parse_expression(&mut parser) {
            Ok(Some(Expr::Literal(literal))) => assert_eq!(literal.kind, kind, "{}", source),
            other => panic!("{:?} parsed as {:?}", source, other),
        }
    }
}

#[test]
fn test_parse_expression_without_expression() {
    let mut parser = Parser::new("end".to_string(), None);

    assert_eq!(parse_expression(&mut parser), Ok(None));
    // The token is consumed either way.
    assert!(parser.stream().has_look_ahead_1_token(TokenKind::EOF));
}

#[test]
fn test_literal_views() {
    let source = r#"value s = "a\tbA\u{1F600}"
value v = 1.2.3-rc1+b5
value d = $2024-01-31T08:30:15.5Z$
value h = 0xFF
value n = 1_000
value u = 42u
value b = 0b1010
value t = true"#;

    let initializers: Vec<Expr> = parse_many(source)
        .into_iter()
        .map(|element| match element {
            CodeElement::Value(value) => value.initializer.expect("initializer"),
            other => panic!("expected a value, got {:?}", other),
        })
        .collect();

    let literal = |index: usize| match &initializers[index] {
        Expr::Literal(literal) => literal.clone(),
        other => panic!("expected a literal, got {:?}", other),
    };

    assert_eq!(literal(0).text_value().as_deref(), Some("a\tbA\u{1F600}"));

    let version = literal(1).version().expect("version");
    assert_eq!(
        (version.major.as_str(), version.minor.as_str(), version.patch.as_str()),
        ("1", "2", "3")
    );
    assert_eq!(version.prerelease.as_deref(), Some("rc1"));
    assert_eq!(version.build.as_deref(), Some("b5"));

    let date_time = literal(2).date_time().expect("date time");
    assert_eq!(date_time.date, Some((2024, 1, 31)));
    assert_eq!(date_time.time, Some((8, 30, 15)));
    assert_eq!(date_time.fraction.as_deref(), Some("5"));
    assert_eq!(date_time.zone.as_deref(), Some("Z"));

    assert_eq!(literal(3).as_integer(), Some(255));
    assert_eq!(literal(4).as_integer(), Some(1000));
    assert_eq!(literal(5).as_integer(), Some(42));
    assert_eq!(literal(6).as_integer(), Some(10));
    assert_eq!(literal(7).as_bool(), Some(true));
    assert_eq!(literal(7).as_integer(), None);
    assert_eq!(literal(3).text_value(), None);
}

#[test]
fn test_named_escapes_decode_only_as_hex() {
    let CodeElement::Value(value) = parse_one(r#"value s = "\u{ACE}\u{LATIN}A""#) else {
        panic!("expected a value");
    };
    let Some(Expr::Literal(literal)) = value.initializer else {
        panic!("expected a literal initializer");
    };

    assert_eq!(literal.text_value().as_deref(), Some("\u{ACE}\\u{LATIN}A"));
}

#[test]
fn test_misplaced_auxiliary_tag() {
    let error = parse("else\n  return\nend".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::MisplacedAuxiliaryTag {
            tag: "else".to_string(),
            owner: "if".to_string()
        }
    );
}

#[test]
fn test_auxiliary_tag_ends_a_body() {
    let error = parse_error("function f()\n  else\nend");

    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected_kind: TokenKind::End,
            actual_kind: TokenKind::Tag,
            ..
        }
    ));
    assert_eq!((error.get_position().line, error.get_position().column), (2, 3));
}

#[test]
fn test_script_rejects_stray_terminators() {
    assert_eq!(
        parse_error("value a\nelse").get_internal_error(),
        &ErrorImpl::MisplacedAuxiliaryTag {
            tag: "else".to_string(),
            owner: "if".to_string()
        }
    );
    assert_eq!(
        parse_error("value a\nend").get_internal_error(),
        &ErrorImpl::UnrecognisedCodeElement {
            token: "end".to_string()
        }
    );
}

#[test]
fn test_syntax_errors() {
    assert_eq!(
        parse_error("exported 42").get_internal_error(),
        &ErrorImpl::UnrecognisedCodeElement {
            token: "42".to_string()
        }
    );
    assert_eq!(
        parse_error("value x : 42").get_internal_error(),
        &ErrorImpl::ExpectedAnnotation {
            actual_kind: TokenKind::DecimalIntegerLiteral,
            actual_text: "42".to_string()
        }
    );
    assert_eq!(
        parse_error("value x = end").get_internal_error(),
        &ErrorImpl::ExpectedExpression {
            token: "end".to_string()
        }
    );
    assert_eq!(
        parse_error("module a\n  \"open\nend").get_internal_error(),
        &ErrorImpl::LexicalError {
            kind: TokenKind::ErrorUnclosedTextLiteral,
            text: "\"open".to_string()
        }
    );
    assert!(matches!(
        parse_error("module a").get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected_kind: TokenKind::End,
            actual_kind: TokenKind::EOF,
            ..
        }
    ));
    assert!(matches!(
        parse_error("value 1").get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected_kind: TokenKind::Identifier,
            actual_kind: TokenKind::DecimalIntegerLiteral,
            ..
        }
    ));
}

#[test]
fn test_parse_requires_single_element() {
    let error = parse("value a\nvalue b".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected_kind: TokenKind::EOF,
            expected_text: None,
            actual_kind: TokenKind::Tag,
            actual_text: "value".to_string(),
        }
    );
    assert_eq!(error.get_position().line, 2);
}
