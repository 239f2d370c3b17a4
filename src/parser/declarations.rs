use crate::{
    ast::{
        ast::{Annotation, CodeElement, CodeElementType},
        declarations::{
            EnumerationTypeDecl, FunctionDecl, NamespaceDecl, SymbolDecl, TypeDecl, ValueDecl,
        },
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_required_expression, parser::Parser};

// NAME ANN BODY end
fn parse_namespace_decl(
    parser: &mut Parser,
    kind: CodeElementType,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let name = parser.parse_code_element_name()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::Namespace(NamespaceDecl {
        kind,
        first_token,
        leading_annotations,
        name,
        trailing_annotations,
        code_elements,
    }))
}

pub fn parse_module_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_namespace_decl(parser, CodeElementType::Module, leading, tag)
}

pub fn parse_package_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_namespace_decl(parser, CodeElementType::Package, leading, tag)
}

// NAME (PARAMS) ANN BODY end
fn parse_callable_decl(
    parser: &mut Parser,
    kind: CodeElementType,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let name = parser.parse_code_element_name()?;
    let parameters = parser.parse_parameters()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::Function(FunctionDecl {
        kind,
        first_token,
        leading_annotations,
        name,
        parameters,
        trailing_annotations,
        code_elements,
    }))
}

pub fn parse_function_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_callable_decl(parser, CodeElementType::Function, leading, tag)
}

pub fn parse_behavior_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_callable_decl(parser, CodeElementType::Behavior, leading, tag)
}

// NAME ANN [= EXPR]
fn parse_value_like_decl(
    parser: &mut Parser,
    kind: CodeElementType,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let name = parser.parse_code_element_name()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    let initializer = if parser.stream().advance_over_look_ahead_1_token(TokenKind::Equals) {
        Some(parse_required_expression(parser)?)
    } else {
        None
    };

    Ok(CodeElement::Value(ValueDecl {
        kind,
        first_token,
        leading_annotations,
        name,
        trailing_annotations,
        initializer,
    }))
}

pub fn parse_constant_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_value_like_decl(parser, CodeElementType::Constant, leading, tag)
}

pub fn parse_value_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_value_like_decl(parser, CodeElementType::Value, leading, tag)
}

pub fn parse_variable_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_value_like_decl(parser, CodeElementType::Variable, leading, tag)
}

pub fn parse_enumeration_type_decl(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let name = parser.parse_code_element_name()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let symbols = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::EnumerationType(EnumerationTypeDecl {
        first_token,
        leading_annotations,
        name,
        trailing_annotations,
        symbols,
    }))
}

pub fn parse_symbol_decl(
    parser: &mut Parser,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let name = parser.parse_code_element_name()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;

    Ok(CodeElement::Symbol(SymbolDecl {
        first_token,
        leading_annotations,
        name,
        trailing_annotations,
    }))
}

fn parse_type_decl(
    parser: &mut Parser,
    kind: CodeElementType,
    leading_annotations: Vec<Annotation>,
    first_token: Token,
) -> Result<CodeElement, Error> {
    let name = parser.parse_code_element_name()?;
    let trailing_annotations = parser.parse_trailing_annotations()?;
    let code_elements = parser.parse_code_elements()?;
    parser.consume_end()?;

    Ok(CodeElement::Type(TypeDecl {
        kind,
        first_token,
        leading_annotations,
        name,
        trailing_annotations,
        code_elements,
    }))
}

pub fn parse_object_type_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_type_decl(parser, CodeElementType::ObjectType, leading, tag)
}

pub fn parse_structure_type_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_type_decl(parser, CodeElementType::StructureType, leading, tag)
}

pub fn parse_variant_type_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_type_decl(parser, CodeElementType::VariantType, leading, tag)
}

pub fn parse_graph_type_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_type_decl(parser, CodeElementType::GraphType, leading, tag)
}

pub fn parse_edge_type_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_type_decl(parser, CodeElementType::EdgeType, leading, tag)
}

pub fn parse_vertex_type_decl(
    parser: &mut Parser,
    leading: Vec<Annotation>,
    tag: Token,
) -> Result<CodeElement, Error> {
    parse_type_decl(parser, CodeElementType::VertexType, leading, tag)
}
