//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and names
//! - Integer literals
//! - Operators and punctuation
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "val fn match with else end".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Val);
    assert_eq!(tokens[1].kind, TokenKind::Fn);
    assert_eq!(tokens[2].kind, TokenKind::Match);
    assert_eq!(tokens[3].kind, TokenKind::With);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::End);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_names() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Name);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Name);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Name);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 100".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - *".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) = |".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::Equals);
    assert_eq!(tokens[3].kind, TokenKind::VBar);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_arrow_is_not_minus() {
    let source = "-> - ->".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Arrow);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Arrow);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_val_declaration() {
    let source = "val x = 1".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Val);
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Equals);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "1");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_fn_literal() {
    let source = "fn x y -> x + y".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Fn,
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Arrow,
            TokenKind::Name,
            TokenKind::Plus,
            TokenKind::Name,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_match_expression() {
    let source = "match x with | 1 -> a else b end".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Match,
            TokenKind::Name,
            TokenKind::With,
            TokenKind::VBar,
            TokenKind::Integer,
            TokenKind::Arrow,
            TokenKind::Name,
            TokenKind::Else,
            TokenKind::Name,
            TokenKind::End,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "val x = 1 // trailing comment\n// full line\nx".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Val,
            TokenKind::Name,
            TokenKind::Equals,
            TokenKind::Integer,
            TokenKind::Name,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_no_whitespace() {
    let source = "(x+y)*1".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::Name,
            TokenKind::Plus,
            TokenKind::Name,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let source = "val x".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 5);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "val x = #".to_string();
    let result = tokenize(source, Some("test.sable".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_keyword_prefix_is_a_name() {
    // "value" starts with "val" but is a single name token
    let source = "value matches ending".to_string();
    let tokens = tokenize(source, Some("test.sable".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].value, "value");
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].value, "matches");
    assert_eq!(tokens[2].kind, TokenKind::Name);
    assert_eq!(tokens[2].value, "ending");
}
