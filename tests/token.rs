extern crate slate_lang;

use slate_lang::literal::Literal;
use slate_lang::token::{Token, Type};

#[test]
fn create_token() {
    let token = Token::new(Type::LeftParen, "(".to_string(), None, 1);

    assert_eq!(token.r#type, Type::LeftParen);
    assert_eq!(token.lexeme, "(");
    assert_eq!(token.literal, None);
    assert_eq!(token.line, 1);
}

#[test]
fn create_token_from_str() {
    let token = Token::from("init");

    assert_eq!(token.r#type, Type::Identifier);
    assert_eq!(token.lexeme, "init");
    assert_eq!(token.literal, None);
    assert_eq!(token.line, 0);
}

#[test]
fn display_renders_kind_lexeme_literal() {
    let token = Token::new(Type::Var, "var".to_string(), None, 1);
    assert_eq!(format!("{token}"), "VAR var null");

    let token = Token::new(Type::Number, "1".to_string(), Some(Literal::Number(1.0)), 1);
    assert_eq!(format!("{token}"), "NUMBER 1 1.0");

    let token = Token::new(
        Type::String,
        "\"str\"".to_string(),
        Some(Literal::from("str")),
        1,
    );
    assert_eq!(format!("{token}"), "STRING \"str\" str");
}

#[test]
fn eof_displays_with_empty_lexeme() {
    let token = Token::new(Type::EOF, String::new(), None, 3);
    assert_eq!(format!("{token}"), "EOF  null");
}
