//! Tokenizer: a single permissive left-to-right pass over the source text.

use std::fmt;

use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{alpha1, alphanumeric0, char, multispace1};
use nom::combinator::{map, recognize, value};
use nom::sequence::pair;
use nom::IResult;

use crate::error::ParseError;

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    LeftParen,
    RightParen,
    Equals,
    Comma,
}

#[derive(Clone, Debug)]
enum Lexeme<'a> {
    Space,
    Number(&'a str),
    Identifier(&'a str),
    Symbol(Token),
}

/// Split `input` into tokens. Whitespace is skipped and characters that
/// cannot start a token are dropped silently; the only failure is a run of
/// digits and dots that does not form a number (`1.2.3`, `.`).
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        match lexeme(rest) {
            Ok((next, lexeme)) => {
                match lexeme {
                    Lexeme::Space => {}
                    Lexeme::Number(text) => tokens.push(number_token(text)?),
                    Lexeme::Identifier(text) => tokens.push(Token::Identifier(text.to_string())),
                    Lexeme::Symbol(token) => tokens.push(token),
                }
                rest = next;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    Ok(tokens)
}

fn number_token(text: &str) -> Result<Token, ParseError> {
    text.parse::<f64>()
        .map(Token::Number)
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        value(Lexeme::Space, multispace1),
        map(
            take_while1(|c: char| c.is_ascii_digit() || c == '.'),
            Lexeme::Number,
        ),
        map(recognize(pair(alpha1, alphanumeric0)), Lexeme::Identifier),
        map(symbol, Lexeme::Symbol),
    ))(input)
}

fn symbol(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Plus, char('+')),
        value(Token::Minus, char('-')),
        value(Token::Multiply, char('*')),
        value(Token::Divide, char('/')),
        value(Token::Power, char('^')),
        value(Token::LeftParen, char('(')),
        value(Token::RightParen, char(')')),
        value(Token::Equals, char('=')),
        value(Token::Comma, char(',')),
    ))(input)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Identifier(name) => write!(f, "'{name}'"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Multiply => write!(f, "'*'"),
            Token::Divide => write!(f, "'/'"),
            Token::Power => write!(f, "'^'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Equals => write!(f, "'='"),
            Token::Comma => write!(f, "','"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_numbers_identifiers_and_symbols() {
        let tokens = tokenize("sin(x2) + 3.5*y^2 = 1, 2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("sin".to_string()),
                Token::LeftParen,
                Token::Identifier("x2".to_string()),
                Token::RightParen,
                Token::Plus,
                Token::Number(3.5),
                Token::Multiply,
                Token::Identifier("y".to_string()),
                Token::Power,
                Token::Number(2.0),
                Token::Equals,
                Token::Number(1.0),
                Token::Comma,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn digits_then_letters_split() {
        let tokens = tokenize("2x").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(2.0), Token::Identifier("x".to_string())]
        );
    }

    #[test]
    fn stray_characters_are_dropped() {
        let tokens = tokenize("1 # $ 2 ∫ ?").unwrap();
        assert_eq!(tokens, vec![Token::Number(1.0), Token::Number(2.0)]);
    }

    #[test]
    fn malformed_number_is_rejected() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
