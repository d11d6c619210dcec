//! Recursive-descent parser over the token stream produced by [`tokenize`].
//!
//! Precedence, lowest first: `+ -`, `* /` (and juxtaposition), `^`, unary
//! sign, primary. Note that `^` is left-associative here: `2^3^2` parses as
//! `(2^3)^2`.

use crate::error::ParseError;
use crate::expr::{BinaryOp, Expr, Func, UnaryOp};
use crate::lexer::{tokenize, Token};

pub fn parse_expr(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    let mut stream = TokenStream::new(&tokens);
    let expr = stream.parse_add_sub()?;
    stream.expect_end()?;
    Ok(expr)
}

/// Parse `lhs = rhs`. Exactly one top-level `=` is accepted.
pub fn parse_equation(input: &str) -> Result<(Expr, Expr), ParseError> {
    let tokens = tokenize(input)?;
    let mut stream = TokenStream::new(&tokens);
    let lhs = stream.parse_add_sub()?;
    if stream.next() != Some(&Token::Equals) {
        return Err(ParseError::MissingEquals);
    }
    let rhs = stream.parse_add_sub()?;
    stream.expect_end()?;
    Ok((lhs, rhs))
}

struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingTokens(token.clone())),
        }
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParseError> {
        let mut acc = self.parse_mul_div()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(acc),
            };
            self.pos += 1;
            let rhs = self.parse_mul_div()?;
            acc = Expr::Binary(op, acc.boxed(), rhs.boxed());
        }
    }

    fn parse_mul_div(&mut self) -> Result<Expr, ParseError> {
        let mut acc = self.parse_pow()?;
        loop {
            let op = match self.peek() {
                Some(Token::Multiply) => {
                    self.pos += 1;
                    BinaryOp::Mul
                }
                Some(Token::Divide) => {
                    self.pos += 1;
                    BinaryOp::Div
                }
                // `2x`, `3(x + 1)`, `x y`
                Some(Token::Number(_) | Token::Identifier(_) | Token::LeftParen) => BinaryOp::Mul,
                _ => return Ok(acc),
            };
            let rhs = self.parse_pow()?;
            acc = Expr::Binary(op, acc.boxed(), rhs.boxed());
        }
    }

    fn parse_pow(&mut self) -> Result<Expr, ParseError> {
        let mut acc = self.parse_unary()?;
        while self.eat(&Token::Power) {
            let exp = self.parse_unary()?;
            acc = Expr::Binary(BinaryOp::Pow, acc.boxed(), exp.boxed());
        }
        Ok(acc)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Plus) {
            Ok(Expr::Unary(UnaryOp::Plus, self.parse_unary()?.boxed()))
        } else if self.eat(&Token::Minus) {
            Ok(Expr::Unary(UnaryOp::Minus, self.parse_unary()?.boxed()))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Number(*n)),
            Some(Token::Identifier(name)) => {
                if self.eat(&Token::LeftParen) {
                    self.parse_call(name)
                } else {
                    Ok(Expr::Variable(name.clone()))
                }
            }
            Some(Token::LeftParen) => {
                let inner = self.parse_add_sub()?;
                self.close_paren()?;
                Ok(inner)
            }
            Some(token) => Err(ParseError::UnexpectedToken(token.clone())),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_call(&mut self, name: &str) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.eat(&Token::RightParen) {
            loop {
                args.push(self.parse_add_sub()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
            self.close_paren()?;
        }

        let func = Func::from_name(name);
        if let Some(expected) = func.arity() {
            if args.len() != expected {
                return Err(ParseError::Arity {
                    name: func.name().to_string(),
                    expected,
                    found: args.len(),
                });
            }
        }
        Ok(Expr::Function(func, args))
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        if self.eat(&Token::RightParen) {
            Ok(())
        } else {
            Err(ParseError::MissingClosingParen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, mul, neg, num, pow};

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn precedence_and_left_associative_power() {
        assert_eq!(
            parse_expr("1 + 2 * x^2").unwrap(),
            add(num(1.0), mul(num(2.0), pow(x(), num(2.0))))
        );
        assert_eq!(
            parse_expr("2^3^2").unwrap(),
            pow(pow(num(2.0), num(3.0)), num(2.0))
        );
    }

    #[test]
    fn unary_binds_tighter_than_power() {
        assert_eq!(parse_expr("-x^2").unwrap(), pow(neg(x()), num(2.0)));
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(
            parse_expr("3x^2").unwrap(),
            mul(num(3.0), pow(x(), num(2.0)))
        );
        assert_eq!(
            parse_expr("2(x + 1)").unwrap(),
            mul(num(2.0), add(x(), num(1.0)))
        );
    }

    #[test]
    fn function_calls() {
        assert_eq!(
            parse_expr("SIN(x)").unwrap(),
            Expr::Function(Func::Sin, vec![x()])
        );
        assert_eq!(
            parse_expr("f(x, 2)").unwrap(),
            Expr::Function(Func::Unknown("f".to_string()), vec![x(), num(2.0)])
        );
    }

    #[test]
    fn known_function_arity_is_checked() {
        assert_eq!(
            parse_expr("sin()"),
            Err(ParseError::Arity {
                name: "sin".to_string(),
                expected: 1,
                found: 0
            })
        );
        assert!(matches!(
            parse_expr("cos(x, y)"),
            Err(ParseError::Arity { found: 2, .. })
        ));
    }

    #[test]
    fn failures() {
        assert_eq!(parse_expr("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_expr("(x + 1"), Err(ParseError::MissingClosingParen));
        assert_eq!(parse_expr(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(
            parse_expr("x )"),
            Err(ParseError::TrailingTokens(Token::RightParen))
        );
        assert_eq!(
            parse_expr("* 2"),
            Err(ParseError::UnexpectedToken(Token::Multiply))
        );
    }

    #[test]
    fn equations() {
        let (lhs, rhs) = parse_equation("2x + 3 = 7").unwrap();
        assert_eq!(lhs, add(mul(num(2.0), x()), num(3.0)));
        assert_eq!(rhs, num(7.0));
        assert_eq!(parse_equation("x + 1"), Err(ParseError::MissingEquals));
        assert_eq!(
            parse_equation("x = 1 = 2"),
            Err(ParseError::TrailingTokens(Token::Equals))
        );
    }
}
