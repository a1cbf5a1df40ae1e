//! Expression parser
//!
//! A recursive descent parser for the four-operator arithmetic grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := primary (('*' | '/') primary)*
//! primary := ['+' | '-'] number | identifier | '(' expr ')'
//! ```
//!
//! Operator chains are parsed in loops, so their length is unbounded.
//! Parentheses recurse and may nest at most [`MAX_NESTING_DEPTH`] levels.

use crate::ast::{BinaryOperator, FormulaExpr};
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::Address;

/// Deepest parenthesis nesting accepted by [`parse_formula`]
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse an expression cell's content into an AST
///
/// # Example
/// ```rust
/// use gridcalc_formula::{parse_formula, FormulaExpr};
///
/// let ast = parse_formula("=1+2*3").unwrap();
/// let ast = parse_formula("=(A1+B1)/2").unwrap();
/// assert_eq!(parse_formula("=-4").unwrap(), FormulaExpr::Number(-4.0));
/// assert!(parse_formula("=SUM(A1)").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaExpr> {
    let formula = formula.trim();

    let formula = formula
        .strip_prefix('=')
        .ok_or_else(|| FormulaError::UnsupportedSyntax("expression must start with '='".into()))?;

    let mut parser = FormulaParser::new(formula)?;
    let expr = parser.parse_expression()?;

    if parser.current_token() != &Token::Eof {
        return Err(FormulaError::UnsupportedSyntax(format!(
            "unexpected {} after expression",
            parser.current_token().describe()
        )));
    }

    Ok(expr)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::Identifier(name) => format!("identifier '{}'", name),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
            Token::Star => "'*'".into(),
            Token::Slash => "'/'".into(),
            Token::LeftParen => "'('".into(),
            Token::RightParen => "')'".into(),
            Token::Eof => "end of expression".into(),
        }
    }
}

/// Expression parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Token,
    depth: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: Token::Eof,
            depth: 0,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> FormulaResult<()> {
        self.current_token = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            self.advance();
            return Ok(token);
        }

        let starts_number =
            c.is_ascii_digit() || (c == '.' && self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit()));
        if starts_number {
            return self.scan_number();
        }

        if c.is_alphabetic() || c == '_' {
            return Ok(self.scan_identifier());
        }

        Err(FormulaError::UnsupportedSyntax(match c {
            '"' | '\'' => "string literals are not supported".to_string(),
            '<' | '>' | '=' | '!' => format!("comparison operator '{}' is not supported", c),
            _ => format!("unexpected character '{}'", c),
        }))
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        // Integer part
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent part
        if self.peek_char().is_some_and(|c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek_char().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let num_str = &self.input[start..self.pos];
        num_str
            .parse()
            .map(Token::Number)
            .map_err(|_| FormulaError::UnsupportedSyntax(format!("malformed number '{}'", num_str)))
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self.peek_char().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Identifier(self.input[start..self.pos].to_string())
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn current_token(&self) -> &Token {
        &self.current_token
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let token = std::mem::replace(&mut self.current_token, Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Primary: signed numbers, references, parentheses

    fn parse_expression(&mut self) -> FormulaResult<FormulaExpr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<FormulaExpr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_multiplicative()?;
            left = FormulaExpr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<FormulaExpr> {
        let mut left = self.parse_primary()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_primary()?;
            left = FormulaExpr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> FormulaResult<FormulaExpr> {
        match self.consume()? {
            Token::Number(n) => Ok(FormulaExpr::Number(n)),

            sign @ (Token::Plus | Token::Minus) => match self.consume()? {
                Token::Number(n) if sign == Token::Minus => Ok(FormulaExpr::Number(-n)),
                Token::Number(n) => Ok(FormulaExpr::Number(n)),
                other => Err(FormulaError::UnsupportedSyntax(format!(
                    "sign {} must be followed by a number, got {}",
                    sign.describe(),
                    other.describe()
                ))),
            },

            Token::LeftParen => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(FormulaError::UnsupportedSyntax(format!(
                        "parentheses nested deeper than {} levels",
                        MAX_NESTING_DEPTH
                    )));
                }
                self.depth += 1;
                let expr = self.parse_expression()?;
                self.depth -= 1;
                match self.consume()? {
                    Token::RightParen => Ok(expr),
                    other => Err(FormulaError::UnsupportedSyntax(format!(
                        "expected ')', got {}",
                        other.describe()
                    ))),
                }
            }

            Token::Identifier(name) => {
                if self.current_token() == &Token::LeftParen {
                    return Err(FormulaError::UnsupportedSyntax(format!(
                        "function call '{}(...)' is not supported",
                        name
                    )));
                }
                Self::parse_cell_reference(name)
            }

            other => Err(FormulaError::UnsupportedSyntax(format!(
                "unexpected {}",
                other.describe()
            ))),
        }
    }

    fn parse_cell_reference(name: String) -> FormulaResult<FormulaExpr> {
        match Address::parse(&name) {
            Ok(address) => Ok(FormulaExpr::CellRef(address)),
            Err(source) => Err(FormulaError::InvalidReference {
                reference: name,
                source,
            }),
        }
    }
}
