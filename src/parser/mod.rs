mod cursor;

pub use cursor::Cursor;

use crate::ast::{BinaryOperator, UnaryOperator};
use crate::error::{EvalError, ParenContext};
use log::{debug, trace};

/// Receives grammar productions as they are recognized.
///
/// The grammar drives one reducer per parse. An eager reducer folds each
/// production into a number on the spot; a tree reducer builds an `Expr`.
pub trait Reducer {
    type Output;

    fn number(&mut self, value: f64) -> Self::Output;

    fn unary(
        &mut self,
        operator: UnaryOperator,
        operand: Self::Output,
    ) -> Result<Self::Output, EvalError>;

    fn binary(
        &mut self,
        operator: BinaryOperator,
        left: Self::Output,
        right: Self::Output,
    ) -> Result<Self::Output, EvalError>;

    fn call(&mut self, name: &str, argument: Self::Output) -> Result<Self::Output, EvalError>;

    fn constant(&mut self, name: &str) -> Result<Self::Output, EvalError>;
}

/// Recursive-descent parser over a single expression.
///
/// ```text
/// expression := term ( ('+' | '-') term )*
/// term       := factor ( ('*' | '/' | '%') factor )*
/// factor     := ('-' | '+') factor
///             | '(' expression ')' [ '^' factor ]
///             | identifier [ '(' expression ')' ] [ '^' factor ]
///             | number [ '^' factor ]
/// ```
pub struct Parser<'src, R> {
    cursor: Cursor<'src>,
    reducer: R,
    depth: usize,
    max_depth: usize,
}

impl<'src, R: Reducer> Parser<'src, R> {
    pub fn new(input: &'src str, reducer: R, max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(input),
            reducer,
            depth: 0,
            max_depth,
        }
    }

    /// Parses the whole input. Anything left after a complete expression is
    /// reported as [`EvalError::TrailingInput`].
    pub fn parse(mut self) -> Result<R::Output, EvalError> {
        debug!("Parsing expression: {}", self.cursor.remainder());
        let result = self.parse_expression()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(EvalError::TrailingInput {
                position: self.cursor.position(),
                remainder: self.cursor.remainder().to_string(),
            });
        }
        Ok(result)
    }

    fn parse_expression(&mut self) -> Result<R::Output, EvalError> {
        let mut result = self.parse_term()?;

        loop {
            self.cursor.skip_whitespace();
            let Some(operator) = self.peek_operator(&['+', '-']) else {
                break;
            };
            self.cursor.advance();
            trace!("Additive operator {:?} at {}", operator, self.cursor.position());

            let right = self.parse_term()?;
            result = self.reducer.binary(operator, result, right)?;
        }

        Ok(result)
    }

    fn parse_term(&mut self) -> Result<R::Output, EvalError> {
        let mut result = self.parse_factor()?;

        loop {
            self.cursor.skip_whitespace();
            let Some(operator) = self.peek_operator(&['*', '/', '%']) else {
                break;
            };
            self.cursor.advance();
            trace!("Multiplicative operator {:?} at {}", operator, self.cursor.position());

            let right = self.parse_factor()?;
            result = self.reducer.binary(operator, result, right)?;
        }

        Ok(result)
    }

    fn peek_operator(&self, accepted: &[char]) -> Option<BinaryOperator> {
        self.cursor
            .peek()
            .filter(|c| accepted.contains(c))
            .and_then(|c| BinaryOperator::try_from(c).ok())
    }

    fn parse_factor(&mut self) -> Result<R::Output, EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::RecursionLimit {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = self.parse_factor_inner();
        self.depth -= 1;
        result
    }

    fn parse_factor_inner(&mut self) -> Result<R::Output, EvalError> {
        self.cursor.skip_whitespace();
        let Some(next) = self.cursor.peek() else {
            return Err(EvalError::UnexpectedEnd);
        };

        match next {
            '-' | '+' => {
                self.cursor.advance();
                let operand = self.parse_factor()?;
                if next == '-' {
                    self.reducer.unary(UnaryOperator::Negate, operand)
                } else {
                    Ok(operand)
                }
            }
            '(' => {
                self.cursor.advance();
                let inner = self.parse_expression()?;
                self.expect_closing(ParenContext::Group)?;
                self.parse_power(inner)
            }
            c if c.is_ascii_alphabetic() => {
                let value = self.parse_identifier()?;
                self.parse_power(value)
            }
            c if c.is_ascii_digit() || c == '.' => {
                let value = self.parse_number()?;
                self.parse_power(value)
            }
            found => Err(EvalError::UnexpectedCharacter {
                found,
                position: self.cursor.position(),
            }),
        }
    }

    /// A name followed by `(` is a call, anything else a constant reference.
    fn parse_identifier(&mut self) -> Result<R::Output, EvalError> {
        let name = self.cursor.scan_identifier();
        self.cursor.skip_whitespace();

        if self.cursor.eat('(') {
            trace!("Function call: {}", name);
            let argument = self.parse_expression()?;
            self.expect_closing(ParenContext::FunctionCall)?;
            self.reducer.call(name, argument)
        } else {
            trace!("Constant reference: {}", name);
            self.reducer.constant(name)
        }
    }

    fn parse_number(&mut self) -> Result<R::Output, EvalError> {
        let literal = self.cursor.scan_number()?;
        let value = literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumberFormat(literal.to_string()))?;
        trace!("Number literal: {}", value);
        Ok(self.reducer.number(value))
    }

    /// `^` binds to the primary just parsed; the exponent re-enters `factor`,
    /// which makes the operator right-associative.
    fn parse_power(&mut self, base: R::Output) -> Result<R::Output, EvalError> {
        self.cursor.skip_whitespace();
        if !self.cursor.eat('^') {
            return Ok(base);
        }
        let exponent = self.parse_factor()?;
        self.reducer.binary(BinaryOperator::Power, base, exponent)
    }

    fn expect_closing(&mut self, context: ParenContext) -> Result<(), EvalError> {
        self.cursor.skip_whitespace();
        if self.cursor.eat(')') {
            Ok(())
        } else {
            Err(EvalError::MismatchedParentheses { context })
        }
    }
}
