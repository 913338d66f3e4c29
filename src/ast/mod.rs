mod builder;
mod evaluator;

pub use builder::{Built, TreeBuilder};

use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::functions::arithmetic;
use crate::parser::Parser;
use std::fmt;

/// A parsed expression that can be evaluated repeatedly.
///
/// Names are kept unresolved, so a tree observes whatever the registry
/// holds at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    Constant(String),
    Unary {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
    Call {
        name: String,
        argument: Box<Expr>,
    },
}

impl Expr {
    /// Parses `input` into a tree using the limits from `config`.
    pub fn parse(input: &str, config: &EvaluatorConfig) -> Result<Expr, EvalError> {
        let builder = TreeBuilder::new(config.max_tree_depth);
        Parser::new(input, builder, config.max_depth)
            .parse()
            .map(|built| built.expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Constant(name) => f.write_str(name),
            Expr::Unary { operand, .. } => write!(f, "(-{})", operand),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator.symbol(), right),
            Expr::Call { name, argument } => write!(f, "{}({})", name, argument),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn apply(&self, operand: f64) -> Result<f64, EvalError> {
        match self {
            UnaryOperator::Negate => Ok(-operand),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOperator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOperator::Add => arithmetic::add(left, right),
            BinaryOperator::Subtract => arithmetic::subtract(left, right),
            BinaryOperator::Multiply => arithmetic::multiply(left, right),
            BinaryOperator::Divide => arithmetic::divide(left, right),
            BinaryOperator::Modulo => arithmetic::modulo(left, right),
            BinaryOperator::Power => arithmetic::power(left, right),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Modulo => '%',
            BinaryOperator::Power => '^',
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(BinaryOperator::Add),
            '-' => Ok(BinaryOperator::Subtract),
            '*' => Ok(BinaryOperator::Multiply),
            '/' => Ok(BinaryOperator::Divide),
            '%' => Ok(BinaryOperator::Modulo),
            '^' => Ok(BinaryOperator::Power),
            other => Err(other),
        }
    }
}
