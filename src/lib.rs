pub mod ast;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod registry;

pub use ast::Expr;
pub use config::EvaluatorConfig;
pub use error::{EvalError, ParenContext};
pub use evaluator::Evaluator;
pub use registry::{Function, Registry};

/// Evaluates `expression` against a fresh registry holding the standard
/// functions and constants.
pub fn evaluate_expression(expression: &str) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(expression)
}
