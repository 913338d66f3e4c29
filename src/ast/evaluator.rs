use crate::ast::Expr;
use crate::error::EvalError;
use crate::registry::Registry;

impl Expr {
    /// Evaluates the tree against `registry`.
    ///
    /// Operands are evaluated left to right and the first error aborts the
    /// evaluation, matching eager evaluation of the source text.
    pub fn evaluate(&self, registry: &Registry) -> Result<f64, EvalError> {
        match self {
            Expr::Literal(value) => Ok(*value),

            Expr::Constant(name) => registry
                .lookup_constant(name)
                .ok_or_else(|| EvalError::UnknownIdentifier(name.clone())),

            Expr::Unary { operator, operand } => {
                let value = operand.evaluate(registry)?;
                operator.apply(value)
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left_value = left.evaluate(registry)?;
                let right_value = right.evaluate(registry)?;
                operator.apply(left_value, right_value)
            }

            Expr::Call { name, argument } => {
                let value = argument.evaluate(registry)?;
                let function = registry
                    .lookup_function(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                function(value)
            }
        }
    }
}
