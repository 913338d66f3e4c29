use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::EvalError;
use crate::parser::Reducer;

/// A subtree together with its height.
#[derive(Debug)]
pub struct Built {
    pub expr: Expr,
    depth: usize,
}

/// Reduces grammar productions into an [`Expr`] tree.
///
/// Long operator chains are folded iteratively by the parser but produce
/// deep left-leaning trees, so the height is capped to keep recursive
/// evaluation within the stack.
pub struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    fn node(&self, expr: Expr, depth: usize) -> Result<Built, EvalError> {
        if depth > self.max_depth {
            return Err(EvalError::RecursionLimit {
                limit: self.max_depth,
            });
        }
        Ok(Built { expr, depth })
    }
}

impl Reducer for TreeBuilder {
    type Output = Built;

    fn number(&mut self, value: f64) -> Built {
        Built {
            expr: Expr::Literal(value),
            depth: 1,
        }
    }

    fn unary(&mut self, operator: UnaryOperator, operand: Built) -> Result<Built, EvalError> {
        let depth = operand.depth + 1;
        let expr = Expr::Unary {
            operator,
            operand: Box::new(operand.expr),
        };
        self.node(expr, depth)
    }

    fn binary(
        &mut self,
        operator: BinaryOperator,
        left: Built,
        right: Built,
    ) -> Result<Built, EvalError> {
        let depth = left.depth.max(right.depth) + 1;
        let expr = Expr::Binary {
            left: Box::new(left.expr),
            operator,
            right: Box::new(right.expr),
        };
        self.node(expr, depth)
    }

    fn call(&mut self, name: &str, argument: Built) -> Result<Built, EvalError> {
        let depth = argument.depth + 1;
        let expr = Expr::Call {
            name: name.to_string(),
            argument: Box::new(argument.expr),
        };
        self.node(expr, depth)
    }

    fn constant(&mut self, name: &str) -> Result<Built, EvalError> {
        self.node(Expr::Constant(name.to_string()), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvaluatorConfig;

    #[test]
    fn test_long_chain_hits_tree_limit() {
        let config = EvaluatorConfig::default().with_max_tree_depth(50);
        let chain = vec!["1"; 100].join(" + ");
        assert_eq!(
            Expr::parse(&chain, &config),
            Err(EvalError::RecursionLimit { limit: 50 })
        );

        let short = vec!["1"; 20].join(" + ");
        assert!(Expr::parse(&short, &config).is_ok());
    }
}
