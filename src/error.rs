use std::fmt;
use thiserror::Error;

/// Where an unbalanced parenthesis was detected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParenContext {
    Group,
    FunctionCall,
}

impl fmt::Display for ParenContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenContext::Group => f.write_str("mismatched parentheses"),
            ParenContext::FunctionCall => f.write_str("mismatched parentheses in function call"),
        }
    }
}

/// Everything that can abort an evaluation.
///
/// Errors are raised where they are detected and unwind straight to the
/// caller of `evaluate`; there is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("{context}")]
    MismatchedParentheses { context: ParenContext },

    #[error("invalid number format: {0}")]
    InvalidNumberFormat(String),

    #[error("{op}: {message} (operands: {operands:?})")]
    DomainError {
        op: String,
        operands: Vec<f64>,
        message: String,
    },

    #[error("unexpected trailing input at position {position}: '{remainder}'")]
    TrailingInput { position: usize, remainder: String },

    #[error("expression nesting exceeds the limit of {limit}")]
    RecursionLimit { limit: usize },
}

impl EvalError {
    pub fn domain(op: &str, operands: &[f64], message: &str) -> Self {
        EvalError::DomainError {
            op: op.to_string(),
            operands: operands.to_vec(),
            message: message.to_string(),
        }
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, EvalError::DomainError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_messages_differ_by_context() {
        let group = EvalError::MismatchedParentheses {
            context: ParenContext::Group,
        };
        let call = EvalError::MismatchedParentheses {
            context: ParenContext::FunctionCall,
        };
        assert_eq!(group.to_string(), "mismatched parentheses");
        assert_eq!(call.to_string(), "mismatched parentheses in function call");
    }

    #[test]
    fn test_domain_error_display() {
        let err = EvalError::domain("divide", &[10.0, 0.0], "division by zero");
        assert!(err.is_domain_error());
        assert_eq!(
            err.to_string(),
            "divide: division by zero (operands: [10.0, 0.0])"
        );
    }
}
