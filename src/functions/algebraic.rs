use crate::error::EvalError;
use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    registry.register_fallible_function("sqrt", sqrt);
    registry.register_function("cbrt", f64::cbrt);
    registry.register_function("abs", f64::abs);
}

pub fn sqrt(x: f64) -> Result<f64, EvalError> {
    if x < 0.0 {
        return Err(EvalError::domain(
            "sqrt",
            &[x],
            "square root of negative number",
        ));
    }
    Ok(x.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(144.0), Ok(12.0));
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert!(sqrt(-4.0).unwrap_err().is_domain_error());
    }
}
