use crate::error::EvalError;
use crate::registry::Registry;

/// `ln` is the natural logarithm and `log` is base 10.
pub fn register(registry: &mut Registry) {
    registry.register_function("exp", f64::exp);
    registry.register_fallible_function("ln", ln);
    registry.register_fallible_function("log", log10);
    registry.register_fallible_function("log2", log2);
}

pub fn ln(x: f64) -> Result<f64, EvalError> {
    check_positive("ln", x)?;
    Ok(x.ln())
}

pub fn log10(x: f64) -> Result<f64, EvalError> {
    check_positive("log", x)?;
    Ok(x.log10())
}

pub fn log2(x: f64) -> Result<f64, EvalError> {
    check_positive("log2", x)?;
    Ok(x.log2())
}

fn check_positive(op: &str, x: f64) -> Result<(), EvalError> {
    if x <= 0.0 {
        return Err(EvalError::domain(
            op,
            &[x],
            "logarithm of non-positive number",
        ));
    }
    Ok(())
}
