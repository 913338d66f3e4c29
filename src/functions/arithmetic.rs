use crate::error::EvalError;
use crate::registry::Registry;

/// Largest argument whose factorial is representable as an `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

pub fn register(registry: &mut Registry) {
    registry.register_fallible_function("factorial", factorial);
}

pub fn add(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a + b)
}

pub fn subtract(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a - b)
}

pub fn multiply(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a * b)
}

pub fn divide(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::domain("divide", &[a, b], "division by zero"));
    }
    Ok(a / b)
}

/// Truncated remainder; the result takes the sign of the dividend.
pub fn modulo(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        return Err(EvalError::domain("modulo", &[a, b], "modulo by zero"));
    }
    Ok(a % b)
}

pub fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    Ok(base.powf(exponent))
}

pub fn factorial(n: f64) -> Result<f64, EvalError> {
    if n < 0.0 {
        return Err(EvalError::domain(
            "factorial",
            &[n],
            "factorial of negative number",
        ));
    }
    if n.fract() != 0.0 {
        return Err(EvalError::domain(
            "factorial",
            &[n],
            "factorial of non-integer",
        ));
    }
    if n > MAX_FACTORIAL {
        return Err(EvalError::domain("factorial", &[n], "factorial overflow"));
    }

    Ok((2..=n as u32).fold(1.0, |acc, k| acc * f64::from(k)))
}
