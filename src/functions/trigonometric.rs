//! Circular and hyperbolic functions. Angles are in radians.

use crate::error::EvalError;
use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    registry.register_function("sin", f64::sin);
    registry.register_function("cos", f64::cos);
    registry.register_function("tan", f64::tan);
    registry.register_fallible_function("asin", asin);
    registry.register_fallible_function("acos", acos);
    registry.register_function("atan", f64::atan);

    registry.register_function("sinh", f64::sinh);
    registry.register_function("cosh", f64::cosh);
    registry.register_function("tanh", f64::tanh);
}

/// Inverse hyperbolic functions, installed only by the extended set.
pub fn register_inverse_hyperbolic(registry: &mut Registry) {
    registry.register_function("asinh", f64::asinh);
    registry.register_fallible_function("acosh", acosh);
    registry.register_fallible_function("atanh", atanh);
}

pub fn asin(x: f64) -> Result<f64, EvalError> {
    if x < -1.0 || x > 1.0 {
        return Err(EvalError::domain("asin", &[x], "x must be in [-1, 1]"));
    }
    Ok(x.asin())
}

pub fn acos(x: f64) -> Result<f64, EvalError> {
    if x < -1.0 || x > 1.0 {
        return Err(EvalError::domain("acos", &[x], "x must be in [-1, 1]"));
    }
    Ok(x.acos())
}

pub fn acosh(x: f64) -> Result<f64, EvalError> {
    if x < 1.0 {
        return Err(EvalError::domain("acosh", &[x], "x must be >= 1"));
    }
    Ok(x.acosh())
}

pub fn atanh(x: f64) -> Result<f64, EvalError> {
    if x <= -1.0 || x >= 1.0 {
        return Err(EvalError::domain("atanh", &[x], "x must be in (-1, 1)"));
    }
    Ok(x.atanh())
}
