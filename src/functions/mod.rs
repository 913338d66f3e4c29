pub mod algebraic;
pub mod arithmetic;
pub mod exponential;
pub mod rounding;
pub mod trigonometric;

use crate::registry::Registry;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Installs the standard seed set: the trigonometric, hyperbolic, exponential,
/// logarithmic and rounding functions plus `pi`, `e` and `phi`.
pub fn register_defaults(registry: &mut Registry) {
    trigonometric::register(registry);
    algebraic::register(registry);
    exponential::register(registry);
    rounding::register(registry);

    registry.register_constant("pi", PI);
    registry.register_constant("e", E);
    registry.register_constant("phi", GOLDEN_RATIO);
}

/// The seed set plus `exp2`, `asinh`, `acosh`, `atanh` and `factorial`.
pub fn register_extended(registry: &mut Registry) {
    register_defaults(registry);
    trigonometric::register_inverse_hyperbolic(registry);
    arithmetic::register(registry);
    registry.register_function("exp2", f64::exp2);
}
