use crate::registry::Registry;

/// `round` rounds half away from zero.
pub fn register(registry: &mut Registry) {
    registry.register_function("floor", f64::floor);
    registry.register_function("ceil", f64::ceil);
    registry.register_function("round", f64::round);
}
