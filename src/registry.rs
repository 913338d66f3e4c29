use crate::error::EvalError;
use crate::functions::{register_defaults, register_extended};
use log::warn;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>;

/// Names available to an expression: unary functions and constants.
///
/// The two namespaces are independent. A name followed by `(` is looked up
/// as a function, any other reference as a constant. Registering an existing
/// name replaces the previous entry.
#[derive(Clone, Default)]
pub struct Registry {
    functions: HashMap<String, Function>,
    constants: HashMap<String, f64>,
}

impl Registry {
    /// Creates a registry with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the standard functions and `pi`, `e`, `phi`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_defaults(&mut registry);
        registry
    }

    /// Creates a registry with the standard seed set plus the extra primitives
    /// (`exp2`, `asinh`, `acosh`, `atanh`, `factorial`).
    pub fn with_extended() -> Self {
        let mut registry = Self::new();
        register_extended(&mut registry);
        registry
    }

    /// Registers a function that cannot fail.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.register_fallible_function(name, move |x| Ok(function(x)));
    }

    /// Registers a function that may reject its argument, typically with
    /// [`EvalError::domain`].
    pub fn register_fallible_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        check_name(name);
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn register_constant(&mut self, name: &str, value: f64) {
        check_name(name);
        self.constants.insert(name.to_string(), value);
    }

    pub fn lookup_function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn lookup_constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn constant_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constants.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.function_names())
            .field("constants", &self.constants)
            .finish()
    }
}

/// Whether `name` can be written as an identifier in an expression.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn check_name(name: &str) {
    if !is_identifier(name) {
        warn!("Registering '{}', which no expression can reference", name);
    }
}
