use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::parser::{Parser, Reducer};
use crate::registry::Registry;
use log::debug;
use lru::LruCache;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Folds every production into a number as soon as it is recognized.
struct EagerReducer<'r> {
    registry: &'r Registry,
}

impl Reducer for EagerReducer<'_> {
    type Output = f64;

    fn number(&mut self, value: f64) -> f64 {
        value
    }

    fn unary(&mut self, operator: UnaryOperator, operand: f64) -> Result<f64, EvalError> {
        operator.apply(operand)
    }

    fn binary(
        &mut self,
        operator: BinaryOperator,
        left: f64,
        right: f64,
    ) -> Result<f64, EvalError> {
        operator.apply(left, right)
    }

    fn call(&mut self, name: &str, argument: f64) -> Result<f64, EvalError> {
        let function = self
            .registry
            .lookup_function(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        function(argument)
    }

    fn constant(&mut self, name: &str) -> Result<f64, EvalError> {
        self.registry
            .lookup_constant(name)
            .ok_or_else(|| EvalError::UnknownIdentifier(name.to_string()))
    }
}

fn evaluate_with(
    registry: &Registry,
    config: &EvaluatorConfig,
    expression: &str,
) -> Result<f64, EvalError> {
    Parser::new(expression, EagerReducer { registry }, config.max_depth).parse()
}

/// An evaluation session: a registry, its limits and a cache of compiled trees.
pub struct Evaluator {
    registry: Registry,
    config: EvaluatorConfig,
    cache: LruCache<String, Arc<Expr>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an `Evaluator` with the standard functions and constants.
    pub fn new() -> Self {
        Self::with_registry(Registry::with_defaults())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self::with_config(registry, EvaluatorConfig::default())
    }

    pub fn with_config(registry: Registry, config: EvaluatorConfig) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            registry,
            config,
            cache: LruCache::new(capacity),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Registers a function with the evaluator.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.registry.register_function(name, function);
    }

    pub fn register_fallible_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        self.registry.register_fallible_function(name, function);
    }

    pub fn register_constant(&mut self, name: &str, value: f64) {
        self.registry.register_constant(name, value);
    }

    /// Evaluates a given expression string.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the whole input is a well-formed expression and every
    ///   operation succeeds. The value may be infinite or NaN.
    /// * `Err(EvalError)` describing the first problem encountered.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let result = evaluate_with(&self.registry, &self.config, expression);
        debug!("Evaluated {:?}: {:?}", expression, result);
        result
    }

    /// Evaluates independent expressions in parallel. Results keep the order
    /// of `expressions`.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, EvalError>>
    where
        S: AsRef<str> + Sync,
    {
        let registry = &self.registry;
        let config = &self.config;
        debug!("Evaluating batch of {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| evaluate_with(registry, config, expression.as_ref()))
            .collect()
    }

    /// Parses an expression into a reusable tree, memoized by source text.
    pub fn compile(&mut self, expression: &str) -> Result<Arc<Expr>, EvalError> {
        if let Some(expr) = self.cache.get(expression) {
            debug!("Compile cache hit: {}", expression);
            return Ok(Arc::clone(expr));
        }

        let expr = Arc::new(Expr::parse(expression, &self.config)?);
        debug!("Compiled {}: {}", expression, expr);
        self.cache.put(expression.to_string(), Arc::clone(&expr));
        Ok(expr)
    }

    /// Evaluates a compiled tree against the current registry.
    pub fn evaluate_compiled(&self, expr: &Expr) -> Result<f64, EvalError> {
        expr.evaluate(&self.registry)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
