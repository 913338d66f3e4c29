pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const DEFAULT_MAX_TREE_DEPTH: usize = 512;
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Limits applied to a single evaluation session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Maximum nesting of factors (parentheses, calls, signs, power chains).
    pub max_depth: usize,
    /// Maximum depth of a compiled expression tree.
    pub max_tree_depth: usize,
    /// Number of compiled trees kept by `Evaluator::compile`.
    pub cache_capacity: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }
}
