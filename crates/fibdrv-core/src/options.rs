//! Calculation options.

/// Options for a Fibonacci calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Upper bound in bytes for the limb working set (`None` = unlimited).
    pub memory_limit: Option<usize>,
}

impl Options {
    /// Set the memory limit.
    #[must_use]
    pub fn with_memory_limit(mut self, limit: Option<usize>) -> Self {
        self.memory_limit = limit;
        self
    }
}
