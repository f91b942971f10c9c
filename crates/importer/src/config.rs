//! Import configuration

/// Limits and policies applied to one import run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Group nesting depth beyond which a warning is emitted (default: 10).
    pub max_depth: usize,
    /// Maximum number of tree nodes per context (default: 1000).
    pub max_items: usize,
    /// Keep importing when a context produced error-severity warnings
    /// (default: true). When off, the batch aborts after such a context.
    pub skip_on_error: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_items: 1000,
            skip_on_error: true,
        }
    }
}
