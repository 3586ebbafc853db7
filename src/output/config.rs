//! Output configuration types

/// Configuration for text output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the blank line and totals after the tree
    pub report: bool,
    /// Report directories only, matching a dirs-only traversal
    pub dirs_only: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            report: true,
            dirs_only: false,
        }
    }
}
