//! Algorithm configuration.

/// How selection-loop algorithms (Dijkstra, Prim) pick the next vertex to
/// finalize.
///
/// Both strategies finalize vertices in the same order: smallest key first,
/// smallest vertex id among equal keys. They differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every vertex for the minimum key. O(V²) overall.
    #[default]
    LinearScan,
    /// Lazy-deletion binary heap keyed on `(key, vertex id)`. O(E log V).
    BinaryHeap,
}

/// Configuration shared by the algorithm engines.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmConfig {
    /// Minimum-selection strategy for Dijkstra and Prim.
    pub selection: Selection,
}

impl AlgorithmConfig {
    /// Creates the default configuration (linear-scan selection).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection strategy.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }
}
