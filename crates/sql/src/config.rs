//! Engine configuration

/// Tunables for the schema engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on the number of columns a single table may declare.
    pub max_columns_per_table: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { max_columns_per_table: 1600 }
    }
}

impl EngineConfig {
    /// Config with a small column limit, for tests that exercise it.
    pub fn for_testing() -> Self {
        EngineConfig { max_columns_per_table: 8 }
    }
}
