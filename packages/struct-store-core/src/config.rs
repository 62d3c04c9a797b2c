//! Store configuration.

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Expected number of user-registered types (registry pre-reservation)
    pub expected_types: usize,
    /// Initial column capacity in rows per table
    pub initial_row_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            expected_types: 1,
            initial_row_capacity: 1024,
        }
    }
}
