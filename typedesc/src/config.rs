/// Settings for a fresh [`crate::registry::ArrayClassRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    preload_primitive_arrays: bool,
    capacity_hint: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            preload_primitive_arrays: true,
            capacity_hint: 64,
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the eight one-dimensional primitive array descriptors up front,
    /// so that `int[]` and friends exist before the first request.
    #[must_use]
    pub const fn with_preload_primitive_arrays(mut self, preload: bool) -> Self {
        self.preload_primitive_arrays = preload;
        self
    }

    /// Number of non-primitive descriptors to reserve room for.
    #[must_use]
    pub const fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    #[must_use]
    pub const fn preload_primitive_arrays(&self) -> bool {
        self.preload_primitive_arrays
    }

    #[must_use]
    pub const fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }
}
