/// Config for a definition registry
/// ## Fields
/// - `capacity`:
///   Number of entries the registry reserves space for on construction.
///
///   This is only a hint. The registry grows past it as definitions are set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub capacity: usize,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}
