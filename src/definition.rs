use alloc::string::String;

/// Class constant of a generated definition
///
/// `value` is kept as the literal source expression, it isn't evaluated
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constant {
    name: String,
    value: String,
}

impl Constant {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
