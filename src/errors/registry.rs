use alloc::string::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryErrorKind {
    #[error("The definition \"{name}\" does not exist")]
    NotFound { name: String },
}

impl RegistryErrorKind {
    #[inline]
    #[must_use]
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Name of the definition the failed operation referred to
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } => name,
        }
    }
}
