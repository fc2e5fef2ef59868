use alloc::string::String;

use crate::DefinitionRegistry;

pub trait Merge<T> {
    type Output;

    #[must_use]
    fn merge(self, other: T) -> Self::Output;
}

/// Entries of `other` are set into `self` in their order, so the last write wins
impl<D> Merge<DefinitionRegistry<D>> for DefinitionRegistry<D> {
    type Output = Self;

    #[inline]
    fn merge(mut self, other: DefinitionRegistry<D>) -> Self::Output {
        self.extend(other);
        self
    }
}

impl<K, D> Merge<(K, D)> for DefinitionRegistry<D>
where
    K: Into<String>,
{
    type Output = Self;

    #[inline]
    fn merge(mut self, (name, definition): (K, D)) -> Self::Output {
        self.set(name, definition);
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Merge as _;
    use crate::DefinitionRegistry;

    use alloc::{
        format,
        string::{String, ToString as _},
        vec,
        vec::Vec,
    };
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_merge_registries() {
        let models: DefinitionRegistry<&str> = [("User", "Model\\User"), ("Post", "Model\\Post")].into_iter().collect();
        let repositories: DefinitionRegistry<&str> = [("UserRepository", "Repository\\User"), ("User", "Model\\Admin")]
            .into_iter()
            .collect();

        let registry = models.merge(repositories);

        assert_eq!(registry.count(), 3);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["User", "Post", "UserRepository"]);
        assert_eq!(registry["User"], "Model\\Admin");
        assert!(logs_contain("Definition overwritten"));
    }

    #[test]
    #[traced_test]
    fn test_merge_entry() {
        let registry = DefinitionRegistry::new().merge(("User", 1)).merge(("Post", 2)).merge(("User", 3));

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.get("User"), Ok(&3));
        assert_eq!(registry.get("Post"), Ok(&2));
        assert!(logs_contain("Definition overwritten"));
    }
}
