use alloc::string::String;
use core::{iter::FusedIterator, ops::Index};
use indexmap::{map, IndexMap};
use rustc_hash::FxBuildHasher;
use tracing::{debug, error};

use crate::{config::Config, errors::RegistryErrorKind};

/// Ordered name to definition map backing a [`DefinitionRegistry`]
pub type Definitions<D> = IndexMap<String, D, FxBuildHasher>;

/// Owning iterator over the entries of a [`DefinitionRegistry`], in storage order
pub type IntoIter<D> = map::IntoIter<String, D>;

/// Registry of definitions addressed by name.
///
/// Entries are kept in insertion order. Overwriting a name with [`Self::set`] keeps its position,
/// removing a name with [`Self::remove`] keeps the order of the remaining entries.
///
/// # Notes
/// The registry doesn't interpret definitions, it stores and returns them unchanged.
/// It isn't synchronized, wrap it in a lock if it's shared between threads.
#[derive(Clone, Debug)]
pub struct DefinitionRegistry<D> {
    definitions: Definitions<D>,
}

impl<D> Default for DefinitionRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> DefinitionRegistry<D> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    #[inline]
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            definitions: IndexMap::with_capacity_and_hasher(config.capacity, FxBuildHasher),
        }
    }

    /// Returns `true` if a definition is registered under the name
    #[inline]
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Sets a definition under the name, replacing the previous one if any.
    /// Replaced definition keeps its position in the registry.
    pub fn set(&mut self, name: impl Into<String>, definition: D) -> Option<D> {
        use map::Entry::{Occupied, Vacant};

        match self.definitions.entry(name.into()) {
            Occupied(mut entry) => {
                debug!(name = entry.key().as_str(), "Definition overwritten");
                Some(entry.insert(definition))
            }
            Vacant(entry) => {
                debug!(name = entry.key().as_str(), "Definition set");
                entry.insert(definition);
                None
            }
        }
    }

    /// Replaces all definitions with the given ones.
    ///
    /// The registry is cleared first, then the entries are set in the given order,
    /// so a name repeated in `definitions` ends up with its last definition.
    pub fn set_all<K, I>(&mut self, definitions: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, D)>,
    {
        self.clear();
        self.extend(definitions);
        debug!(count = self.count(), "Definitions replaced");
    }

    /// Gets a definition by name
    ///
    /// # Errors
    /// Returns [`RegistryErrorKind::NotFound`] if there is no definition with the name
    pub fn get(&self, name: &str) -> Result<&D, RegistryErrorKind> {
        let Some(definition) = self.definitions.get(name) else {
            let err = RegistryErrorKind::not_found(name);
            error!("{}", err);
            return Err(err);
        };
        Ok(definition)
    }

    /// Gets a mutable definition by name
    ///
    /// # Errors
    /// Returns [`RegistryErrorKind::NotFound`] if there is no definition with the name
    pub fn get_mut(&mut self, name: &str) -> Result<&mut D, RegistryErrorKind> {
        let Some(definition) = self.definitions.get_mut(name) else {
            let err = RegistryErrorKind::not_found(name);
            error!("{}", err);
            return Err(err);
        };
        Ok(definition)
    }

    #[inline]
    #[must_use]
    pub fn get_all(&self) -> &Definitions<D> {
        &self.definitions
    }

    /// Removes a definition by name and returns it
    ///
    /// # Errors
    /// Returns [`RegistryErrorKind::NotFound`] if there is no definition with the name.
    /// Removing is not idempotent, the second removal of the same name fails.
    pub fn remove(&mut self, name: &str) -> Result<D, RegistryErrorKind> {
        let Some(definition) = self.definitions.shift_remove(name) else {
            let err = RegistryErrorKind::not_found(name);
            error!("{}", err);
            return Err(err);
        };
        debug!(name, "Definition removed");
        Ok(definition)
    }

    pub fn clear(&mut self) {
        let count = self.definitions.len();
        self.definitions.clear();
        debug!(count, "Definitions cleared");
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.definitions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    #[inline]
    pub fn names(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.definitions.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            inner: self.definitions.iter(),
        }
    }
}

/// Bracket access with the same contract as [`DefinitionRegistry::get`]
///
/// # Panics
/// Panics if there is no definition with the name
impl<D> Index<&str> for DefinitionRegistry<D> {
    type Output = D;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Ok(definition) => definition,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, D> Extend<(K, D)> for DefinitionRegistry<D>
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, D)>>(&mut self, definitions: I) {
        for (name, definition) in definitions {
            self.set(name, definition);
        }
    }
}

impl<K, D> FromIterator<(K, D)> for DefinitionRegistry<D>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, D)>>(definitions: I) -> Self {
        let mut registry = Self::new();
        registry.extend(definitions);
        registry
    }
}

impl<D> IntoIterator for DefinitionRegistry<D> {
    type Item = (String, D);
    type IntoIter = IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a DefinitionRegistry<D> {
    type Item = (&'a str, &'a D);
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the entries of a [`DefinitionRegistry`], in storage order
pub struct Iter<'a, D> {
    inner: map::Iter<'a, String, D>,
}

impl<D> Clone for Iter<'_, D> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = (&'a str, &'a D);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, definition)| (name.as_str(), definition))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<D> DoubleEndedIterator for Iter<'_, D> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(name, definition)| (name.as_str(), definition))
    }
}

impl<D> ExactSizeIterator for Iter<'_, D> {}

impl<D> FusedIterator for Iter<'_, D> {}
