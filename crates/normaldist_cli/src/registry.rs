//! Generator registry
//!
//! The harness iterates an explicit, name-sorted list of generators built at
//! start-up. Each entry fills a caller-owned buffer from a seed.

use normaldist_core::reference::{ScalarBoxMuller, ZigguratNormal};
use normaldist_core::{FillError, NormalFiller};

use crate::{CliError, Result};

/// Fills `buffer` with normal variates from a generator seeded with `seed`.
pub type FillFn = fn(buffer: &mut [f32], seed: u32) -> std::result::Result<(), FillError>;

/// Name of the entry that writes nothing (timing baseline).
pub const NULL_GENERATOR: &str = "null";

/// A named generator.
#[derive(Clone, Copy)]
pub struct GeneratorEntry {
    /// Name used on the command line and in result files.
    pub name: &'static str,
    /// Fill function.
    pub fill: FillFn,
}

impl GeneratorEntry {
    /// Whether this entry is the timing baseline and produces no samples.
    pub fn is_null(&self) -> bool {
        self.name == NULL_GENERATOR
    }
}

impl std::fmt::Debug for GeneratorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of generators.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<GeneratorEntry>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in generators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NULL_GENERATOR, |_, _| Ok(()));
        registry.register("boxmuller", |buffer, seed| {
            ScalarBoxMuller::new(seed).fill(buffer)
        });
        registry.register("boxmuller_simd", |buffer, seed| {
            NormalFiller::with_seed(seed).fill(buffer)
        });
        registry.register("ziggurat", |buffer, seed| {
            ZigguratNormal::new(u64::from(seed)).fill(buffer);
            Ok(())
        });
        registry
    }

    /// Adds a generator, replacing any entry with the same name.
    ///
    /// Entries stay sorted by name.
    pub fn register(&mut self, name: &'static str, fill: FillFn) {
        let entry = GeneratorEntry { name, fill };
        match self.entries.binary_search_by(|e| e.name.cmp(name)) {
            Ok(index) => self.entries[index] = entry,
            Err(index) => self.entries.insert(index, entry),
        }
    }

    /// Looks up a generator by name.
    pub fn get(&self, name: &str) -> Option<&GeneratorEntry> {
        self.entries
            .binary_search_by(|e| e.name.cmp(name))
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Returns the named generator, or every generator when `name` is `None`.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&GeneratorEntry>> {
        match name {
            None => Ok(self.entries.iter().collect()),
            Some(name) => self
                .get(name)
                .map(|entry| vec![entry])
                .ok_or_else(|| CliError::UnknownGenerator {
                    name: name.to_string(),
                    available: self.names().join(", "),
                }),
        }
    }

    /// Registered names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratorEntry> {
        self.entries.iter()
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no generator is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use normaldist_core::{fill_normal, AlignedBuffer, DEFAULT_SEED};

    #[test]
    fn test_defaults_sorted() {
        let registry = Registry::with_defaults();
        assert_eq!(
            registry.names(),
            vec!["boxmuller", "boxmuller_simd", "null", "ziggurat"]
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.register("b", |_, _| Ok(()));
        registry.register("a", |_, _| Ok(()));
        registry.register("b", |buffer, _| {
            buffer.fill(1.0);
            Ok(())
        });

        assert_eq!(registry.names(), vec!["a", "b"]);
        let mut buffer = [0.0f32; 8];
        (registry.get("b").unwrap().fill)(&mut buffer, 0).unwrap();
        assert_eq!(buffer, [1.0; 8]);
    }

    #[test]
    fn test_select() {
        let registry = Registry::with_defaults();
        assert_eq!(registry.select(None).unwrap().len(), 4);

        let selected = registry.select(Some("ziggurat")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "ziggurat");

        let err = registry.select(Some("mersenne")).unwrap_err();
        assert!(matches!(err, CliError::UnknownGenerator { ref name, .. } if name == "mersenne"));
    }

    #[test]
    fn test_null_entry_writes_nothing() {
        let registry = Registry::with_defaults();
        let entry = registry.get(NULL_GENERATOR).unwrap();
        assert!(entry.is_null());

        let mut buffer = [7.0f32; 16];
        (entry.fill)(&mut buffer, 1).unwrap();
        assert_eq!(buffer, [7.0; 16]);
    }

    #[test]
    fn test_simd_entry_with_default_seed_matches_fill_normal() {
        let registry = Registry::with_defaults();
        let entry = registry.get("boxmuller_simd").unwrap();

        let mut via_entry = AlignedBuffer::new(64).unwrap();
        let mut direct = AlignedBuffer::new(64).unwrap();
        (entry.fill)(&mut via_entry, DEFAULT_SEED).unwrap();
        fill_normal(&mut direct);

        assert_eq!(via_entry.as_slice(), direct.as_slice());
    }
}
