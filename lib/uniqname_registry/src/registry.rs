use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::{probe, stem};
use std::collections::{HashMap, HashSet};

/// Issues names that are distinct from every name it issued before.
///
/// Not internally synchronized; wrap it in a `Mutex` to share it across
/// threads.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    issued: HashSet<String>,
    separator: String,
    empty_marker: String,
    /// Joined base -> smallest suffix not yet known to be taken
    counters: HashMap<String, u64>,
}

impl Default for NameRegistry {
    fn default() -> Self {
        let config = RegistryConfig::default();
        NameRegistry::new(config.separator, config.empty_marker)
    }
}

impl NameRegistry {
    /// Creates an empty registry.
    ///
    /// If both `separator` and `empty_marker` are empty, names synthesized for
    /// an empty prefix are bare numbers (`"0"`, `"1"`, ...) and collisions on
    /// a named prefix `p` yield `p0`, `p1`, ...
    pub fn new(separator: impl Into<String>, empty_marker: impl Into<String>) -> Self {
        NameRegistry {
            issued: HashSet::new(),
            separator: separator.into(),
            empty_marker: empty_marker.into(),
            counters: HashMap::new(),
        }
    }

    /// Creates a registry with `config.reserved` already issued.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut registry = NameRegistry::new(&config.separator, &config.empty_marker);
        for name in &config.reserved {
            registry.reserve(name)?;
        }
        Ok(registry)
    }

    /// Issues `candidate`, or a name synthesized from it if it is empty or
    /// already issued.
    pub fn add_name(&mut self, candidate: &str) -> Result<String> {
        self.add_name_with_prefix(candidate, candidate)
    }

    /// Issues `candidate` if it is non-empty and free. Otherwise issues the
    /// first free name among `base0`, `base1`, ... where `base` is derived
    /// from `prefix` (see `stem::joined_base`).
    pub fn add_name_with_prefix(&mut self, candidate: &str, prefix: &str) -> Result<String> {
        if !candidate.is_empty() && !self.issued.contains(candidate) {
            self.issued.insert(candidate.to_string());
            return Ok(candidate.to_string());
        }

        let base = stem::joined_base(prefix, &self.separator, &self.empty_marker);
        let start = self.counters.get(&*base).copied().unwrap_or(0);
        let issued = &self.issued;
        let (name, n) = probe::probe(&base, start, |s| issued.contains(s))?;
        // Saturates at u64::MAX; the next probe then reports exhaustion.
        self.counters.insert(base.into_owned(), n.saturating_add(1));
        self.issued.insert(name.clone());
        Ok(name)
    }

    /// Marks `name` as issued without returning it from `add_name`.
    pub fn reserve(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyReservation);
        }
        if self.issued.insert(name.to_string()) {
            Ok(())
        } else {
            Err(Error::AlreadyIssued {
                name: name.to_string(),
            })
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    /// Number of issued (including reserved) names
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn empty_marker(&self) -> &str {
        &self.empty_marker
    }

    /// Iterates over issued names in no particular order.
    pub fn issued(&self) -> impl Iterator<Item = &str> {
        self.issued.iter().map(|s| s.as_str())
    }
}
