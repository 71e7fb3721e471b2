//! String interner for identifiers and literal text.
//!
//! Each syntax tree owns its interner. Strings are stored once, shared
//! between the lookup map and the index table, and freed with the interner.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::Name;

/// String interner handing out [`Name`]s.
pub struct StringInterner {
    /// Map from string content to its index.
    map: FxHashMap<Arc<str>, u32>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<Arc<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as `Name::EMPTY`.
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let mut map = FxHashMap::default();
        map.insert(Arc::clone(&empty), 0);
        StringInterner {
            map,
            strings: vec![empty],
        }
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&idx) = self.map.get(s) {
            return Name::from_raw(idx);
        }

        let idx = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded u32::MAX entries"));
        let stored: Arc<str> = Arc::from(s);
        self.map.insert(Arc::clone(&stored), idx);
        self.strings.push(stored);
        Name::from_raw(idx)
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
