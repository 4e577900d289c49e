use fxhash::FxHashMap;

use crate::hint::{SubstitutionHint, SENTENCE_START};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChangeEntry {
    original: String,
    replacement: String,
}

/// Lowercased original word → replacement, in first-insertion order.
///
/// Overwriting a key replaces its value but keeps the key's slot, so
/// iteration order is the order in which each original word first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeMap {
    entries: Vec<ChangeEntry>,
    index: FxHashMap<String, usize>,
}

impl ChangeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key → replacement`, returning the previous replacement when
    /// `key` was already present.
    pub fn insert(&mut self, key: String, replacement: String) -> Option<String> {
        if let Some(&slot) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries[slot].replacement, replacement);
            return Some(previous);
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(ChangeEntry {
            original: key,
            replacement,
        });
        None
    }

    /// Replacement recorded for an already-normalized original word.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].replacement.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(original, replacement)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.original.as_str(), e.replacement.as_str()))
    }

    /// First original (in map order) whose lowercased replacement equals
    /// `clean`.
    pub fn original_for(&self, clean: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.replacement.to_lowercase() == clean)
            .map(|e| e.original.as_str())
    }

    /// Reverse lookup table: lowercased replacement → first original in map
    /// order. Built once per annotation pass.
    pub(crate) fn reverse_index(&self) -> FxHashMap<String, &str> {
        let mut reverse = FxHashMap::default();
        for entry in &self.entries {
            reverse
                .entry(entry.replacement.to_lowercase())
                .or_insert(entry.original.as_str());
        }
        reverse
    }
}

/// Builds a [`ChangeMap`] with the default `sentence_start` sentinel.
pub fn build_change_map(hints: &[SubstitutionHint]) -> ChangeMap {
    build_change_map_with(hints, SENTENCE_START)
}

/// Builds a [`ChangeMap`], skipping hints whose `original` equals `sentinel`.
///
/// Keys are `lowercase(trim(original))`; a later hint with an equal key
/// overwrites the earlier replacement.
pub fn build_change_map_with(hints: &[SubstitutionHint], sentinel: &str) -> ChangeMap {
    let mut map = ChangeMap::new();

    for hint in hints {
        if hint.is_structural(sentinel) {
            continue;
        }
        let key = hint.original.trim().to_lowercase();
        if let Some(previous) = map.insert(key, hint.replacement.clone()) {
            tracing::trace!(
                original = %hint.original,
                previous = %previous,
                replacement = %hint.replacement,
                "hint overwrote earlier replacement"
            );
        }
    }

    map
}
