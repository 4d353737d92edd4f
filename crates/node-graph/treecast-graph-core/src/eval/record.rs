//! Explicit per-row results, keyed by output-socket name.

use treecast_api_core::Value;

/// The named results of one compute-hook invocation.
///
/// Hooks insert only the outputs they produced this row; a name that is not
/// inserted is simply not appended to that output's accumulator. Insertion
/// order is preserved and a repeated insert replaces the earlier value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultRecord {
    entries: Vec<(String, Value)>,
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder form of [`insert`](Self::insert), convenient inside hooks.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl IntoIterator for ResultRecord {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
