use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

use super::value::StyleValue;

/// Flat mapping from style-parameter name to value.
///
/// Keys iterate in sorted order so rendered output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleDict(BTreeMap<String, StyleValue>);

impl StyleDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// Union where entries of `other` replace entries with the same key.
    pub fn merge(&mut self, other: StyleDict) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for StyleDict {
    type Item = (String, StyleValue);
    type IntoIter = btree_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleDict {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_merge_wins() {
        let mut dict = StyleDict::new().with("axes.grid", true).with("font.size", 14.0);
        dict.merge(StyleDict::new().with("axes.grid", false));
        assert_eq!(dict.get("axes.grid"), Some(&StyleValue::Bool(false)));
        assert_eq!(dict.get("font.size"), Some(&StyleValue::Float(14.0)));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn keys_are_sorted() {
        let dict: StyleDict = [("b", 1i64), ("a", 2), ("c", 3)].into_iter().collect();
        assert_eq!(dict.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
