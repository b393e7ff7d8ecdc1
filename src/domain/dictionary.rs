use std::collections::HashMap;

/// Ordered string-to-string associations used at the wire boundary.
///
/// Keys are unique: `insert` replaces an existing value in place, so the
/// original insertion position is kept. `get` therefore always sees the last
/// value written for a key. Lookups go through a key-to-position index.
#[derive(Debug, Clone, Default)]
pub struct FlatDictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every entry of `other` into `self` under `prefix[index][key]`.
    pub fn extend_indexed(&mut self, prefix: &str, index: usize, other: FlatDictionary) {
        for (key, value) in other {
            self.insert(format!("{}[{}][{}]", prefix, index, key), value);
        }
    }
}

// Equality is over the ordered entries; the index is derived from them.
impl PartialEq for FlatDictionary {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FlatDictionary {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = FlatDictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FlatDictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for FlatDictionary {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<HashMap<String, String>> for FlatDictionary {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut dict = FlatDictionary::new();
        dict.insert("skip", "0");
        dict.insert("take", "10");
        dict.insert("skip", "20");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("skip"), Some("20"));
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["skip", "take"]);
    }

    #[test]
    fn test_from_iter_last_value_wins() {
        let dict: FlatDictionary = vec![("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(dict.get("a"), Some("3"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_many_keys_keep_order_and_last_value() {
        let mut dict = FlatDictionary::new();
        for i in 0..5000 {
            dict.insert(format!("filters[{}][fields]", i), format!("F{}", i));
        }
        dict.insert("filters[42][fields]", "replaced");

        assert_eq!(dict.len(), 5000);
        assert_eq!(dict.get("filters[42][fields]"), Some("replaced"));
        assert_eq!(dict.get("filters[4999][fields]"), Some("F4999"));
        assert_eq!(dict.keys().nth(42), Some("filters[42][fields]"));
        assert_eq!(dict.keys().last(), Some("filters[4999][fields]"));
    }

    #[test]
    fn test_equality_ignores_lookup_state() {
        let mut built = FlatDictionary::new();
        built.insert("a", "0");
        built.insert("a", "1");
        let collected: FlatDictionary = [("a", "1")].into_iter().collect();
        assert_eq!(built, collected);
    }

    #[test]
    fn test_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("skip".to_string(), "5".to_string());
        let dict = FlatDictionary::from(map);
        assert_eq!(dict.get("skip"), Some("5"));
    }

    #[test]
    fn test_extend_indexed() {
        let child: FlatDictionary = [("prop", "Name"), ("ord", "asc")].into_iter().collect();
        let mut dict = FlatDictionary::new();
        dict.extend_indexed("sortings", 1, child);

        assert_eq!(dict.get("sortings[1][prop]"), Some("Name"));
        assert_eq!(dict.get("sortings[1][ord]"), Some("asc"));
        assert!(!dict.contains_key("prop"));
    }
}
