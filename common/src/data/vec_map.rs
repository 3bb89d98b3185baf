use std::{borrow::Borrow, ops::Deref};

/// A small map that remembers insertion order. Lookups are linear, which is
/// fine for a table of players or the rows of one deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecMap<K, V> {
    inner: Vec<(K, V)>,
}

impl<K, V> Default for VecMap<K, V> {
    fn default() -> Self {
        VecMap { inner: Vec::new() }
    }
}

impl<K: Eq, V> VecMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.inner.iter().position(|(k, _)| k.borrow() == key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.iter().map(|(key, _)| key)
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.inner[index].1, value)),
            None => {
                self.inner.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).map(|index| &self.inner[index].1)
    }

    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let index = match self.position(&key) {
            Some(index) => index,
            None => {
                self.inner.push((key, default()));
                self.inner.len() - 1
            }
        };
        &mut self.inner[index].1
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K, V> Deref for VecMap<K, V> {
    type Target = [(K, V)];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, V> IntoIterator for VecMap<K, V> {
    type IntoIter = std::vec::IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let mut map = VecMap::new();
        for (key, value) in vec![("c", 1), ("a", 2), ("b", 3)] {
            map.insert(key, value);
        }
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = VecMap::new();
        map.insert(1, "one");
        map.insert(2, "two");

        assert_eq!(map.insert(1, "uno"), Some("one"));
        assert_eq!(map[0], (1, "uno"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: VecMap<&str, Vec<usize>> = VecMap::new();
        map.get_or_insert_with("x", Vec::new).push(1);
        map.get_or_insert_with("x", Vec::new).push(2);

        assert_eq!(map.get("x"), Some(&vec![1, 2]));
        assert!(map.contains_key("x"));

        map.clear();
        assert!(map.is_empty());
    }
}
