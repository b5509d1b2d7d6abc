/// Std trait impls shared by the tree types. Each type must provide `new`,
/// `at`, `at_mut`, `insert`, `iter` and `len`.
macro_rules! tree_traits {
    ($tree:ident) => {
        impl<K, V> Default for $tree<K, V> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for $tree<K, V> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_map().entries(self.iter()).finish()
            }
        }

        /// Panics with [`TreeError::KeyNotFound`](crate::TreeError) if the
        /// key is absent; use `at` or `get` for a fallible lookup.
        impl<K: Ord, V> std::ops::Index<&K> for $tree<K, V> {
            type Output = V;

            fn index(&self, key: &K) -> &V {
                match self.at(key) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<K: Ord, V> std::ops::IndexMut<&K> for $tree<K, V> {
            fn index_mut(&mut self, key: &K) -> &mut V {
                match self.at_mut(key) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<K: Ord, V> FromIterator<(K, V)> for $tree<K, V> {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                let mut tree = Self::new();
                tree.extend(iter);
                tree
            }
        }

        impl<K: Ord, V> Extend<(K, V)> for $tree<K, V> {
            fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
                for (k, v) in iter {
                    self.insert(k, v);
                }
            }
        }

        impl<'a, K, V> IntoIterator for &'a $tree<K, V> {
            type Item = (&'a K, &'a V);
            type IntoIter = $crate::cursor::Iter<'a, K, V>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}
