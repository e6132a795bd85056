use core::mem;
use std::{boxed::Box, collections::BTreeMap, vec};

use rand::{rngs::SmallRng, RngCore, SeedableRng};

use super::{
  arena::Arena,
  node::{Node, NodePtr},
  utils::random_height,
  Ascend, Builder, Comparator, Error, Height, Options,
};

mod iterator;
pub use iterator::*;


#[cfg(test)]
mod proptests;

/// An ordered map based on skiplist, with unique keys and replaceable values.
///
/// Nodes live in an arena and link to each other by stable offsets. The head
/// tower is owned by the map and has one slot per level up to the configured
/// maximum height.
///
/// Insertion and removal record, per level, the node preceding the key in a
/// scratch buffer owned by the map, so neither allocates bookkeeping on each
/// call. Both take `&mut self`, which is what keeps the scratch buffer from
/// ever being shared by two mutations. Lookups take `&self`.
///
/// ## Example
///
/// ```rust
/// use skl_map::SkipMap;
///
/// let mut map = SkipMap::new();
/// map.insert(5, "e");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// assert_eq!(map.get(&3), Some(&"c"));
/// assert_eq!(map.remove(&1), Some("a"));
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&3, &"c"), (&5, &"e")]);
/// ```
#[derive(Clone)]
pub struct SkipMap<K, V, C = Ascend, R = SmallRng> {
  arena: Arena<K, V>,
  head: Box<[NodePtr]>,
  /// Predecessors recorded by the last mutation search, one per level.
  scratch: Box<[NodePtr]>,
  /// Current height. 1 <= height <= max_height.
  height: usize,
  max_height: Height,
  len: usize,
  rng: R,
  cmp: C,
}

impl<K, V> SkipMap<K, V> {
  /// Creates an empty map ordered by [`Ascend`], with default options and a
  /// random generator seeded from the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::SkipMap;
  ///
  /// let map = SkipMap::<u64, String>::new();
  /// assert!(map.is_empty());
  /// assert_eq!(map.height(), 1);
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_comparator(Ascend)
  }

  /// Creates an empty map ordered by [`Ascend`] with the given [`Options`].
  ///
  /// ## Errors
  ///
  /// - Returns [`Error::CapacityTooLarge`] if the requested capacity cannot be addressed.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::{Options, SkipMap};
  ///
  /// let map = SkipMap::<u64, u64>::with_options(Options::new().with_capacity(64).with_seed(1)).unwrap();
  /// assert!(map.capacity() >= 64);
  /// ```
  #[inline]
  pub fn with_options(opts: Options) -> Result<Self, Error> {
    Builder::new().with_options(opts).build()
  }
}

impl<K, V, C> SkipMap<K, V, C> {
  /// Creates an empty map ordered by the given [`Comparator`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::{Descend, SkipMap};
  ///
  /// let mut map = SkipMap::with_comparator(Descend);
  /// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
  /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
  /// ```
  #[inline]
  pub fn with_comparator(cmp: C) -> Self {
    Self::construct(Options::new(), cmp, SmallRng::from_os_rng())
  }
}

impl<K, V, C, R> SkipMap<K, V, C, R> {
  #[inline]
  pub(crate) fn construct(opts: Options, cmp: C, rng: R) -> Self {
    let max_height = opts.max_height();
    let levels = max_height.to_usize();
    Self {
      arena: Arena::with_capacity(opts.capacity().unwrap_or(0)),
      head: vec![NodePtr::NULL; levels].into_boxed_slice(),
      scratch: vec![NodePtr::HEAD; levels].into_boxed_slice(),
      height: 1,
      max_height,
      len: 0,
      rng,
      cmp,
    }
  }

  /// Returns the number of entries in the map.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the map contains no entries.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the current height of the map, that is the height of the
  /// tallest tower currently linked, or `1` if the map is empty.
  #[inline]
  pub fn height(&self) -> usize {
    self.height
  }

  /// Returns the maximum height a tower can reach in this map.
  #[inline]
  pub fn max_height(&self) -> Height {
    self.max_height
  }

  /// Returns how many nodes the map can hold without reallocating its arena.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.arena.capacity()
  }

  /// Returns the comparator used to compare keys.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Removes all entries from the map.
  ///
  /// Every head slot is reset, the height goes back to `1` and all nodes are
  /// dropped. The arena keeps its capacity.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::SkipMap;
  ///
  /// let mut map: SkipMap<_, _> = (0..100).map(|i| (i, i)).collect();
  /// map.clear();
  /// assert!(map.is_empty());
  /// assert_eq!(map.height(), 1);
  /// assert_eq!(map.get(&1), None);
  /// ```
  pub fn clear(&mut self) {
    #[cfg(feature = "tracing")]
    tracing::debug!(len = self.len, height = self.height, "clearing skipmap");

    self.head.fill(NodePtr::NULL);
    self.scratch.fill(NodePtr::HEAD);
    self.arena.clear();
    self.height = 1;
    self.len = 0;
  }

  /// Calls `f` on every entry in key order, with mutable access to the value.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::SkipMap;
  ///
  /// let mut map: SkipMap<_, _> = [(2, 20), (1, 10)].into_iter().collect();
  /// let mut seen = Vec::new();
  /// map.for_each(|k, v| {
  ///   *v += 1;
  ///   seen.push(*k);
  /// });
  /// assert_eq!(seen, [1, 2]);
  /// assert_eq!(map.get(&2), Some(&21));
  /// ```
  pub fn for_each<F>(&mut self, mut f: F)
  where
    F: FnMut(&K, &mut V),
  {
    self.for_each_if(|k, v| {
      f(k, v);
      true
    })
  }

  /// Calls `f` on every entry in key order until it returns `false`.
  ///
  /// The entry on which `f` returns `false` is the last one visited.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::SkipMap;
  ///
  /// let mut map: SkipMap<_, _> = (0..10).map(|i| (i, ())).collect();
  /// let mut visited = 0;
  /// map.for_each_if(|k, _| {
  ///   visited += 1;
  ///   *k < 2
  /// });
  /// assert_eq!(visited, 3);
  /// ```
  pub fn for_each_if<F>(&mut self, mut f: F)
  where
    F: FnMut(&K, &mut V) -> bool,
  {
    let mut curr = self.head[0];
    while !curr.is_null() {
      let node = self.arena.get_mut(curr);
      if !f(&node.key, &mut node.value) {
        return;
      }
      curr = node.next(0);
    }
  }

  /// Returns an iterator over the entries of the map, in key order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter::new(&self.arena, self.head[0], self.len)
  }

  /// Returns an iterator over the keys of the map, in order.
  #[inline]
  pub fn keys(&self) -> Keys<'_, K, V> {
    Keys::new(self.iter())
  }

  /// Returns an iterator over the values of the map, in key order.
  #[inline]
  pub fn values(&self) -> Values<'_, K, V> {
    Values::new(self.iter())
  }

  /// ## Panics
  /// - If `nd` is neither [`NodePtr::HEAD`] nor a live node of this map.
  #[inline]
  fn next(&self, nd: NodePtr, level: usize) -> NodePtr {
    if nd.is_head() {
      self.head[level]
    } else {
      self.arena.get(nd).next(level)
    }
  }

  /// ## Panics
  /// - If `nd` is neither [`NodePtr::HEAD`] nor a live node of this map.
  #[inline]
  fn set_next(&mut self, nd: NodePtr, level: usize, next: NodePtr) {
    if nd.is_head() {
      self.head[level] = next;
    } else {
      self.arena.get_mut(nd).set_next(level, next);
    }
  }
}

impl<K, V, C, R> SkipMap<K, V, C, R>
where
  C: Comparator<K>,
{
  /// Returns `true` if the map contains the key.
  #[inline]
  pub fn contains_key(&self, key: &K) -> bool {
    !self.find_node(key).is_null()
  }

  /// Returns a reference to the value of the key, if it exists.
  #[inline]
  pub fn get(&self, key: &K) -> Option<&V> {
    let nd = self.find_node(key);
    if nd.is_null() {
      return None;
    }
    Some(&self.arena.get(nd).value)
  }

  /// Returns a mutable reference to the value of the key, if it exists.
  #[inline]
  pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    let nd = self.find_node(key);
    if nd.is_null() {
      return None;
    }
    Some(&mut self.arena.get_mut(nd).value)
  }

  /// Removes the key from the map, returning its value if the key existed.
  ///
  /// The node is spliced out of every level it is linked on, then empty top
  /// levels are trimmed so that searches start at the tallest remaining tower.
  pub fn remove(&mut self, key: &K) -> Option<V> {
    let nd = self.find_splice(key, false)?;
    let node = self.arena.dealloc(nd);

    // prev.next == nd on every level of the tower, see `find_splice`.
    for (level, &next) in node.tower().iter().enumerate() {
      let prev = self.scratch[level];
      self.set_next(prev, level, next);
    }

    #[cfg(feature = "tracing")]
    let old_height = self.height;

    while self.height > 1 && self.head[self.height - 1].is_null() {
      self.height -= 1;
    }

    #[cfg(feature = "tracing")]
    if self.height != old_height {
      tracing::trace!(from = old_height, to = self.height, "skipmap height decreased");
    }

    self.len -= 1;
    Some(node.into_value())
  }

  /// Finds the node holding the key, returning as soon as any level reaches it.
  ///
  /// Returns [`NodePtr::NULL`] if the key is absent.
  fn find_node(&self, key: &K) -> NodePtr {
    let mut prev = NodePtr::HEAD;
    for level in (0..self.height).rev() {
      let mut curr = self.next(prev, level);
      while !curr.is_null() {
        let node = self.arena.get(curr);
        match self.cmp.compare(&node.key, key) {
          core::cmp::Ordering::Less => {
            prev = curr;
            curr = node.next(level);
          }
          core::cmp::Ordering::Equal => return curr,
          core::cmp::Ordering::Greater => break,
        }
      }
    }
    NodePtr::NULL
  }

  /// Records in the scratch buffer, for every level below the current height,
  /// the last node whose key is less than `key`.
  ///
  /// Returns the node holding `key` if it exists. When `return_when_found` is
  /// `true` the search stops at the first level reaching that node, leaving the
  /// scratch buffer partially filled.
  fn find_splice(&mut self, key: &K, return_when_found: bool) -> Option<NodePtr> {
    let mut prev = NodePtr::HEAD;
    for level in (0..self.height).rev() {
      let mut curr = self.next(prev, level);
      while !curr.is_null() {
        let node = self.arena.get(curr);
        match self.cmp.compare(&node.key, key) {
          core::cmp::Ordering::Less => {
            prev = curr;
            curr = node.next(level);
          }
          core::cmp::Ordering::Equal if return_when_found => return Some(curr),
          _ => break,
        }
      }
      self.scratch[level] = prev;
    }

    let candidate = self.next(self.scratch[0], 0);
    if candidate.is_null() {
      return None;
    }

    match self.cmp.compare(&self.arena.get(candidate).key, key) {
      core::cmp::Ordering::Equal => Some(candidate),
      _ => None,
    }
  }
}

impl<K, V, C, R> SkipMap<K, V, C, R>
where
  C: Comparator<K>,
  R: RngCore,
{
  /// Inserts a key-value pair into the map.
  ///
  /// If the key already exists, its value is replaced in place and the old
  /// value is returned; the structure and the length are left untouched.
  ///
  /// ## Panics
  /// - If the map already holds as many nodes as its arena can address.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// assert_eq!(map.insert("k", 1), None);
  /// assert_eq!(map.insert("k", 2), Some(1));
  /// assert_eq!(map.len(), 1);
  /// assert_eq!(map.get(&"k"), Some(&2));
  /// ```
  pub fn insert(&mut self, key: K, value: V) -> Option<V> {
    if let Some(curr) = self.find_splice(&key, true) {
      return Some(mem::replace(&mut self.arena.get_mut(curr).value, value));
    }

    let height = random_height(&mut self.rng, self.len, self.max_height).to_usize();
    let nd = self.arena.alloc(Node::new(key, value, height));

    for level in 0..height.min(self.height) {
      let prev = self.scratch[level];
      let next = self.next(prev, level);
      self.arena.get_mut(nd).set_next(level, next);
      self.set_next(prev, level, nd);
    }

    // New node increased the height of the skiplist, the levels above the
    // old height are empty, so the head links to the node directly.
    if height > self.height {
      #[cfg(feature = "tracing")]
      tracing::trace!(from = self.height, to = height, "skipmap height increased");

      for level in self.height..height {
        self.head[level] = nd;
      }
      self.height = height;
    }

    self.len += 1;
    None
  }
}

impl<K, V> Default for SkipMap<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V, C, R> core::fmt::Debug for SkipMap<K, V, C, R>
where
  K: core::fmt::Debug,
  V: core::fmt::Debug,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<'a, K, V, C, R> IntoIterator for &'a SkipMap<K, V, C, R> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<K, V, C, R> Extend<(K, V)> for SkipMap<K, V, C, R>
where
  C: Comparator<K>,
  R: RngCore,
{
  #[inline]
  fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
    iter.into_iter().for_each(|(k, v)| {
      self.insert(k, v);
    });
  }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipMap<K, V> {
  #[inline]
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut map = Self::new();
    map.extend(iter);
    map
  }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for SkipMap<K, V> {
  #[inline]
  fn from(arr: [(K, V); N]) -> Self {
    arr.into_iter().collect()
  }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for SkipMap<K, V> {
  #[inline]
  fn from(map: BTreeMap<K, V>) -> Self {
    map.into_iter().collect()
  }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K: Ord, V, S> From<std::collections::HashMap<K, V, S>> for SkipMap<K, V> {
  #[inline]
  fn from(map: std::collections::HashMap<K, V, S>) -> Self {
    map.into_iter().collect()
  }
}
