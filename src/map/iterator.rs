use core::iter::FusedIterator;

use crate::{arena::Arena, node::NodePtr};

/// An iterator over the entries of a [`SkipMap`](super::SkipMap), in key order.
///
/// Walks the bottom level from the head to the end.
pub struct Iter<'a, K, V> {
  arena: &'a Arena<K, V>,
  curr: NodePtr,
  remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      curr: self.curr,
      remaining: self.remaining,
    }
  }
}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for Iter<'_, K, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<'a, K, V> Iter<'a, K, V> {
  #[inline]
  pub(crate) const fn new(arena: &'a Arena<K, V>, first: NodePtr, len: usize) -> Self {
    Self {
      arena,
      curr: first,
      remaining: len,
    }
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.curr.is_null() {
      return None;
    }

    let node = self.arena.get(self.curr);
    self.curr = node.next(0);
    self.remaining -= 1;
    Some((&node.key, &node.value))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`SkipMap`](super::SkipMap), in order.
#[derive(Clone)]
pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Keys<'a, K, V> {
  #[inline]
  pub(crate) const fn new(iter: Iter<'a, K, V>) -> Self {
    Self(iter)
  }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(k, _)| k)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`SkipMap`](super::SkipMap), in key order.
#[derive(Clone)]
pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Values<'a, K, V> {
  #[inline]
  pub(crate) const fn new(iter: Iter<'a, K, V>) -> Self {
    Self(iter)
  }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
  type Item = &'a V;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(_, v)| v)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
