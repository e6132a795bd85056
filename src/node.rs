use std::{boxed::Box, vec};

/// A stable reference to a node: the offset of its slot in the node arena.
///
/// Two offsets are reserved: [`NodePtr::NULL`] marks the end of a level and
/// [`NodePtr::HEAD`] addresses the head tower, which lives outside the arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodePtr(u32);

impl core::fmt::Debug for NodePtr {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      Self::NULL => f.write_str("NodePtr::NULL"),
      Self::HEAD => f.write_str("NodePtr::HEAD"),
      Self(offset) => f.debug_tuple("NodePtr").field(&offset).finish(),
    }
  }
}

impl NodePtr {
  pub(crate) const NULL: Self = Self(u32::MAX);

  pub(crate) const HEAD: Self = Self(u32::MAX - 1);

  /// The number of slots the arena can address.
  pub(crate) const MAX_NODES: usize = (u32::MAX - 1) as usize;

  #[inline]
  pub(crate) const fn new(offset: u32) -> Self {
    Self(offset)
  }

  #[inline]
  pub(crate) const fn offset(self) -> usize {
    self.0 as usize
  }

  #[inline]
  pub(crate) const fn is_null(self) -> bool {
    self.0 == Self::NULL.0
  }

  #[inline]
  pub(crate) const fn is_head(self) -> bool {
    self.0 == Self::HEAD.0
  }
}

/// A key-value pair together with its tower of forward links.
///
/// The height of a node is the length of its tower and never changes.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
  pub(crate) key: K,
  pub(crate) value: V,
  tower: Box<[NodePtr]>,
}

impl<K, V> Node<K, V> {
  #[inline]
  pub(crate) fn new(key: K, value: V, height: usize) -> Self {
    Self {
      key,
      value,
      tower: vec![NodePtr::NULL; height].into_boxed_slice(),
    }
  }

  #[inline]
  pub(crate) fn height(&self) -> usize {
    self.tower.len()
  }

  #[inline]
  pub(crate) fn next(&self, level: usize) -> NodePtr {
    self.tower[level]
  }

  #[inline]
  pub(crate) fn set_next(&mut self, level: usize, next: NodePtr) {
    self.tower[level] = next;
  }

  #[inline]
  pub(crate) fn tower(&self) -> &[NodePtr] {
    &self.tower
  }

  #[inline]
  pub(crate) fn into_value(self) -> V {
    self.value
  }
}
