use core::mem;
use std::vec::Vec;

use super::node::{Node, NodePtr};

#[derive(Debug, Clone)]
enum Slot<K, V> {
  Occupied(Node<K, V>),
  Vacant { next_free: NodePtr },
}

/// The node pool backing a [`SkipMap`](crate::SkipMap).
///
/// Nodes are addressed by the offset of their slot, which stays stable for the
/// whole life of the node. Deallocated slots are threaded into a free-list and
/// handed out again before the slot vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
  slots: Vec<Slot<K, V>>,
  free: NodePtr,
  allocated: usize,
}

impl<K, V> Arena<K, V> {
  #[inline]
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    Self {
      slots: Vec::with_capacity(capacity),
      free: NodePtr::NULL,
      allocated: 0,
    }
  }

  /// Returns the number of live nodes.
  #[inline]
  pub(crate) fn allocated(&self) -> usize {
    self.allocated
  }

  /// Returns the number of slots waiting on the free-list.
  #[inline]
  pub(crate) fn discarded(&self) -> usize {
    self.slots.len() - self.allocated
  }

  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  /// Moves the node into the arena and returns its stable pointer.
  ///
  /// # Panics
  /// - If the arena already addresses [`NodePtr::MAX_NODES`] slots.
  pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodePtr {
    self.allocated += 1;

    if !self.free.is_null() {
      let ptr = self.free;
      let slot = &mut self.slots[ptr.offset()];
      match mem::replace(slot, Slot::Occupied(node)) {
        Slot::Vacant { next_free } => self.free = next_free,
        Slot::Occupied(_) => panic!("free-list points to an occupied slot"),
      }
      return ptr;
    }

    let offset = self.slots.len();
    if offset >= NodePtr::MAX_NODES {
      panic!("node arena is full");
    }
    self.slots.push(Slot::Occupied(node));
    NodePtr::new(offset as u32)
  }

  /// Removes the node from the arena and pushes its slot onto the free-list.
  pub(crate) fn dealloc(&mut self, ptr: NodePtr) -> Node<K, V> {
    let slot = &mut self.slots[ptr.offset()];
    match mem::replace(slot, Slot::Vacant { next_free: self.free }) {
      Slot::Occupied(node) => {
        self.free = ptr;
        self.allocated -= 1;
        node
      }
      Slot::Vacant { .. } => panic!("double free of node {ptr:?}"),
    }
  }

  #[inline]
  pub(crate) fn get(&self, ptr: NodePtr) -> &Node<K, V> {
    match &self.slots[ptr.offset()] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("dangling node pointer {ptr:?}"),
    }
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, ptr: NodePtr) -> &mut Node<K, V> {
    match &mut self.slots[ptr.offset()] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("dangling node pointer {ptr:?}"),
    }
  }

  /// Drops every node, keeping the allocated slot capacity.
  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free = NodePtr::NULL;
    self.allocated = 0;
  }
}
