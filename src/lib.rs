#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![allow(clippy::type_complexity, rustdoc::bare_urls)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::cmp;

mod arena;
mod node;
mod utils;

mod builder;
pub use builder::Builder;

mod error;
pub use error::Error;

mod options;
pub use options::Options;

mod types;
pub use types::Height;

/// A single-threaded ordered map implementation based on skiplist.
pub mod map;
pub use map::{Iter, Keys, SkipMap, Values};

pub use rand;

/// The maximum tower height a node can have.
///
/// With the level distribution used by [`SkipMap`], running out of levels is
/// statistically negligible for up to roughly `2^40` entries.
pub const MAX_HEIGHT: usize = 40;

/// Comparator is used to define the key order of a [`SkipMap`].
///
/// Implementations must provide a total order: consistent, antisymmetric and transitive.
/// A comparator violating this contract does not cause memory unsafety, but the
/// results of every lookup and mutation become unspecified.
pub trait Comparator<K: ?Sized> {
  /// Compares two keys.
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering;
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for &C {
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    (**self).compare(a, b)
  }
}

/// Ascend is a comparator that orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascend;

impl<K: ?Sized + Ord> Comparator<K> for Ascend {
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    a.cmp(b)
  }
}

/// Descend is a comparator that orders keys in the reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descend;

impl<K: ?Sized + Ord> Comparator<K> for Descend {
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    b.cmp(a)
  }
}

/// CompareFn adapts a closure or function into a [`Comparator`].
///
/// ## Example
///
/// ```rust
/// use skl_map::{CompareFn, SkipMap};
///
/// let mut map = SkipMap::with_comparator(CompareFn(|a: &&str, b: &&str| a.len().cmp(&b.len())));
/// map.insert("ccc", 3);
/// map.insert("a", 1);
/// map.insert("bb", 2);
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "bb", "ccc"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CompareFn<F>(pub F);

impl<K, F> Comparator<K> for CompareFn<F>
where
  K: ?Sized,
  F: Fn(&K, &K) -> cmp::Ordering,
{
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    (self.0)(a, b)
  }
}
