use super::Height;

/// Options for [`SkipMap`](crate::SkipMap).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_height: Height,
  capacity: Option<usize>,
  seed: Option<u64>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_height: Height::new(),
      capacity: None,
      seed: None,
    }
  }

  /// Sets the maximum height of a node tower.
  ///
  /// The height of the head tower, and so the size of the scratch buffer used
  /// by insertion and removal, is equal to this value.
  ///
  /// The default value is [`Height::MAX`].
  ///
  /// ## Example
  ///
  /// ```
  /// use skl_map::{Options, Height};
  ///
  /// let options = Options::new().with_max_height(Height::try_from(16u8).unwrap());
  /// assert_eq!(options.max_height(), 16u8);
  /// ```
  #[inline]
  pub const fn with_max_height(mut self, height: Height) -> Self {
    self.max_height = height;
    self
  }

  /// Sets how many nodes the node arena reserves room for up front.
  ///
  /// ## Example
  ///
  /// ```
  /// use skl_map::Options;
  ///
  /// let options = Options::new().with_capacity(1024);
  /// assert_eq!(options.capacity(), Some(1024));
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = Some(capacity);
    self
  }

  /// Sets the seed of the random generator used to pick node heights.
  ///
  /// Without a seed, the generator is seeded from the operating system.
  /// Note that a seed alone does not make the tower heights reproducible: the
  /// height cap depends on the length of the map at insertion time, so the
  /// insertion order must be fixed as well.
  ///
  /// ## Example
  ///
  /// ```
  /// use skl_map::Options;
  ///
  /// let options = Options::new().with_seed(42);
  /// assert_eq!(options.seed(), Some(42));
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Returns the maximum height of a node tower.
  #[inline]
  pub const fn max_height(&self) -> Height {
    self.max_height
  }

  /// Returns the number of nodes reserved up front, if set.
  #[inline]
  pub const fn capacity(&self) -> Option<usize> {
    self.capacity
  }

  /// Returns the random generator seed, if set.
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }
}
