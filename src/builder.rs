use rand::{rngs::SmallRng, RngCore, SeedableRng};

use super::{node::NodePtr, Ascend, Error, Height, Options, SkipMap};

/// The builder to build [`SkipMap`].
///
/// ## Example
///
/// ```rust
/// use skl_map::{Builder, Descend, Height, SkipMap};
///
/// let mut map: SkipMap<u32, &str, _> = Builder::new()
///   .with_comparator(Descend)
///   .with_max_height(Height::try_from(12u8).unwrap())
///   .with_seed(7)
///   .build()
///   .unwrap();
///
/// map.insert(1, "a");
/// map.insert(2, "b");
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 1]);
/// assert_eq!(map.max_height(), 12u8);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<C = Ascend, R = SmallRng> {
  opts: Options,
  cmp: C,
  rng: Option<R>,
}

impl Default for Builder {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Builder {
  /// Create a new `Builder` with default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      opts: Options::new(),
      cmp: Ascend,
      rng: None,
    }
  }
}

impl<C, R> Builder<C, R> {
  /// Returns a new map builder with the new [`Comparator`](super::Comparator).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::{Builder, Descend};
  ///
  /// let builder = Builder::new().with_comparator(Descend);
  /// ```
  #[inline]
  pub fn with_comparator<NC>(self, cmp: NC) -> Builder<NC, R> {
    Builder {
      opts: self.opts,
      cmp,
      rng: self.rng,
    }
  }

  /// Returns a new map builder which will use the given random generator to
  /// pick node heights. A generator set here takes precedence over
  /// [`Builder::with_seed`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::{rand::{rngs::StdRng, SeedableRng}, Builder, SkipMap};
  ///
  /// let map: SkipMap<u8, u8, _, StdRng> = Builder::new()
  ///   .with_rng(StdRng::seed_from_u64(3))
  ///   .build()
  ///   .unwrap();
  /// assert!(map.is_empty());
  /// ```
  #[inline]
  pub fn with_rng<NR>(self, rng: NR) -> Builder<C, NR> {
    Builder {
      opts: self.opts,
      cmp: self.cmp,
      rng: Some(rng),
    }
  }

  /// Returns a new map builder with the new [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skl_map::{Builder, Options};
  ///
  /// let builder = Builder::new().with_options(Options::new().with_capacity(1024));
  /// assert_eq!(builder.options().capacity(), Some(1024));
  /// ```
  #[inline]
  pub fn with_options(mut self, opts: Options) -> Self {
    self.opts = opts;
    self
  }

  /// Sets the maximum height of a node tower.
  ///
  /// The default value is [`Height::MAX`].
  #[inline]
  pub fn with_max_height(mut self, height: Height) -> Self {
    self.opts = self.opts.with_max_height(height);
    self
  }

  /// Sets how many nodes the map reserves room for up front.
  #[inline]
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.opts = self.opts.with_capacity(capacity);
    self
  }

  /// Sets the seed used to create the random generator of the map.
  ///
  /// Ignored if a generator is set with [`Builder::with_rng`].
  #[inline]
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.opts = self.opts.with_seed(seed);
    self
  }

  /// Returns the options of the builder.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the comparator of the builder.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Builds an empty [`SkipMap`].
  ///
  /// Without a generator set by [`Builder::with_rng`], one is created from the
  /// seed in the options, or seeded from the operating system if there is none.
  ///
  /// ## Errors
  ///
  /// - Returns [`Error::CapacityTooLarge`] if the capacity exceeds the number of nodes the arena can address.
  pub fn build<K, V>(self) -> Result<SkipMap<K, V, C, R>, Error>
  where
    R: RngCore + SeedableRng,
  {
    let Self { opts, cmp, rng } = self;

    if let Some(capacity) = opts.capacity() {
      if capacity > NodePtr::MAX_NODES {
        return Err(Error::CapacityTooLarge {
          requested: capacity,
          max: NodePtr::MAX_NODES,
        });
      }
    }

    let rng = match (rng, opts.seed()) {
      (Some(rng), _) => rng,
      (None, Some(seed)) => R::seed_from_u64(seed),
      (None, None) => R::from_os_rng(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
      max_height = %opts.max_height(),
      capacity = ?opts.capacity(),
      seeded = opts.seed().is_some(),
      "building skipmap"
    );

    Ok(SkipMap::construct(opts, cmp, rng))
  }
}
