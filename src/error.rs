/// Error type for the [`SkipMap`](crate::SkipMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Indicates that a height is out of the `1..=MAX_HEIGHT` range.
  InvalidHeight {
    /// The rejected height.
    height: usize,
    /// The maximum height supported.
    max: usize,
  },

  /// Indicates that the requested pre-allocated capacity cannot be addressed by the node arena.
  CapacityTooLarge {
    /// The requested capacity.
    requested: usize,
    /// The maximum number of nodes the arena can address.
    max: usize,
  },
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::InvalidHeight { height, max } => {
        write!(f, "height {height} is out of range, must be in 1..={max}")
      }
      Self::CapacityTooLarge { requested, max } => write!(
        f,
        "capacity {requested} is too large, the arena can address at most {max} nodes"
      ),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
