use arbitrary_int::u6;

use super::{Error, MAX_HEIGHT};

/// Height which is used to configure the maximum tower height of a skiplist,
/// it is a 6-bit unsigned integer in the range `1..=MAX_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(u6);

impl Height {
  /// The maximum value of the Height.
  pub const MAX: Self = Self(u6::new(MAX_HEIGHT as u8));

  /// The minimum value of the Height.
  pub const MIN: Self = Self(u6::new(1));

  /// Creates a new Height with the default value, which is [`Height::MAX`].
  #[inline]
  pub const fn new() -> Self {
    Self::MAX
  }

  /// Converts the Height to a `usize`.
  #[inline]
  pub const fn to_usize(self) -> usize {
    self.0.value() as usize
  }

  #[inline]
  pub(crate) const fn from_usize_unchecked(val: usize) -> Self {
    Self(u6::new(val as u8))
  }
}

impl Default for Height {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl core::fmt::Display for Height {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.to_usize())
  }
}

macro_rules! impl_height_conversions {
  ($($target:ident),+ $(,)?) => {
    $(
      paste::paste! {
        impl Height {
          #[doc = "Try to create a Height from the given `" $target "`."]
          #[inline]
          pub fn [< try_from_ $target >](val: $target) -> Result<Self, Error> {
            if (1..=MAX_HEIGHT as $target).contains(&val) {
              Ok(Self::from_usize_unchecked(val as usize))
            } else {
              Err(Error::InvalidHeight {
                height: val as usize,
                max: MAX_HEIGHT,
              })
            }
          }
        }

        impl TryFrom<$target> for Height {
          type Error = Error;

          #[inline]
          fn try_from(val: $target) -> Result<Self, Self::Error> {
            Self::[< try_from_ $target >](val)
          }
        }

        impl From<Height> for $target {
          #[inline]
          fn from(height: Height) -> Self {
            height.to_usize() as $target
          }
        }

        impl PartialEq<$target> for Height {
          #[inline]
          fn eq(&self, other: &$target) -> bool {
            (self.to_usize() as u64).eq(&(*other as u64))
          }
        }

        impl PartialOrd<$target> for Height {
          #[inline]
          fn partial_cmp(&self, other: &$target) -> Option<core::cmp::Ordering> {
            (self.to_usize() as u64).partial_cmp(&(*other as u64))
          }
        }
      }
    )*
  };
}

impl_height_conversions!(u8, u16, u32, u64, usize);
