use rand::RngCore;

use super::{Height, MAX_HEIGHT};

/// The random draw for a new node is taken uniformly from `[0, RANGE)`.
const RANGE: u64 = (1 << MAX_HEIGHT) - 1;

/// Precompute the geometric partition of `[0, RANGE)` so that only a single
/// random number needs to be generated per node: a draw below `PARTITION[i]`
/// earns the node at least `i + 2` levels, which happens with probability
/// close to `2^-(i + 1)`.
const PARTITION: [u64; MAX_HEIGHT] = {
  let mut partition = [0; MAX_HEIGHT];

  let mut i = 0;
  while i < MAX_HEIGHT {
    partition[i] = (1 << (MAX_HEIGHT - 1 - i)) - 1;
    i += 1;
  }

  partition
};

/// Picks the height of a new node for a map currently holding `len` entries.
#[inline]
pub(crate) fn random_height<R: RngCore>(rng: &mut R, len: usize, max_height: Height) -> Height {
  let draw = rng.next_u64() % RANGE;
  Height::from_usize_unchecked(height_for_draw(draw, len, max_height.to_usize()))
}

/// Walks the partition for `draw`.
///
/// Most heights should stay below `log2(len)`, so the walk stops once
/// `2^(height - 2)` exceeds `len`. This keeps a small map from growing
/// unexpectedly tall towers.
fn height_for_draw(draw: u64, len: usize, max_height: usize) -> usize {
  let mut h = 1;
  while h < max_height && draw < PARTITION[h - 1] {
    if h > 2 && (1u64 << (h - 2)) > len as u64 {
      break;
    }
    h += 1;
  }
  h
}
