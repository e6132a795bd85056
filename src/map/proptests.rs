use super::{tests::check_invariants, *};
use crate::Descend;

use proptest::prelude::*;
use std::vec::Vec;

#[derive(Clone, Debug)]
enum Op {
  Insert(u16, u64),
  Remove(u16),
  Get(u16),
  Clear,
}

// A narrow key space so removals and upserts actually hit existing keys.
fn key_strategy() -> impl Strategy<Value = u16> + Clone {
  0u16..512
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
  let key = key_strategy();
  let op = prop_oneof![
    50 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
    30 => key.clone().prop_map(Op::Remove),
    19 => key.clone().prop_map(Op::Get),
    1 => Just(Op::Clear),
  ];
  prop::collection::vec(op, 0..=2000)
}

proptest! {
  #![proptest_config(ProptestConfig {
    cases: 256,
    max_shrink_iters: 50_000,
    .. ProptestConfig::default()
  })]

  #[test]
  fn prop_equivalence_with_btreemap(seed in any::<u64>(), ops in ops_strategy()) {
    let mut map: SkipMap<u16, u64> = Builder::new().with_seed(seed).build().unwrap();
    let mut model: BTreeMap<u16, u64> = BTreeMap::new();

    for op in ops {
      match op {
        Op::Insert(key, value) => {
          prop_assert_eq!(map.insert(key, value), model.insert(key, value));
        }
        Op::Remove(key) => {
          prop_assert_eq!(map.remove(&key), model.remove(&key));
        }
        Op::Get(key) => {
          prop_assert_eq!(map.get(&key), model.get(&key));
          prop_assert_eq!(map.contains_key(&key), model.contains_key(&key));
        }
        Op::Clear => {
          map.clear();
          model.clear();
        }
      }

      prop_assert_eq!(map.len(), model.len());
    }

    check_invariants(&map);
    prop_assert!(map.iter().eq(model.iter()));
  }

  #[test]
  fn prop_descend_matches_reversed_btreemap(
    seed in any::<u64>(),
    keys in prop::collection::vec(any::<i32>(), 0..=500),
  ) {
    let mut map = Builder::new()
      .with_comparator(Descend)
      .with_seed(seed)
      .build()
      .unwrap();
    let mut model = BTreeMap::new();
    for (i, key) in keys.into_iter().enumerate() {
      prop_assert_eq!(map.insert(key, i), model.insert(key, i));
    }

    check_invariants(&map);
    prop_assert!(map.iter().eq(model.iter().rev()));
  }

  #[test]
  fn prop_for_each_if_visits_prefix(
    keys in prop::collection::btree_set(any::<u32>(), 0..=200),
    stop in 0usize..=200,
  ) {
    let mut map: SkipMap<u32, ()> = keys.iter().map(|k| (*k, ())).collect();
    let mut visited = Vec::new();
    map.for_each_if(|k, _| {
      visited.push(*k);
      visited.len() <= stop
    });

    let expected: Vec<u32> = keys.iter().copied().take(stop + 1).collect();
    prop_assert_eq!(visited, expected);
  }
}
