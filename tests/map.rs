use skl_map::{
  rand::{rngs::StdRng, SeedableRng},
  Builder, CompareFn, Descend, Error, Height, Options, SkipMap, MAX_HEIGHT,
};
use std::collections::{BTreeMap, HashMap};

#[test]
fn scenario() {
  let mut map = SkipMap::new();
  for (k, v) in [(5, "e"), (1, "a"), (3, "c")] {
    assert_eq!(map.insert(k, v), None);
  }

  let mut visited = Vec::new();
  map.for_each(|k, v| visited.push((*k, *v)));
  assert_eq!(visited, [(1, "a"), (3, "c"), (5, "e")]);

  assert_eq!(map.get(&3), Some(&"c"));
  assert_eq!(map.remove(&1), Some("a"));

  visited.clear();
  map.for_each(|k, v| visited.push((*k, *v)));
  assert_eq!(visited, [(3, "c"), (5, "e")]);
}

#[test]
fn construct_from_mapping() {
  let source: HashMap<String, usize> = ["one", "two", "three", "four"]
    .iter()
    .map(|s| (s.to_string(), s.len()))
    .collect();
  let map = SkipMap::from(source.clone());

  assert_eq!(map.len(), source.len());
  for (k, v) in &source {
    assert_eq!(map.get(k), Some(v));
  }
  assert_eq!(
    map.keys().map(String::as_str).collect::<Vec<_>>(),
    ["four", "one", "three", "two"]
  );
}

#[test]
fn matches_btreemap_under_churn() {
  let mut map = Builder::new()
    .with_rng(StdRng::seed_from_u64(99))
    .with_capacity(256)
    .build()
    .unwrap();
  let mut model = BTreeMap::new();

  // deterministic pseudo random walk over a small key space
  let mut x: u32 = 12345;
  for step in 0..20_000u32 {
    x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
    let key = (x >> 16) % 300;
    if (x >> 8) % 3 == 0 {
      assert_eq!(map.remove(&key), model.remove(&key));
    } else {
      assert_eq!(map.insert(key, step), model.insert(key, step));
    }
    assert_eq!(map.len(), model.len());
  }

  assert!(map.iter().eq(model.iter()));
  assert!(map.height() <= MAX_HEIGHT);
}

#[test]
fn custom_orders() {
  let mut desc = SkipMap::with_comparator(Descend);
  desc.extend((0..10).map(|i| (i, i * i)));
  assert_eq!(desc.values().copied().collect::<Vec<_>>(), [81, 64, 49, 36, 25, 16, 9, 4, 1, 0]);

  let mut by_len = SkipMap::with_comparator(CompareFn(|a: &&str, b: &&str| {
    a.len().cmp(&b.len())
  }));
  by_len.insert("abc", 1);
  assert_eq!(by_len.insert("xyz", 2), Some(1));
  assert!(by_len.contains_key(&"123"));
  assert!(!by_len.contains_key(&"12"));
}

#[test]
fn for_each_if_stops() {
  let mut map: SkipMap<u32, u32> = (0..100).map(|i| (i, 0)).collect();
  let mut count = 0;
  map.for_each_if(|k, v| {
    *v = 1;
    count += 1;
    *k < 9
  });
  assert_eq!(count, 10);
  assert_eq!(map.values().filter(|v| **v == 1).count(), 10);
}

#[test]
fn clear_and_reuse() {
  let mut map: SkipMap<u32, ()> = (0..1000).map(|i| (i, ())).collect();
  let capacity = map.capacity();
  map.clear();
  assert!(map.is_empty());
  assert_eq!(map.height(), 1);
  assert_eq!(map.capacity(), capacity);

  map.insert(1, ());
  assert_eq!(map.len(), 1);
  assert!(map.contains_key(&1));
}

#[test]
fn options_and_errors() {
  assert_eq!(
    Height::try_from(0u8),
    Err(Error::InvalidHeight { height: 0, max: MAX_HEIGHT })
  );
  assert_eq!(
    Error::InvalidHeight { height: 41, max: 40 }.to_string(),
    "height 41 is out of range, must be in 1..=40"
  );

  let opts = Options::new()
    .with_max_height(Height::try_from(4u8).unwrap())
    .with_seed(7);
  let mut map = SkipMap::with_options(opts).unwrap();
  for i in 0..1000u32 {
    map.insert(i, i);
  }
  assert_eq!(map.max_height(), 4u8);
  assert!(map.height() <= 4);

  let err = Builder::new()
    .with_capacity(usize::MAX)
    .build::<u8, u8>()
    .unwrap_err();
  assert!(matches!(err, Error::CapacityTooLarge { requested: usize::MAX, .. }));
}
