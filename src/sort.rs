//! Comparator-driven sort and search over untyped arrays.
//!
//! The arrays these see are small, so the sort is a plain insertion sort:
//! stable, in place, and needing a single element of scratch space.

use core::ffi::c_int;
use std::ptr;

use crate::{
  heap::{Allocator, RawHeap},
  memory,
};

/// Sorts `count` elements of `size` bytes at `base` so that `compare`
/// never reports a later element as ordered before an earlier one.
///
/// Equal elements keep their relative order. If the scratch element cannot
/// be allocated the array is left untouched.
pub unsafe fn sort<H, F>(
  heap: &Allocator<H>,
  base: *mut u8,
  count: usize,
  size: usize,
  mut compare: F,
) where
  H: RawHeap,
  F: FnMut(*const u8, *const u8) -> c_int,
{
  unsafe {
    if count < 2 {
      return;
    }

    let temp = heap.allocate(size);
    if temp.is_null() {
      return;
    }

    for i in 1..count {
      memory::copy(temp, base.add(i * size), size);

      let mut j = i;
      while j > 0 && compare(base.add((j - 1) * size), temp) > 0 {
        memory::copy(base.add(j * size), base.add((j - 1) * size), size);
        j -= 1;
      }

      memory::copy(base.add(j * size), temp, size);
    }

    heap.release(temp);
  }
}

/// Finds an element equal to `key` in a sorted array, or returns null.
///
/// `compare` receives the key first and an array element second. With
/// duplicates, any one of the matching elements may be returned.
pub unsafe fn binary_search<F>(
  key: *const u8,
  base: *const u8,
  count: usize,
  size: usize,
  mut compare: F,
) -> *mut u8
where
  F: FnMut(*const u8, *const u8) -> c_int,
{
  unsafe {
    let mut low = 0usize;
    let mut high = count;

    while low < high {
      let mid = low + (high - low) / 2;
      let element = base.add(mid * size);
      let ordering = compare(key, element);

      if ordering < 0 {
        high = mid;
      } else if ordering > 0 {
        low = mid + 1;
      } else {
        return element as *mut u8;
      }
    }

    ptr::null_mut()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::heap::BlockHeap;
  use crate::testing::ExhaustedHeap;
  use proptest::prelude::*;
  use std::mem;

  fn by_i32(
    a: *const u8,
    b: *const u8,
  ) -> c_int {
    let (a, b) = unsafe { ((a as *const i32).read_unaligned(), (b as *const i32).read_unaligned()) };
    a.cmp(&b) as c_int
  }

  fn sort_i32(values: &mut [i32]) {
    let heap = Allocator::new(BlockHeap::new());
    unsafe {
      sort(
        &heap,
        values.as_mut_ptr() as *mut u8,
        values.len(),
        mem::size_of::<i32>(),
        by_i32,
      );
    }
    assert_eq!(heap.heap().stats().used_bytes, 0);
  }

  #[repr(C)]
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  struct Keyed {
    key: u8,
    position: u8,
  }

  fn by_key(
    a: *const u8,
    b: *const u8,
  ) -> c_int {
    let (a, b) = unsafe { (*(a as *const Keyed), *(b as *const Keyed)) };
    a.key.cmp(&b.key) as c_int
  }

  fn keyed(keys: &[u8]) -> Vec<Keyed> {
    keys
      .iter()
      .enumerate()
      .map(|(position, &key)| Keyed { key, position: position as u8 })
      .collect()
  }

  fn sort_keyed(items: &mut [Keyed]) {
    let heap = Allocator::new(BlockHeap::new());
    unsafe {
      sort(
        &heap,
        items.as_mut_ptr() as *mut u8,
        items.len(),
        mem::size_of::<Keyed>(),
        by_key,
      );
    }
  }

  #[test]
  fn test_sort() {
    let mut values = [5, -1, 3, 3, 0, 9, -7];
    sort_i32(&mut values);
    assert_eq!(values, [-7, -1, 0, 3, 3, 5, 9]);

    let mut single = [1];
    sort_i32(&mut single);
    assert_eq!(single, [1]);

    let mut empty: [i32; 0] = [];
    sort_i32(&mut empty);
  }

  #[test]
  fn test_sort_is_stable() {
    let mut items = keyed(&[2, 1, 2, 0, 1, 2]);

    sort_keyed(&mut items);

    let order: Vec<(u8, u8)> = items.iter().map(|item| (item.key, item.position)).collect();
    assert_eq!(order, vec![(0, 3), (1, 1), (1, 4), (2, 0), (2, 2), (2, 5)]);
  }

  #[test]
  fn test_sort_without_scratch_leaves_array() {
    let heap = Allocator::new(ExhaustedHeap);
    let mut values = [3, 2, 1];

    unsafe {
      sort(&heap, values.as_mut_ptr() as *mut u8, 3, mem::size_of::<i32>(), by_i32);
    }

    assert_eq!(values, [3, 2, 1]);
  }

  #[test]
  fn test_binary_search() {
    let values: Vec<i32> = (0..50).map(|v| v * 3).collect();

    unsafe {
      for (index, value) in values.iter().enumerate() {
        let found = binary_search(
          value as *const i32 as *const u8,
          values.as_ptr() as *const u8,
          values.len(),
          mem::size_of::<i32>(),
          by_i32,
        );
        assert_eq!(found as *const i32, &values[index] as *const i32);
      }

      for missing in [-3, 1, 148, 1000] {
        let found = binary_search(
          &missing as *const i32 as *const u8,
          values.as_ptr() as *const u8,
          values.len(),
          mem::size_of::<i32>(),
          by_i32,
        );
        assert!(found.is_null());
      }

      let key = 1;
      assert!(binary_search(&key as *const i32 as *const u8, values.as_ptr() as *const u8, 0, 4, by_i32).is_null());
    }
  }

  #[test]
  fn test_sort_releases_scratch() {
    let heap = Allocator::new(BlockHeap::new());
    let mut values = [4u64, 1, 3];

    unsafe {
      sort(&heap, values.as_mut_ptr() as *mut u8, 3, 8, |a, b| {
        (*(a as *const u64)).cmp(&*(b as *const u64)) as c_int
      });
    }

    assert_eq!(values, [1, 3, 4]);
    let stats = heap.heap().stats();
    assert_eq!((stats.blocks, stats.free_blocks, stats.used_bytes), (1, 1, 0));
  }

  proptest! {
    #[test]
    fn sort_orders_and_keeps_multiset(
      mut values in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
      let mut expected = values.clone();
      expected.sort();

      sort_i32(&mut values);

      prop_assert_eq!(values, expected);
    }

    #[test]
    fn sort_is_stable_for_duplicate_keys(
      keys in proptest::collection::vec(0u8..4, 0..48),
    ) {
      let mut items = keyed(&keys);
      let mut expected = items.clone();
      expected.sort_by_key(|item| item.key);

      sort_keyed(&mut items);

      prop_assert_eq!(items, expected);
    }
  }
}
