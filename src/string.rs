//! Null-terminated string primitives, written once over [`CharUnit`].
//!
//! `u8` instantiations back the `str*` entry points and [`WideChar`]
//! instantiations back the `wcs*` ones, so the two families cannot drift
//! apart. None of these check for null pointers; the C contracts they
//! implement leave that to the caller.
//!
//! [`WideChar`]: crate::unit::WideChar

use core::ffi::c_int;
use std::{mem, ptr};

use crate::{
  heap::{Allocator, RawHeap},
  memory,
  unit::CharUnit,
};

#[inline(always)]
fn difference<U: CharUnit>(
  lhs: U,
  rhs: U,
) -> c_int {
  lhs.value() as c_int - rhs.value() as c_int
}

unsafe fn contains<U: CharUnit>(
  set: *const U,
  value: U,
) -> bool {
  unsafe {
    let mut cursor = set;
    while !(*cursor).is_nul() {
      if *cursor == value {
        return true;
      }
      cursor = cursor.add(1);
    }
    false
  }
}

/// Number of elements before the terminator.
pub unsafe fn length<U: CharUnit>(s: *const U) -> usize {
  unsafe {
    let mut len = 0usize;
    while !(*s.add(len)).is_nul() {
      len += 1;
    }
    len
  }
}

/// Copies `src` and its terminator into `dest`, which must be large enough.
pub unsafe fn copy<U: CharUnit>(
  dest: *mut U,
  src: *const U,
) -> *mut U {
  unsafe {
    let mut i = 0usize;
    loop {
      let ch = *src.add(i);
      *dest.add(i) = ch;
      if ch.is_nul() {
        break;
      }
      i += 1;
    }
    dest
  }
}

/// Copies at most `n` elements of `src` into `dest`.
///
/// A shorter `src` is padded with terminators up to `n`. When `src` has `n`
/// or more elements, `dest` is left without a terminator.
pub unsafe fn bounded_copy<U: CharUnit>(
  dest: *mut U,
  src: *const U,
  n: usize,
) -> *mut U {
  unsafe {
    let mut i = 0usize;
    while i < n {
      let ch = *src.add(i);
      if ch.is_nul() {
        break;
      }
      *dest.add(i) = ch;
      i += 1;
    }

    while i < n {
      *dest.add(i) = U::NUL;
      i += 1;
    }

    dest
  }
}

/// Appends `src` and its terminator at `dest`'s terminator.
pub unsafe fn concatenate<U: CharUnit>(
  dest: *mut U,
  src: *const U,
) -> *mut U {
  unsafe {
    copy(dest.add(length(dest)), src);
    dest
  }
}

/// Appends at most `n` elements of `src`, then always one terminator.
pub unsafe fn bounded_concatenate<U: CharUnit>(
  dest: *mut U,
  src: *const U,
  n: usize,
) -> *mut U {
  unsafe {
    let tail = dest.add(length(dest));

    let mut i = 0usize;
    while i < n {
      let ch = *src.add(i);
      if ch.is_nul() {
        break;
      }
      *tail.add(i) = ch;
      i += 1;
    }
    *tail.add(i) = U::NUL;

    dest
  }
}

/// Lexicographic comparison by element value.
pub unsafe fn compare<U: CharUnit>(
  lhs: *const U,
  rhs: *const U,
) -> c_int {
  unsafe {
    let mut l = lhs;
    let mut r = rhs;
    while !(*l).is_nul() && *l == *r {
      l = l.add(1);
      r = r.add(1);
    }
    difference(*l, *r)
  }
}

/// Like [`compare`], but looks at no more than `n` elements.
pub unsafe fn bounded_compare<U: CharUnit>(
  lhs: *const U,
  rhs: *const U,
  n: usize,
) -> c_int {
  unsafe {
    let mut i = 0usize;
    while i < n {
      let l = *lhs.add(i);
      let r = *rhs.add(i);
      if l != r {
        return difference(l, r);
      }
      if l.is_nul() {
        return 0;
      }
      i += 1;
    }
    0
  }
}

/// Compares exactly `n` elements; terminators are ordinary values here.
pub unsafe fn compare_units<U: CharUnit>(
  lhs: *const U,
  rhs: *const U,
  n: usize,
) -> c_int {
  unsafe {
    let mut i = 0usize;
    while i < n {
      let l = *lhs.add(i);
      let r = *rhs.add(i);
      if l != r {
        return difference(l, r);
      }
      i += 1;
    }
    0
  }
}

/// First occurrence of `value`, or null.
///
/// Searching for the terminator finds the string's own terminator.
pub unsafe fn find_char<U: CharUnit>(
  s: *const U,
  value: U,
) -> *mut U {
  unsafe {
    let mut cursor = s;
    loop {
      if *cursor == value {
        return cursor as *mut U;
      }
      if (*cursor).is_nul() {
        return ptr::null_mut();
      }
      cursor = cursor.add(1);
    }
  }
}

/// Last occurrence of `value`, or null.
pub unsafe fn find_char_reverse<U: CharUnit>(
  s: *const U,
  value: U,
) -> *mut U {
  unsafe {
    let mut last: *const U = ptr::null();
    let mut cursor = s;
    loop {
      if *cursor == value {
        last = cursor;
      }
      if (*cursor).is_nul() {
        return last as *mut U;
      }
      cursor = cursor.add(1);
    }
  }
}

/// First occurrence of `needle` in `haystack`; an empty needle matches at
/// the start.
pub unsafe fn find_substring<U: CharUnit>(
  haystack: *const U,
  needle: *const U,
) -> *mut U {
  unsafe {
    if (*needle).is_nul() {
      return haystack as *mut U;
    }

    let mut start = haystack;
    while !(*start).is_nul() {
      let mut h = start;
      let mut n = needle;
      while !(*h).is_nul() && !(*n).is_nul() && *h == *n {
        h = h.add(1);
        n = n.add(1);
      }
      if (*n).is_nul() {
        return start as *mut U;
      }
      start = start.add(1);
    }

    ptr::null_mut()
  }
}

/// Heap copy of `src`, terminator included; null when allocation fails.
pub unsafe fn duplicate<U: CharUnit, H: RawHeap>(
  heap: &Allocator<H>,
  src: *const U,
) -> *mut U {
  unsafe {
    let bytes = (length(src) + 1) * mem::size_of::<U>();
    let dup = heap.allocate(bytes);

    if dup.is_null() {
      return ptr::null_mut();
    }

    memory::copy(dup, src as *const u8, bytes);
    dup as *mut U
  }
}

/// Length of the leading run made only of elements in `accept`.
pub unsafe fn span<U: CharUnit>(
  s: *const U,
  accept: *const U,
) -> usize {
  unsafe {
    let mut len = 0usize;
    while !(*s.add(len)).is_nul() && contains(accept, *s.add(len)) {
      len += 1;
    }
    len
  }
}

/// Length of the leading run made only of elements not in `reject`.
pub unsafe fn complement_span<U: CharUnit>(
  s: *const U,
  reject: *const U,
) -> usize {
  unsafe {
    let mut len = 0usize;
    while !(*s.add(len)).is_nul() && !contains(reject, *s.add(len)) {
      len += 1;
    }
    len
  }
}

/// First element of `s` that belongs to `accept`, or null.
pub unsafe fn find_any_of<U: CharUnit>(
  s: *const U,
  accept: *const U,
) -> *mut U {
  unsafe {
    let mut cursor = s;
    while !(*cursor).is_nul() {
      if contains(accept, *cursor) {
        return cursor as *mut U;
      }
      cursor = cursor.add(1);
    }
    ptr::null_mut()
  }
}
