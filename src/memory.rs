//! Byte-level copy, move, fill, compare and scan.
//!
//! Every loop here is written out element by element; the crate is built
//! with `no_builtins`, so these stay loops instead of being lowered into
//! calls to the very symbols the `abi` module exports.

use core::ffi::c_int;
use std::ptr;

/// Copies `n` bytes forward from `src` to `dest`.
///
/// The ranges must not overlap; use [`copy_overlapping`] when they might.
pub unsafe fn copy(
  dest: *mut u8,
  src: *const u8,
  n: usize,
) -> *mut u8 {
  unsafe {
    let mut i = 0usize;
    while i < n {
      *dest.add(i) = *src.add(i);
      i += 1;
    }
    dest
  }
}

/// Copies `n` bytes from `src` to `dest`, correct for any overlap.
///
/// Runs forward when `dest` is below `src` and backward when it is above,
/// so no source byte is read after it has been overwritten.
pub unsafe fn copy_overlapping(
  dest: *mut u8,
  src: *const u8,
  n: usize,
) -> *mut u8 {
  unsafe {
    if dest as *const u8 == src || n == 0 {
      return dest;
    }

    if (dest as *const u8) < src {
      let mut i = 0usize;
      while i < n {
        *dest.add(i) = *src.add(i);
        i += 1;
      }
    } else {
      let mut i = n;
      while i > 0 {
        i -= 1;
        *dest.add(i) = *src.add(i);
      }
    }

    dest
  }
}

/// Writes the low 8 bits of `value` into each of the `n` bytes at `dest`.
pub unsafe fn fill(
  dest: *mut u8,
  value: c_int,
  n: usize,
) -> *mut u8 {
  unsafe {
    let byte = value as u8;
    let mut i = 0usize;
    while i < n {
      *dest.add(i) = byte;
      i += 1;
    }
    dest
  }
}

pub unsafe fn zero(
  dest: *mut u8,
  n: usize,
) {
  unsafe {
    fill(dest, 0, n);
  }
}

/// Compares `n` bytes as unsigned values.
///
/// Returns the difference of the first unequal pair, or zero.
pub unsafe fn compare(
  lhs: *const u8,
  rhs: *const u8,
  n: usize,
) -> c_int {
  unsafe {
    let mut i = 0usize;
    while i < n {
      let l = *lhs.add(i);
      let r = *rhs.add(i);
      if l != r {
        return l as c_int - r as c_int;
      }
      i += 1;
    }
    0
  }
}

/// Address of the first byte equal to the low 8 bits of `value`, or null.
pub unsafe fn find_byte(
  haystack: *const u8,
  value: c_int,
  n: usize,
) -> *mut u8 {
  unsafe {
    let target = value as u8;
    let mut i = 0usize;
    while i < n {
      if *haystack.add(i) == target {
        return haystack.add(i) as *mut u8;
      }
      i += 1;
    }
    ptr::null_mut()
  }
}
