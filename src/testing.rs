//! Shared test doubles and fixtures.

use std::ptr;

use crate::{heap::RawHeap, unit::WideChar};

/// A heap that refuses every request.
pub struct ExhaustedHeap;

impl RawHeap for ExhaustedHeap {
  unsafe fn alloc(
    &self,
    _size: usize,
    _zeroed: bool,
  ) -> *mut u8 {
    ptr::null_mut()
  }

  unsafe fn realloc(
    &self,
    _ptr: *mut u8,
    _size: usize,
  ) -> *mut u8 {
    ptr::null_mut()
  }

  unsafe fn alloc_aligned(
    &self,
    _size: usize,
    _alignment: usize,
  ) -> *mut u8 {
    ptr::null_mut()
  }

  unsafe fn free(
    &self,
    _ptr: *mut u8,
  ) {
  }
}

/// Null-terminated narrow copy of `s`.
pub fn narrow(s: &str) -> Vec<u8> {
  s.bytes().chain([0]).collect()
}

/// Null-terminated UTF-16 copy of `s`.
pub fn wide(s: &str) -> Vec<WideChar> {
  s.encode_utf16().chain([0]).collect()
}
