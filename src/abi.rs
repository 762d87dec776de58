//! The C entry points.
//!
//! Each function adapts C argument conventions onto the Rust-level modules
//! and turns their results back into C sentinels: null, `-1`, or
//! `(size_t)-1`. With the `export-symbols` feature every function here is
//! emitted under its own unmangled name, with one exception.
//!
//! Wide functions take 16-bit units. The standard names among them
//! (`wcslen`, `wcstol`, `mbstowcs` and the rest typed on `wchar_t`) are only
//! emitted where `wchar_t` is 16 bits. On Unix `wchar_t` is 32 bits, so
//! there they stay Rust functions and the platform's own symbols are left
//! alone. The `_w*` names have no platform counterpart and are always
//! emitted.

use core::ffi::{
  CStr, c_char, c_int, c_long, c_longlong, c_ulong, c_ulonglong, c_void,
};
use std::{mem, ptr};

use crate::{
  convert, ctype, env,
  error::Result,
  fs,
  heap::process_heap,
  memory,
  parse::{self, Accumulator},
  sort, string,
  unit::{CharUnit, WideChar},
};

/// `qsort`/`bsearch` comparator.
pub type Comparator = Option<unsafe extern "C" fn(*const c_void, *const c_void) -> c_int>;

fn status(result: Result<()>) -> c_int {
  match result {
    Ok(()) => 0,
    Err(_) => -1,
  }
}

unsafe fn with_path(
  path: *const c_char,
  call: impl FnOnce(&CStr) -> Result<()>,
) -> c_int {
  unsafe {
    if path.is_null() {
      return -1;
    }
    status(call(CStr::from_ptr(path)))
  }
}

unsafe fn with_wide_path(
  path: *const WideChar,
  call: impl FnOnce(&CStr) -> Result<()>,
) -> c_int {
  unsafe { status(fs::wide_path(path).and_then(|path| call(&path))) }
}

unsafe fn parse_to_end<U: CharUnit, A: Accumulator>(
  s: *const U,
  end: *mut *mut U,
  base: c_int,
) -> A {
  unsafe {
    let (value, stop) = parse::parse_integer::<U, A>(s, base);
    if !end.is_null() {
      *end = stop as *mut U;
    }
    value
  }
}

// Heap

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn malloc(size: usize) -> *mut c_void {
  unsafe { process_heap().allocate(size).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn calloc(
  count: usize,
  size: usize,
) -> *mut c_void {
  unsafe { process_heap().allocate_zeroed(count, size).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn realloc(
  block: *mut c_void,
  size: usize,
) -> *mut c_void {
  unsafe { process_heap().reallocate(block.cast(), size).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn free(block: *mut c_void) {
  unsafe { process_heap().release(block.cast()) }
}

/// Aligned block released with `free`. Rust's own `System` allocator asks
/// for over-aligned memory this way, so it must agree with [`free`].
#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn posix_memalign(
  memptr: *mut *mut c_void,
  alignment: usize,
  size: usize,
) -> c_int {
  unsafe {
    if !alignment.is_power_of_two() || alignment % mem::size_of::<*mut c_void>() != 0 {
      return libc::EINVAL;
    }

    let block = process_heap().allocate_aligned_block(size, alignment);
    if block.is_null() {
      return libc::ENOMEM;
    }

    *memptr = block.cast();
    0
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn aligned_alloc(
  alignment: usize,
  size: usize,
) -> *mut c_void {
  unsafe { process_heap().allocate_aligned_block(size, alignment).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn memalign(
  alignment: usize,
  size: usize,
) -> *mut c_void {
  unsafe { process_heap().allocate_aligned_block(size, alignment).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _aligned_malloc(
  size: usize,
  alignment: usize,
) -> *mut c_void {
  unsafe { process_heap().allocate_aligned(size, alignment).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _aligned_free(block: *mut c_void) {
  unsafe { process_heap().release_aligned(block.cast()) }
}

// Raw memory

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn memcpy(
  dest: *mut c_void,
  src: *const c_void,
  n: usize,
) -> *mut c_void {
  unsafe { memory::copy(dest.cast(), src.cast(), n).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn memmove(
  dest: *mut c_void,
  src: *const c_void,
  n: usize,
) -> *mut c_void {
  unsafe { memory::copy_overlapping(dest.cast(), src.cast(), n).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn memset(
  dest: *mut c_void,
  value: c_int,
  n: usize,
) -> *mut c_void {
  unsafe { memory::fill(dest.cast(), value, n).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn memcmp(
  lhs: *const c_void,
  rhs: *const c_void,
  n: usize,
) -> c_int {
  unsafe { memory::compare(lhs.cast(), rhs.cast(), n) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn memchr(
  haystack: *const c_void,
  value: c_int,
  n: usize,
) -> *mut c_void {
  unsafe { memory::find_byte(haystack.cast(), value, n).cast() }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn bzero(
  dest: *mut c_void,
  n: usize,
) {
  unsafe { memory::zero(dest.cast(), n) }
}

// Strings

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strlen(s: *const c_char) -> usize {
  unsafe { string::length(s.cast::<u8>()) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcslen(s: *const WideChar) -> usize {
  unsafe { string::length(s) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strcpy(
  dest: *mut c_char,
  src: *const c_char,
) -> *mut c_char {
  unsafe { string::copy(dest.cast::<u8>(), src.cast()).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcscpy(
  dest: *mut WideChar,
  src: *const WideChar,
) -> *mut WideChar {
  unsafe { string::copy(dest, src) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strncpy(
  dest: *mut c_char,
  src: *const c_char,
  n: usize,
) -> *mut c_char {
  unsafe { string::bounded_copy(dest.cast::<u8>(), src.cast(), n).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsncpy(
  dest: *mut WideChar,
  src: *const WideChar,
  n: usize,
) -> *mut WideChar {
  unsafe { string::bounded_copy(dest, src, n) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strcat(
  dest: *mut c_char,
  src: *const c_char,
) -> *mut c_char {
  unsafe { string::concatenate(dest.cast::<u8>(), src.cast()).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcscat(
  dest: *mut WideChar,
  src: *const WideChar,
) -> *mut WideChar {
  unsafe { string::concatenate(dest, src) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strncat(
  dest: *mut c_char,
  src: *const c_char,
  n: usize,
) -> *mut c_char {
  unsafe { string::bounded_concatenate(dest.cast::<u8>(), src.cast(), n).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsncat(
  dest: *mut WideChar,
  src: *const WideChar,
  n: usize,
) -> *mut WideChar {
  unsafe { string::bounded_concatenate(dest, src, n) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strcmp(
  lhs: *const c_char,
  rhs: *const c_char,
) -> c_int {
  unsafe { string::compare(lhs.cast::<u8>(), rhs.cast()) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcscmp(
  lhs: *const WideChar,
  rhs: *const WideChar,
) -> c_int {
  unsafe { string::compare(lhs, rhs) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strncmp(
  lhs: *const c_char,
  rhs: *const c_char,
  n: usize,
) -> c_int {
  unsafe { string::bounded_compare(lhs.cast::<u8>(), rhs.cast(), n) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsncmp(
  lhs: *const WideChar,
  rhs: *const WideChar,
  n: usize,
) -> c_int {
  unsafe { string::bounded_compare(lhs, rhs, n) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wmemcmp(
  lhs: *const WideChar,
  rhs: *const WideChar,
  n: usize,
) -> c_int {
  unsafe { string::compare_units(lhs, rhs, n) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strchr(
  s: *const c_char,
  c: c_int,
) -> *mut c_char {
  unsafe { string::find_char(s.cast::<u8>(), u8::truncate(c as u32)).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcschr(
  s: *const WideChar,
  c: WideChar,
) -> *mut WideChar {
  unsafe { string::find_char(s, c) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strrchr(
  s: *const c_char,
  c: c_int,
) -> *mut c_char {
  unsafe { string::find_char_reverse(s.cast::<u8>(), u8::truncate(c as u32)).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsrchr(
  s: *const WideChar,
  c: WideChar,
) -> *mut WideChar {
  unsafe { string::find_char_reverse(s, c) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strstr(
  haystack: *const c_char,
  needle: *const c_char,
) -> *mut c_char {
  unsafe { string::find_substring(haystack.cast::<u8>(), needle.cast()).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsstr(
  haystack: *const WideChar,
  needle: *const WideChar,
) -> *mut WideChar {
  unsafe { string::find_substring(haystack, needle) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strdup(s: *const c_char) -> *mut c_char {
  unsafe {
    if s.is_null() {
      return ptr::null_mut();
    }
    string::duplicate(process_heap(), s.cast::<u8>()).cast()
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _strdup(s: *const c_char) -> *mut c_char {
  unsafe { strdup(s) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsdup(s: *const WideChar) -> *mut WideChar {
  unsafe {
    if s.is_null() {
      return ptr::null_mut();
    }
    string::duplicate(process_heap(), s)
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wcsdup(s: *const WideChar) -> *mut WideChar {
  unsafe { wcsdup(s) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strspn(
  s: *const c_char,
  accept: *const c_char,
) -> usize {
  unsafe { string::span(s.cast::<u8>(), accept.cast()) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcsspn(
  s: *const WideChar,
  accept: *const WideChar,
) -> usize {
  unsafe { string::span(s, accept) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strcspn(
  s: *const c_char,
  reject: *const c_char,
) -> usize {
  unsafe { string::complement_span(s.cast::<u8>(), reject.cast()) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcscspn(
  s: *const WideChar,
  reject: *const WideChar,
) -> usize {
  unsafe { string::complement_span(s, reject) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strpbrk(
  s: *const c_char,
  accept: *const c_char,
) -> *mut c_char {
  unsafe { string::find_any_of(s.cast::<u8>(), accept.cast()).cast() }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcspbrk(
  s: *const WideChar,
  accept: *const WideChar,
) -> *mut WideChar {
  unsafe { string::find_any_of(s, accept) }
}

// Environment

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn getenv(name: *const c_char) -> *mut c_char {
  unsafe { env::get_variable_scratch(name) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wgetenv(name: *const WideChar) -> *mut WideChar {
  unsafe { env::get_variable_wide_scratch(name) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _putenv(assignment: *const c_char) -> c_int {
  unsafe {
    if assignment.is_null() {
      return -1;
    }
    status(env::put_variable(CStr::from_ptr(assignment).to_bytes()))
  }
}

// Filesystem

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _unlink(path: *const c_char) -> c_int {
  unsafe { with_path(path, fs::remove_file) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wunlink(path: *const WideChar) -> c_int {
  unsafe { with_wide_path(path, fs::remove_file) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn remove(path: *const c_char) -> c_int {
  unsafe { with_path(path, fs::remove_file) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wremove(path: *const WideChar) -> c_int {
  unsafe { with_wide_path(path, fs::remove_file) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _mkdir(path: *const c_char) -> c_int {
  unsafe { with_path(path, fs::make_dir) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wmkdir(path: *const WideChar) -> c_int {
  unsafe { with_wide_path(path, fs::make_dir) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _rmdir(path: *const c_char) -> c_int {
  unsafe { with_path(path, fs::remove_dir) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wrmdir(path: *const WideChar) -> c_int {
  unsafe { with_wide_path(path, fs::remove_dir) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn rename(
  from: *const c_char,
  to: *const c_char,
) -> c_int {
  unsafe {
    if to.is_null() {
      return -1;
    }
    with_path(from, |from| fs::rename(from, CStr::from_ptr(to)))
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wrename(
  from: *const WideChar,
  to: *const WideChar,
) -> c_int {
  unsafe {
    let Ok(to) = fs::wide_path(to) else {
      return -1;
    };
    with_wide_path(from, |from| fs::rename(from, &to))
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _chdir(path: *const c_char) -> c_int {
  unsafe { with_path(path, fs::change_dir) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wchdir(path: *const WideChar) -> c_int {
  unsafe { with_wide_path(path, fs::change_dir) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _getcwd(
  buffer: *mut c_char,
  maxlen: c_int,
) -> *mut c_char {
  unsafe {
    let Ok(maxlen) = usize::try_from(maxlen) else {
      return ptr::null_mut();
    };
    fs::current_dir(process_heap(), buffer.cast(), maxlen)
      .map_or(ptr::null_mut(), |path| path.cast())
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wgetcwd(
  buffer: *mut WideChar,
  maxlen: c_int,
) -> *mut WideChar {
  unsafe {
    let Ok(maxlen) = usize::try_from(maxlen) else {
      return ptr::null_mut();
    };
    fs::current_dir_wide(process_heap(), buffer, maxlen).unwrap_or(ptr::null_mut())
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _access(
  path: *const c_char,
  mode: c_int,
) -> c_int {
  unsafe { with_path(path, |path| fs::access(path, mode)) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _waccess(
  path: *const WideChar,
  mode: c_int,
) -> c_int {
  unsafe { with_wide_path(path, |path| fs::access(path, mode)) }
}

// Classification

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isspace(c: c_int) -> c_int {
  ctype::is_space(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isdigit(c: c_int) -> c_int {
  ctype::is_digit(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isalpha(c: c_int) -> c_int {
  ctype::is_alpha(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isalnum(c: c_int) -> c_int {
  ctype::is_alnum(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isupper(c: c_int) -> c_int {
  ctype::is_upper(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn islower(c: c_int) -> c_int {
  ctype::is_lower(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isxdigit(c: c_int) -> c_int {
  ctype::is_xdigit(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isprint(c: c_int) -> c_int {
  ctype::is_print(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn iscntrl(c: c_int) -> c_int {
  ctype::is_cntrl(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn ispunct(c: c_int) -> c_int {
  ctype::is_punct(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn isgraph(c: c_int) -> c_int {
  ctype::is_graph(c) as c_int
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn tolower(c: c_int) -> c_int {
  ctype::to_lower(c)
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn toupper(c: c_int) -> c_int {
  ctype::to_upper(c)
}

// Sort, search and arithmetic

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn qsort(
  base: *mut c_void,
  count: usize,
  size: usize,
  compare: Comparator,
) {
  unsafe {
    let Some(compare) = compare else {
      return;
    };
    sort::sort(process_heap(), base.cast(), count, size, |a, b| {
      compare(a.cast(), b.cast())
    });
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn bsearch(
  key: *const c_void,
  base: *const c_void,
  count: usize,
  size: usize,
  compare: Comparator,
) -> *mut c_void {
  unsafe {
    let Some(compare) = compare else {
      return ptr::null_mut();
    };
    sort::binary_search(key.cast(), base.cast(), count, size, |a, b| {
      compare(a.cast(), b.cast())
    })
    .cast()
  }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn abs(value: c_int) -> c_int {
  value.wrapping_abs()
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn labs(value: c_long) -> c_long {
  value.wrapping_abs()
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub extern "C" fn llabs(value: c_longlong) -> c_longlong {
  value.wrapping_abs()
}

// Parsing

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strtol(
  s: *const c_char,
  end: *mut *mut c_char,
  base: c_int,
) -> c_long {
  unsafe { parse_to_end::<u8, c_long>(s.cast(), end.cast(), base) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strtoul(
  s: *const c_char,
  end: *mut *mut c_char,
  base: c_int,
) -> c_ulong {
  unsafe { parse_to_end::<u8, c_ulong>(s.cast(), end.cast(), base) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strtoll(
  s: *const c_char,
  end: *mut *mut c_char,
  base: c_int,
) -> c_longlong {
  unsafe { parse_to_end::<u8, c_longlong>(s.cast(), end.cast(), base) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn strtoull(
  s: *const c_char,
  end: *mut *mut c_char,
  base: c_int,
) -> c_ulonglong {
  unsafe { parse_to_end::<u8, c_ulonglong>(s.cast(), end.cast(), base) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcstol(
  s: *const WideChar,
  end: *mut *mut WideChar,
  base: c_int,
) -> c_long {
  unsafe { parse_to_end(s, end, base) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcstoul(
  s: *const WideChar,
  end: *mut *mut WideChar,
  base: c_int,
) -> c_ulong {
  unsafe { parse_to_end(s, end, base) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcstoll(
  s: *const WideChar,
  end: *mut *mut WideChar,
  base: c_int,
) -> c_longlong {
  unsafe { parse_to_end(s, end, base) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcstoull(
  s: *const WideChar,
  end: *mut *mut WideChar,
  base: c_int,
) -> c_ulonglong {
  unsafe { parse_to_end(s, end, base) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn atoi(s: *const c_char) -> c_int {
  unsafe { strtol(s, ptr::null_mut(), 10) as c_int }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn atol(s: *const c_char) -> c_long {
  unsafe { strtol(s, ptr::null_mut(), 10) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn atoll(s: *const c_char) -> c_longlong {
  unsafe { strtoll(s, ptr::null_mut(), 10) }
}

#[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
pub unsafe extern "C" fn _wtoi(s: *const WideChar) -> c_int {
  unsafe { wcstol(s, ptr::null_mut(), 10) as c_int }
}

// Encoding conversion

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wcstombs(
  dest: *mut c_char,
  src: *const WideChar,
  n: usize,
) -> usize {
  unsafe { convert::wide_to_narrow(dest.cast(), src, n).unwrap_or(usize::MAX) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn mbstowcs(
  dest: *mut WideChar,
  src: *const c_char,
  n: usize,
) -> usize {
  unsafe { convert::narrow_to_wide(dest, src.cast(), n).unwrap_or(usize::MAX) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn wctomb(
  dest: *mut c_char,
  unit: WideChar,
) -> c_int {
  unsafe { convert::wide_to_narrow_char(dest.cast(), unit).map_or(-1, |len| len as c_int) }
}

#[cfg_attr(all(feature = "export-symbols", windows), unsafe(no_mangle))]
pub unsafe extern "C" fn mbtowc(
  dest: *mut WideChar,
  src: *const c_char,
  n: usize,
) -> c_int {
  unsafe { convert::narrow_to_wide_char(dest, src.cast(), n).map_or(-1, |len| len as c_int) }
}
