//! Path-based filesystem calls, relative to the current directory.
//!
//! These go straight to the kernel through `rustix` so they never call back
//! into C symbols this crate may itself be providing. Wide paths are
//! transcoded to UTF-8 first.

use core::ffi::CStr;
use std::ffi::CString;

use log::debug;
use rustix::{
  fs::{self as sys, Access, AtFlags, CWD, Mode},
  io::Errno,
  process,
};

use crate::{
  convert,
  error::{CrtError, Result},
  heap::{Allocator, RawHeap},
  memory,
  unit::WideChar,
};

/// `_access` mode bits.
pub const ACCESS_EXISTS: i32 = 0;
pub const ACCESS_WRITE: i32 = 2;
pub const ACCESS_READ: i32 = 4;

fn os_error<'a>(
  call: &'static str,
  path: &'a CStr,
) -> impl FnOnce(Errno) -> CrtError + 'a {
  move |errno| {
    debug!("{call}({path:?}): {errno}");
    CrtError::Os(errno)
  }
}

/// UTF-8 copy of a null-terminated wide path.
pub unsafe fn wide_path(path: *const WideChar) -> Result<CString> {
  unsafe {
    let bytes = convert::wide_to_narrow_owned(path)?;
    CString::new(bytes).map_err(|_| CrtError::Malformed)
  }
}

pub fn remove_file(path: &CStr) -> Result<()> {
  sys::unlinkat(CWD, path, AtFlags::empty()).map_err(os_error("unlink", path))
}

/// Creates a directory with mode `0o777`, before the umask.
pub fn make_dir(path: &CStr) -> Result<()> {
  sys::mkdirat(CWD, path, Mode::from_raw_mode(0o777)).map_err(os_error("mkdir", path))
}

pub fn remove_dir(path: &CStr) -> Result<()> {
  sys::unlinkat(CWD, path, AtFlags::REMOVEDIR).map_err(os_error("rmdir", path))
}

pub fn rename(
  from: &CStr,
  to: &CStr,
) -> Result<()> {
  sys::renameat(CWD, from, CWD, to).map_err(os_error("rename", from))
}

pub fn change_dir(path: &CStr) -> Result<()> {
  process::chdir(path).map_err(os_error("chdir", path))
}

/// Checks `path` against an `_access` mode: 0 for existence, 2 for write,
/// 4 for read, 6 for both. Other bits are ignored.
pub fn access(
  path: &CStr,
  mode: i32,
) -> Result<()> {
  let mut wanted = Access::EXISTS;
  if mode & ACCESS_WRITE != 0 {
    wanted |= Access::WRITE_OK;
  }
  if mode & ACCESS_READ != 0 {
    wanted |= Access::READ_OK;
  }

  sys::accessat(CWD, path, wanted, AtFlags::empty()).map_err(os_error("access", path))
}

fn working_dir() -> Result<CString> {
  process::getcwd(Vec::new()).map_err(|errno| {
    debug!("getcwd: {errno}");
    CrtError::Os(errno)
  })
}

/// Destination for a current-directory query: the caller's buffer, or one
/// taken from `heap` that is handed back if the query fails.
struct Destination<'a, H: RawHeap, T> {
  heap: &'a Allocator<H>,
  buffer: *mut T,
  owned: bool,
}

impl<'a, H: RawHeap, T> Destination<'a, H, T> {
  /// `capacity` is in elements of `T`; zero with a null buffer means
  /// "exactly as large as needed", which is `needed`.
  unsafe fn new(
    heap: &'a Allocator<H>,
    buffer: *mut T,
    capacity: usize,
    needed: usize,
  ) -> Result<(Self, usize)> {
    unsafe {
      if !buffer.is_null() {
        return Ok((Self { heap, buffer, owned: false }, capacity));
      }

      let capacity = if capacity == 0 { needed } else { capacity };
      let bytes = capacity
        .checked_mul(size_of::<T>())
        .ok_or(CrtError::OutOfMemory)?;
      let buffer = heap.allocate(bytes) as *mut T;

      if buffer.is_null() {
        return Err(CrtError::OutOfMemory);
      }

      Ok((Self { heap, buffer, owned: true }, capacity))
    }
  }

  unsafe fn finish<R>(
    self,
    result: Result<R>,
  ) -> Result<*mut T> {
    unsafe {
      match result {
        Ok(_) => Ok(self.buffer),
        Err(err) => {
          if self.owned {
            self.heap.release(self.buffer as *mut u8);
          }
          Err(err)
        }
      }
    }
  }
}

/// `_getcwd`: the current directory, null-terminated, in `buffer`.
///
/// A null `buffer` is replaced by `maxlen` bytes from `heap` (or exactly
/// enough when `maxlen` is 0), which the caller then owns.
pub unsafe fn current_dir<H: RawHeap>(
  heap: &Allocator<H>,
  buffer: *mut u8,
  maxlen: usize,
) -> Result<*mut u8> {
  unsafe {
    let cwd = working_dir()?;
    let path = cwd.as_bytes_with_nul();

    let (dest, capacity) = Destination::new(heap, buffer, maxlen, path.len())?;

    let copied = if path.len() > capacity {
      Err(CrtError::BufferTooSmall {
        required: path.len(),
        capacity,
      })
    } else {
      memory::copy(dest.buffer, path.as_ptr(), path.len());
      Ok(())
    };

    dest.finish(copied)
  }
}

/// `_wgetcwd`: as [`current_dir`], transcoded to UTF-16. `maxlen` counts
/// wide units.
pub unsafe fn current_dir_wide<H: RawHeap>(
  heap: &Allocator<H>,
  buffer: *mut WideChar,
  maxlen: usize,
) -> Result<*mut WideChar> {
  unsafe {
    let cwd = working_dir()?;
    let needed = convert::narrow_to_wide(core::ptr::null_mut(), cwd.as_ptr() as *const u8, 0)? + 1;

    let (dest, capacity) = Destination::new(heap, buffer, maxlen, needed)?;
    let converted = convert::narrow_to_wide(dest.buffer, cwd.as_ptr() as *const u8, capacity);

    dest.finish(converted)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    heap::BlockHeap,
    string,
    testing::{ExhaustedHeap, wide},
  };
  use serial_test::serial;
  use std::{os::unix::ffi::OsStrExt, path::Path, ptr, slice};
  use tempfile::TempDir;

  fn c_path(path: &Path) -> CString {
    CString::new(path.as_os_str().as_bytes()).unwrap()
  }

  #[test]
  fn test_directory_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let dir = c_path(&tmp.path().join("made"));

    assert_eq!(make_dir(&dir), Ok(()));
    assert!(tmp.path().join("made").is_dir());
    assert_eq!(make_dir(&dir), Err(CrtError::Os(Errno::EXIST)));

    assert_eq!(remove_dir(&dir), Ok(()));
    assert!(!tmp.path().join("made").exists());
    assert_eq!(remove_dir(&dir), Err(CrtError::Os(Errno::NOENT)));
  }

  #[test]
  fn test_rename_and_remove_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("a"), b"data").unwrap();
    let a = c_path(&tmp.path().join("a"));
    let b = c_path(&tmp.path().join("b"));

    assert_eq!(rename(&a, &b), Ok(()));
    assert_eq!(std::fs::read(tmp.path().join("b")).unwrap(), b"data");

    assert_eq!(remove_file(&b), Ok(()));
    assert_eq!(remove_file(&b), Err(CrtError::Os(Errno::NOENT)));
  }

  #[test]
  fn test_access_modes() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("present"), b"").unwrap();
    let present = c_path(&tmp.path().join("present"));
    let missing = c_path(&tmp.path().join("missing"));

    for mode in [ACCESS_EXISTS, ACCESS_WRITE, ACCESS_READ, ACCESS_READ | ACCESS_WRITE] {
      assert_eq!(access(&present, mode), Ok(()));
    }
    assert_eq!(access(&missing, ACCESS_EXISTS), Err(CrtError::Os(Errno::NOENT)));
  }

  #[test]
  fn test_wide_path() {
    let path = unsafe { wide_path(wide("/tmp/caf\u{e9}").as_ptr()) };
    assert_eq!(path, Ok(CString::new("/tmp/caf\u{e9}").unwrap()));
    assert_eq!(unsafe { wide_path(ptr::null()) }, Err(CrtError::NullArgument));
  }

  #[test]
  #[serial]
  fn test_change_and_query_dir() {
    let heap = Allocator::new(BlockHeap::new());
    let original = std::env::current_dir().unwrap();
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().canonicalize().unwrap();
    let expected = target.as_os_str().as_bytes();

    assert_eq!(change_dir(&c_path(&target)), Ok(()));

    unsafe {
      let mut buffer = [0u8; 4096];
      let got = current_dir(&heap, buffer.as_mut_ptr(), buffer.len());
      assert_eq!(got, Ok(buffer.as_mut_ptr()));
      assert_eq!(&buffer[..expected.len() + 1], CString::new(expected).unwrap().as_bytes_with_nul());

      let owned = current_dir(&heap, ptr::null_mut(), 0).unwrap();
      assert_eq!(slice::from_raw_parts(owned, string::length(owned)), expected);
      heap.release(owned);

      let mut small = [0u8; 2];
      assert!(matches!(
        current_dir(&heap, small.as_mut_ptr(), small.len()),
        Err(CrtError::BufferTooSmall { .. })
      ));

      assert!(current_dir(&heap, ptr::null_mut(), 2).is_err());
      assert_eq!(heap.heap().stats().used_bytes, 0);

      let mut units = [0 as WideChar; 4096];
      let got = current_dir_wide(&heap, units.as_mut_ptr(), units.len());
      assert_eq!(got, Ok(units.as_mut_ptr()));
      let expected_wide: Vec<WideChar> = target.to_str().unwrap().encode_utf16().collect();
      assert_eq!(&units[..expected_wide.len()], &expected_wide[..]);
    }

    assert_eq!(change_dir(&c_path(&original)), Ok(()));
  }

  #[test]
  fn test_current_dir_without_heap() {
    let heap = Allocator::new(ExhaustedHeap);
    assert_eq!(
      unsafe { current_dir(&heap, ptr::null_mut(), 256) },
      Err(CrtError::OutOfMemory)
    );
  }
}
