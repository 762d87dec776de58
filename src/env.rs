//! Process environment access.
//!
//! Lookups walk `environ` directly instead of going through `libc::getenv`:
//! with `export-symbols` enabled that symbol is ours. The C-shaped lookups
//! hand out a pointer into a per-thread scratch buffer, overwritten by the
//! next lookup on the same thread; [`get_variable`] returns an owned copy.

use core::{
  cell::UnsafeCell,
  ffi::{CStr, c_char},
};
use std::{env, ffi::OsStr, os::unix::ffi::OsStrExt, ptr};

use log::debug;

use crate::{
  convert,
  error::{CrtError, Result},
  memory,
  unit::WideChar,
};

/// Elements in each per-thread scratch buffer, terminator included.
pub const SCRATCH_CAPACITY: usize = 32768;

unsafe extern "C" {
  static mut environ: *const *const c_char;
}

thread_local! {
  static NARROW_SCRATCH: UnsafeCell<[u8; SCRATCH_CAPACITY]> =
    const { UnsafeCell::new([0; SCRATCH_CAPACITY]) };
  static WIDE_SCRATCH: UnsafeCell<[WideChar; SCRATCH_CAPACITY]> =
    const { UnsafeCell::new([0; SCRATCH_CAPACITY]) };
}

/// Value of `name` inside the environment block, terminator excluded.
///
/// The slice is only valid until the environment is next modified.
unsafe fn lookup<'a>(name: &[u8]) -> Option<&'a [u8]> {
  unsafe {
    if name.is_empty() || name.contains(&b'=') {
      return None;
    }

    let mut entry = environ;
    if entry.is_null() {
      return None;
    }

    while !(*entry).is_null() {
      let bytes = CStr::from_ptr(*entry).to_bytes();

      if let Some(value) = bytes
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix(b"="))
      {
        return Some(value);
      }

      entry = entry.add(1);
    }

    None
  }
}

/// Owned copy of the value of `name`, or `None` when it is unset.
pub fn get_variable(name: &[u8]) -> Option<Vec<u8>> {
  unsafe { lookup(name).map(<[u8]>::to_vec) }
}

/// `getenv`: the value of `name` copied into this thread's narrow scratch
/// buffer.
///
/// Null when the variable is unset, empty, or does not fit the buffer.
pub unsafe fn get_variable_scratch(name: *const c_char) -> *mut c_char {
  unsafe {
    if name.is_null() {
      return ptr::null_mut();
    }

    let Some(value) = lookup(CStr::from_ptr(name).to_bytes()) else {
      return ptr::null_mut();
    };

    if value.is_empty() {
      return ptr::null_mut();
    }

    if value.len() >= SCRATCH_CAPACITY {
      debug!("getenv: value of {} bytes exceeds scratch buffer", value.len());
      return ptr::null_mut();
    }

    let scratch = NARROW_SCRATCH.with(|cell| cell.get() as *mut u8);
    memory::copy(scratch, value.as_ptr(), value.len());
    *scratch.add(value.len()) = 0;

    scratch as *mut c_char
  }
}

/// `_wgetenv`: like [`get_variable_scratch`] with a UTF-16 name and value.
pub unsafe fn get_variable_wide_scratch(name: *const WideChar) -> *mut WideChar {
  unsafe {
    let Ok(name) = convert::wide_to_narrow_owned(name) else {
      return ptr::null_mut();
    };

    let Some(value) = lookup(&name) else {
      return ptr::null_mut();
    };

    if value.is_empty() {
      return ptr::null_mut();
    }

    // `value` ends at the entry's own terminator.
    let scratch = WIDE_SCRATCH.with(|cell| cell.get() as *mut WideChar);
    match convert::narrow_to_wide(scratch, value.as_ptr(), SCRATCH_CAPACITY) {
      Ok(_) => scratch,
      Err(err) => {
        debug!("_wgetenv: {err}");
        ptr::null_mut()
      }
    }
  }
}

/// Applies a `NAME=value` assignment. An empty value removes `NAME`.
///
/// # Safety
///
/// No other thread may read or write the environment concurrently.
pub unsafe fn put_variable(assignment: &[u8]) -> Result<()> {
  let Some(split) = assignment.iter().position(|&b| b == b'=') else {
    debug!("_putenv: no separator in {:?}", OsStr::from_bytes(assignment));
    return Err(CrtError::MissingSeparator);
  };

  let (name, value) = (&assignment[..split], &assignment[split + 1..]);

  if name.is_empty() || assignment.contains(&0) {
    debug!("_putenv: rejected name {:?}", OsStr::from_bytes(name));
    return Err(CrtError::InvalidName);
  }

  let name = OsStr::from_bytes(name);

  unsafe {
    if value.is_empty() {
      env::remove_var(name);
    } else {
      env::set_var(name, OsStr::from_bytes(value));
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{string, testing::wide};
  use serial_test::serial;
  use std::ffi::CString;

  fn scratch_value(name: &str) -> Option<Vec<u8>> {
    let name = CString::new(name).ok()?;
    let value = unsafe { get_variable_scratch(name.as_ptr()) };
    (!value.is_null()).then(|| unsafe { CStr::from_ptr(value).to_bytes().to_vec() })
  }

  #[test]
  #[serial]
  fn test_set_then_clear() {
    unsafe {
      assert_eq!(put_variable(b"RCRT_ENV_X=1"), Ok(()));
    }
    assert_eq!(get_variable(b"RCRT_ENV_X"), Some(b"1".to_vec()));
    assert_eq!(scratch_value("RCRT_ENV_X"), Some(b"1".to_vec()));

    unsafe {
      assert_eq!(put_variable(b"RCRT_ENV_X="), Ok(()));
    }
    assert_eq!(get_variable(b"RCRT_ENV_X"), None);
    assert_eq!(scratch_value("RCRT_ENV_X"), None);
  }

  #[test]
  #[serial]
  fn test_value_may_contain_separator() {
    unsafe {
      assert_eq!(put_variable(b"RCRT_ENV_EQ=a=b"), Ok(()));
    }
    assert_eq!(get_variable(b"RCRT_ENV_EQ"), Some(b"a=b".to_vec()));
    assert_eq!(get_variable(b"RCRT_ENV"), None);
    assert_eq!(get_variable(b"RCRT_ENV_EQ=a"), None);

    unsafe {
      put_variable(b"RCRT_ENV_EQ=").ok();
    }
  }

  #[test]
  #[serial]
  fn test_rejected_assignments() {
    unsafe {
      assert_eq!(put_variable(b"RCRT_ENV_NO_SEPARATOR"), Err(CrtError::MissingSeparator));
      assert_eq!(put_variable(b"=value"), Err(CrtError::InvalidName));
      assert_eq!(put_variable(b""), Err(CrtError::MissingSeparator));
    }
    assert_eq!(get_variable(b""), None);
  }

  #[test]
  #[serial]
  fn test_oversized_value_is_not_copied() {
    let mut assignment = b"RCRT_ENV_BIG=".to_vec();
    assignment.resize(assignment.len() + SCRATCH_CAPACITY, b'v');

    unsafe {
      assert_eq!(put_variable(&assignment), Ok(()));
    }
    assert_eq!(get_variable(b"RCRT_ENV_BIG").map(|value| value.len()), Some(SCRATCH_CAPACITY));
    assert_eq!(scratch_value("RCRT_ENV_BIG"), None);

    unsafe {
      put_variable(b"RCRT_ENV_BIG=").ok();
    }
  }

  #[test]
  #[serial]
  fn test_wide_lookup() {
    unsafe {
      assert_eq!(put_variable("RCRT_ENV_W=caf\u{e9}".as_bytes()), Ok(()));

      let value = get_variable_wide_scratch(wide("RCRT_ENV_W").as_ptr());
      assert!(!value.is_null());
      let len = string::length(value);
      assert_eq!(std::slice::from_raw_parts(value, len + 1), &wide("caf\u{e9}")[..]);

      assert!(get_variable_wide_scratch(wide("RCRT_ENV_MISSING").as_ptr()).is_null());
      assert!(get_variable_wide_scratch(ptr::null()).is_null());

      put_variable(b"RCRT_ENV_W=").ok();
    }
  }

  #[test]
  fn test_null_name() {
    assert!(unsafe { get_variable_scratch(ptr::null()) }.is_null());
  }
}
