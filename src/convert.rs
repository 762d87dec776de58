//! UTF-8 ⇄ UTF-16 conversion, the only code page this crate speaks.
//!
//! Ill-formed input is not an error for the string forms: invalid UTF-8 and
//! unpaired surrogates turn into U+FFFD, one replacement per ill-formed
//! sequence. The single-unit forms are strict and reject such input.

use std::{slice, str};

use log::debug;

use crate::{
  error::{CrtError, Result},
  memory, string,
  unit::WideChar,
};

/// Longest UTF-8 encoding of one UTF-16 code unit.
pub const MAX_UTF8_UNIT_LEN: usize = 3;

const REPLACEMENT: WideChar = char::REPLACEMENT_CHARACTER as u32 as WideChar;

fn decode_lossy(bytes: &[u8]) -> impl Iterator<Item = WideChar> + Clone + '_ {
  bytes.utf8_chunks().flat_map(|chunk| {
    let replacement = (!chunk.invalid().is_empty()).then_some(REPLACEMENT);
    chunk.valid().encode_utf16().chain(replacement)
  })
}

fn encode_lossy(units: &[WideChar]) -> impl Iterator<Item = u8> + Clone + '_ {
  char::decode_utf16(units.iter().copied())
    .map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
    .flat_map(|ch| {
      let mut buf = [0u8; 4];
      let len = ch.encode_utf8(&mut buf).len();
      buf.into_iter().take(len)
    })
}

/// Writes `items` plus a terminator into `dest`, or just counts them.
///
/// A null `dest` or a zero `capacity` asks for the count only.
unsafe fn emit<T: Copy + Default, I: Iterator<Item = T> + Clone>(
  dest: *mut T,
  capacity: usize,
  items: I,
) -> Result<usize> {
  unsafe {
    let required = items.clone().count();

    if dest.is_null() || capacity == 0 {
      return Ok(required);
    }

    if required >= capacity {
      return Err(CrtError::BufferTooSmall {
        required: required + 1,
        capacity,
      });
    }

    for (i, item) in items.enumerate() {
      *dest.add(i) = item;
    }
    *dest.add(required) = T::default();

    Ok(required)
  }
}

/// Converts the null-terminated UTF-8 `src` into UTF-16 at `dest`.
///
/// `capacity` counts wide units including the terminator. Returns the
/// number of units written, terminator excluded.
pub unsafe fn narrow_to_wide(
  dest: *mut WideChar,
  src: *const u8,
  capacity: usize,
) -> Result<usize> {
  unsafe {
    if src.is_null() {
      return Err(CrtError::NullArgument);
    }

    let bytes = slice::from_raw_parts(src, string::length(src));

    emit(dest, capacity, decode_lossy(bytes)).inspect_err(|err| {
      debug!("narrow_to_wide: {err}");
    })
  }
}

/// Converts the null-terminated UTF-16 `src` into UTF-8 at `dest`.
///
/// `capacity` counts bytes including the terminator. Returns the number of
/// bytes written, terminator excluded.
pub unsafe fn wide_to_narrow(
  dest: *mut u8,
  src: *const WideChar,
  capacity: usize,
) -> Result<usize> {
  unsafe {
    if src.is_null() {
      return Err(CrtError::NullArgument);
    }

    let units = slice::from_raw_parts(src, string::length(src));

    emit(dest, capacity, encode_lossy(units)).inspect_err(|err| {
      debug!("wide_to_narrow: {err}");
    })
  }
}

/// UTF-8 encoding of a whole null-terminated wide string, without the
/// terminator.
pub unsafe fn wide_to_narrow_owned(src: *const WideChar) -> Result<Vec<u8>> {
  unsafe {
    if src.is_null() {
      return Err(CrtError::NullArgument);
    }

    let units = slice::from_raw_parts(src, string::length(src));
    Ok(encode_lossy(units).collect())
  }
}

/// Encodes one UTF-16 unit as UTF-8 into `dest` and returns the byte count
/// (at most [`MAX_UTF8_UNIT_LEN`]).
///
/// A null `dest` yields 0: the encoding carries no shift state.
pub unsafe fn wide_to_narrow_char(
  dest: *mut u8,
  unit: WideChar,
) -> Result<usize> {
  unsafe {
    if dest.is_null() {
      return Ok(0);
    }

    let ch = char::from_u32(unit as u32).ok_or(CrtError::Malformed)?;

    let mut buf = [0u8; MAX_UTF8_UNIT_LEN];
    let len = ch.encode_utf8(&mut buf).len();
    memory::copy(dest, buf.as_ptr(), len);

    Ok(len)
  }
}

fn sequence_len(lead: u8) -> Option<usize> {
  match lead {
    0x00..=0x7f => Some(1),
    0xc2..=0xdf => Some(2),
    0xe0..=0xef => Some(3),
    0xf0..=0xf4 => Some(4),
    _ => None,
  }
}

/// Decodes the character starting at `src`, reading at most `n` bytes, into
/// one wide unit at `dest` (which may be null).
///
/// Returns the bytes consumed, or 0 when `src` is null or points at the
/// terminator. Incomplete sequences and characters that need a surrogate
/// pair are malformed.
pub unsafe fn narrow_to_wide_char(
  dest: *mut WideChar,
  src: *const u8,
  n: usize,
) -> Result<usize> {
  unsafe {
    if src.is_null() {
      return Ok(0);
    }

    if n == 0 {
      return Err(CrtError::Malformed);
    }

    if *src == 0 {
      if !dest.is_null() {
        *dest = 0;
      }
      return Ok(0);
    }

    let len = sequence_len(*src).ok_or(CrtError::Malformed)?;

    if len > n {
      return Err(CrtError::Malformed);
    }

    let ch = str::from_utf8(slice::from_raw_parts(src, len))
      .ok()
      .and_then(|s| s.chars().next())
      .ok_or(CrtError::Malformed)?;

    let unit = WideChar::try_from(ch as u32).map_err(|_| CrtError::Malformed)?;

    if !dest.is_null() {
      *dest = unit;
    }

    Ok(len)
  }
}
