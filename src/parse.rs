//! String-to-integer conversion for narrow and wide strings.
//!
//! One state machine serves every `strto*`/`wcsto*` flavour: it is generic
//! over the element type ([`CharUnit`]) and over the accumulator, whose
//! native width decides where the value wraps. Overflow is not clamped.

use core::ffi::c_int;

use crate::{ctype, unit::CharUnit};

/// Integer type a parse accumulates into, with wrapping arithmetic.
pub trait Accumulator: Copy {
  const ZERO: Self;

  fn push_digit(
    self,
    base: u32,
    digit: u32,
  ) -> Self;

  fn negate(self) -> Self;
}

macro_rules! accumulator {
  ($($int:ty),*) => {
    $(
      impl Accumulator for $int {
        const ZERO: Self = 0;

        #[inline(always)]
        fn push_digit(
          self,
          base: u32,
          digit: u32,
        ) -> Self {
          self.wrapping_mul(base as $int).wrapping_add(digit as $int)
        }

        #[inline(always)]
        fn negate(self) -> Self {
          self.wrapping_neg()
        }
      }
    )*
  };
}

accumulator!(i32, i64, u32, u64);

/// Position, sign and base threaded through one parse.
struct Cursor<U> {
  pos: *const U,
  negative: bool,
  base: u32,
}

fn is_ascii<U: CharUnit>(
  unit: U,
  ascii: u8,
) -> bool {
  unit.value() == ascii as u32
}

/// Value of `unit` as a digit in any base up to 36.
fn digit_value<U: CharUnit>(unit: U) -> Option<u32> {
  match unit.value() {
    v @ 0x30..=0x39 => Some(v - 0x30),
    v @ 0x61..=0x7a => Some(v - 0x61 + 10),
    v @ 0x41..=0x5a => Some(v - 0x41 + 10),
    _ => None,
  }
}

impl<U: CharUnit> Cursor<U> {
  fn new(pos: *const U) -> Self {
    Self {
      pos,
      negative: false,
      base: 10,
    }
  }

  unsafe fn peek(
    &self,
    offset: usize,
  ) -> U {
    unsafe { *self.pos.add(offset) }
  }

  unsafe fn advance(
    &mut self,
    count: usize,
  ) {
    unsafe { self.pos = self.pos.add(count) }
  }

  unsafe fn skip_whitespace(&mut self) {
    unsafe {
      while ctype::is_space(self.peek(0).value() as c_int) {
        self.advance(1);
      }
    }
  }

  unsafe fn read_sign(&mut self) {
    unsafe {
      let first = self.peek(0);
      if is_ascii(first, b'-') {
        self.negative = true;
        self.advance(1);
      } else if is_ascii(first, b'+') {
        self.advance(1);
      }
    }
  }

  /// Whether the cursor sits on `0x` or `0X`. The prefix is taken even
  /// when no hex digit follows it.
  unsafe fn at_hex_prefix(&self) -> bool {
    unsafe {
      let marker = self.peek(1);
      is_ascii(self.peek(0), b'0') && (is_ascii(marker, b'x') || is_ascii(marker, b'X'))
    }
  }

  /// Settles the base, consuming a hex prefix where one applies.
  ///
  /// Returns false for a base no digit can be parsed in.
  unsafe fn read_base(
    &mut self,
    requested: c_int,
  ) -> bool {
    unsafe {
      match requested {
        0 => {
          if self.at_hex_prefix() {
            self.base = 16;
            self.advance(2);
          } else if is_ascii(self.peek(0), b'0') {
            self.base = 8;
          } else {
            self.base = 10;
          }
          true
        }
        16 => {
          self.base = 16;
          if self.at_hex_prefix() {
            self.advance(2);
          }
          true
        }
        2..=36 => {
          self.base = requested as u32;
          true
        }
        _ => false,
      }
    }
  }
}

/// Parses an integer from the null-terminated `input`.
///
/// Returns the value and the first element not consumed. When no digit can
/// be consumed the value is zero and the end is `input` itself.
pub unsafe fn parse_integer<U: CharUnit, A: Accumulator>(
  input: *const U,
  base: c_int,
) -> (A, *const U) {
  unsafe {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    cursor.read_sign();

    if !cursor.read_base(base) {
      return (A::ZERO, input);
    }

    let mut value = A::ZERO;
    let mut consumed = false;

    while let Some(digit) = digit_value(cursor.peek(0)).filter(|&digit| digit < cursor.base) {
      value = value.push_digit(cursor.base, digit);
      cursor.advance(1);
      consumed = true;
    }

    if !consumed {
      return (A::ZERO, input);
    }

    if cursor.negative {
      value = value.negate();
    }

    (value, cursor.pos)
  }
}
