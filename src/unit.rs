/// A 16-bit code unit of a wide (UTF-16) string.
pub type WideChar = u16;

/// One element of a null-terminated sequence.
///
/// Implemented for `u8` (narrow strings) and [`WideChar`] (wide strings), so
/// every string and parsing routine is written once for both families.
pub trait CharUnit: Copy + Eq + 'static {
  const NUL: Self;

  /// The element's value, always non-negative.
  fn value(self) -> u32;

  /// Keeps the low bits of `value` that fit in one element.
  fn truncate(value: u32) -> Self;

  fn is_nul(self) -> bool {
    self == Self::NUL
  }
}

macro_rules! char_unit {
  ($($unit:ty),*) => {
    $(
      impl CharUnit for $unit {
        const NUL: Self = 0;

        #[inline(always)]
        fn value(self) -> u32 {
          self as u32
        }

        #[inline(always)]
        fn truncate(value: u32) -> Self {
          value as $unit
        }
      }
    )*
  };
}

char_unit!(u8, u16);
