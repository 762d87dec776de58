//! ASCII character classification and case mapping.
//!
//! Every predicate is a closed range test on the numeric value; there is no
//! locale and no lookup table. Values outside `0..=0x7f` classify as nothing.

use core::ffi::c_int;

pub fn is_space(c: c_int) -> bool {
  matches!(c, 0x20 | 0x09..=0x0d)
}

pub fn is_digit(c: c_int) -> bool {
  (0x30..=0x39).contains(&c)
}

pub fn is_upper(c: c_int) -> bool {
  (0x41..=0x5a).contains(&c)
}

pub fn is_lower(c: c_int) -> bool {
  (0x61..=0x7a).contains(&c)
}

pub fn is_alpha(c: c_int) -> bool {
  is_upper(c) || is_lower(c)
}

pub fn is_alnum(c: c_int) -> bool {
  is_alpha(c) || is_digit(c)
}

pub fn is_xdigit(c: c_int) -> bool {
  is_digit(c) || (0x41..=0x46).contains(&c) || (0x61..=0x66).contains(&c)
}

pub fn is_print(c: c_int) -> bool {
  (0x20..=0x7e).contains(&c)
}

pub fn is_cntrl(c: c_int) -> bool {
  (0x00..0x20).contains(&c) || c == 0x7f
}

pub fn is_punct(c: c_int) -> bool {
  is_print(c) && !is_alnum(c) && !is_space(c)
}

pub fn is_graph(c: c_int) -> bool {
  is_print(c) && c != 0x20
}

pub fn to_lower(c: c_int) -> c_int {
  if is_upper(c) { c + 0x20 } else { c }
}

pub fn to_upper(c: c_int) -> c_int {
  if is_lower(c) { c - 0x20 } else { c }
}
