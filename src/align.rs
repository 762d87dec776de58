/// Rounds `value` up to the next multiple of `alignment`.
///
/// `alignment` must be a power of two. Used for heap block sizes and for
/// placing aligned payloads.
///
/// # Examples
///
/// ```rust
/// use rcrt::align_to;
///
/// assert_eq!(align_to!(13, 16), 16);
/// assert_eq!(align_to!(32, 16), 32);
/// assert_eq!(align_to!(0x1001, 0x1000), 0x2000);
/// ```
#[macro_export]
macro_rules! align_to {
  ($value:expr, $alignment:expr) => {
    ($value + $alignment - 1) & !($alignment - 1)
  };
}
