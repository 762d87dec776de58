use std::mem;

/// Header placed in front of every payload handed out by `BlockHeap`.
///
/// The 16-byte alignment keeps every payload suitably aligned for any
/// scalar type, which is what callers of `malloc` expect.
#[repr(C, align(16))]
pub struct Block {
  pub size: usize,
  pub is_free: bool,
  pub next: *mut Block,
}

pub const HEADER_SIZE: usize = mem::size_of::<Block>();

impl Block {
  pub fn new(
    size: usize,
    is_free: bool,
    next: *mut Block,
  ) -> Self {
    Self { size, is_free, next }
  }

  pub fn payload(block: *mut Block) -> *mut u8 {
    (block as *mut u8).wrapping_add(HEADER_SIZE)
  }

  pub fn from_payload(payload: *mut u8) -> *mut Block {
    payload.wrapping_sub(HEADER_SIZE) as *mut Block
  }

  /// First byte past this block's payload.
  pub unsafe fn end(block: *const Block) -> usize {
    block as usize + HEADER_SIZE + unsafe { (*block).size }
  }

  /// Whether `next` starts exactly where `block` ends in memory.
  pub unsafe fn is_adjacent(
    block: *const Block,
    next: *const Block,
  ) -> bool {
    !next.is_null() && unsafe { Self::end(block) } == next as usize
  }
}
