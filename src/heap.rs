use std::{mem, ptr};

use spin::Mutex;

use crate::{
  align_to,
  block::{Block, HEADER_SIZE},
  memory,
};

/// Alignment of every payload returned by [`BlockHeap`].
pub const HEAP_ALIGN: usize = mem::align_of::<Block>();

/// Smallest tail worth splitting off a block into its own free block.
const MIN_SPLIT: usize = HEADER_SIZE + HEAP_ALIGN;

/// Granularity of the regions a heap maps from the kernel.
#[cfg(not(feature = "export-symbols"))]
const REGION_SIZE: usize = 64 * 1024;

/// Maps a fresh region of at least `len` bytes.
///
/// Returns the region's start and length. Anonymous mappings are private to
/// this heap, so nothing else in the process can hand the same bytes out.
#[cfg(not(feature = "export-symbols"))]
unsafe fn obtain_region(len: usize) -> Option<(usize, usize)> {
  use rustix::mm::{MapFlags, ProtFlags, mmap_anonymous};

  let len = len.checked_add(REGION_SIZE - 1)? & !(REGION_SIZE - 1);

  let address = unsafe {
    mmap_anonymous(
      ptr::null_mut(),
      len,
      ProtFlags::READ | ProtFlags::WRITE,
      MapFlags::PRIVATE,
    )
  }
  .ok()?;

  Some((address as usize, len))
}

/// Serializes `sbrk` across every heap in the process.
#[cfg(feature = "export-symbols")]
static BREAK: Mutex<()> = Mutex::new(());

/// Extends the program break by at least `len` bytes.
///
/// Only used when this crate provides `malloc` itself, which makes its
/// heaps the sole movers of the break.
#[cfg(feature = "export-symbols")]
unsafe fn obtain_region(len: usize) -> Option<(usize, usize)> {
  use libc::{c_void, intptr_t, sbrk};

  // The break may be left unaligned by the loader; over-request and align
  // inside the region.
  let request = len.checked_add(HEAP_ALIGN - 1)?;

  let address = {
    let _break = BREAK.lock();
    unsafe { sbrk(request as intptr_t) }
  };

  if address == usize::MAX as *mut c_void {
    return None;
  }

  let start = align_to!(address as usize, HEAP_ALIGN);
  Some((start, address as usize + request - start))
}

/// The heap primitive everything else allocates through.
///
/// Implementations must be internally synchronized: one instance is shared by
/// every thread of the process and [`Allocator`] adds no locking of its own.
pub trait RawHeap: Sync {
  /// Returns at least `size` bytes (zero-filled when `zeroed`), or null.
  unsafe fn alloc(
    &self,
    size: usize,
    zeroed: bool,
  ) -> *mut u8;

  /// Resizes a live block. On failure returns null and leaves `ptr` intact.
  unsafe fn realloc(
    &self,
    ptr: *mut u8,
    size: usize,
  ) -> *mut u8;

  /// Returns at least `size` bytes at a multiple of `alignment` (a power of
  /// two) that [`RawHeap::free`] accepts, or null.
  unsafe fn alloc_aligned(
    &self,
    size: usize,
    alignment: usize,
  ) -> *mut u8;

  unsafe fn free(
    &self,
    ptr: *mut u8,
  );
}

/// Snapshot of a [`BlockHeap`]'s block list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
  pub blocks: usize,
  pub free_blocks: usize,
  pub used_bytes: usize,
  pub free_bytes: usize,
}

struct BlockList {
  first: *mut Block,
  last: *mut Block,
}

// The list is only ever touched with the heap lock held.
unsafe impl Send for BlockList {}

fn block_size(request: usize) -> Option<usize> {
  if request > isize::MAX as usize - HEADER_SIZE - HEAP_ALIGN {
    return None;
  }
  Some(align_to!(request.max(1), HEAP_ALIGN))
}

impl BlockList {
  const fn new() -> Self {
    Self {
      first: ptr::null_mut(),
      last: ptr::null_mut(),
    }
  }

  unsafe fn find_free_block(
    &self,
    size: usize,
  ) -> *mut Block {
    unsafe {
      let mut current: *mut Block = self.first;

      while !current.is_null() {
        if (*current).is_free && (*current).size >= size {
          return current;
        }
        current = (*current).next;
      }

      ptr::null_mut()
    }
  }

  /// Appends a block of at least `size` payload bytes in a new region.
  unsafe fn grow(
    &mut self,
    size: usize,
  ) -> *mut Block {
    unsafe {
      let Some((start, len)) = obtain_region(HEADER_SIZE + size) else {
        return ptr::null_mut();
      };

      let usable = (len - HEADER_SIZE) & !(HEAP_ALIGN - 1);

      let block = start as *mut Block;
      block.write(Block::new(usable, false, ptr::null_mut()));

      if self.first.is_null() {
        self.first = block;
        self.last = block;
      } else {
        (*self.last).next = block;
        self.last = block;
      }

      block
    }
  }

  /// Shrinks `block` to `size` and turns the tail into a free block when
  /// the tail is large enough to be useful.
  unsafe fn split(
    &mut self,
    block: *mut Block,
    size: usize,
  ) {
    unsafe {
      if (*block).size < size + MIN_SPLIT {
        return;
      }

      let rest = Block::payload(block).add(size) as *mut Block;
      rest.write(Block::new((*block).size - size - HEADER_SIZE, true, (*block).next));

      (*block).size = size;
      (*block).next = rest;

      if self.last == block {
        self.last = rest;
      }

      self.coalesce(rest);
    }
  }

  /// Folds every free block physically following `block` into it.
  unsafe fn coalesce(
    &mut self,
    block: *mut Block,
  ) {
    unsafe {
      loop {
        let next = (*block).next;
        if !Block::is_adjacent(block, next) || !(*next).is_free {
          return;
        }
        self.absorb_next(block);
      }
    }
  }

  unsafe fn absorb_next(
    &mut self,
    block: *mut Block,
  ) {
    unsafe {
      let next = (*block).next;
      (*block).size += HEADER_SIZE + (*next).size;
      (*block).next = (*next).next;

      if self.last == next {
        self.last = block;
      }
    }
  }

  unsafe fn allocate(
    &mut self,
    request: usize,
  ) -> *mut u8 {
    unsafe {
      let Some(size) = block_size(request) else {
        return ptr::null_mut();
      };

      let free_block = self.find_free_block(size);

      if !free_block.is_null() {
        (*free_block).is_free = false;
        self.split(free_block, size);

        return Block::payload(free_block);
      }

      let block = self.grow(size);

      if block.is_null() {
        return ptr::null_mut();
      }

      self.split(block, size);
      Block::payload(block)
    }
  }

  /// Allocates a block whose payload is a multiple of `alignment`, which
  /// must be a power of two. The result is an ordinary block: it is
  /// released and resized like any other.
  unsafe fn allocate_aligned(
    &mut self,
    request: usize,
    alignment: usize,
  ) -> *mut u8 {
    unsafe {
      if alignment <= HEAP_ALIGN {
        return self.allocate(request);
      }

      let Some(size) = block_size(request) else {
        return ptr::null_mut();
      };

      // Room to cut a free block of at least MIN_SPLIT off the front.
      let Some(total) = size
        .checked_add(alignment)
        .and_then(|total| total.checked_add(MIN_SPLIT))
      else {
        return ptr::null_mut();
      };

      let payload = self.allocate(total);

      if payload.is_null() {
        return ptr::null_mut();
      }

      let block = Block::from_payload(payload);
      let mut aligned = align_to!(payload as usize, alignment);

      if aligned == payload as usize {
        self.split(block, size);
        return payload;
      }

      while aligned - (payload as usize) < MIN_SPLIT {
        aligned += alignment;
      }

      let lead = aligned - payload as usize;
      let body = Block::from_payload(aligned as *mut u8);
      body.write(Block::new((*block).size - lead, false, (*block).next));

      (*block).size = lead - HEADER_SIZE;
      (*block).next = body;
      (*block).is_free = true;

      if self.last == block {
        self.last = body;
      }

      self.split(body, size);
      aligned as *mut u8
    }
  }

  unsafe fn deallocate(
    &mut self,
    address: *mut u8,
  ) {
    unsafe {
      let block = Block::from_payload(address);
      (*block).is_free = true;
      self.coalesce(block);
    }
  }

  unsafe fn reallocate(
    &mut self,
    address: *mut u8,
    request: usize,
  ) -> *mut u8 {
    unsafe {
      let Some(size) = block_size(request) else {
        return ptr::null_mut();
      };

      let block = Block::from_payload(address);

      if (*block).size >= size {
        self.split(block, size);
        return address;
      }

      let next = (*block).next;
      if Block::is_adjacent(block, next)
        && (*next).is_free
        && (*block).size + HEADER_SIZE + (*next).size >= size
      {
        self.absorb_next(block);
        self.split(block, size);
        return address;
      }

      let moved = self.allocate(size);

      if moved.is_null() {
        return ptr::null_mut();
      }

      memory::copy(moved, address, (*block).size);
      self.deallocate(address);

      moved
    }
  }

  unsafe fn stats(&self) -> HeapStats {
    unsafe {
      let mut stats = HeapStats::default();
      let mut current = self.first;

      while !current.is_null() {
        stats.blocks += 1;
        if (*current).is_free {
          stats.free_blocks += 1;
          stats.free_bytes += (*current).size;
        } else {
          stats.used_bytes += (*current).size;
        }
        current = (*current).next;
      }

      stats
    }
  }
}

/// Heap primitive carving blocks out of memory obtained from the kernel.
///
/// Regions come from private anonymous mappings; when the crate provides
/// `malloc` itself (`export-symbols`) they come from the program break
/// instead. Blocks are kept in a singly linked list in allocation order.
/// Freed blocks are reused first-fit, split when oversized and merged with a
/// free block that directly follows them. Regions are never returned.
pub struct BlockHeap {
  blocks: Mutex<BlockList>,
}

impl BlockHeap {
  pub const fn new() -> Self {
    Self {
      blocks: Mutex::new(BlockList::new()),
    }
  }

  pub fn stats(&self) -> HeapStats {
    let blocks = self.blocks.lock();
    unsafe { blocks.stats() }
  }
}

impl Default for BlockHeap {
  fn default() -> Self {
    Self::new()
  }
}

impl RawHeap for BlockHeap {
  unsafe fn alloc(
    &self,
    size: usize,
    zeroed: bool,
  ) -> *mut u8 {
    unsafe {
      let address = self.blocks.lock().allocate(size);

      if zeroed && !address.is_null() {
        memory::zero(address, size);
      }

      address
    }
  }

  unsafe fn realloc(
    &self,
    ptr: *mut u8,
    size: usize,
  ) -> *mut u8 {
    unsafe { self.blocks.lock().reallocate(ptr, size) }
  }

  unsafe fn alloc_aligned(
    &self,
    size: usize,
    alignment: usize,
  ) -> *mut u8 {
    unsafe { self.blocks.lock().allocate_aligned(size, alignment) }
  }

  unsafe fn free(
    &self,
    ptr: *mut u8,
  ) {
    unsafe { self.blocks.lock().deallocate(ptr) }
  }
}

/// Back-pointer stored immediately before an aligned payload.
#[repr(C)]
struct AlignedHeader {
  raw: *mut u8,
}

const ALIGNED_HEADER_SIZE: usize = mem::size_of::<AlignedHeader>();

/// The C allocation contract layered over a [`RawHeap`].
///
/// This is the heap handle every other component receives explicitly; the
/// process-wide instance is [`process_heap`].
pub struct Allocator<H: RawHeap = BlockHeap> {
  heap: H,
}

impl<H: RawHeap> Allocator<H> {
  pub const fn new(heap: H) -> Self {
    Self { heap }
  }

  pub fn heap(&self) -> &H {
    &self.heap
  }

  /// Uninitialized block of at least `size` bytes, or null.
  ///
  /// A zero-byte request still yields a distinct block that can be released.
  pub unsafe fn allocate(
    &self,
    size: usize,
  ) -> *mut u8 {
    unsafe { self.heap.alloc(size.max(1), false) }
  }

  /// Zero-filled block of `count * size` bytes.
  ///
  /// The product is not checked for overflow.
  pub unsafe fn allocate_zeroed(
    &self,
    count: usize,
    size: usize,
  ) -> *mut u8 {
    unsafe { self.heap.alloc(count.wrapping_mul(size).max(1), true) }
  }

  pub unsafe fn reallocate(
    &self,
    block: *mut u8,
    new_size: usize,
  ) -> *mut u8 {
    unsafe {
      if block.is_null() {
        return self.allocate(new_size);
      }

      if new_size == 0 {
        self.heap.free(block);
        return ptr::null_mut();
      }

      self.heap.realloc(block, new_size)
    }
  }

  pub unsafe fn release(
    &self,
    block: *mut u8,
  ) {
    unsafe {
      if !block.is_null() {
        self.heap.free(block);
      }
    }
  }

  /// Block of `size` bytes whose address is a multiple of `alignment`.
  ///
  /// Must be released with [`Allocator::release_aligned`].
  ///
  /// ```text
  ///   raw                          payload
  ///   ▼                            ▼
  ///   ┌──────────────┬────────────┬──────────────────────────┐
  ///   │   padding    │ raw: *mut  │      size bytes ...      │
  ///   └──────────────┴────────────┴──────────────────────────┘
  ///                  ◄─ usize ───►
  /// ```
  pub unsafe fn allocate_aligned(
    &self,
    size: usize,
    alignment: usize,
  ) -> *mut u8 {
    unsafe {
      if !alignment.is_power_of_two() {
        return ptr::null_mut();
      }

      let Some(total) = size
        .checked_add(alignment)
        .and_then(|total| total.checked_add(ALIGNED_HEADER_SIZE))
      else {
        return ptr::null_mut();
      };

      let raw = self.allocate(total);

      if raw.is_null() {
        return ptr::null_mut();
      }

      let offset = align_to!(raw as usize + ALIGNED_HEADER_SIZE, alignment) - raw as usize;
      let payload = raw.add(offset);

      (payload as *mut AlignedHeader)
        .sub(1)
        .write_unaligned(AlignedHeader { raw });

      payload
    }
  }

  pub unsafe fn release_aligned(
    &self,
    payload: *mut u8,
  ) {
    unsafe {
      if payload.is_null() {
        return;
      }

      let header = (payload as *const AlignedHeader).sub(1).read_unaligned();
      self.release(header.raw);
    }
  }

  /// Block of `size` bytes at a multiple of `alignment` that is released
  /// with [`Allocator::release`], as `posix_memalign` requires.
  ///
  /// Null when `alignment` is not a power of two.
  pub unsafe fn allocate_aligned_block(
    &self,
    size: usize,
    alignment: usize,
  ) -> *mut u8 {
    unsafe {
      if !alignment.is_power_of_two() {
        return ptr::null_mut();
      }
      self.heap.alloc_aligned(size.max(1), alignment)
    }
  }
}

impl Default for Allocator<BlockHeap> {
  fn default() -> Self {
    Self::new(BlockHeap::new())
  }
}

static PROCESS_HEAP: Allocator = Allocator::new(BlockHeap::new());

/// The allocator backing the exported C entry points.
pub fn process_heap() -> &'static Allocator {
  &PROCESS_HEAP
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fresh() -> Allocator {
    Allocator::new(BlockHeap::new())
  }

  #[test]
  fn test_alloc() {
    let allocator = fresh();

    unsafe {
      let first_addr = allocator.allocate(mem::size_of::<u64>()) as *mut u64;

      *first_addr = 3u64;

      assert_eq!(*first_addr, 3);

      let size: usize = 6;

      let second_addr = allocator.allocate(size * mem::size_of::<u16>()) as *mut u16;

      for i in 0..size {
        *(second_addr.add(i)) = (i + 1) as u16;
      }

      assert_eq!(*first_addr, 3);

      for i in 0..size {
        assert_eq!((i + 1) as u16, *(second_addr.add(i)))
      }

      allocator.release(first_addr as *mut u8);

      let third_addr = allocator.allocate(mem::size_of::<u32>()) as *mut u32;

      assert_eq!(first_addr as *mut u32, third_addr);

      allocator.release(third_addr as *mut u8);
      allocator.release(second_addr as *mut u8);
    }
  }

  #[test]
  fn test_payloads_are_aligned() {
    let allocator = fresh();

    unsafe {
      for size in [1usize, 3, 16, 17, 100, 4097] {
        let block = allocator.allocate(size);
        assert!(!block.is_null());
        assert_eq!(block as usize % HEAP_ALIGN, 0);
        allocator.release(block);
      }
    }
  }

  #[test]
  fn test_zero_size_allocation_is_distinct_and_releasable() {
    let allocator = fresh();

    unsafe {
      let a = allocator.allocate(0);
      let b = allocator.allocate(0);

      assert!(!a.is_null());
      assert!(!b.is_null());
      assert_ne!(a, b);

      allocator.release(a);
      allocator.release(b);
    }
  }

  #[test]
  fn test_release_null_is_noop() {
    let allocator = fresh();

    unsafe {
      allocator.release(ptr::null_mut());
      allocator.release_aligned(ptr::null_mut());
    }

    assert_eq!(allocator.heap().stats(), HeapStats::default());
  }

  #[test]
  fn test_allocate_zeroed_clears_reused_memory() {
    let allocator = fresh();

    unsafe {
      let dirty = allocator.allocate(64);
      memory::fill(dirty, 0xAA, 64);
      allocator.release(dirty);

      let clean = allocator.allocate_zeroed(8, 8);
      assert_eq!(clean, dirty);
      for i in 0..64 {
        assert_eq!(*clean.add(i), 0);
      }

      let empty = allocator.allocate_zeroed(0, 8);
      assert!(!empty.is_null());

      allocator.release(clean);
      allocator.release(empty);
    }
  }

  #[test]
  fn test_reallocate_null_behaves_like_allocate() {
    let allocator = fresh();

    unsafe {
      let block = allocator.reallocate(ptr::null_mut(), 24);
      assert!(!block.is_null());
      assert_eq!(allocator.heap().stats().used_bytes, 32);

      let empty = allocator.reallocate(ptr::null_mut(), 0);
      assert!(!empty.is_null());

      allocator.release(block);
      allocator.release(empty);
    }
  }

  #[test]
  fn test_reallocate_to_zero_releases() {
    let allocator = fresh();

    unsafe {
      let block = allocator.allocate(32);
      assert!(allocator.reallocate(block, 0).is_null());
      assert_eq!(allocator.heap().stats().used_bytes, 0);
    }
  }

  #[test]
  fn test_reallocate_preserves_contents() {
    let allocator = fresh();

    unsafe {
      let block = allocator.allocate(16);
      for i in 0..16 {
        *block.add(i) = i as u8;
      }

      // Keep something after the block so growth cannot happen in place.
      let fence = allocator.allocate(16);

      let grown = allocator.reallocate(block, 4096);
      assert!(!grown.is_null());
      for i in 0..16 {
        assert_eq!(*grown.add(i), i as u8);
      }

      let shrunk = allocator.reallocate(grown, 8);
      assert_eq!(shrunk, grown);
      for i in 0..8 {
        assert_eq!(*shrunk.add(i), i as u8);
      }

      allocator.release(shrunk);
      allocator.release(fence);
    }
  }

  #[test]
  fn test_split_and_coalesce() {
    let allocator = fresh();

    unsafe {
      let big = allocator.allocate(256);
      allocator.release(big);

      let x = allocator.allocate(32);
      let y = allocator.allocate(32);
      assert_eq!(x, big);
      assert_eq!(y, x.add(32 + HEADER_SIZE));

      allocator.release(y);
      allocator.release(x);

      let stats = allocator.heap().stats();
      assert_eq!(stats.blocks, 1);
      assert_eq!(stats.free_blocks, 1);
      assert_eq!(stats.used_bytes, 0);

      let again = allocator.allocate(256);
      assert_eq!(again, big);
      allocator.release(again);
    }
  }

  #[test]
  fn test_reallocate_grows_into_free_neighbour() {
    let allocator = fresh();

    unsafe {
      let big = allocator.allocate(256);
      allocator.release(big);

      let block = allocator.allocate(32);
      *block = 0x5A;

      let grown = allocator.reallocate(block, 128);
      assert_eq!(grown, block);
      assert_eq!(*grown, 0x5A);

      allocator.release(grown);
    }
  }

  #[test]
  fn test_aligned_allocation() {
    let allocator = fresh();

    unsafe {
      for alignment in [1usize, 2, 8, 16, 32, 64, 256, 4096] {
        let payload = allocator.allocate_aligned(100, alignment);
        assert!(!payload.is_null());
        assert_eq!(payload as usize % alignment, 0);

        let header = (payload as *const AlignedHeader).sub(1).read_unaligned();
        assert!(header.raw as usize + ALIGNED_HEADER_SIZE <= payload as usize);
        assert!(payload as usize - header.raw as usize <= alignment + ALIGNED_HEADER_SIZE);

        memory::fill(payload, 0x11, 100);
        allocator.release_aligned(payload);
      }

      assert_eq!(allocator.heap().stats().used_bytes, 0);
    }
  }

  #[test]
  fn test_aligned_block_is_released_like_any_block() {
    let allocator = fresh();

    unsafe {
      let mut held = Vec::new();

      for alignment in [1usize, 16, 32, 64, 128, 4096] {
        for size in [1usize, 48, 1000] {
          let block = allocator.allocate_aligned_block(size, alignment);
          assert!(!block.is_null());
          assert_eq!(block as usize % alignment, 0);
          memory::fill(block, 0x3C, size);
          held.push(block);
        }
      }

      let grown = allocator.reallocate(held[0], 5000);
      assert!(!grown.is_null());
      held[0] = grown;

      for block in held {
        allocator.release(block);
      }

      assert_eq!(allocator.heap().stats().used_bytes, 0);
      assert!(allocator.allocate_aligned_block(8, 48).is_null());
      assert!(allocator.allocate_aligned_block(usize::MAX, 64).is_null());
    }
  }

  #[test]
  fn test_aligned_block_leaves_reusable_lead() {
    let allocator = fresh();

    unsafe {
      let first = allocator.allocate(16);
      let aligned = allocator.allocate_aligned_block(64, 256);
      assert_eq!(aligned as usize % 256, 0);

      let stats = allocator.heap().stats();
      assert_eq!(stats.used_bytes, 16 + 64);

      allocator.release(aligned);
      allocator.release(first);
      assert_eq!(allocator.heap().stats().used_bytes, 0);
    }
  }

  #[test]
  fn test_heap_coexists_with_system_allocator() {
    // Push every glibc thread onto the main arena, the one that grows by
    // moving the program break.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
      libc::mallopt(libc::M_ARENA_MAX, 1);
    }

    let allocator = fresh();

    std::thread::scope(|scope| {
      for _ in 0..3 {
        scope.spawn(|| {
          for _ in 0..20000 {
            let filler = vec![0xEEu8; 4000];
            std::hint::black_box(&filler);
          }
        });
      }

      unsafe {
        let mut held: Vec<*mut u8> = Vec::with_capacity(64);

        for round in 0..20000usize {
          let block = allocator.allocate(4000);
          assert!(!block.is_null());
          memory::fill(block, (round % 251) as i32, 4000);
          held.push(block);

          if held.len() == 64 {
            for (i, &block) in held.iter().enumerate() {
              let expected = ((round + 1 - 64 + i) % 251) as u8;
              assert_eq!(*block, expected);
              assert_eq!(*block.add(3999), expected);
              allocator.release(block);
            }
            held.clear();
          }
        }

        for block in held {
          allocator.release(block);
        }
      }
    });

    assert_eq!(allocator.heap().stats().used_bytes, 0);
  }

  #[test]
  fn test_aligned_allocation_rejects_bad_alignment() {
    let allocator = fresh();

    unsafe {
      assert!(allocator.allocate_aligned(16, 0).is_null());
      assert!(allocator.allocate_aligned(16, 24).is_null());
      assert!(allocator.allocate_aligned(usize::MAX, 16).is_null());
    }
  }

  #[test]
  fn test_oversized_request_fails() {
    let allocator = fresh();

    unsafe {
      assert!(allocator.allocate(usize::MAX).is_null());
    }
  }

  #[test]
  fn test_concurrent_use() {
    let allocator = fresh();

    std::thread::scope(|scope| {
      for t in 0..8u8 {
        let allocator = &allocator;
        scope.spawn(move || unsafe {
          for round in 0..200usize {
            let size = 1 + (round * 7) % 300;
            let block = allocator.allocate(size);
            assert!(!block.is_null());
            memory::fill(block, t as i32, size);
            for i in 0..size {
              assert_eq!(*block.add(i), t);
            }
            allocator.release(block);
          }
        });
      }
    });

    assert_eq!(allocator.heap().stats().used_bytes, 0);
  }
}
