//! # rcrt - A Minimal C Runtime Compatibility Layer
//!
//! This crate provides the small slice of the C standard library that
//! freestanding programs keep reaching for: a heap, raw memory routines,
//! narrow and wide string routines, ASCII classification, integer parsing,
//! UTF-8/UTF-16 conversion, sorting, environment access and a handful of
//! filesystem calls.
//!
//! ## Overview
//!
//! Everything is layered over one heap primitive that carves blocks out of
//! anonymous memory regions:
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          abi (extern "C")                            │
//!   │  malloc  memcpy  strlen  wcscmp  strtol  getenv  _mkdir  qsort  ...  │
//!   └──────────┬──────────────┬───────────────┬─────────────────┬──────────┘
//!              │              │               │                 │
//!   ┌──────────▼───┐  ┌───────▼──────┐  ┌─────▼──────┐  ┌───────▼───────┐
//!   │  Allocator   │  │ memory       │  │ parse      │  │ env / fs      │
//!   │  (context)   │  │ string<U>    │  │ convert    │  │ (rustix)      │
//!   └──────┬───────┘  │ ctype  sort  │  └────────────┘  └───────────────┘
//!          │          └──────────────┘
//!   ┌──────▼───────┐
//!   │  BlockHeap   │  first-fit block list behind a spin lock
//!   └──────┬───────┘
//!          ▼
//!   mmap(2), or sbrk(2) with export-symbols
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rcrt
//!   ├── align      - align_to! rounding macro
//!   ├── block      - Block header of the heap list (internal)
//!   ├── heap       - RawHeap, BlockHeap, Allocator, process_heap
//!   ├── memory     - memcpy/memmove/memset/memcmp/memchr/bzero
//!   ├── unit       - CharUnit: one string algorithm for u8 and u16
//!   ├── string     - str*/wcs* primitives
//!   ├── ctype      - ASCII classification and case mapping
//!   ├── parse      - strto*/wcsto* state machine
//!   ├── convert    - UTF-8 ⇄ UTF-16
//!   ├── sort       - insertion sort and binary search
//!   ├── env        - getenv/_wgetenv/_putenv
//!   ├── fs         - unlink/mkdir/rmdir/rename/chdir/getcwd/access
//!   ├── abi        - the extern "C" entry points
//!   └── error      - CrtError
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rcrt::{Allocator, BlockHeap, string};
//!
//! let heap = Allocator::new(BlockHeap::new());
//!
//! unsafe {
//!   let copy = string::duplicate(&heap, b"hello\0".as_ptr());
//!   assert_eq!(string::length(copy), 5);
//!   heap.release(copy);
//! }
//! ```
//!
//! ## Exported Symbols
//!
//! The `abi` functions are plain Rust items by default. Building with the
//! `export-symbols` feature emits each one under its C name, so the static
//! library can stand in for the platform C runtime. The crate is compiled
//! with `no_builtins` so the loops in `memory` and `string` are never
//! turned back into calls to those same symbols.
//!
//! ## Limitations
//!
//! - **Unix-only**: the heap and the filesystem calls go through `rustix`
//! - **One code page**: narrow strings are UTF-8, wide strings are UTF-16
//! - **No locale**: classification covers ASCII only
//! - **Regions are kept**: freed memory is reused, never returned to the OS
//! - **Wide exports**: `wchar_t`-typed symbols are only emitted where
//!   `wchar_t` is 16 bits; elsewhere they stay Rust functions
//!
//! ## Safety
//!
//! Nearly every function takes raw pointers to null-terminated data and is
//! `unsafe` for the same reasons its C counterpart is undefined on bad input.

#![no_builtins]

pub mod abi;
pub mod align;
mod block;
pub mod convert;
pub mod ctype;
pub mod env;
pub mod error;
pub mod fs;
pub mod heap;
pub mod memory;
pub mod parse;
pub mod sort;
pub mod string;
pub mod unit;

#[cfg(test)]
mod testing;

pub use error::{CrtError, Result};
pub use heap::{Allocator, BlockHeap, HEAP_ALIGN, HeapStats, RawHeap, process_heap};
pub use unit::{CharUnit, WideChar};
