//! This crate provides portable atomic cells: typed storage locations which
//! are only ever read and written through indivisible, ordered operations.
//!
//! Lock-free code is written once against [`Atomic`], [`AtomicFlag`] and the
//! fences, and compiles the same way whatever support for atomics is picked at
//! build time.
//!
//! # How it Works
//!
//! Every scalar kind that can live in a cell ([`atomic::Scalar`]) is tied to
//! the hardware atomic of the same width. A [`Backend`] decides how a cell is
//! stored and how each operation reaches that hardware atomic:
//!
//! - `native` stores the hardware atomic directly and honors every order.
//! - `builtin` stores a plain value and views its address as a hardware atomic
//!   for each operation, honoring every order.
//! - `legacy` stores a plain value and makes every operation sequentially
//!   consistent, whatever order was asked for.
//!
//! The backend is chosen at build time from the enabled Cargo features, in the
//! order above. Building with none of them enabled is a compile error.
//!
//! Operations take a [`MemoryOrder`] in their `_explicit` form; the form
//! without the suffix always uses [`MemoryOrder::SeqCst`]. No operation
//! panics or blocks, and a failed compare-exchange simply returns `false`.
//!
//! ```
//! use hut_atomic::{types::AtomicSize, AtomicFlag, MemoryOrder::*};
//!
//! static LOCK: AtomicFlag = AtomicFlag::new();
//! static COUNT: AtomicSize = AtomicSize::new(0);
//!
//! while LOCK.test_and_set_explicit(Acquire) {}
//! COUNT.fetch_add_explicit(1, Relaxed);
//! LOCK.clear_explicit(Release);
//!
//! assert_eq!(COUNT.load(), 1);
//! ```
#![no_std]

pub mod atomic;
pub mod backend;
mod cell;
mod flag;
mod order;
pub mod types;
mod utils;
pub mod version;

pub use backend::{signal_fence, thread_fence, Backend};
pub use cell::Atomic;
pub use flag::AtomicFlag;
pub use order::MemoryOrder;
