//! The [`Backend`] trait and the strategies implementing it
//!
//! Exactly one strategy is [`Selected`] per build, by priority among the
//! enabled Cargo features:
//!
//! 1. `native`: the cell *is* the hardware atomic from [`core::sync::atomic`].
//! 2. `builtin`: the cell is a plain [`Slot`], and every operation reinterprets
//!    the address of its field as a hardware atomic.
//! 3. `legacy`: the cell is a plain [`Slot`], every operation is sequentially
//!    consistent whatever order was requested, and loads/stores are bracketed
//!    by full fences.
//!
//! All three present the same operation set, so code written against
//! [`Atomic`](crate::Atomic) or [`AtomicFlag`](crate::AtomicFlag) without
//! naming a backend compiles and behaves the same under any of them.
use core::cell::UnsafeCell;

use crate::{
    atomic::{Bitwise, Integer, Scalar},
    MemoryOrder,
};

#[cfg(feature = "builtin")]
mod builtin;
#[cfg(feature = "legacy")]
mod legacy;
#[cfg(feature = "native")]
mod native;

#[cfg(feature = "builtin")]
pub use builtin::Builtin;
#[cfg(feature = "legacy")]
pub use legacy::Legacy;
#[cfg(feature = "native")]
pub use native::Native;

#[cfg(not(target_has_atomic = "ptr"))]
compile_error!("the target has no pointer-width compare-and-swap, no atomic backend can be built");

#[cfg(not(any(feature = "native", feature = "builtin", feature = "legacy")))]
compile_error!("no atomic backend is enabled, enable one of the `native`, `builtin` or `legacy` features");

/// The backend used when none is named.
#[cfg(feature = "native")]
pub type Selected = Native;

/// The backend used when none is named.
#[cfg(all(not(feature = "native"), feature = "builtin"))]
pub type Selected = Builtin;

/// The backend used when none is named.
#[cfg(all(not(feature = "native"), not(feature = "builtin"), feature = "legacy"))]
pub type Selected = Legacy;

mod sealed {
    pub trait Sealed {}
}

/// One strategy for implementing atomic cells.
///
/// This trait is sealed. Each method is one operation of the atomic cell API;
/// the public methods on [`Atomic`](crate::Atomic) forward here after nothing
/// more than argument shuffling.
pub trait Backend: sealed::Sealed + 'static {
    /// The storage of an atomic cell holding a `T`. Always has the same size
    /// and alignment as [`Slot<T>`].
    type Cell<T: Scalar>: Send + Sync;

    /// Loads the current value.
    fn load<T: Scalar>(cell: &Self::Cell<T>, order: MemoryOrder) -> T;

    /// Stores `val`.
    fn store<T: Scalar>(cell: &Self::Cell<T>, val: T, order: MemoryOrder);

    /// Stores `val`, returning the previous value.
    fn exchange<T: Scalar>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T;

    /// Stores `new` if the cell holds `current`. `Ok` holds the previous value
    /// on success, `Err` the value found on failure.
    fn compare_exchange<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T>;

    /// Like [`Backend::compare_exchange`], but may fail spuriously.
    fn compare_exchange_weak<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T>;

    /// Wrapping add, returning the previous value.
    fn fetch_add<T: Integer>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T;

    /// Wrapping subtract, returning the previous value.
    fn fetch_sub<T: Integer>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T;

    /// Bitwise "and", returning the previous value.
    fn fetch_and<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T;

    /// Bitwise "or", returning the previous value.
    fn fetch_or<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T;

    /// Bitwise "xor", returning the previous value.
    fn fetch_xor<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T;

    /// A fence ordering memory accesses across threads.
    fn thread_fence(order: MemoryOrder);

    /// A fence ordering memory accesses only against the current thread, e.g.
    /// a signal handler interrupting it.
    fn signal_fence(order: MemoryOrder);

    /// Whether operations on a cell holding a `T` are lock-free.
    fn is_lock_free<T: Scalar>() -> bool;
}

/// The plain storage used by the `builtin` and `legacy` backends.
///
/// A `Slot<T>` is a `T` aligned like `T::Storage`. Its field is private to the
/// backends; it is only ever accessed through a hardware atomic reinterpreting
/// its address.
#[repr(C)]
pub struct Slot<T: Scalar> {
    value: UnsafeCell<T>,
    _align: [T::Storage; 0],
}

// All accesses to `value` go through `T::Storage`, which is `Send + Sync`.
unsafe impl<T: Scalar> Send for Slot<T> {}
unsafe impl<T: Scalar> Sync for Slot<T> {}

impl<T: Scalar> Slot<T> {
    pub(crate) const fn new(value: T) -> Self {
        Slot {
            value: UnsafeCell::new(value),
            _align: [],
        }
    }

    pub(crate) fn into_inner(self) -> T {
        self.value.into_inner()
    }

    #[cfg(any(feature = "builtin", feature = "legacy"))]
    fn storage(&self) -> &T::Storage {
        use crate::atomic::AtomicStorage;

        // `_align` gives `value` the alignment of `T::Storage`, and `value` is
        // never accessed other than through this reference.
        unsafe { T::Storage::from_ptr(self.value.get()) }
    }
}

#[cfg(any(feature = "native", feature = "builtin"))]
fn ordered_thread_fence(order: MemoryOrder) {
    if let Some(order) = order.fence() {
        core::sync::atomic::fence(order);
    }
}

#[cfg(any(feature = "native", feature = "builtin"))]
fn ordered_signal_fence(order: MemoryOrder) {
    if let Some(order) = order.fence() {
        core::sync::atomic::compiler_fence(order);
    }
}

/// Whether the target can compare-and-swap `bytes` wide values natively.
#[cfg(any(feature = "native", feature = "builtin"))]
fn has_native_width(bytes: usize) -> bool {
    (bytes == 1 && cfg!(target_has_atomic = "8"))
        || (bytes == 2 && cfg!(target_has_atomic = "16"))
        || (bytes == 4 && cfg!(target_has_atomic = "32"))
        || (bytes == 8 && cfg!(target_has_atomic = "64"))
}

/// Establishes a cross-thread ordering constraint not tied to any cell.
///
/// ```
/// use hut_atomic::{thread_fence, MemoryOrder};
///
/// thread_fence(MemoryOrder::Release);
/// thread_fence(MemoryOrder::Relaxed); // no effect
/// ```
pub fn thread_fence(order: MemoryOrder) {
    Selected::thread_fence(order)
}

/// Orders memory accesses against code running on the same thread (such as a
/// signal handler), without emitting any cross-thread synchronization.
pub fn signal_fence(order: MemoryOrder) {
    Selected::signal_fence(order)
}
