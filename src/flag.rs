//! [`AtomicFlag`], a boolean cell with test-and-set / clear semantics

use core::fmt;

use crate::{
    backend::{Backend, Selected},
    Atomic, MemoryOrder,
};

/// A boolean flag built on an [`Atomic<bool>`], starting out clear.
///
/// ```
/// use hut_atomic::AtomicFlag;
///
/// let flag: AtomicFlag = AtomicFlag::new();
/// assert!(!flag.test_and_set());
/// assert!(flag.test_and_set());
/// flag.clear();
/// assert!(!flag.load());
/// ```
#[repr(transparent)]
pub struct AtomicFlag<B: Backend = Selected> {
    cell: Atomic<bool, B>,
}

impl<B: Backend> AtomicFlag<B> {
    /// A clear flag.
    pub const fn new() -> Self {
        Self::with_state(false)
    }

    /// A flag starting out set if `set` is `true`.
    pub const fn with_state(set: bool) -> Self {
        AtomicFlag {
            cell: Atomic::new(set),
        }
    }

    /// Sets the flag and returns whether it was already set.
    ///
    /// This is a compare-exchange from `false` to `true` using `order` for
    /// both outcomes.
    pub fn test_and_set_explicit(&self, order: MemoryOrder) -> bool {
        let mut expected = false;
        !self
            .cell
            .compare_exchange_strong_explicit(&mut expected, true, order, order)
    }

    /// Clears the flag.
    pub fn clear_explicit(&self, order: MemoryOrder) {
        self.cell.store_explicit(false, order)
    }

    /// Reads the flag without changing it.
    pub fn load_explicit(&self, order: MemoryOrder) -> bool {
        self.cell.load_explicit(order)
    }

    /// [`AtomicFlag::test_and_set_explicit`] with [`MemoryOrder::SeqCst`].
    pub fn test_and_set(&self) -> bool {
        self.test_and_set_explicit(MemoryOrder::SeqCst)
    }

    /// [`AtomicFlag::clear_explicit`] with [`MemoryOrder::SeqCst`].
    pub fn clear(&self) {
        self.clear_explicit(MemoryOrder::SeqCst)
    }

    /// [`AtomicFlag::load_explicit`] with [`MemoryOrder::SeqCst`].
    pub fn load(&self) -> bool {
        self.load_explicit(MemoryOrder::SeqCst)
    }

    /// Whether setting and clearing the flag compile to lock-free instructions.
    pub fn is_lock_free(&self) -> bool {
        self.cell.is_lock_free()
    }
}

impl<B: Backend> Default for AtomicFlag<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> fmt::Debug for AtomicFlag<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicFlag")
            .field(&self.load_explicit(MemoryOrder::Relaxed))
            .finish()
    }
}
