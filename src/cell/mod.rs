use core::{
    fmt,
    mem::{align_of, size_of},
};

use const_panic::concat_assert;

use crate::{
    atomic::Scalar,
    backend::{Backend, Selected, Slot},
    utils::reinterpret,
    MemoryOrder,
};

mod convenience;
mod explicit;

/// A storage location holding a `T`, accessed only through atomic operations.
///
/// The value is reachable exclusively through the methods of this type; the
/// storage it lives in is private. Which [`Backend`] implements the operations
/// is decided at build time, `B` only needs naming to pin a specific one.
///
/// Every operation comes in two forms: an `_explicit` one taking a
/// [`MemoryOrder`] for each ordering it performs, and a convenience one which
/// uses [`MemoryOrder::SeqCst`] throughout.
///
/// # Examples
///
/// ```
/// use hut_atomic::{Atomic, MemoryOrder};
///
/// static HITS: Atomic<u32> = Atomic::new(0);
///
/// HITS.fetch_add_explicit(1, MemoryOrder::Relaxed);
/// assert_eq!(HITS.load(), 1);
/// ```
#[repr(transparent)]
pub struct Atomic<T: Scalar, B: Backend = Selected> {
    cell: B::Cell<T>,
}

impl<T: Scalar, B: Backend> Atomic<T, B> {
    const CELL_SIZE: usize = size_of::<B::Cell<T>>();
    const CELL_ALIGN: usize = align_of::<B::Cell<T>>();
    const SLOT_SIZE: usize = size_of::<Slot<T>>();
    const SLOT_ALIGN: usize = align_of::<Slot<T>>();

    /// `true` if the backend cell can be built from, and unwrapped into, a `Slot<T>`.
    const LAYOUT_MATCHES: bool =
        Self::CELL_SIZE == Self::SLOT_SIZE && Self::CELL_ALIGN == Self::SLOT_ALIGN;

    /// Fails the build if the backend cell's layout ever drifts from `Slot<T>`.
    const ASSERT_LAYOUT: () = Self::assert_layout();

    const fn assert_layout() {
        concat_assert!(
            Self::LAYOUT_MATCHES,
            "backend cell (size=",
            Self::CELL_SIZE,
            ", align=",
            Self::CELL_ALIGN,
            ") does not match its slot (size=",
            Self::SLOT_SIZE,
            ", align=",
            Self::SLOT_ALIGN,
            ")",
        );
    }

    /// Creates a new atomic cell holding `val`.
    ///
    /// This is usable in `static` initializers.
    ///
    /// ```
    /// use hut_atomic::Atomic;
    ///
    /// static READY: Atomic<bool> = Atomic::new(false);
    /// assert!(!READY.load());
    /// ```
    pub const fn new(val: T) -> Self {
        let () = Self::ASSERT_LAYOUT;

        // Every backend cell is checked above to have the layout of `Slot<T>`,
        // and holds its value in the same bytes.
        let cell = unsafe { reinterpret::<Slot<T>, B::Cell<T>>(Slot::new(val)) };
        Atomic { cell }
    }

    /// Re-initializes the cell with `val` using a plain, non-atomic write.
    ///
    /// The `&mut` receiver guarantees that no other thread can observe the
    /// cell while this happens; sharing it afterwards (e.g. through a scoped
    /// thread or an `Arc`) orders the write before any concurrent access.
    ///
    /// ```
    /// use hut_atomic::Atomic;
    ///
    /// let mut a = Atomic::<i64>::new(1);
    /// a.init(-5);
    /// assert_eq!(a.load(), -5);
    /// ```
    pub fn init(&mut self, val: T) {
        *self = Self::new(val);
    }

    /// Consumes the cell and returns the contained value.
    ///
    /// This is safe because passing `self` by value guarantees that no other
    /// threads are concurrently accessing the atomic data.
    pub fn into_inner(self) -> T {
        let () = Self::ASSERT_LAYOUT;

        // `Atomic` is `#[repr(transparent)]` over a cell laid out like `Slot<T>`.
        let slot = unsafe { reinterpret::<Self, Slot<T>>(self) };
        slot.into_inner()
    }

    /// Whether operations on this cell compile to lock-free instructions.
    ///
    /// ```
    /// use hut_atomic::Atomic;
    ///
    /// assert!(Atomic::<u32>::new(0).is_lock_free());
    /// ```
    pub fn is_lock_free(&self) -> bool {
        B::is_lock_free::<T>()
    }
}

impl<T: Scalar, B: Backend> Default for Atomic<T, B> {
    /// A cell holding `false`, `0` or a null pointer.
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

impl<T: Scalar, B: Backend> From<T> for Atomic<T, B> {
    fn from(val: T) -> Self {
        Self::new(val)
    }
}

impl<T: Scalar + fmt::Debug, B: Backend> fmt::Debug for Atomic<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.load_explicit(MemoryOrder::Relaxed), f)
    }
}
