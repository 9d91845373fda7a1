//! The [`MemoryOrder`] enumeration and its mapping onto [`core::sync::atomic::Ordering`]

use core::sync::atomic::Ordering;

/// The ordering constraint attached to an atomic operation.
///
/// The discriminants are stable and match the values used by C11 compilers
/// (`__ATOMIC_RELAXED` through `__ATOMIC_SEQ_CST`).
///
/// Unlike [`Ordering`], every variant is accepted by every operation. An order
/// which makes no sense for an operation (e.g. [`MemoryOrder::Release`] on a
/// load) is strengthened to the closest order the operation supports, so no
/// operation ever panics on its ordering argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MemoryOrder {
    /// No ordering constraint, only atomicity.
    Relaxed = 0,
    /// Treated as [`MemoryOrder::Acquire`].
    Consume = 1,
    /// Later accesses may not be reordered before this one.
    Acquire = 2,
    /// Earlier accesses may not be reordered after this one.
    Release = 3,
    /// Both [`MemoryOrder::Acquire`] and [`MemoryOrder::Release`].
    AcqRel = 4,
    /// [`MemoryOrder::AcqRel`] plus a single total order over all `SeqCst` operations.
    #[default]
    SeqCst = 5,
}

impl MemoryOrder {
    /// Converts a raw discriminant back into a `MemoryOrder`.
    ///
    /// ```
    /// use hut_atomic::MemoryOrder;
    ///
    /// assert_eq!(MemoryOrder::from_u8(2), Some(MemoryOrder::Acquire));
    /// assert_eq!(MemoryOrder::from_u8(6), None);
    /// ```
    pub const fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0 => MemoryOrder::Relaxed,
            1 => MemoryOrder::Consume,
            2 => MemoryOrder::Acquire,
            3 => MemoryOrder::Release,
            4 => MemoryOrder::AcqRel,
            5 => MemoryOrder::SeqCst,
            _ => return None,
        })
    }

    /// The ordering used for a load.
    pub const fn load(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume
            | MemoryOrder::Acquire
            | MemoryOrder::Release
            | MemoryOrder::AcqRel => Ordering::Acquire,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// The ordering used for a store.
    pub const fn store(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume
            | MemoryOrder::Acquire
            | MemoryOrder::Release
            | MemoryOrder::AcqRel => Ordering::Release,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// The ordering used for a read-modify-write operation, or for the
    /// success half of a compare-exchange.
    pub const fn rmw(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// The ordering used for the load performed by a failed compare-exchange.
    pub const fn failure(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Release => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire | MemoryOrder::AcqRel => {
                Ordering::Acquire
            }
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// The ordering used for a fence. `None` means the fence has no effect.
    pub const fn fence(self) -> Option<Ordering> {
        match self {
            MemoryOrder::Relaxed => None,
            MemoryOrder::Consume | MemoryOrder::Acquire => Some(Ordering::Acquire),
            MemoryOrder::Release => Some(Ordering::Release),
            MemoryOrder::AcqRel => Some(Ordering::AcqRel),
            MemoryOrder::SeqCst => Some(Ordering::SeqCst),
        }
    }
}

impl From<MemoryOrder> for u8 {
    fn from(order: MemoryOrder) -> u8 {
        order as u8
    }
}
