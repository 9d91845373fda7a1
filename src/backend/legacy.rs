use core::{
    mem::size_of,
    sync::atomic::{compiler_fence, fence, Ordering::SeqCst},
};

use super::{sealed, Backend, Slot};
use crate::{
    atomic::{AtomicStorage, Bitwise, Integer, Scalar},
    MemoryOrder,
};

/// The cell is a plain [`Slot`], and every operation is sequentially
/// consistent regardless of the order requested.
///
/// Each operation is a single hardware instruction (never a retry loop), with
/// full fences around loads, stores and exchanges. `compare_exchange_weak`
/// never fails spuriously here.
#[derive(Debug)]
pub enum Legacy {}

impl sealed::Sealed for Legacy {}

impl Backend for Legacy {
    type Cell<T: Scalar> = Slot<T>;

    fn load<T: Scalar>(cell: &Self::Cell<T>, _order: MemoryOrder) -> T {
        fence(SeqCst);
        let val = cell.storage().load(SeqCst);
        fence(SeqCst);
        val
    }

    fn store<T: Scalar>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) {
        fence(SeqCst);
        cell.storage().store(val, SeqCst);
        fence(SeqCst);
    }

    fn exchange<T: Scalar>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) -> T {
        let prev = cell.storage().swap(val, SeqCst);
        fence(SeqCst);
        prev
    }

    fn compare_exchange<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        _success: MemoryOrder,
        _failure: MemoryOrder,
    ) -> Result<T, T> {
        cell.storage().compare_exchange(current, new, SeqCst, SeqCst)
    }

    fn compare_exchange_weak<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T> {
        Self::compare_exchange(cell, current, new, success, failure)
    }

    fn fetch_add<T: Integer>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) -> T {
        T::fetch_add(cell.storage(), val, SeqCst)
    }

    fn fetch_sub<T: Integer>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) -> T {
        T::fetch_sub(cell.storage(), val, SeqCst)
    }

    fn fetch_and<T: Bitwise>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) -> T {
        T::fetch_and(cell.storage(), val, SeqCst)
    }

    fn fetch_or<T: Bitwise>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) -> T {
        T::fetch_or(cell.storage(), val, SeqCst)
    }

    fn fetch_xor<T: Bitwise>(cell: &Self::Cell<T>, val: T, _order: MemoryOrder) -> T {
        T::fetch_xor(cell.storage(), val, SeqCst)
    }

    fn thread_fence(_order: MemoryOrder) {
        fence(SeqCst)
    }

    fn signal_fence(_order: MemoryOrder) {
        compiler_fence(SeqCst)
    }

    /// Approximated: anything no wider than a pointer counts as lock-free.
    fn is_lock_free<T: Scalar>() -> bool {
        size_of::<T>() <= size_of::<usize>()
    }
}
