use super::{has_native_width, ordered_signal_fence, ordered_thread_fence, sealed, Backend};
use crate::{
    atomic::{AtomicStorage, Bitwise, Integer, Scalar},
    MemoryOrder,
};

/// The cell is the hardware atomic itself, and every order is honored as
/// requested.
#[derive(Debug)]
pub enum Native {}

impl sealed::Sealed for Native {}

impl Backend for Native {
    type Cell<T: Scalar> = T::Storage;

    #[inline]
    fn load<T: Scalar>(cell: &Self::Cell<T>, order: MemoryOrder) -> T {
        cell.load(order.load())
    }

    #[inline]
    fn store<T: Scalar>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) {
        cell.store(val, order.store())
    }

    #[inline]
    fn exchange<T: Scalar>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        cell.swap(val, order.rmw())
    }

    #[inline]
    fn compare_exchange<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T> {
        cell.compare_exchange(current, new, success.rmw(), failure.failure())
    }

    #[inline]
    fn compare_exchange_weak<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T> {
        cell.compare_exchange_weak(current, new, success.rmw(), failure.failure())
    }

    #[inline]
    fn fetch_add<T: Integer>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_add(cell, val, order.rmw())
    }

    #[inline]
    fn fetch_sub<T: Integer>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_sub(cell, val, order.rmw())
    }

    #[inline]
    fn fetch_and<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_and(cell, val, order.rmw())
    }

    #[inline]
    fn fetch_or<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_or(cell, val, order.rmw())
    }

    #[inline]
    fn fetch_xor<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_xor(cell, val, order.rmw())
    }

    fn thread_fence(order: MemoryOrder) {
        ordered_thread_fence(order)
    }

    fn signal_fence(order: MemoryOrder) {
        ordered_signal_fence(order)
    }

    fn is_lock_free<T: Scalar>() -> bool {
        has_native_width(core::mem::size_of::<T::Storage>())
    }
}
