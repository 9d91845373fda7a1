use super::{has_native_width, ordered_signal_fence, ordered_thread_fence, sealed, Backend, Slot};
use crate::{
    atomic::{AtomicStorage, Bitwise, Integer, Scalar},
    MemoryOrder,
};

/// The cell is a plain [`Slot`]. Each operation views the slot's field as a
/// hardware atomic in place, and every order is honored as requested.
#[derive(Debug)]
pub enum Builtin {}

impl sealed::Sealed for Builtin {}

impl Backend for Builtin {
    type Cell<T: Scalar> = Slot<T>;

    #[inline]
    fn load<T: Scalar>(cell: &Self::Cell<T>, order: MemoryOrder) -> T {
        cell.storage().load(order.load())
    }

    #[inline]
    fn store<T: Scalar>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) {
        cell.storage().store(val, order.store())
    }

    #[inline]
    fn exchange<T: Scalar>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        cell.storage().swap(val, order.rmw())
    }

    #[inline]
    fn compare_exchange<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T> {
        cell.storage()
            .compare_exchange(current, new, success.rmw(), failure.failure())
    }

    #[inline]
    fn compare_exchange_weak<T: Scalar>(
        cell: &Self::Cell<T>,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T> {
        cell.storage()
            .compare_exchange_weak(current, new, success.rmw(), failure.failure())
    }

    #[inline]
    fn fetch_add<T: Integer>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_add(cell.storage(), val, order.rmw())
    }

    #[inline]
    fn fetch_sub<T: Integer>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_sub(cell.storage(), val, order.rmw())
    }

    #[inline]
    fn fetch_and<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_and(cell.storage(), val, order.rmw())
    }

    #[inline]
    fn fetch_or<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_or(cell.storage(), val, order.rmw())
    }

    #[inline]
    fn fetch_xor<T: Bitwise>(cell: &Self::Cell<T>, val: T, order: MemoryOrder) -> T {
        T::fetch_xor(cell.storage(), val, order.rmw())
    }

    fn thread_fence(order: MemoryOrder) {
        ordered_thread_fence(order)
    }

    fn signal_fence(order: MemoryOrder) {
        ordered_signal_fence(order)
    }

    fn is_lock_free<T: Scalar>() -> bool {
        has_native_width(core::mem::size_of::<T>())
    }
}
