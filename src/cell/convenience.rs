//! Default-order forms of every operation, all [`MemoryOrder::SeqCst`]

use super::Atomic;
use crate::{
    atomic::{Bitwise, Integer, Scalar},
    backend::Backend,
    MemoryOrder::SeqCst,
};

impl<T: Scalar, B: Backend> Atomic<T, B> {
    /// [`Atomic::load_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn load(&self) -> T {
        self.load_explicit(SeqCst)
    }

    /// [`Atomic::store_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    ///
    /// ```
    /// use hut_atomic::Atomic;
    ///
    /// let a = Atomic::<usize>::new(7);
    /// a.store(8);
    /// assert_eq!(a.load(), 8);
    /// ```
    #[inline]
    pub fn store(&self, val: T) {
        self.store_explicit(val, SeqCst)
    }

    /// [`Atomic::exchange_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn exchange(&self, val: T) -> T {
        self.exchange_explicit(val, SeqCst)
    }

    /// [`Atomic::compare_exchange_strong_explicit`] with
    /// [`SeqCst`](crate::MemoryOrder::SeqCst) on both success and failure.
    #[inline]
    pub fn compare_exchange_strong(&self, expected: &mut T, desired: T) -> bool {
        self.compare_exchange_strong_explicit(expected, desired, SeqCst, SeqCst)
    }

    /// [`Atomic::compare_exchange_weak_explicit`] with
    /// [`SeqCst`](crate::MemoryOrder::SeqCst) on both success and failure.
    #[inline]
    pub fn compare_exchange_weak(&self, expected: &mut T, desired: T) -> bool {
        self.compare_exchange_weak_explicit(expected, desired, SeqCst, SeqCst)
    }
}

impl<T: Integer, B: Backend> Atomic<T, B> {
    /// [`Atomic::fetch_add_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn fetch_add(&self, val: T) -> T {
        self.fetch_add_explicit(val, SeqCst)
    }

    /// [`Atomic::fetch_sub_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn fetch_sub(&self, val: T) -> T {
        self.fetch_sub_explicit(val, SeqCst)
    }
}

impl<T: Bitwise, B: Backend> Atomic<T, B> {
    /// [`Atomic::fetch_and_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn fetch_and(&self, val: T) -> T {
        self.fetch_and_explicit(val, SeqCst)
    }

    /// [`Atomic::fetch_or_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn fetch_or(&self, val: T) -> T {
        self.fetch_or_explicit(val, SeqCst)
    }

    /// [`Atomic::fetch_xor_explicit`] with [`SeqCst`](crate::MemoryOrder::SeqCst).
    #[inline]
    pub fn fetch_xor(&self, val: T) -> T {
        self.fetch_xor_explicit(val, SeqCst)
    }
}
