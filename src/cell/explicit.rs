//! The core operation set, with an explicit [`MemoryOrder`] for every ordering

use super::Atomic;
use crate::{
    atomic::{Bitwise, Integer, Scalar},
    backend::Backend,
    MemoryOrder,
};

impl<T: Scalar, B: Backend> Atomic<T, B> {
    /// Loads the current value.
    ///
    /// Meaningful orders are [`Relaxed`], [`Consume`], [`Acquire`] and
    /// [`SeqCst`]; anything else is treated as [`Acquire`].
    ///
    /// [`Relaxed`]: MemoryOrder::Relaxed
    /// [`Consume`]: MemoryOrder::Consume
    /// [`Acquire`]: MemoryOrder::Acquire
    /// [`SeqCst`]: MemoryOrder::SeqCst
    #[inline]
    pub fn load_explicit(&self, order: MemoryOrder) -> T {
        B::load(&self.cell, order)
    }

    /// Stores `val`.
    ///
    /// Meaningful orders are [`Relaxed`], [`Release`] and [`SeqCst`];
    /// anything else is treated as [`Release`].
    ///
    /// [`Relaxed`]: MemoryOrder::Relaxed
    /// [`Release`]: MemoryOrder::Release
    /// [`SeqCst`]: MemoryOrder::SeqCst
    #[inline]
    pub fn store_explicit(&self, val: T, order: MemoryOrder) {
        B::store(&self.cell, val, order)
    }

    /// Stores `val` and returns the value it replaced, as one atomic step.
    ///
    /// ```
    /// use hut_atomic::{Atomic, MemoryOrder::AcqRel};
    ///
    /// let a = Atomic::<u16>::new(7);
    /// assert_eq!(a.exchange_explicit(8, AcqRel), 7);
    /// assert_eq!(a.load(), 8);
    /// ```
    #[inline]
    pub fn exchange_explicit(&self, val: T, order: MemoryOrder) -> T {
        B::exchange(&self.cell, val, order)
    }

    /// Stores `desired` if the cell currently holds `*expected`.
    ///
    /// Returns `true` if the value was written. Otherwise returns `false` and
    /// overwrites `*expected` with the value found in the cell, ready for a
    /// retry. This never fails when the values match.
    ///
    /// `success` orders the read-modify-write; `failure` orders the load made
    /// when the comparison fails.
    ///
    /// ```
    /// use hut_atomic::{Atomic, MemoryOrder::{AcqRel, Acquire}};
    ///
    /// let a = Atomic::<i32>::new(5);
    ///
    /// let mut expected = 4;
    /// assert!(!a.compare_exchange_strong_explicit(&mut expected, 10, AcqRel, Acquire));
    /// assert_eq!(expected, 5);
    ///
    /// assert!(a.compare_exchange_strong_explicit(&mut expected, 10, AcqRel, Acquire));
    /// assert_eq!(a.load(), 10);
    /// ```
    #[inline]
    pub fn compare_exchange_strong_explicit(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        let result = B::compare_exchange(&self.cell, *expected, desired, success, failure);
        settle(result, expected)
    }

    /// Like [`Atomic::compare_exchange_strong_explicit`], but allowed to return
    /// `false` even when the values match, so it should be called in a loop.
    /// `*expected` is refreshed on every failure, spurious or not.
    ///
    /// ```
    /// use hut_atomic::{Atomic, MemoryOrder::{Relaxed, Release}};
    ///
    /// let a = Atomic::<u32>::new(3);
    /// let mut cur = a.load_explicit(Relaxed);
    /// loop {
    ///     let doubled = cur * 2;
    ///     if a.compare_exchange_weak_explicit(&mut cur, doubled, Release, Relaxed) {
    ///         break;
    ///     }
    /// }
    /// assert_eq!(a.load(), 6);
    /// ```
    #[inline]
    pub fn compare_exchange_weak_explicit(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        let result = B::compare_exchange_weak(&self.cell, *expected, desired, success, failure);
        settle(result, expected)
    }
}

impl<T: Integer, B: Backend> Atomic<T, B> {
    /// Adds `val` (wrapping around on overflow) and returns the previous value.
    ///
    /// ```
    /// use hut_atomic::{Atomic, MemoryOrder::Relaxed};
    ///
    /// let a = Atomic::<u8>::new(250);
    /// assert_eq!(a.fetch_add_explicit(10, Relaxed), 250);
    /// assert_eq!(a.load(), 4);
    /// ```
    #[inline]
    pub fn fetch_add_explicit(&self, val: T, order: MemoryOrder) -> T {
        B::fetch_add(&self.cell, val, order)
    }

    /// Subtracts `val` (wrapping around on overflow) and returns the previous value.
    #[inline]
    pub fn fetch_sub_explicit(&self, val: T, order: MemoryOrder) -> T {
        B::fetch_sub(&self.cell, val, order)
    }
}

impl<T: Bitwise, B: Backend> Atomic<T, B> {
    /// Bitwise "and" with `val`, returning the previous value.
    #[inline]
    pub fn fetch_and_explicit(&self, val: T, order: MemoryOrder) -> T {
        B::fetch_and(&self.cell, val, order)
    }

    /// Bitwise "or" with `val`, returning the previous value.
    #[inline]
    pub fn fetch_or_explicit(&self, val: T, order: MemoryOrder) -> T {
        B::fetch_or(&self.cell, val, order)
    }

    /// Bitwise "xor" with `val`, returning the previous value.
    ///
    /// ```
    /// use hut_atomic::{Atomic, MemoryOrder::AcqRel};
    ///
    /// let a = Atomic::<u8>::new(0b1100);
    /// assert_eq!(a.fetch_xor_explicit(0b1010, AcqRel), 0b1100);
    /// assert_eq!(a.load(), 0b0110);
    /// ```
    #[inline]
    pub fn fetch_xor_explicit(&self, val: T, order: MemoryOrder) -> T {
        B::fetch_xor(&self.cell, val, order)
    }
}

/// Turns a backend compare-exchange result into the `bool` + updated
/// `expected` form.
fn settle<T>(result: Result<T, T>, expected: &mut T) -> bool {
    match result {
        Ok(_) => true,
        Err(current) => {
            *expected = current;
            false
        }
    }
}
