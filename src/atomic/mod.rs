//! The [`AtomicStorage`] trait and the scalar kinds which can live in an atomic cell
pub use core::sync::atomic::Ordering;

use core::sync::atomic as hw;

mod sealed {
    pub trait Sealed {}
}

/// A hardware atomic type which can be shared between threads.
///
/// This is implemented for every type in [`core::sync::atomic`] and gives the
/// backends a single set of methods to call, whatever the width of the value.
pub trait AtomicStorage: Sized + Send + Sync {
    /// The underlying non-atomic type. This has the same size as `Self`, though
    /// possibly a smaller alignment.
    type Underlying: Copy + PartialEq;

    /// Reinterprets a pointer to a plain value as a reference to an atomic.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to `align_of::<Self>()` and valid for the whole
    /// of `'a`, and every access to it during `'a` must be atomic.
    unsafe fn from_ptr<'a>(ptr: *mut Self::Underlying) -> &'a Self;

    /// Loads a value from the atomic.
    ///
    /// `order` must be valid for a load, see [`crate::MemoryOrder::load`].
    fn load(&self, order: Ordering) -> Self::Underlying;

    /// Stores a value into the atomic.
    ///
    /// `order` must be valid for a store, see [`crate::MemoryOrder::store`].
    fn store(&self, val: Self::Underlying, order: Ordering);

    /// Stores a value into the atomic, returning the previous value.
    fn swap(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying;

    /// Stores `new` into the atomic if the current value is the same as
    /// `current`.
    ///
    /// The return value is a result indicating whether the new value was written and containing
    /// the previous value. On success this value is guaranteed to be equal to `current`.
    fn compare_exchange(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying>;

    /// Like [`AtomicStorage::compare_exchange`], but allowed to spuriously fail
    /// even when the comparison succeeds.
    fn compare_exchange_weak(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying>;
}

/// A value type which can be held by an atomic cell.
///
/// This trait is sealed. It is implemented for `bool`, the fixed-width integers,
/// `usize`/`isize` and raw `*mut T` pointers, for each width the target can
/// compare-and-swap natively.
pub trait Scalar: sealed::Sealed + Copy + PartialEq {
    /// The hardware atomic with the same size as `Self`.
    type Storage: AtomicStorage<Underlying = Self>;

    /// The all-zero value (`false`, `0` or null).
    const ZERO: Self;
}

/// Scalars supporting wrapping `fetch_add` and `fetch_sub`.
pub trait Integer: Scalar {
    /// Adds `val`, wrapping on overflow, and returns the previous value.
    fn fetch_add(storage: &Self::Storage, val: Self, order: Ordering) -> Self;

    /// Subtracts `val`, wrapping on overflow, and returns the previous value.
    fn fetch_sub(storage: &Self::Storage, val: Self, order: Ordering) -> Self;
}

/// Scalars supporting bitwise `fetch_and`, `fetch_or` and `fetch_xor`.
pub trait Bitwise: Scalar {
    /// Bitwise "and" with `val`, returning the previous value.
    fn fetch_and(storage: &Self::Storage, val: Self, order: Ordering) -> Self;

    /// Bitwise "or" with `val`, returning the previous value.
    fn fetch_or(storage: &Self::Storage, val: Self, order: Ordering) -> Self;

    /// Bitwise "xor" with `val`, returning the previous value.
    fn fetch_xor(storage: &Self::Storage, val: Self, order: Ordering) -> Self;
}

macro_rules! impl_storage {
    ($(#[$cfg:meta])* <$($g:ident)?> $t1:ty, $t2:ty, $z:expr) => {
$(#[$cfg])*
impl $(<$g>)? AtomicStorage for $t1 {
    type Underlying = $t2;

    unsafe fn from_ptr<'a>(ptr: *mut Self::Underlying) -> &'a Self {
        <$t1>::from_ptr(ptr)
    }

    fn load(&self, order: Ordering) -> Self::Underlying {
        <$t1>::load(self, order)
    }

    fn store(&self, val: Self::Underlying, order: Ordering) {
        <$t1>::store(self, val, order)
    }

    fn swap(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying {
        <$t1>::swap(self, val, order)
    }

    fn compare_exchange(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying> {
        <$t1>::compare_exchange(self, current, new, success, failure)
    }

    fn compare_exchange_weak(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying> {
        <$t1>::compare_exchange_weak(self, current, new, success, failure)
    }
}

$(#[$cfg])*
impl $(<$g>)? sealed::Sealed for $t2 {}

$(#[$cfg])*
impl $(<$g>)? Scalar for $t2 {
    type Storage = $t1;
    const ZERO: Self = $z;
}
    };
    ($(#[$cfg:meta])* $t1:ty, $t2:ty) => { impl_storage!{$(#[$cfg])* <> $t1, $t2, 0} };
}

macro_rules! impl_bitwise {
    ($(#[$cfg:meta])* $t1:ty, $t2:ty) => {
$(#[$cfg])*
impl Bitwise for $t2 {
    fn fetch_and(storage: &$t1, val: $t2, order: Ordering) -> $t2 {
        storage.fetch_and(val, order)
    }

    fn fetch_or(storage: &$t1, val: $t2, order: Ordering) -> $t2 {
        storage.fetch_or(val, order)
    }

    fn fetch_xor(storage: &$t1, val: $t2, order: Ordering) -> $t2 {
        storage.fetch_xor(val, order)
    }
}
    };
}

macro_rules! impl_integer {
    ($(#[$cfg:meta])* $t1:ty, $t2:ty) => {
impl_storage!{$(#[$cfg])* $t1, $t2}
impl_bitwise!{$(#[$cfg])* $t1, $t2}

$(#[$cfg])*
impl Integer for $t2 {
    fn fetch_add(storage: &$t1, val: $t2, order: Ordering) -> $t2 {
        storage.fetch_add(val, order)
    }

    fn fetch_sub(storage: &$t1, val: $t2, order: Ordering) -> $t2 {
        storage.fetch_sub(val, order)
    }
}
    };
}

impl_storage! {#[cfg(target_has_atomic = "ptr")] <T> hw::AtomicPtr<T>, *mut T, core::ptr::null_mut::<T>()}
impl_integer! {#[cfg(target_has_atomic = "ptr")] hw::AtomicUsize, usize}
impl_integer! {#[cfg(target_has_atomic = "ptr")] hw::AtomicIsize, isize}
impl_integer! {#[cfg(target_has_atomic = "64")] hw::AtomicU64, u64}
impl_integer! {#[cfg(target_has_atomic = "64")] hw::AtomicI64, i64}
impl_integer! {#[cfg(target_has_atomic = "32")] hw::AtomicU32, u32}
impl_integer! {#[cfg(target_has_atomic = "32")] hw::AtomicI32, i32}
impl_integer! {#[cfg(target_has_atomic = "16")] hw::AtomicU16, u16}
impl_integer! {#[cfg(target_has_atomic = "16")] hw::AtomicI16, i16}
impl_integer! {#[cfg(target_has_atomic = "8")] hw::AtomicU8, u8}
impl_integer! {#[cfg(target_has_atomic = "8")] hw::AtomicI8, i8}
impl_storage! {#[cfg(target_has_atomic = "8")] <> hw::AtomicBool, bool, false}
impl_bitwise! {#[cfg(target_has_atomic = "8")] hw::AtomicBool, bool}
