//! Named atomic cells for each scalar kind
//!
//! The C-named kinds (`char`, `short`, `long`, ...) follow the target's C ABI
//! through [`core::ffi`]. Kinds wider than the target can compare-and-swap are
//! not defined.
use core::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort,
};

use crate::Atomic;

/// The target's C `wchar_t`, which `core::ffi` has no alias for.
#[cfg(windows)]
pub type WChar = u16;
/// The target's C `wchar_t`, which `core::ffi` has no alias for.
#[cfg(all(
    not(windows),
    any(target_arch = "aarch64", target_arch = "arm"),
    not(target_vendor = "apple")
))]
pub type WChar = u32;
/// The target's C `wchar_t`, which `core::ffi` has no alias for.
#[cfg(all(
    not(windows),
    not(all(
        any(target_arch = "aarch64", target_arch = "arm"),
        not(target_vendor = "apple")
    ))
))]
pub type WChar = i32;

pub type AtomicBool = Atomic<bool>;

pub type AtomicChar = Atomic<c_char>;
pub type AtomicSChar = Atomic<c_schar>;
pub type AtomicUChar = Atomic<c_uchar>;
pub type AtomicShort = Atomic<c_short>;
pub type AtomicUShort = Atomic<c_ushort>;
pub type AtomicInt = Atomic<c_int>;
pub type AtomicUInt = Atomic<c_uint>;
pub type AtomicLong = Atomic<c_long>;
pub type AtomicULong = Atomic<c_ulong>;
pub type AtomicWChar = Atomic<WChar>;
#[cfg(target_has_atomic = "64")]
pub type AtomicLLong = Atomic<c_longlong>;
#[cfg(target_has_atomic = "64")]
pub type AtomicULLong = Atomic<c_ulonglong>;

pub type AtomicInt8 = Atomic<i8>;
pub type AtomicUInt8 = Atomic<u8>;
pub type AtomicInt16 = Atomic<i16>;
pub type AtomicUInt16 = Atomic<u16>;
pub type AtomicInt32 = Atomic<i32>;
pub type AtomicUInt32 = Atomic<u32>;
#[cfg(target_has_atomic = "64")]
pub type AtomicInt64 = Atomic<i64>;
#[cfg(target_has_atomic = "64")]
pub type AtomicUInt64 = Atomic<u64>;

// The smallest widths holding at least N bits are exactly N bits.
pub type AtomicIntLeast8 = Atomic<i8>;
pub type AtomicUIntLeast8 = Atomic<u8>;
pub type AtomicIntLeast16 = Atomic<i16>;
pub type AtomicUIntLeast16 = Atomic<u16>;
pub type AtomicIntLeast32 = Atomic<i32>;
pub type AtomicUIntLeast32 = Atomic<u32>;
#[cfg(target_has_atomic = "64")]
pub type AtomicIntLeast64 = Atomic<i64>;
#[cfg(target_has_atomic = "64")]
pub type AtomicUIntLeast64 = Atomic<u64>;

// The fastest widths holding at least N bits. Above 8 bits this is the
// register width where that is large enough, as on glibc.
pub type AtomicIntFast8 = Atomic<i8>;
pub type AtomicUIntFast8 = Atomic<u8>;
pub type AtomicIntFast16 = Atomic<isize>;
pub type AtomicUIntFast16 = Atomic<usize>;
#[cfg(not(target_pointer_width = "16"))]
pub type AtomicIntFast32 = Atomic<isize>;
#[cfg(not(target_pointer_width = "16"))]
pub type AtomicUIntFast32 = Atomic<usize>;
#[cfg(target_pointer_width = "16")]
pub type AtomicIntFast32 = Atomic<i32>;
#[cfg(target_pointer_width = "16")]
pub type AtomicUIntFast32 = Atomic<u32>;
#[cfg(target_has_atomic = "64")]
pub type AtomicIntFast64 = Atomic<i64>;
#[cfg(target_has_atomic = "64")]
pub type AtomicUIntFast64 = Atomic<u64>;

pub type AtomicIntPtr = Atomic<isize>;
pub type AtomicUIntPtr = Atomic<usize>;
pub type AtomicSize = Atomic<usize>;
pub type AtomicPtrDiff = Atomic<isize>;
#[cfg(target_has_atomic = "64")]
pub type AtomicIntMax = Atomic<i64>;
#[cfg(target_has_atomic = "64")]
pub type AtomicUIntMax = Atomic<u64>;

/// An atomic raw pointer. Supports load, store, exchange and compare-exchange.
pub type AtomicPtr<T> = Atomic<*mut T>;
