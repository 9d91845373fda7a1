use std::ptr;

use hut_atomic::{
    types::*,
    Atomic,
    MemoryOrder::{self, *},
};

const ALL_ORDERS: [MemoryOrder; 6] = [Relaxed, Consume, Acquire, Release, AcqRel, SeqCst];

macro_rules! check_init_load {
    ($($alias:ty => $val:expr),* $(,)?) => {$({
        let a = <$alias>::new($val);
        assert_eq!(a.load(), $val, "{}", stringify!($alias));

        let mut b = <$alias>::default();
        b.init($val);
        assert_eq!(b.load_explicit(SeqCst), $val, "{}", stringify!($alias));
        assert_eq!(b.into_inner(), $val, "{}", stringify!($alias));
    })*};
}

#[test]
fn init_then_load_every_kind() {
    check_init_load! {
        AtomicBool => true,
        AtomicChar => 0x41,
        AtomicSChar => -3,
        AtomicUChar => 200,
        AtomicShort => -1234,
        AtomicUShort => 54321,
        AtomicInt => -123_456,
        AtomicUInt => 3_000_000_000,
        AtomicLong => -77,
        AtomicULong => 77,
        AtomicWChar => 0x263A,
        AtomicLLong => i64::MIN,
        AtomicULLong => u64::MAX,
        AtomicInt8 => i8::MIN,
        AtomicUInt8 => u8::MAX,
        AtomicInt16 => i16::MIN,
        AtomicUInt16 => u16::MAX,
        AtomicInt32 => i32::MIN,
        AtomicUInt32 => u32::MAX,
        AtomicInt64 => i64::MAX,
        AtomicUInt64 => 1 << 40,
        AtomicIntLeast8 => -8,
        AtomicUIntLeast8 => 8,
        AtomicIntLeast16 => -16,
        AtomicUIntLeast16 => 16,
        AtomicIntLeast32 => -32,
        AtomicUIntLeast32 => 32,
        AtomicIntLeast64 => -64,
        AtomicUIntLeast64 => 64,
        AtomicIntFast8 => -8,
        AtomicUIntFast8 => 8,
        AtomicIntFast16 => -16,
        AtomicUIntFast16 => 16,
        AtomicIntFast32 => -32,
        AtomicUIntFast32 => 32,
        AtomicIntFast64 => -64,
        AtomicUIntFast64 => 64,
        AtomicIntPtr => isize::MIN,
        AtomicUIntPtr => usize::MAX,
        AtomicSize => 4096,
        AtomicPtrDiff => -4096,
        AtomicIntMax => i64::MIN + 1,
        AtomicUIntMax => u64::MAX - 1,
    }
}

#[test]
fn wide_char_matches_the_platform() {
    let expected = if cfg!(windows) { 2 } else { 4 };
    assert_eq!(std::mem::size_of::<AtomicWChar>(), expected);
}

#[test]
fn default_is_zero() {
    assert!(!AtomicBool::default().load());
    assert_eq!(AtomicInt::default().load(), 0);
    assert_eq!(AtomicSize::default().load(), 0);
    assert!(AtomicPtr::<u8>::default().load().is_null());
}

#[test]
fn static_initialization() {
    static COUNTER: AtomicSize = AtomicSize::new(0);
    static READY: AtomicBool = AtomicBool::new(false);

    assert_eq!(COUNTER.fetch_add(2), 0);
    READY.store(true);
    assert_eq!(COUNTER.load(), 2);
    assert!(READY.load());
}

#[test]
fn exchange_returns_previous() {
    let a = AtomicInt32::new(5);
    assert_eq!(a.exchange(6), 5);
    assert_eq!(a.load(), 6);
    assert_eq!(a.exchange_explicit(-1, Relaxed), 6);
    assert_eq!(a.load(), -1);
}

#[test]
fn compare_exchange_strong_outcomes() {
    let a = AtomicUInt64::new(10);

    let mut expected = 10;
    assert!(a.compare_exchange_strong(&mut expected, 20));
    assert_eq!(expected, 10);
    assert_eq!(a.load(), 20);

    let mut expected = 10;
    assert!(!a.compare_exchange_strong(&mut expected, 30));
    assert_eq!(expected, 20);
    assert_eq!(a.load(), 20);

    // The refreshed `expected` makes the retry succeed.
    assert!(a.compare_exchange_strong(&mut expected, 30));
    assert_eq!(a.load(), 30);
}

#[test]
fn compare_exchange_weak_in_a_loop() {
    let a = AtomicInt16::new(3);
    let mut cur = a.load_explicit(Relaxed);
    loop {
        let next = cur * 7;
        if a.compare_exchange_weak(&mut cur, next) {
            break;
        }
    }
    assert_eq!(a.load(), 21);

    let mut stale = 0;
    assert!(!a.compare_exchange_weak_explicit(&mut stale, 1, AcqRel, Acquire));
    assert_eq!(stale, 21);
}

#[test]
fn fetch_ops_return_previous() {
    let a = AtomicUInt32::new(0b1100);
    assert_eq!(a.fetch_add(1), 0b1100);
    assert_eq!(a.fetch_sub(2), 0b1101);
    assert_eq!(a.fetch_and(0b0110), 0b1011);
    assert_eq!(a.fetch_or(0b1000), 0b0010);
    assert_eq!(a.fetch_xor(0b1111), 0b1010);
    assert_eq!(a.load(), 0b0101);
}

#[test]
fn fetch_ops_wrap_like_the_width() {
    let a = AtomicUInt8::new(0);
    assert_eq!(a.fetch_sub(1), 0);
    assert_eq!(a.load(), 255);
    assert_eq!(a.fetch_add(2), 255);
    assert_eq!(a.load(), 1);

    let b = AtomicInt8::new(i8::MAX);
    assert_eq!(b.fetch_add_explicit(1, Relaxed), i8::MAX);
    assert_eq!(b.load(), i8::MIN);

    let c = AtomicUInt16::new(0);
    c.fetch_sub(1);
    assert_eq!(c.load(), u16::MAX);
}

#[test]
fn bool_bitwise() {
    let a = AtomicBool::new(true);
    assert!(a.fetch_xor(true));
    assert!(!a.load());
    assert!(!a.fetch_or(true));
    assert!(a.fetch_and(false));
    assert!(!a.load());
}

#[test]
fn pointers() {
    let mut x = 1u32;
    let mut y = 2u32;
    let px: *mut u32 = &mut x;
    let py: *mut u32 = &mut y;

    let a = AtomicPtr::<u32>::new(ptr::null_mut());
    assert!(a.load().is_null());
    assert!(a.exchange(px).is_null());

    let mut expected = py;
    assert!(!a.compare_exchange_strong(&mut expected, py));
    assert_eq!(expected, px);
    assert!(a.compare_exchange_strong(&mut expected, py));
    assert_eq!(a.load(), py);
}

#[test]
fn every_order_is_accepted_by_every_operation() {
    let a = AtomicInt::new(0);
    for order in ALL_ORDERS {
        a.store_explicit(1, order);
        assert_eq!(a.load_explicit(order), 1);
        assert_eq!(a.exchange_explicit(2, order), 1);
        assert_eq!(a.fetch_add_explicit(1, order), 2);
        assert_eq!(a.fetch_sub_explicit(3, order), 3);
        assert_eq!(a.fetch_or_explicit(4, order), 0);
        assert_eq!(a.fetch_and_explicit(4, order), 4);
        assert_eq!(a.fetch_xor_explicit(4, order), 4);
        for failure in ALL_ORDERS {
            let mut expected = 1;
            assert!(!a.compare_exchange_strong_explicit(&mut expected, 5, order, failure));
            assert_eq!(expected, 0);
            assert!(a.compare_exchange_strong_explicit(&mut expected, 0, order, failure));
        }
        hut_atomic::thread_fence(order);
        hut_atomic::signal_fence(order);
    }
}

#[test]
fn lock_freedom() {
    assert!(AtomicBool::new(false).is_lock_free());
    assert!(AtomicUInt32::new(0).is_lock_free());
    assert!(AtomicSize::new(0).is_lock_free());
    assert!(AtomicPtr::<u8>::default().is_lock_free());
}

#[test]
fn debug_shows_the_value() {
    assert_eq!(format!("{:?}", AtomicInt::new(-3)), "-3");
    assert_eq!(format!("{:?}", AtomicBool::new(true)), "true");
}

#[test]
fn conversion_from_value() {
    let a: Atomic<u8> = 9.into();
    assert_eq!(a.into_inner(), 9);
}
