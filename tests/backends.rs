//! The same scenarios, run against each backend compiled into this build.

macro_rules! backend_tests {
    ($name:ident, $backend:ty) => {
        mod $name {
            use std::{
                sync::atomic::{AtomicUsize, Ordering},
                thread,
            };

            use hut_atomic::{Atomic, AtomicFlag, Backend, MemoryOrder::*};

            type B = $backend;

            const THREADS: usize = 8;
            const PER_THREAD: usize = 1000;

            #[test]
            fn counter_is_linearizable() {
                let n = THREADS * PER_THREAD;
                let counter = Atomic::<usize, B>::new(0);
                let seen: Vec<AtomicUsize> = (0..n).map(|_| AtomicUsize::new(0)).collect();

                thread::scope(|s| {
                    for _ in 0..THREADS {
                        s.spawn(|| {
                            for _ in 0..PER_THREAD {
                                let prev = counter.fetch_add_explicit(1, SeqCst);
                                seen[prev].fetch_add(1, Ordering::Relaxed);
                            }
                        });
                    }
                });

                assert_eq!(counter.load(), n);
                // Every pre-value in 0..n was handed out exactly once.
                assert!(seen.iter().all(|c| c.load(Ordering::Relaxed) == 1));
            }

            #[test]
            fn weak_cas_loop_counts_every_increment() {
                let counter = Atomic::<u32, B>::new(0);

                thread::scope(|s| {
                    for _ in 0..THREADS {
                        s.spawn(|| {
                            for _ in 0..PER_THREAD {
                                let mut cur = counter.load_explicit(Relaxed);
                                loop {
                                    let next = cur + 1;
                                    if counter.compare_exchange_weak_explicit(
                                        &mut cur, next, AcqRel, Relaxed,
                                    ) {
                                        break;
                                    }
                                }
                            }
                        });
                    }
                });

                assert_eq!(counter.load() as usize, THREADS * PER_THREAD);
            }

            #[test]
            fn release_acquire_message_passing() {
                for round in 0..100u64 {
                    let payload = Atomic::<u64, B>::new(0);
                    let ready = Atomic::<bool, B>::new(false);
                    let expected = round * 31 + 7;

                    thread::scope(|s| {
                        s.spawn(|| {
                            payload.store_explicit(expected, Relaxed);
                            ready.store_explicit(true, Release);
                        });
                        s.spawn(|| {
                            while !ready.load_explicit(Acquire) {
                                std::hint::spin_loop();
                            }
                            assert_eq!(payload.load_explicit(Relaxed), expected);
                        });
                    });
                }
            }

            #[test]
            fn fences_synchronize() {
                for round in 0..100u32 {
                    let payload = Atomic::<u32, B>::new(0);
                    let ready = Atomic::<bool, B>::new(false);

                    thread::scope(|s| {
                        s.spawn(|| {
                            payload.store_explicit(round + 1, Relaxed);
                            B::thread_fence(Release);
                            ready.store_explicit(true, Relaxed);
                        });
                        s.spawn(|| {
                            while !ready.load_explicit(Relaxed) {
                                std::hint::spin_loop();
                            }
                            B::thread_fence(Acquire);
                            assert_eq!(payload.load_explicit(Relaxed), round + 1);
                        });
                    });
                }
                B::signal_fence(SeqCst);
            }

            #[test]
            fn flag_as_spinlock() {
                let lock = AtomicFlag::<B>::new();
                // Deliberately updated with a non-atomic read-modify-write
                // pattern, which only adds up under mutual exclusion.
                let total = Atomic::<usize, B>::new(0);

                thread::scope(|s| {
                    for _ in 0..THREADS {
                        s.spawn(|| {
                            for _ in 0..PER_THREAD {
                                while lock.test_and_set_explicit(Acquire) {
                                    std::hint::spin_loop();
                                }
                                let v = total.load_explicit(Relaxed);
                                total.store_explicit(v + 1, Relaxed);
                                lock.clear_explicit(Release);
                            }
                        });
                    }
                });

                assert_eq!(total.load(), THREADS * PER_THREAD);
                assert!(!lock.load());
            }

            #[test]
            fn single_threaded_operations() {
                let a = Atomic::<u8, B>::new(0);
                assert_eq!(a.fetch_sub(1), 0);
                assert_eq!(a.load(), 255);
                assert_eq!(a.exchange(3), 255);
                assert_eq!(a.fetch_or_explicit(4, Relaxed), 3);
                assert_eq!(a.fetch_and_explicit(6, Release), 7);
                assert_eq!(a.fetch_xor_explicit(2, Consume), 6);
                assert_eq!(a.into_inner(), 4);

                let b = Atomic::<i64, B>::new(-1);
                let mut expected = -1;
                assert!(b.compare_exchange_strong(&mut expected, 1));
                assert!(!b.compare_exchange_strong(&mut expected, 2));
                assert_eq!(expected, 1);

                let flag = AtomicFlag::<B>::with_state(true);
                assert!(flag.test_and_set());
                flag.clear();
                assert!(!flag.test_and_set_explicit(Relaxed));
            }

            #[test]
            fn lock_free_up_to_word_size() {
                assert!(Atomic::<u8, B>::new(0).is_lock_free());
                assert!(Atomic::<usize, B>::new(0).is_lock_free());
                assert!(Atomic::<*mut u8, B>::default().is_lock_free());
                assert!(AtomicFlag::<B>::new().is_lock_free());
            }

            #[test]
            fn layout_matches_the_value() {
                use std::mem::{align_of, size_of};

                assert_eq!(size_of::<Atomic<u8, B>>(), 1);
                assert_eq!(size_of::<Atomic<u32, B>>(), 4);
                assert_eq!(size_of::<Atomic<u64, B>>(), 8);
                assert_eq!(align_of::<Atomic<u64, B>>(), 8);
                assert_eq!(size_of::<Atomic<usize, B>>(), size_of::<usize>());
                assert_eq!(size_of::<AtomicFlag<B>>(), 1);
            }
        }
    };
}

#[cfg(feature = "native")]
backend_tests!(native, hut_atomic::backend::Native);
#[cfg(feature = "builtin")]
backend_tests!(builtin, hut_atomic::backend::Builtin);
#[cfg(feature = "legacy")]
backend_tests!(legacy, hut_atomic::backend::Legacy);

#[cfg(feature = "legacy")]
mod legacy_weak_cas {
    use hut_atomic::{backend::Legacy, Atomic, MemoryOrder::*};

    #[test]
    fn weak_never_fails_when_values_match() {
        let a = Atomic::<u64, Legacy>::new(0);
        for i in 0..100_000u64 {
            let mut expected = i;
            assert!(
                a.compare_exchange_weak(&mut expected, i + 1),
                "spurious failure at {}",
                i
            );
            assert_eq!(expected, i);
        }
        assert_eq!(a.load(), 100_000);

        let b = Atomic::<u8, Legacy>::new(0);
        for i in 0..=u8::MAX {
            let mut expected = i;
            let next = i.wrapping_add(1);
            assert!(b.compare_exchange_weak_explicit(&mut expected, next, Relaxed, Relaxed));
        }
        assert_eq!(b.load(), 0);
    }

    #[test]
    fn weak_reports_mismatch_like_strong() {
        let a = Atomic::<i32, Legacy>::new(7);
        let mut weak = 3;
        let mut strong = 3;
        assert!(!a.compare_exchange_weak(&mut weak, 9));
        assert!(!a.compare_exchange_strong(&mut strong, 9));
        assert_eq!((weak, strong), (7, 7));
        assert_eq!(a.load(), 7);
    }
}
