use std::any::TypeId;

use hut_atomic::backend::Selected;

#[cfg(feature = "native")]
#[test]
fn native_wins_when_enabled() {
    assert_eq!(TypeId::of::<Selected>(), TypeId::of::<hut_atomic::backend::Native>());
}

#[cfg(all(not(feature = "native"), feature = "builtin"))]
#[test]
fn builtin_wins_without_native() {
    assert_eq!(TypeId::of::<Selected>(), TypeId::of::<hut_atomic::backend::Builtin>());
}

#[cfg(all(not(feature = "native"), not(feature = "builtin"), feature = "legacy"))]
#[test]
fn legacy_is_the_last_resort() {
    assert_eq!(TypeId::of::<Selected>(), TypeId::of::<hut_atomic::backend::Legacy>());
}

// The unnamed backend behaves like the one picked above.
#[test]
fn default_parameter_is_the_selected_backend() {
    assert_eq!(
        TypeId::of::<hut_atomic::Atomic<u32>>(),
        TypeId::of::<hut_atomic::Atomic<u32, Selected>>()
    );
    assert_eq!(
        TypeId::of::<hut_atomic::AtomicFlag>(),
        TypeId::of::<hut_atomic::AtomicFlag<Selected>>()
    );
}
