use core::mem::ManuallyDrop;

/// Reinterprets an owned value as another type of identical layout, in `const`.
///
/// Used to move a freshly built `Slot<T>` into whichever backend cell is in use,
/// and to move an `Atomic<T, B>` back out into a `Slot<T>`. Neither side has drop
/// glue, so nothing is skipped.
///
/// # Safety
///
/// `O` and `I` must have the same size, and the bytes of `outer` must be a valid
/// `I`. For backend cells this holds because every `Backend::Cell<T>` is checked
/// at compile time to be laid out exactly like `Slot<T>`, and both store the `T`
/// in the same bytes.
pub const unsafe fn reinterpret<O, I>(outer: O) -> I {
    union Overlay<Src, Dst> {
        from: ManuallyDrop<Src>,
        to: ManuallyDrop<Dst>,
    }
    let overlay = Overlay {
        from: ManuallyDrop::new(outer),
    };
    ManuallyDrop::into_inner(overlay.to)
}
