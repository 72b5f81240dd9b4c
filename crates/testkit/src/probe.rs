//! Compile-time trait probe usable in ordinary assertions.

/// Evaluates to `true` when the concrete type implements the trait.
///
/// Inherent associated items win over trait items during path resolution,
/// but only when the inherent impl's bounds hold. The probe relies on that:
/// the inherent `IMPLEMENTS` exists only for types meeting the bound, and the
/// blanket trait supplies `false` for everything else. Only works on concrete
/// types.
///
/// ```
/// use expected_testkit::implements;
///
/// assert!(implements!(u8: Copy));
/// assert!(!implements!(Vec<u8>: Copy));
/// ```
#[macro_export]
macro_rules! implements {
    ($ty:ty : $bound:path) => {{
        #[allow(dead_code, reason = "only one of the two constants is read per probe")]
        trait DoesNotImplement {
            const IMPLEMENTS: bool = false;
        }
        impl<T: ?Sized> DoesNotImplement for T {}

        #[allow(dead_code, reason = "marker wrapper is never constructed")]
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code, reason = "only one of the two constants is read per probe")]
        impl<T: ?Sized + $bound> Probe<T> {
            const IMPLEMENTS: bool = true;
        }

        <Probe<$ty>>::IMPLEMENTS
    }};
}
