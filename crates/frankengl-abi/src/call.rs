//! Calling through a resolved address.
//!
//! The argument list of an entry point is staged into a tuple of raw values.
//! [`NativeArgs`] reinterprets the slot address as a `system`-ABI function
//! taking exactly those values and calls it. Implemented for tuples of up to
//! sixteen elements, which covers the widest GL entry point.

use std::ffi::c_void;
use std::ptr::NonNull;

/// A tuple of native argument values that can be passed to a foreign function.
pub trait NativeArgs: Sized {
    /// Call the function at `addr` with these arguments.
    ///
    /// # Safety
    ///
    /// `addr` must be the address of an `extern "system"` function whose
    /// parameter list is exactly the tuple's element types, in order, and
    /// whose result type is `R`. Any preconditions of that function (current
    /// context, valid pointers) must hold.
    unsafe fn invoke<R>(self, addr: NonNull<c_void>) -> R;
}

macro_rules! impl_native_args {
    ($( $arg:ident : $ty:ident ),*) => {
        impl<$($ty: Copy),*> NativeArgs for ($($ty,)*) {
            #[inline(always)]
            unsafe fn invoke<R>(self, addr: NonNull<c_void>) -> R {
                let ($($arg,)*) = self;
                // SAFETY: a function pointer has the width of a data pointer on
                // every supported target; the caller vouches for the signature.
                let func: unsafe extern "system" fn($($ty),*) -> R =
                    unsafe { std::mem::transmute_copy(&addr) };
                // SAFETY: forwarded from the caller.
                unsafe { func($($arg),*) }
            }
        }
    };
}

impl_native_args!();
impl_native_args!(a: A);
impl_native_args!(a: A, b: B);
impl_native_args!(a: A, b: B, c: C);
impl_native_args!(a: A, b: B, c: C, d: D);
impl_native_args!(a: A, b: B, c: C, d: D, e: E);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L);
impl_native_args!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M);
impl_native_args!(
    a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M, n: N
);
impl_native_args!(
    a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M, n: N, o: O
);
impl_native_args!(
    a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L, m: M, n: N, o: O,
    p: P
);
