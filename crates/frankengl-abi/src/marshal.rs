//! Host ↔ native value conversion for the adapter shapes.
//!
//! An adapter converts each host argument with [`Marshal::stage`] and keeps
//! the staged value alive on its own stack frame for the duration of the
//! native call. Staged values that own memory (string copies, string
//! arrays) release it in `Drop`, so release happens exactly once on every
//! exit path, including unwinding.
//!
//! Results come back through [`Unmarshal`].

use std::ffi::{CStr, CString, c_char, c_void};
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};

use frankengl_core::ArgKind;
use frankengl_core::types::{
    BufferOffset, DebugCallback, DebugProc, GLboolean, GLubyte, SyncHandle, decode_bool,
    encode_bool,
};

/// A staged argument: owns whatever must outlive the native call and
/// exposes the raw value passed to it.
pub trait Staged {
    type Raw: Copy;

    fn raw(&self) -> Self::Raw;
}

/// A host argument type accepted by an adapter.
pub trait Marshal: Sized {
    /// Boundary category, used to derive the adapter shape.
    const KIND: ArgKind;

    type Staged: Staged;

    fn stage(self) -> Self::Staged;
}

/// A host result type produced from a native return value.
pub trait Unmarshal: Sized {
    const KIND: ArgKind;

    type Raw: Copy;

    /// # Safety
    ///
    /// `raw` must have been returned by a native function whose declared
    /// result type is `Self::Raw`; for string results it must be null or
    /// point to a NUL-terminated string that stays valid for this call.
    unsafe fn from_raw(raw: Self::Raw) -> Self;
}

// ---------------------------------------------------------------------------
// Temporary accounting
// ---------------------------------------------------------------------------

static TEMPS_ALLOCATED: AtomicU64 = AtomicU64::new(0);
static TEMPS_RELEASED: AtomicU64 = AtomicU64::new(0);

/// Process-wide count of temporary marshalling buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarshalStats {
    pub allocated: u64,
    pub released: u64,
}

impl MarshalStats {
    /// Buffers allocated but not yet released.
    #[must_use]
    pub fn live(&self) -> u64 {
        self.allocated.saturating_sub(self.released)
    }
}

/// Snapshot of the temporary buffer counters.
#[must_use]
pub fn marshal_stats() -> MarshalStats {
    let released = TEMPS_RELEASED.load(Ordering::Acquire);
    let allocated = TEMPS_ALLOCATED.load(Ordering::Acquire);
    MarshalStats {
        allocated,
        released,
    }
}

fn note_allocated() {
    TEMPS_ALLOCATED.fetch_add(1, Ordering::AcqRel);
}

fn note_released() {
    TEMPS_RELEASED.fetch_add(1, Ordering::AcqRel);
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! scalar_marshal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Staged for $ty {
                type Raw = $ty;

                #[inline(always)]
                fn raw(&self) -> $ty {
                    *self
                }
            }

            impl Marshal for $ty {
                const KIND: ArgKind = ArgKind::Scalar;
                type Staged = $ty;

                #[inline(always)]
                fn stage(self) -> $ty {
                    self
                }
            }

            impl Unmarshal for $ty {
                const KIND: ArgKind = ArgKind::Scalar;
                type Raw = $ty;

                #[inline(always)]
                unsafe fn from_raw(raw: $ty) -> $ty {
                    raw
                }
            }
        )*
    };
}

scalar_marshal!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, isize, usize);

impl Marshal for bool {
    const KIND: ArgKind = ArgKind::Boolean;
    type Staged = GLboolean;

    #[inline(always)]
    fn stage(self) -> GLboolean {
        encode_bool(self)
    }
}

impl Unmarshal for bool {
    const KIND: ArgKind = ArgKind::Boolean;
    type Raw = GLboolean;

    #[inline(always)]
    unsafe fn from_raw(raw: GLboolean) -> bool {
        decode_bool(raw)
    }
}

impl Unmarshal for () {
    const KIND: ArgKind = ArgKind::Void;
    type Raw = ();

    #[inline(always)]
    unsafe fn from_raw(_raw: ()) {}
}

// ---------------------------------------------------------------------------
// Strings in
// ---------------------------------------------------------------------------

/// NUL-terminated copy of a host string, alive until dropped.
///
/// Text after an interior NUL is not forwarded: the native side would stop
/// reading there anyway.
pub struct TempCString {
    buf: CString,
}

impl TempCString {
    #[must_use]
    pub fn new(s: &str) -> Self {
        let bytes = s.as_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let buf = CString::new(&bytes[..end]).unwrap_or_default();
        note_allocated();
        Self { buf }
    }

    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        &self.buf
    }
}

impl Drop for TempCString {
    fn drop(&mut self) {
        note_released();
    }
}

impl Staged for TempCString {
    type Raw = *const c_char;

    #[inline]
    fn raw(&self) -> *const c_char {
        self.buf.as_ptr()
    }
}

impl Marshal for &str {
    const KIND: ArgKind = ArgKind::Str;
    type Staged = TempCString;

    fn stage(self) -> TempCString {
        TempCString::new(self)
    }
}

/// Array of NUL-terminated copies plus the pointer array handed to native
/// code. Counts as one temporary for the array and one per string.
///
/// An empty list still yields a non-null, zero-length array.
pub struct TempStringArray {
    strings: Vec<TempCString>,
    pointers: Vec<*const c_char>,
}

impl TempStringArray {
    #[must_use]
    pub fn new(items: &[&str]) -> Self {
        let strings: Vec<TempCString> = items.iter().map(|s| TempCString::new(s)).collect();
        let pointers = strings.iter().map(|s| s.raw()).collect();
        note_allocated();
        Self { strings, pointers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Drop for TempStringArray {
    fn drop(&mut self) {
        note_released();
    }
}

impl Staged for TempStringArray {
    type Raw = *const *const c_char;

    #[inline]
    fn raw(&self) -> *const *const c_char {
        self.pointers.as_ptr()
    }
}

impl Marshal for &[&str] {
    const KIND: ArgKind = ArgKind::StrList;
    type Staged = TempStringArray;

    fn stage(self) -> TempStringArray {
        TempStringArray::new(self)
    }
}

// ---------------------------------------------------------------------------
// Caller-owned regions
// ---------------------------------------------------------------------------

impl<T> Staged for *const T {
    type Raw = *const T;

    #[inline(always)]
    fn raw(&self) -> *const T {
        *self
    }
}

impl<T> Staged for *mut T {
    type Raw = *mut T;

    #[inline(always)]
    fn raw(&self) -> *mut T {
        *self
    }
}

impl<T> Marshal for *const T {
    const KIND: ArgKind = ArgKind::Address;
    type Staged = *const T;

    #[inline(always)]
    fn stage(self) -> *const T {
        self
    }
}

impl<T> Marshal for *mut T {
    const KIND: ArgKind = ArgKind::Address;
    type Staged = *mut T;

    #[inline(always)]
    fn stage(self) -> *mut T {
        self
    }
}

impl<T> Unmarshal for *mut T {
    const KIND: ArgKind = ArgKind::Address;
    type Raw = *mut T;

    #[inline(always)]
    unsafe fn from_raw(raw: *mut T) -> *mut T {
        raw
    }
}

impl Marshal for &mut *mut c_void {
    const KIND: ArgKind = ArgKind::Address;
    type Staged = *mut *mut c_void;

    #[inline(always)]
    fn stage(self) -> *mut *mut c_void {
        self
    }
}

macro_rules! region_marshal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Marshal for &[$ty] {
                const KIND: ArgKind = ArgKind::Address;
                type Staged = *const $ty;

                #[inline(always)]
                fn stage(self) -> *const $ty {
                    self.as_ptr()
                }
            }

            impl Marshal for &mut [$ty] {
                const KIND: ArgKind = ArgKind::Address;
                type Staged = *mut $ty;

                #[inline(always)]
                fn stage(self) -> *mut $ty {
                    self.as_mut_ptr()
                }
            }

            impl Marshal for &mut $ty {
                const KIND: ArgKind = ArgKind::Address;
                type Staged = *mut $ty;

                #[inline(always)]
                fn stage(self) -> *mut $ty {
                    self
                }
            }

            impl Marshal for Option<&[$ty]> {
                const KIND: ArgKind = ArgKind::Address;
                type Staged = *const $ty;

                #[inline(always)]
                fn stage(self) -> *const $ty {
                    self.map_or(ptr::null(), <[$ty]>::as_ptr)
                }
            }

            impl Marshal for Option<&mut [$ty]> {
                const KIND: ArgKind = ArgKind::Address;
                type Staged = *mut $ty;

                #[inline(always)]
                fn stage(self) -> *mut $ty {
                    self.map_or(ptr::null_mut(), <[$ty]>::as_mut_ptr)
                }
            }
        )*
    };
}

region_marshal!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl Marshal for BufferOffset {
    const KIND: ArgKind = ArgKind::Address;
    type Staged = *const c_void;

    #[inline(always)]
    fn stage(self) -> *const c_void {
        ptr::without_provenance(self.bytes())
    }
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

impl Marshal for &SyncHandle {
    const KIND: ArgKind = ArgKind::Handle;
    type Staged = *const c_void;

    #[inline(always)]
    fn stage(self) -> *const c_void {
        self.as_raw()
    }
}

impl Marshal for SyncHandle {
    const KIND: ArgKind = ArgKind::Handle;
    type Staged = *const c_void;

    #[inline(always)]
    fn stage(self) -> *const c_void {
        self.into_raw()
    }
}

impl Unmarshal for SyncHandle {
    const KIND: ArgKind = ArgKind::Handle;
    type Raw = *const c_void;

    #[inline(always)]
    unsafe fn from_raw(raw: *const c_void) -> SyncHandle {
        SyncHandle::from_raw(raw)
    }
}

impl Staged for Option<DebugProc> {
    type Raw = Option<DebugProc>;

    #[inline(always)]
    fn raw(&self) -> Option<DebugProc> {
        *self
    }
}

impl Marshal for DebugCallback {
    const KIND: ArgKind = ArgKind::Handle;
    type Staged = Option<DebugProc>;

    #[inline(always)]
    fn stage(self) -> Option<DebugProc> {
        self.into_raw()
    }
}

// ---------------------------------------------------------------------------
// Strings out
// ---------------------------------------------------------------------------

/// Native-owned string result, copied into host memory. `None` when the
/// native side returned null (unknown enumerant, no current context).
impl Unmarshal for Option<String> {
    const KIND: ArgKind = ArgKind::StrOut;
    type Raw = *const GLubyte;

    unsafe fn from_raw(raw: *const GLubyte) -> Option<String> {
        if raw.is_null() {
            return None;
        }
        // SAFETY: non-null and NUL-terminated per the caller contract.
        let text = unsafe { CStr::from_ptr(raw.cast::<c_char>()) };
        Some(text.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_stages_to_wire_byte() {
        assert_eq!(true.stage(), 1);
        assert_eq!(false.stage(), 0);
        assert!(unsafe { bool::from_raw(7) });
    }

    #[test]
    fn string_copy_is_nul_terminated() {
        let staged = "uColor".stage();
        assert_eq!(staged.as_c_str().to_bytes(), b"uColor");
        let raw = staged.raw();
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_bytes_with_nul(), b"uColor\0");
    }

    #[test]
    fn interior_nul_truncates() {
        let staged = TempCString::new("ab\0cd");
        assert_eq!(staged.as_c_str().to_bytes(), b"ab");
    }

    #[test]
    fn string_array_points_at_copies() {
        let list: &[&str] = &["a", "bc"];
        let staged = list.stage();
        assert_eq!(staged.len(), 2);
        let raw = staged.raw();
        let second = unsafe { CStr::from_ptr(*raw.add(1)) };
        assert_eq!(second.to_bytes(), b"bc");
    }

    #[test]
    fn empty_string_array_is_not_null() {
        let list: &[&str] = &[];
        let staged = list.stage();
        assert!(staged.is_empty());
        assert!(!staged.raw().is_null());
    }

    #[test]
    fn optional_region_maps_none_to_null() {
        let none: Option<&[i32]> = None;
        assert!(none.stage().is_null());
        let lens = [3i32, 4];
        assert_eq!(Some(&lens[..]).stage(), lens.as_ptr());
    }

    #[test]
    fn buffer_offset_becomes_address() {
        assert_eq!(BufferOffset(24).stage() as usize, 24);
        assert!(BufferOffset(0).stage().is_null());
    }

    #[test]
    fn null_string_result_is_none() {
        assert_eq!(unsafe { Option::<String>::from_raw(ptr::null()) }, None);
        let text = b"3.30 NVIDIA\0";
        assert_eq!(
            unsafe { Option::<String>::from_raw(text.as_ptr()) }.as_deref(),
            Some("3.30 NVIDIA")
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(<&str as Marshal>::KIND, ArgKind::Str);
        assert_eq!(<&[&str] as Marshal>::KIND, ArgKind::StrList);
        assert_eq!(<&mut [u8] as Marshal>::KIND, ArgKind::Address);
        assert_eq!(<&SyncHandle as Marshal>::KIND, ArgKind::Handle);
        assert_eq!(<DebugCallback as Marshal>::KIND, ArgKind::Handle);
        assert_eq!(<u32 as Marshal>::KIND, ArgKind::Scalar);
        assert_eq!(<bool as Unmarshal>::KIND, ArgKind::Boolean);
        assert_eq!(<Option<String> as Unmarshal>::KIND, ArgKind::StrOut);
        assert_eq!(<() as Unmarshal>::KIND, ArgKind::Void);
    }
}
