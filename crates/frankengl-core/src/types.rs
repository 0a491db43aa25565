//! OpenGL scalar types, boolean wire encoding and opaque handles.
//!
//! Widths follow `glcorearb.h`: pointer-sized integers (`GLintptr`,
//! `GLsizeiptr`) are `isize`, never a fixed 64-bit type, so the layout holds
//! on 32-bit targets as well.

use std::ffi::{c_char, c_void};
use std::fmt;

pub type GLenum = u32;
pub type GLbitfield = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLboolean = u8;
pub type GLbyte = i8;
pub type GLshort = i16;
pub type GLubyte = u8;
pub type GLushort = u16;
pub type GLfloat = f32;
pub type GLdouble = f64;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLchar = c_char;

/// Wire value of a true `GLboolean`.
pub const GL_TRUE: GLboolean = 1;
/// Wire value of a false `GLboolean`.
pub const GL_FALSE: GLboolean = 0;

/// Encode a host boolean as the one-byte GL enumerant.
#[inline]
#[must_use]
pub const fn encode_bool(value: bool) -> GLboolean {
    if value { GL_TRUE } else { GL_FALSE }
}

/// Decode a one-byte GL enumerant into a host boolean.
///
/// Any non-zero byte is true; drivers are only required to return
/// `GL_TRUE`, but the wire type admits other values.
#[inline]
#[must_use]
pub const fn decode_bool(raw: GLboolean) -> bool {
    raw != GL_FALSE
}

// ---------------------------------------------------------------------------
// Opaque handles
// ---------------------------------------------------------------------------

/// Fence sync object (`GLsync`).
///
/// The referent belongs to the native library. The handle is deliberately
/// neither `Copy` nor comparable: waits borrow it, `glDeleteSync` consumes it.
#[repr(transparent)]
pub struct SyncHandle(*const c_void);

impl SyncHandle {
    /// Wrap a raw `GLsync` value returned by the native library.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: *const c_void) -> Self {
        Self(raw)
    }

    /// Raw value for forwarding to the native library.
    #[inline]
    #[must_use]
    pub const fn as_raw(&self) -> *const c_void {
        self.0
    }

    /// Give up the handle, returning the raw value.
    #[inline]
    #[must_use]
    pub const fn into_raw(self) -> *const c_void {
        self.0
    }

    /// `glFenceSync` reports failure with a zero handle.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Debug for SyncHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyncHandle({:p})", self.0)
    }
}

/// Native debug-output callback signature (`GLDEBUGPROC`).
pub type DebugProc = extern "system" fn(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void,
);

/// Callback reference handed to `glDebugMessageCallback`.
///
/// Bit-compatible with a nullable function pointer; `none()` clears the
/// callback on the native side.
#[repr(transparent)]
pub struct DebugCallback(Option<DebugProc>);

impl DebugCallback {
    #[inline]
    #[must_use]
    pub const fn new(callback: DebugProc) -> Self {
        Self(Some(callback))
    }

    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    #[inline]
    #[must_use]
    pub const fn into_raw(self) -> Option<DebugProc> {
        self.0
    }
}

impl fmt::Debug for DebugCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(cb) => write!(f, "DebugCallback({:p})", cb as *const ()),
            None => f.write_str("DebugCallback(none)"),
        }
    }
}

/// Byte offset into the currently bound buffer object.
///
/// Draw and attribute-pointer calls declare a pointer parameter that, with a
/// buffer bound, is read as an offset. This newtype carries the offset and
/// is marshalled as a pointer-width address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BufferOffset(pub usize);

impl BufferOffset {
    #[inline]
    #[must_use]
    pub const fn new(bytes: usize) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.0
    }
}
