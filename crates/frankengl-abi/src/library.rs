//! Native module handles.
//!
//! A [`NativeLibrary`] is an open dynamic module; it is never closed, since
//! resolved entry points must stay callable for the life of the process.
//! [`LazyLibrary`] opens its module on first use and memoizes the outcome,
//! success or failure, so each module is opened at most once per process.

use std::ffi::{CStr, c_void};
use std::ptr::NonNull;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Errors opening a native module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("cannot open native library {path}: {reason}")]
    Open { path: String, reason: String },
}

/// An open dynamic module.
#[derive(Debug)]
pub struct NativeLibrary {
    handle: NonNull<c_void>,
}

// SAFETY: module handles are process-global; the loader serialises its own
// bookkeeping and symbol lookup takes no lock on our side.
unsafe impl Send for NativeLibrary {}
// SAFETY: see `Send`.
unsafe impl Sync for NativeLibrary {}

#[cfg(unix)]
impl NativeLibrary {
    /// Open `path` with lazy symbol binding.
    ///
    /// # Safety
    ///
    /// Opening a module runs its initialisers. `path` must name a library
    /// that is sound to initialise in this process.
    pub unsafe fn open(path: &CStr) -> Result<Self, LoadError> {
        // SAFETY: `path` is NUL-terminated; initialiser soundness is the
        // caller's obligation.
        let handle = unsafe { libc::dlopen(path.as_ptr(), libc::RTLD_LAZY) };
        NonNull::new(handle)
            .map(|handle| Self { handle })
            .ok_or_else(|| LoadError::Open {
                path: path.to_string_lossy().into_owned(),
                reason: last_loader_error(),
            })
    }

    /// Address of `name` in this module, or null.
    #[must_use]
    pub fn symbol(&self, name: &CStr) -> *const c_void {
        // SAFETY: the handle came from a successful dlopen and is never closed.
        unsafe { libc::dlsym(self.handle.as_ptr(), name.as_ptr()) }.cast_const()
    }
}

#[cfg(unix)]
fn last_loader_error() -> String {
    // SAFETY: dlerror returns null or a thread-local NUL-terminated message.
    let msg = unsafe { libc::dlerror() };
    if msg.is_null() {
        return String::from("unknown dynamic loader error");
    }
    // SAFETY: non-null, NUL-terminated, valid until the next dl* call here.
    unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
}

#[cfg(windows)]
mod win {
    use std::ffi::{c_char, c_void};

    #[link(name = "kernel32")]
    unsafe extern "system" {
        pub fn LoadLibraryA(name: *const c_char) -> *mut c_void;
        pub fn GetProcAddress(module: *mut c_void, name: *const c_char) -> *const c_void;
        pub fn GetLastError() -> u32;
    }
}

#[cfg(windows)]
impl NativeLibrary {
    /// Load `path` with the system search order.
    ///
    /// # Safety
    ///
    /// Loading a module runs its `DllMain`. `path` must name a library that
    /// is sound to initialise in this process.
    pub unsafe fn open(path: &CStr) -> Result<Self, LoadError> {
        // SAFETY: `path` is NUL-terminated; initialiser soundness is the
        // caller's obligation.
        let handle = unsafe { win::LoadLibraryA(path.as_ptr()) };
        NonNull::new(handle)
            .map(|handle| Self { handle })
            .ok_or_else(|| LoadError::Open {
                path: path.to_string_lossy().into_owned(),
                // SAFETY: reads the calling thread's last-error value.
                reason: format!("error code {}", unsafe { win::GetLastError() }),
            })
    }

    /// Address of `name` in this module, or null.
    #[must_use]
    pub fn symbol(&self, name: &CStr) -> *const c_void {
        // SAFETY: the handle came from a successful LoadLibraryA and is never freed.
        unsafe { win::GetProcAddress(self.handle.as_ptr(), name.as_ptr()) }
    }
}

/// A native module opened on first use.
pub struct LazyLibrary {
    path: &'static CStr,
    state: OnceLock<Result<NativeLibrary, LoadError>>,
    open_attempts: AtomicUsize,
}

impl LazyLibrary {
    /// # Safety
    ///
    /// The module is opened by the first lookup; see [`NativeLibrary::open`].
    #[must_use]
    pub const unsafe fn new(path: &'static CStr) -> Self {
        Self {
            path,
            state: OnceLock::new(),
            open_attempts: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn path(&self) -> &'static CStr {
        self.path
    }

    /// The opened module, opening it on the first call.
    pub fn library(&self) -> Result<&NativeLibrary, LoadError> {
        self.state
            .get_or_init(|| {
                self.open_attempts.fetch_add(1, Ordering::Relaxed);
                // SAFETY: the constructor's caller vouched for this path.
                unsafe { NativeLibrary::open(self.path) }
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Address of `name`, or null if the module or the symbol is missing.
    #[must_use]
    pub fn symbol(&self, name: &CStr) -> *const c_void {
        match self.library() {
            Ok(library) => library.symbol(name),
            Err(_) => std::ptr::null(),
        }
    }

    /// Whether the open has been attempted yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Number of times the module open was attempted (0 or 1).
    #[must_use]
    pub fn open_attempts(&self) -> usize {
        self.open_attempts.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for LazyLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyLibrary")
            .field("path", &self.path)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
