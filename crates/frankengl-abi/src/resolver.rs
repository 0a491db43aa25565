//! Symbol resolution strategies.
//!
//! A [`Resolver`] maps an entry point name to an address, or to null when the
//! native library does not expose it. Three strategies cover the supported
//! platforms:
//!
//! - [`GlobalScope`]: look the name up among symbols already loaded into the
//!   process (macOS, where the OpenGL framework is linked in).
//! - [`SharedLibrary`]: open a well-known module once and look names up in it
//!   (Linux and other Unix).
//! - [`ContextFirst`]: ask the context's own loader function first, then fall
//!   back to the module's exports (Windows, where the module only exports the
//!   GL 1.1 entry points).
//!
//! The strategy is fixed per build target by [`platform_resolver`].

use std::ffi::{CStr, c_char, c_void};
use std::sync::OnceLock;

use crate::library::LazyLibrary;

/// Name to address lookup used by a bind pass.
pub trait Resolver {
    /// Address of `symbol`, or null if it cannot be found.
    fn resolve(&self, symbol: &CStr) -> *const c_void;

    /// Short strategy name for diagnostics.
    fn strategy(&self) -> &'static str {
        "custom"
    }
}

impl<F> Resolver for F
where
    F: Fn(&CStr) -> *const c_void,
{
    fn resolve(&self, symbol: &CStr) -> *const c_void {
        self(symbol)
    }
}

/// Context-specific loader signature (`wglGetProcAddress`, `glXGetProcAddressARB`).
pub type ContextProc = unsafe extern "system" fn(name: *const c_char) -> *const c_void;

// ---------------------------------------------------------------------------
// Global scope
// ---------------------------------------------------------------------------

/// Look names up in every module already loaded into the process.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalScope;

#[cfg(unix)]
impl Resolver for GlobalScope {
    fn resolve(&self, symbol: &CStr) -> *const c_void {
        // SAFETY: RTLD_DEFAULT is a valid pseudo-handle and `symbol` is
        // NUL-terminated.
        unsafe { libc::dlsym(libc::RTLD_DEFAULT, symbol.as_ptr()) }.cast_const()
    }

    fn strategy(&self) -> &'static str {
        "global-scope"
    }
}

// ---------------------------------------------------------------------------
// Shared library
// ---------------------------------------------------------------------------

/// Look names up in one module, opened on first use.
#[derive(Debug, Clone, Copy)]
pub struct SharedLibrary {
    library: &'static LazyLibrary,
}

impl SharedLibrary {
    #[must_use]
    pub const fn new(library: &'static LazyLibrary) -> Self {
        Self { library }
    }

    #[must_use]
    pub fn library(&self) -> &'static LazyLibrary {
        self.library
    }
}

impl Resolver for SharedLibrary {
    fn resolve(&self, symbol: &CStr) -> *const c_void {
        self.library.symbol(symbol)
    }

    fn strategy(&self) -> &'static str {
        "shared-library"
    }
}

// ---------------------------------------------------------------------------
// Context first
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum LoaderSource {
    Exported(&'static CStr),
    Direct(ContextProc),
}

/// Ask the context loader first, then the module's exports.
///
/// Loader results of 0, 1, 2, 3 and -1 are failure sentinels on some
/// drivers and count as "not found".
#[derive(Debug)]
pub struct ContextFirst {
    library: &'static LazyLibrary,
    source: LoaderSource,
    loader: OnceLock<Option<ContextProc>>,
}

impl ContextFirst {
    /// Use the loader exported by `library` under `loader_symbol`.
    ///
    /// # Safety
    ///
    /// The export named `loader_symbol`, if present, must have the
    /// [`ContextProc`] signature.
    #[must_use]
    pub const unsafe fn new(library: &'static LazyLibrary, loader_symbol: &'static CStr) -> Self {
        Self {
            library,
            source: LoaderSource::Exported(loader_symbol),
            loader: OnceLock::new(),
        }
    }

    /// Use `loader` directly.
    ///
    /// # Safety
    ///
    /// `loader` must be callable with any NUL-terminated name from any thread
    /// that runs a bind pass.
    #[must_use]
    pub const unsafe fn with_loader(library: &'static LazyLibrary, loader: ContextProc) -> Self {
        Self {
            library,
            source: LoaderSource::Direct(loader),
            loader: OnceLock::new(),
        }
    }

    fn loader(&self) -> Option<ContextProc> {
        *self.loader.get_or_init(|| match self.source {
            LoaderSource::Direct(loader) => Some(loader),
            LoaderSource::Exported(name) => {
                let addr = self.library.symbol(name);
                if addr.is_null() {
                    None
                } else {
                    // SAFETY: non-null export whose signature the constructor's
                    // caller vouched for.
                    Some(unsafe { std::mem::transmute::<*const c_void, ContextProc>(addr) })
                }
            }
        })
    }
}

/// Whether a context loader result is a real address.
#[must_use]
pub fn is_usable_address(addr: *const c_void) -> bool {
    !matches!(addr as isize, -1..=3)
}

impl Resolver for ContextFirst {
    fn resolve(&self, symbol: &CStr) -> *const c_void {
        if let Some(loader) = self.loader() {
            // SAFETY: `symbol` is NUL-terminated; loader validity is the
            // constructor's contract.
            let addr = unsafe { loader(symbol.as_ptr()) };
            if is_usable_address(addr) {
                return addr;
            }
        }
        self.library.symbol(symbol)
    }

    fn strategy(&self) -> &'static str {
        "context-first"
    }
}

// ---------------------------------------------------------------------------
// Platform default
// ---------------------------------------------------------------------------

/// Module holding the system OpenGL implementation on this target.
#[cfg(windows)]
pub const SYSTEM_GL_MODULE: &CStr = c"opengl32.dll";
#[cfg(target_os = "macos")]
pub const SYSTEM_GL_MODULE: &CStr = c"/System/Library/Frameworks/OpenGL.framework/OpenGL";
#[cfg(all(unix, not(target_os = "macos")))]
pub const SYSTEM_GL_MODULE: &CStr = c"libGL.so.1";

/// The system OpenGL module, opened at most once per process.
// SAFETY: the platform's own OpenGL module.
pub static SYSTEM_GL: LazyLibrary = unsafe { LazyLibrary::new(SYSTEM_GL_MODULE) };

/// The build target's resolution strategy.
#[cfg(target_os = "macos")]
#[must_use]
pub fn platform_resolver() -> &'static (dyn Resolver + Sync) {
    static RESOLVER: GlobalScope = GlobalScope;
    &RESOLVER
}

/// The build target's resolution strategy.
#[cfg(windows)]
#[must_use]
pub fn platform_resolver() -> &'static (dyn Resolver + Sync) {
    // SAFETY: opengl32.dll exports wglGetProcAddress with this signature.
    static RESOLVER: ContextFirst = unsafe { ContextFirst::new(&SYSTEM_GL, c"wglGetProcAddress") };
    &RESOLVER
}

/// The build target's resolution strategy.
#[cfg(all(unix, not(target_os = "macos")))]
#[must_use]
pub fn platform_resolver() -> &'static (dyn Resolver + Sync) {
    static RESOLVER: SharedLibrary = SharedLibrary::new(&SYSTEM_GL);
    &RESOLVER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_addresses_are_rejected() {
        for raw in [0isize, 1, 2, 3, -1] {
            assert!(!is_usable_address(raw as *const c_void), "{raw}");
        }
        assert!(is_usable_address(0x1000 as *const c_void));
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |name: &CStr| {
            if name == c"glClear" {
                0x10 as *const c_void
            } else {
                std::ptr::null()
            }
        };
        assert_eq!(resolver.resolve(c"glClear") as usize, 0x10);
        assert!(resolver.resolve(c"glFlush").is_null());
        assert_eq!(resolver.strategy(), "custom");
    }

    #[test]
    fn platform_strategy_matches_target() {
        let expected = if cfg!(target_os = "macos") {
            "global-scope"
        } else if cfg!(windows) {
            "context-first"
        } else {
            "shared-library"
        };
        assert_eq!(platform_resolver().strategy(), expected);
    }
}
