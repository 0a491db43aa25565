//! Integration tests for the process-wide GL table.

use std::ffi::{CStr, c_void};
use std::panic;
use std::ptr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use frankengl_abi::gl::{self, GL, GlEntry};
use frankengl_core::consts::{COLOR_BUFFER_BIT, DEPTH_BUFFER_BIT, VERSION};
use frankengl_core::types::GLenum;

static CLEAR_MASK: AtomicU32 = AtomicU32::new(0);
static CLEAR_CALLS: AtomicUsize = AtomicUsize::new(0);
static TEST_LOCK: Mutex<()> = Mutex::new(());

unsafe extern "system" fn fake_clear(mask: u32) {
    CLEAR_CALLS.fetch_add(1, Ordering::SeqCst);
    CLEAR_MASK.store(mask, Ordering::SeqCst);
}

unsafe extern "system" fn fake_get_string(name: GLenum) -> *const u8 {
    if name == VERSION {
        b"3.3.0 FrankenGL\0".as_ptr()
    } else {
        ptr::null()
    }
}

unsafe extern "system" fn fake_stub() {}

fn clear_and_version(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"glClear" => fake_clear as *const c_void,
        b"glGetString" => fake_get_string as *const c_void,
        _ => ptr::null(),
    }
}

fn lock() -> std::sync::MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn every_entry_point_binds_when_all_symbols_exist() {
    let _guard = lock();
    // Presence only: no adapter is called through the stub.
    let summary = gl::bind_all_with(&|_: &CStr| fake_stub as *const c_void);
    assert!(summary.all_bound());
    assert_eq!(summary.total(), GlEntry::COUNT);

    let report = gl::binding_report();
    assert_eq!(report.len(), GlEntry::COUNT);
    assert!(report.all_bound());
    assert_eq!(report.render_columns().lines().count(), GlEntry::COUNT.div_ceil(2));
}

#[test]
fn report_lists_entry_points_in_table_order() {
    let _guard = lock();
    gl::bind_all_with(&clear_and_version);
    let report = gl::binding_report();
    let names: Vec<&str> = report.entries().iter().map(|e| e.name).collect();
    let expected: Vec<&str> = GlEntry::ALL.iter().map(|e| e.symbol()).collect();
    assert_eq!(names, expected);
    assert_eq!(report.status_of("glClear"), Some(true));
    assert_eq!(report.status_of("glFlush"), Some(false));
    assert_eq!(report.bound_count(), 2);
}

#[test]
fn adapters_reach_the_bound_functions() {
    let _guard = lock();
    gl::bind_all_with(&clear_and_version);

    let before = CLEAR_CALLS.load(Ordering::SeqCst);
    unsafe { gl::clear(COLOR_BUFFER_BIT | DEPTH_BUFFER_BIT) };
    assert_eq!(CLEAR_CALLS.load(Ordering::SeqCst), before + 1);
    assert_eq!(CLEAR_MASK.load(Ordering::SeqCst), 0x4100);

    assert_eq!(
        unsafe { gl::get_string(VERSION) }.as_deref(),
        Some("3.3.0 FrankenGL")
    );
    assert_eq!(unsafe { gl::get_string(0) }, None);
}

#[test]
fn unbound_gl_entry_point_panics_with_symbol() {
    let _guard = lock();
    gl::bind_all_with(&clear_and_version);
    let err = panic::catch_unwind(|| unsafe { gl::flush() }).expect_err("glFlush is unbound");
    let message = err.downcast_ref::<String>().cloned().unwrap_or_default();
    assert!(message.contains("glFlush"), "{message}");
}

#[test]
fn platform_bind_never_fails_outright() {
    let _guard = lock();
    let summary = gl::bind_all();
    assert_eq!(summary.total(), GlEntry::COUNT);
    assert_eq!(summary.table, "GL");
    assert_eq!(GL.report().bound_count(), summary.bound);
}
