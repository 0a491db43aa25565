//! Integration tests for bind passes, presence reporting and unbound calls.

use std::ffi::{CStr, c_void};
use std::panic;
use std::ptr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use frankengl_abi::{Shape, TableState};

frankengl_abi::entry_points! {
    static DEMO: DemoEntry;

    scalar fn alpha = "alpha"(value: i32) -> i32;
    scalar fn beta = "beta"();
}

frankengl_abi::entry_points! {
    static NEVER_BOUND: NeverBoundEntry;

    scalar fn gamma = "gamma"(value: u32);
}

static ALPHA_CALLS: AtomicUsize = AtomicUsize::new(0);
static ALPHA_LAST: AtomicI32 = AtomicI32::new(0);
static BETA_CALLS: AtomicUsize = AtomicUsize::new(0);
static TEST_LOCK: Mutex<()> = Mutex::new(());

unsafe extern "system" fn fake_alpha(value: i32) -> i32 {
    ALPHA_CALLS.fetch_add(1, Ordering::SeqCst);
    ALPHA_LAST.store(value, Ordering::SeqCst);
    value * 6
}

unsafe extern "system" fn fake_beta() {
    BETA_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn alpha_only(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"alpha" => fake_alpha as *const c_void,
        _ => ptr::null(),
    }
}

fn everything(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"alpha" => fake_alpha as *const c_void,
        b"beta" => fake_beta as *const c_void,
        _ => ptr::null(),
    }
}

fn lock() -> std::sync::MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn descriptors_follow_declaration_order() {
    assert_eq!(DemoEntry::COUNT, 2);
    assert_eq!(DemoEntry::alpha.symbol(), "alpha");
    assert_eq!(DemoEntry::beta.symbol(), "beta");
    assert_eq!(DemoEntry::alpha.descriptor().shape, Shape::Scalar);
    assert_eq!(DemoEntry::alpha.marshalled_shape(), Shape::Scalar);
    assert_eq!(DEMO.name(), "DEMO");
}

#[test]
fn report_before_any_bind_is_all_absent() {
    let report = NEVER_BOUND.report();
    assert_eq!(report.pairs(), vec![("gamma", false)]);
    assert_eq!(report.generation(), 0);
    assert_eq!(NEVER_BOUND.state(), TableState::Unbound);
    assert!(!NeverBoundEntry::gamma.is_bound());
    assert!(panic::catch_unwind(|| unsafe { gamma(1) }).is_err());
}

#[test]
fn missing_symbol_leaves_slot_unbound_and_others_callable() {
    let _guard = lock();
    let summary = DEMO.bind_all(&alpha_only);
    assert_eq!((summary.bound, summary.unbound), (1, 1));

    let report = DEMO.report();
    assert_eq!(report.pairs(), vec![("alpha", true), ("beta", false)]);

    let before = ALPHA_CALLS.load(Ordering::SeqCst);
    let out = unsafe { alpha(7) };
    assert_eq!(out, 42);
    assert_eq!(ALPHA_CALLS.load(Ordering::SeqCst), before + 1);
    assert_eq!(ALPHA_LAST.load(Ordering::SeqCst), 7);
}

#[test]
fn calling_unbound_entry_point_panics_with_its_name() {
    let _guard = lock();
    DEMO.bind_all(&alpha_only);
    let beta_before = BETA_CALLS.load(Ordering::SeqCst);

    let result = panic::catch_unwind(|| unsafe { beta() });
    let payload = result.expect_err("unbound call must not return");
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert!(message.contains("beta"), "{message}");
    assert_eq!(BETA_CALLS.load(Ordering::SeqCst), beta_before);
}

#[test]
fn binding_twice_yields_identical_presence() {
    let _guard = lock();
    DEMO.bind_all(&alpha_only);
    let first = DEMO.report();
    let summary = DEMO.bind_all(&alpha_only);
    let second = DEMO.report();
    assert!(first.same_presence(&second));
    assert_eq!(second.generation(), first.generation() + 1);
    assert_eq!(summary.generation, second.generation());
}

#[test]
fn full_bind_reports_every_entry_present() {
    let _guard = lock();
    let summary = DEMO.bind_all(&everything);
    assert!(summary.all_bound());
    assert!(DEMO.report().all_bound());

    let before = BETA_CALLS.load(Ordering::SeqCst);
    unsafe { beta() };
    assert_eq!(BETA_CALLS.load(Ordering::SeqCst), before + 1);
}

#[test]
fn rebind_with_narrower_resolver_replaces_previous_pass() {
    let _guard = lock();
    DEMO.bind_all(&everything);
    assert!(DemoEntry::beta.is_bound());
    DEMO.bind_all(&alpha_only);
    assert!(!DemoEntry::beta.is_bound());
    assert!(DemoEntry::alpha.is_bound());
}

#[test]
fn bind_from_several_threads_converges() {
    let _guard = lock();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| DEMO.bind_all(&everything));
        }
    });
    assert!(DEMO.report().all_bound());
    assert!(matches!(DEMO.state(), TableState::Bound { .. }));
}
