//! Integration tests for the marshalling adapters against fake native
//! functions.

use std::ffi::{CStr, c_char, c_void};
use std::panic;
use std::ptr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU8, AtomicUsize, Ordering};

use frankengl_abi::marshal::{Marshal, Staged, marshal_stats};
use frankengl_abi::Shape;
use frankengl_core::types::{BufferOffset, SyncHandle};

frankengl_abi::entry_points! {
    static FAKE: FakeEntry;

    scalar fn set_flag = "fakeSetFlag"(flag: bool);
    scalar fn get_flag = "fakeGetFlag"() -> bool;
    string fn name_len = "fakeNameLen"(name: &str) -> i32;
    string fn list_len = "fakeListLen"(count: i32, items: &[&str]) -> i32;
    string fn reject_name = "fakeRejectName"(name: &str) -> i32;
    string fn reject_list = "fakeRejectList"(count: i32, items: &[&str]) -> i32;
    string fn unbound_label = "fakeUnboundLabel"(label: &str);
    string_out fn describe = "fakeDescribe"(code: u32) -> Option<String>;
    buffer fn fill = "fakeFill"(count: i32, out: &mut [u32]);
    buffer fn draw = "fakeDraw"(indices: BufferOffset) -> usize;
    handle fn fence = "fakeFence"() -> SyncHandle;
    handle fn retire = "fakeRetire"(sync: SyncHandle);
}

static FLAG: AtomicU8 = AtomicU8::new(0);
static LIST_ARRAY_NONNULL: AtomicBool = AtomicBool::new(false);
static LIST_COUNT: AtomicI32 = AtomicI32::new(-1);
static RETIRED: AtomicUsize = AtomicUsize::new(0);
static TEST_LOCK: Mutex<()> = Mutex::new(());

unsafe extern "system" fn fake_set_flag(flag: u8) {
    FLAG.store(flag, Ordering::SeqCst);
}

unsafe extern "system" fn fake_get_flag() -> u8 {
    FLAG.load(Ordering::SeqCst)
}

unsafe extern "system" fn fake_name_len(name: *const c_char) -> i32 {
    // SAFETY: the adapter passes a NUL-terminated temporary.
    unsafe { CStr::from_ptr(name) }.to_bytes().len() as i32
}

unsafe extern "system" fn fake_list_len(count: i32, items: *const *const c_char) -> i32 {
    LIST_ARRAY_NONNULL.store(!items.is_null(), Ordering::SeqCst);
    LIST_COUNT.store(count, Ordering::SeqCst);
    let mut total = 0;
    for i in 0..count as usize {
        // SAFETY: `count` entries, each a NUL-terminated temporary.
        total += unsafe { CStr::from_ptr(*items.add(i)) }.to_bytes().len() as i32;
    }
    total
}

unsafe extern "system" fn fake_reject_name(_name: *const c_char) -> i32 {
    -1
}

unsafe extern "system" fn fake_reject_list(_count: i32, _items: *const *const c_char) -> i32 {
    -1
}

unsafe extern "system" fn fake_describe(code: u32) -> *const u8 {
    match code {
        1 => b"FrankenGL fake\0".as_ptr(),
        _ => ptr::null(),
    }
}

unsafe extern "system" fn fake_fill(count: i32, out: *mut u32) {
    for i in 0..count as usize {
        // SAFETY: the caller passed a region of at least `count` elements.
        unsafe { *out.add(i) = i as u32 * 10 };
    }
}

unsafe extern "system" fn fake_draw(indices: *const c_void) -> usize {
    indices as usize
}

unsafe extern "system" fn fake_fence() -> *const c_void {
    0x5150 as *const c_void
}

unsafe extern "system" fn fake_retire(sync: *const c_void) {
    RETIRED.store(sync as usize, Ordering::SeqCst);
}

fn fake_native(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"fakeSetFlag" => fake_set_flag as *const c_void,
        b"fakeGetFlag" => fake_get_flag as *const c_void,
        b"fakeNameLen" => fake_name_len as *const c_void,
        b"fakeListLen" => fake_list_len as *const c_void,
        b"fakeRejectName" => fake_reject_name as *const c_void,
        b"fakeRejectList" => fake_reject_list as *const c_void,
        b"fakeDescribe" => fake_describe as *const c_void,
        b"fakeFill" => fake_fill as *const c_void,
        b"fakeDraw" => fake_draw as *const c_void,
        b"fakeFence" => fake_fence as *const c_void,
        b"fakeRetire" => fake_retire as *const c_void,
        _ => ptr::null(),
    }
}

fn bound() -> std::sync::MutexGuard<'static, ()> {
    let guard = TEST_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    FAKE.bind_all(&fake_native);
    guard
}

#[test]
fn declared_shapes_match_types() {
    for &entry in FakeEntry::ALL {
        assert_eq!(entry.descriptor().shape, entry.marshalled_shape(), "{entry:?}");
    }
    assert_eq!(FakeEntry::list_len.marshalled_shape(), Shape::StringIn);
    assert_eq!(FakeEntry::retire.marshalled_shape(), Shape::Handle);
}

#[test]
fn booleans_cross_as_one_byte_and_round_trip() {
    let _guard = bound();
    for value in [true, false] {
        unsafe { set_flag(value) };
        assert_eq!(FLAG.load(Ordering::SeqCst), u8::from(value));
        assert_eq!(unsafe { get_flag() }, value);
    }
}

#[test]
fn any_nonzero_native_boolean_reads_true() {
    let _guard = bound();
    FLAG.store(2, Ordering::SeqCst);
    assert!(unsafe { get_flag() });
}

#[test]
fn string_temporary_is_released_once_per_call() {
    let _guard = bound();
    let before = marshal_stats();
    assert_eq!(unsafe { name_len("uModelView") }, 10);
    let after = marshal_stats();
    assert_eq!(after.allocated - before.allocated, 1);
    assert_eq!(after.released - before.released, 1);
    assert_eq!(after.live(), before.live());
}

#[test]
fn interior_nul_truncates_string_argument() {
    let _guard = bound();
    assert_eq!(unsafe { name_len("ab\0cd") }, 2);
    assert_eq!(unsafe { name_len("") }, 0);
}

#[test]
fn string_list_releases_every_temporary() {
    let _guard = bound();
    let before = marshal_stats();
    let items = ["#version 330\n", "void main() {}\n"];
    assert_eq!(unsafe { list_len(2, &items) }, 28);
    let after = marshal_stats();
    assert_eq!(after.allocated - before.allocated, 3);
    assert_eq!(after.released - before.released, 3);
}

#[test]
fn empty_string_list_passes_non_null_array() {
    let _guard = bound();
    LIST_ARRAY_NONNULL.store(false, Ordering::SeqCst);
    assert_eq!(unsafe { list_len(0, &[]) }, 0);
    assert!(LIST_ARRAY_NONNULL.load(Ordering::SeqCst));
    assert_eq!(LIST_COUNT.load(Ordering::SeqCst), 0);
}

#[test]
fn rejected_call_releases_each_temporary_once() {
    let _guard = bound();
    let before = marshal_stats();
    assert_eq!(unsafe { reject_name("u_color") }, -1);
    assert_eq!(unsafe { reject_list(2, &["#version 330\n", "void main() {}\n"]) }, -1);
    let after = marshal_stats();
    assert_eq!(after.allocated - before.allocated, 4);
    assert_eq!(after.released - before.released, 4);
    assert_eq!(after.live(), before.live());
}

#[test]
fn failed_call_leaks_no_temporaries() {
    let _guard = bound();
    let before = marshal_stats();
    let result = panic::catch_unwind(|| unsafe { unbound_label("never sent") });
    assert!(result.is_err());
    let after = marshal_stats();
    assert_eq!(after.live(), before.live());
    assert_eq!(after.allocated, after.released + before.live());
}

#[test]
fn staged_values_release_on_drop() {
    let _guard = bound();
    let before = marshal_stats();
    {
        let list: &[&str] = &["a", "b", "c"];
        let staged = list.stage();
        assert!(!staged.raw().is_null());
        assert_eq!(marshal_stats().live(), before.live() + 4);
    }
    assert_eq!(marshal_stats().live(), before.live());
}

#[test]
fn native_string_result_is_copied_or_absent() {
    let _guard = bound();
    assert_eq!(unsafe { describe(1) }.as_deref(), Some("FrankenGL fake"));
    assert_eq!(unsafe { describe(9) }, None);
}

#[test]
fn buffer_out_writes_into_caller_region() {
    let _guard = bound();
    let mut out = [0u32; 4];
    unsafe { fill(4, &mut out) };
    assert_eq!(out, [0, 10, 20, 30]);
}

#[test]
fn buffer_offset_is_passed_as_address() {
    let _guard = bound();
    assert_eq!(unsafe { draw(BufferOffset::new(96)) }, 96);
    assert_eq!(unsafe { draw(BufferOffset::default()) }, 0);
}

#[test]
fn handles_pass_through_unchanged() {
    let _guard = bound();
    let sync = unsafe { fence() };
    assert_eq!(sync.as_raw() as usize, 0x5150);
    unsafe { retire(sync) };
    assert_eq!(RETIRED.load(Ordering::SeqCst), 0x5150);
}
