#![no_main]
use frankengl_abi::marshal::{Marshal, Staged, marshal_stats};
use libfuzzer_sys::fuzz_target;
use std::ffi::CStr;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 (e.g. 0xFF) separates list items; NUL bytes stay inside them.
    let text = String::from_utf8_lossy(data);
    let items: Vec<&str> = text.split('\u{FFFD}').collect();
    let before = marshal_stats();

    {
        let list: &[&str] = &items;
        let staged = list.stage();
        assert!(!staged.raw().is_null());
        assert_eq!(staged.len(), items.len());

        for (i, item) in items.iter().enumerate() {
            let expected = item.split('\0').next().unwrap_or_default();
            // SAFETY: `staged` owns `len()` NUL-terminated strings.
            let forwarded = unsafe { CStr::from_ptr(*staged.raw().add(i)) };
            assert_eq!(forwarded.to_bytes(), expected.as_bytes());
        }

        let single = items[0].stage();
        assert!(!single.raw().is_null());
    }

    let after = marshal_stats();
    assert_eq!(after.live(), before.live());
    assert_eq!(after.allocated - before.allocated, items.len() as u64 + 2);
});
