#![no_main]
use frankengl_core::shader::{uniform_label, written_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let written = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let buf = &data[4..];

    let name = written_name(buf, written);
    assert!(!name.contains('\0'));
    if written <= 0 {
        assert!(name.is_empty());
    }

    let label = uniform_label(&name);
    assert!(name.starts_with(label));
    assert!(!label.contains('['));
});
