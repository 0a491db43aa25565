#![no_main]
use frankengl_abi::gl::GlEntry;
use frankengl_core::{BindingReport, BindingStatus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // One presence bit per entry point, cycling through the input.
    if data.is_empty() {
        return;
    }
    let bits = data.iter().flat_map(|byte| (0..8).map(move |i| (byte >> i) & 1 == 1));
    let entries: Vec<BindingStatus> = GlEntry::ALL
        .iter()
        .zip(bits.cycle())
        .map(|(entry, bound)| BindingStatus {
            name: entry.symbol(),
            bound,
        })
        .collect();
    let report = BindingReport::new(entries, u64::from(data[0]));

    assert_eq!(report.bound_count() + report.unbound_count(), report.len());
    assert_eq!(report.missing().count(), report.unbound_count());

    let rendered = report.render_columns();
    assert_eq!(rendered.lines().count(), report.len().div_ceil(2));
    let markers = rendered.matches("[+]").count();
    assert_eq!(markers, report.bound_count());
});
