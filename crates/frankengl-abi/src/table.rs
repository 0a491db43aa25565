//! Binding table: one address slot per entry point.
//!
//! # State machine
//!
//! ```text
//! UNBOUND (generation 0) --bind_all--> BOUND(1) --bind_all--> BOUND(2) ...
//! ```
//!
//! Every bind pass overwrites every slot, so a rebind with a different
//! resolver fully replaces the previous pass. Passes are serialised by a
//! mutex; adapters read slots lock-free with acquire loads. Slots are never
//! torn down: resolved addresses stay valid for the life of the process.

use std::ffi::{CString, c_void};
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, AtomicU64, Ordering};

use frankengl_core::config::trace_level;
use frankengl_core::{BindingReport, BindingStatus, EntryPoint};
use parking_lot::Mutex;

use crate::resolver::Resolver;

/// Lifecycle state of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// No bind pass has completed; every slot is empty.
    Unbound,
    /// At least one bind pass completed; `generation` counts them.
    Bound { generation: u64 },
}

/// Outcome of one bind pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindSummary {
    pub table: &'static str,
    pub strategy: &'static str,
    pub generation: u64,
    pub bound: usize,
    pub unbound: usize,
}

impl BindSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.bound + self.unbound
    }

    #[must_use]
    pub fn all_bound(&self) -> bool {
        self.unbound == 0
    }
}

/// Fixed-size table of entry point addresses, usually declared through
/// [`entry_points!`](crate::entry_points).
pub struct BindingTable<const N: usize> {
    name: &'static str,
    descriptors: [EntryPoint; N],
    slots: [AtomicPtr<c_void>; N],
    generation: AtomicU64,
    bind_lock: Mutex<()>,
}

impl<const N: usize> BindingTable<N> {
    /// A table with every slot unresolved.
    #[must_use]
    pub const fn new(name: &'static str, descriptors: [EntryPoint; N]) -> Self {
        Self {
            name,
            descriptors,
            slots: [const { AtomicPtr::new(ptr::null_mut()) }; N],
            generation: AtomicU64::new(0),
            bind_lock: parking_lot::const_mutex(()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn descriptors(&self) -> &[EntryPoint] {
        &self.descriptors
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn state(&self) -> TableState {
        match self.generation() {
            0 => TableState::Unbound,
            generation => TableState::Bound { generation },
        }
    }

    /// Resolve every entry point through `resolver` and store the results.
    ///
    /// Missing symbols leave their slot empty; the pass itself never fails.
    /// Rebinding overwrites every slot.
    pub fn bind_all(&self, resolver: &dyn Resolver) -> BindSummary {
        let _guard = self.bind_lock.lock();
        let mut bound = 0;
        for (descriptor, slot) in self.descriptors.iter().zip(&self.slots) {
            let addr = match CString::new(descriptor.name) {
                Ok(symbol) => resolver.resolve(&symbol),
                Err(_) => ptr::null(),
            };
            if !addr.is_null() {
                bound += 1;
            }
            slot.store(addr.cast_mut(), Ordering::Release);
        }
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let summary = BindSummary {
            table: self.name,
            strategy: resolver.strategy(),
            generation,
            bound,
            unbound: N - bound,
        };
        self.trace(&summary);
        summary
    }

    fn trace(&self, summary: &BindSummary) {
        let level = trace_level();
        if !level.summary_enabled() {
            return;
        }
        eprintln!(
            "frankengl: {} pass {} via {}: {}/{} bound",
            summary.table,
            summary.generation,
            summary.strategy,
            summary.bound,
            summary.total()
        );
        if level.symbols_enabled() {
            for (descriptor, slot) in self.descriptors.iter().zip(&self.slots) {
                if slot.load(Ordering::Acquire).is_null() {
                    eprintln!("frankengl:   unresolved {}", descriptor.name);
                }
            }
        }
    }

    /// Resolved address of entry `index`, if any.
    #[inline]
    #[must_use]
    pub fn address(&self, index: usize) -> Option<NonNull<c_void>> {
        NonNull::new(self.slots[index].load(Ordering::Acquire))
    }

    #[inline]
    #[must_use]
    pub fn is_bound(&self, index: usize) -> bool {
        self.address(index).is_some()
    }

    /// Resolved address of entry `index`; panics naming the symbol when the
    /// slot is empty.
    #[inline]
    #[track_caller]
    pub fn address_or_abort(&self, index: usize) -> NonNull<c_void> {
        match self.address(index) {
            Some(addr) => addr,
            None => unbound_entry_point(self.name, self.descriptors[index].name),
        }
    }

    /// Presence of every entry point, in table order.
    #[must_use]
    pub fn report(&self) -> BindingReport {
        let entries = self
            .descriptors
            .iter()
            .zip(&self.slots)
            .map(|(descriptor, slot)| BindingStatus {
                name: descriptor.name,
                bound: !slot.load(Ordering::Acquire).is_null(),
            })
            .collect();
        BindingReport::new(entries, self.generation())
    }
}

impl<const N: usize> std::fmt::Debug for BindingTable<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingTable")
            .field("name", &self.name)
            .field("entries", &N)
            .field("state", &self.state())
            .finish()
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unbound_entry_point(table: &str, symbol: &str) -> ! {
    panic!("{symbol} called but not bound in {table}; check the binding report first")
}

#[cfg(test)]
mod tests {
    use super::*;
    use frankengl_core::Shape;
    use std::ffi::CStr;

    const ROWS: [EntryPoint; 3] = [
        EntryPoint::new("glOne", Shape::Scalar, "()"),
        EntryPoint::new("glTwo", Shape::Scalar, "()"),
        EntryPoint::new("glThree", Shape::Scalar, "()"),
    ];

    fn only_two(name: &CStr) -> *const c_void {
        if name == c"glTwo" { 0x2000 as *const c_void } else { ptr::null() }
    }

    #[test]
    fn fresh_table_is_unbound() {
        let table = BindingTable::new("t", ROWS);
        assert_eq!(table.state(), TableState::Unbound);
        let report = table.report();
        assert_eq!(report.generation(), 0);
        assert_eq!(report.bound_count(), 0);
        assert!(!table.is_bound(1));
    }

    #[test]
    fn partial_bind_counts() {
        let table = BindingTable::new("t", ROWS);
        let summary = table.bind_all(&only_two);
        assert_eq!(summary.bound, 1);
        assert_eq!(summary.unbound, 2);
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.strategy, "custom");
        assert_eq!(table.address(1).map(|p| p.as_ptr() as usize), Some(0x2000));
        assert_eq!(table.state(), TableState::Bound { generation: 1 });
    }

    #[test]
    fn rebind_clears_previous_addresses() {
        let table = BindingTable::new("t", ROWS);
        table.bind_all(&|_: &CStr| 0x1000 as *const c_void);
        assert!(table.report().all_bound());
        let summary = table.bind_all(&only_two);
        assert_eq!(summary.generation, 2);
        assert!(!table.is_bound(0));
        assert!(table.is_bound(1));
    }

    #[test]
    #[should_panic(expected = "glThree called but not bound in t")]
    fn unbound_slot_panics_with_symbol() {
        let table = BindingTable::new("t", ROWS);
        table.bind_all(&only_two);
        let _ = table.address_or_abort(2);
    }
}
