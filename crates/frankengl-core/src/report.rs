//! Binding presence report.
//!
//! Built by the ABI crate from slot presence alone; no native call is made
//! to produce it. Intended for startup diagnostics, not control flow.

use std::fmt::Write as _;

/// Width of one rendered column, in characters.
pub const COLUMN_WIDTH: usize = 35;

/// Presence of a single entry point after a bind pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingStatus {
    pub name: &'static str,
    pub bound: bool,
}

impl BindingStatus {
    /// Single-line marker form: `   [+] glClear` or `   [ ] glClear`.
    #[must_use]
    pub fn marker_line(&self) -> String {
        let mark = if self.bound { '+' } else { ' ' };
        format!("   [{mark}] {}", self.name)
    }
}

/// Ordered presence report for a whole binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingReport {
    entries: Vec<BindingStatus>,
    generation: u64,
}

impl BindingReport {
    /// `generation` is the bind pass the report was taken after (0: never bound).
    #[must_use]
    pub fn new(entries: Vec<BindingStatus>, generation: u64) -> Self {
        Self {
            entries,
            generation,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[BindingStatus] {
        &self.entries
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.entries.iter().filter(|e| e.bound).count()
    }

    #[must_use]
    pub fn unbound_count(&self) -> usize {
        self.len() - self.bound_count()
    }

    #[must_use]
    pub fn all_bound(&self) -> bool {
        self.entries.iter().all(|e| e.bound)
    }

    /// Names of unresolved entry points, in table order.
    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter(|e| !e.bound).map(|e| e.name)
    }

    /// Presence of a named entry point, or `None` if the table lacks it.
    #[must_use]
    pub fn status_of(&self, name: &str) -> Option<bool> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.bound)
    }

    /// Same `(name, bound)` sequence as `other`, ignoring the generation.
    #[must_use]
    pub fn same_presence(&self, other: &Self) -> bool {
        self.entries == other.entries
    }

    /// Plain `(name, bound)` pairs.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, bool)> {
        self.entries.iter().map(|e| (e.name, e.bound)).collect()
    }

    /// Two-column marker listing. The left column holds the first half of
    /// the table, the right column the rest; every entry appears once.
    #[must_use]
    pub fn render_columns(&self) -> String {
        let lines: Vec<String> = self.entries.iter().map(BindingStatus::marker_line).collect();
        let rows = lines.len().div_ceil(2);
        let width = COLUMN_WIDTH;
        let mut out = String::new();
        for row in 0..rows {
            let left = clip(&lines[row]);
            match lines.get(rows + row) {
                Some(right) => {
                    let _ = writeln!(out, "{left:<width$} {}", clip(right));
                }
                None => {
                    let _ = writeln!(out, "{left}");
                }
            }
        }
        out
    }
}

fn clip(line: &str) -> &str {
    match line.char_indices().nth(COLUMN_WIDTH) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BindingReport {
        BindingReport::new(
            vec![
                BindingStatus { name: "glClear", bound: true },
                BindingStatus { name: "glFlush", bound: true },
                BindingStatus { name: "glSpecializeShader", bound: false },
            ],
            1,
        )
    }

    #[test]
    fn counts_and_missing() {
        let report = sample();
        assert_eq!(report.len(), 3);
        assert_eq!(report.bound_count(), 2);
        assert_eq!(report.unbound_count(), 1);
        assert!(!report.all_bound());
        assert_eq!(report.missing().collect::<Vec<_>>(), vec!["glSpecializeShader"]);
        assert_eq!(report.status_of("glFlush"), Some(true));
        assert_eq!(report.status_of("glNope"), None);
    }

    #[test]
    fn marker_lines() {
        let report = sample();
        assert_eq!(report.entries()[0].marker_line(), "   [+] glClear");
        assert_eq!(report.entries()[2].marker_line(), "   [ ] glSpecializeShader");
    }

    #[test]
    fn columns_list_every_entry_once() {
        let report = sample();
        let text = report.render_columns();
        let rendered: Vec<&str> = text.lines().collect();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("   [+] glClear"));
        assert!(rendered[0].ends_with("   [ ] glSpecializeShader"));
        assert_eq!(rendered[1], "   [+] glFlush");
        for entry in report.entries() {
            assert_eq!(text.matches(entry.name).count(), 1);
        }
    }

    #[test]
    fn long_names_are_clipped_to_column_width() {
        let report = BindingReport::new(
            vec![
                BindingStatus {
                    name: "glDrawElementsInstancedBaseVertexBaseInstance",
                    bound: true,
                },
                BindingStatus { name: "glFinish", bound: true },
            ],
            1,
        );
        let text = report.render_columns();
        let first = text.lines().next().unwrap_or_default();
        assert_eq!(first.len(), COLUMN_WIDTH + 1 + "   [+] glFinish".len());
    }

    #[test]
    fn presence_ignores_generation() {
        let a = sample();
        let b = BindingReport::new(a.entries().to_vec(), 7);
        assert!(a.same_presence(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn empty_report_renders_nothing() {
        let report = BindingReport::new(Vec::new(), 0);
        assert!(report.is_empty());
        assert!(report.all_bound());
        assert_eq!(report.render_columns(), "");
    }
}
