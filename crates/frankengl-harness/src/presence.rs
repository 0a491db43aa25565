//! Serializable presence reports and their comparisons.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use frankengl_core::{BindingReport, EntryPoint};
use serde::{Deserialize, Serialize};

use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Errors from loading, saving and checking presence reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed presence report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not entry points of this table: {}", .0.join(", "))]
    UnknownSymbols(Vec<String>),
    #[error("required entry points unresolved: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("reports describe different tables: {left} vs {right}")]
    TableMismatch { left: String, right: String },
}

/// Presence of one entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceEntry {
    pub name: String,
    pub bound: bool,
}

/// Owned snapshot of a binding table after a bind pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceReport {
    pub table: String,
    pub strategy: String,
    pub generation: u64,
    pub bound: usize,
    pub unbound: usize,
    pub entries: Vec<PresenceEntry>,
}

impl PresenceReport {
    #[must_use]
    pub fn from_binding(table: &str, strategy: &str, report: &BindingReport) -> Self {
        Self {
            table: table.to_string(),
            strategy: strategy.to_string(),
            generation: report.generation(),
            bound: report.bound_count(),
            unbound: report.unbound_count(),
            entries: report
                .entries()
                .iter()
                .map(|status| PresenceEntry {
                    name: status.name.to_string(),
                    bound: status.bound,
                })
                .collect(),
        }
    }

    /// Parse a report saved with [`Self::to_json`].
    pub fn from_json(text: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_json()? + "\n").map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn status_of(&self, name: &str) -> Option<bool> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.bound)
    }

    /// Unresolved entry points, in table order.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.bound)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Succeeds when every named entry point is in the table and resolved.
    ///
    /// Names the table never declares are reported before unresolved ones.
    pub fn require<S: AsRef<str>>(&self, names: &[S]) -> Result<(), ReportError> {
        let mut unknown = Vec::new();
        let mut missing = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.status_of(name) {
                None => unknown.push(name.to_string()),
                Some(false) => missing.push(name.to_string()),
                Some(true) => {}
            }
        }
        if !unknown.is_empty() {
            return Err(ReportError::UnknownSymbols(unknown));
        }
        if !missing.is_empty() {
            return Err(ReportError::Missing(missing));
        }
        Ok(())
    }

    /// What changed going from `self` to `other`.
    pub fn compare(&self, other: &Self) -> Result<PresenceDiff, ReportError> {
        if self.table != other.table {
            return Err(ReportError::TableMismatch {
                left: self.table.clone(),
                right: other.table.clone(),
            });
        }
        let left: BTreeMap<&str, bool> =
            self.entries.iter().map(|e| (e.name.as_str(), e.bound)).collect();
        let right: BTreeMap<&str, bool> =
            other.entries.iter().map(|e| (e.name.as_str(), e.bound)).collect();

        let mut diff = PresenceDiff::default();
        for entry in &other.entries {
            match left.get(entry.name.as_str()) {
                None => diff.only_right.push(entry.name.clone()),
                Some(&was) if !was && entry.bound => diff.gained.push(entry.name.clone()),
                Some(&was) if was && !entry.bound => diff.lost.push(entry.name.clone()),
                Some(_) => {}
            }
        }
        diff.only_left = self
            .entries
            .iter()
            .filter(|e| !right.contains_key(e.name.as_str()))
            .map(|e| e.name.clone())
            .collect();
        Ok(diff)
    }

    /// Write one `bind_pass` record followed by one `entry_point` record per
    /// entry, in table order.
    pub fn emit_jsonl(&self, emitter: &mut LogEmitter) -> std::io::Result<()> {
        let all_bound = self.unbound == 0;
        emitter.emit_entry(
            LogEntry::new(
                "",
                if all_bound { LogLevel::Info } else { LogLevel::Warn },
                "bind_pass",
            )
            .with_table(&self.table)
            .with_strategy(&self.strategy)
            .with_generation(self.generation)
            .with_outcome(Outcome::from_ok(all_bound))
            .with_details(serde_json::json!({
                "bound": self.bound,
                "unbound": self.unbound,
            })),
        )?;
        for entry in &self.entries {
            emitter.emit_entry(
                LogEntry::new(
                    "",
                    if entry.bound { LogLevel::Debug } else { LogLevel::Warn },
                    "entry_point",
                )
                .with_table(&self.table)
                .with_symbol(&entry.name, entry.bound)
                .with_generation(self.generation),
            )?;
        }
        emitter.flush()
    }
}

/// Entry points whose presence differs between two reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceDiff {
    /// Unbound on the left, bound on the right.
    pub gained: Vec<String>,
    /// Bound on the left, unbound on the right.
    pub lost: Vec<String>,
    pub only_left: Vec<String>,
    pub only_right: Vec<String>,
}

impl PresenceDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gained.is_empty()
            && self.lost.is_empty()
            && self.only_left.is_empty()
            && self.only_right.is_empty()
    }

    /// One `+name`, `-name`, `<name` or `>name` line per difference.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (marker, names) in [
            ('+', &self.gained),
            ('-', &self.lost),
            ('<', &self.only_left),
            ('>', &self.only_right),
        ] {
            for name in names {
                out.push(marker);
                out.push_str(name);
                out.push('\n');
            }
        }
        out
    }
}

/// Serializable view of an [`EntryPoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorRow {
    pub name: String,
    pub shape: String,
    pub signature: String,
}

impl From<&EntryPoint> for DescriptorRow {
    fn from(entry: &EntryPoint) -> Self {
        Self {
            name: entry.name.to_string(),
            shape: entry.shape.as_str().to_string(),
            signature: entry.signature.to_string(),
        }
    }
}

/// Descriptor rows, optionally restricted to one marshalling shape.
#[must_use]
pub fn descriptor_rows(entries: &[EntryPoint], shape: Option<&str>) -> Vec<DescriptorRow> {
    entries
        .iter()
        .filter(|e| shape.is_none_or(|s| e.shape.as_str() == s))
        .map(DescriptorRow::from)
        .collect()
}
