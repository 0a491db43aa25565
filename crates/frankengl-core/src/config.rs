//! Bind pass trace configuration.
//!
//! The trace level is set via the `FRANKENGL_BIND_TRACE` environment variable:
//! - `off` (default): the bind pass is silent.
//! - `summary`: one stderr line per bind pass with bound/unbound counts.
//! - `symbols`: the summary plus one line per unresolved symbol.
//!
//! Native module names and the resolution strategy are compiled in and are
//! not configurable here.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted once per process.
pub const TRACE_ENV: &str = "FRANKENGL_BIND_TRACE";

/// How much the bind pass reports about itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TraceLevel {
    #[default]
    Off,
    Summary,
    Symbols,
}

impl TraceLevel {
    /// Parse from string (case-insensitive). Unknown values mean `Off`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" | "1" | "on" | "true" => Self::Summary,
            "symbols" | "2" | "all" | "verbose" => Self::Symbols,
            _ => Self::Off,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Summary => "summary",
            Self::Symbols => "symbols",
        }
    }

    #[must_use]
    pub const fn summary_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    #[must_use]
    pub const fn symbols_enabled(self) -> bool {
        matches!(self, Self::Symbols)
    }
}

// 0 means no override; otherwise `TraceLevel as u8 + 1`.
static OVERRIDE: AtomicU8 = AtomicU8::new(NO_OVERRIDE);
static FROM_ENV: OnceLock<TraceLevel> = OnceLock::new();

const NO_OVERRIDE: u8 = 0;

fn encode(level: TraceLevel) -> u8 {
    level as u8 + 1
}

fn decode(v: u8) -> Option<TraceLevel> {
    match v {
        1 => Some(TraceLevel::Off),
        2 => Some(TraceLevel::Summary),
        3 => Some(TraceLevel::Symbols),
        _ => None,
    }
}

/// The effective trace level.
///
/// An explicit [`set_trace_level`] wins. Otherwise `FRANKENGL_BIND_TRACE` is
/// read on first use and cached for the life of the process.
#[must_use]
pub fn trace_level() -> TraceLevel {
    if let Some(level) = decode(OVERRIDE.load(Ordering::Acquire)) {
        return level;
    }
    *FROM_ENV.get_or_init(|| {
        std::env::var(TRACE_ENV)
            .map(|v| TraceLevel::from_str_loose(&v))
            .unwrap_or_default()
    })
}

/// Override the level for the rest of the process.
///
/// Tooling that owns its own output (the harness CLI) uses this instead of
/// mutating the environment. The environment is never consulted again after
/// an override, so a concurrent first read cannot replace it.
pub fn set_trace_level(level: TraceLevel) {
    OVERRIDE.store(encode(level), Ordering::Release);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trace_levels() {
        assert_eq!(TraceLevel::from_str_loose("off"), TraceLevel::Off);
        assert_eq!(TraceLevel::from_str_loose("SUMMARY"), TraceLevel::Summary);
        assert_eq!(TraceLevel::from_str_loose(" symbols "), TraceLevel::Symbols);
        assert_eq!(TraceLevel::from_str_loose("1"), TraceLevel::Summary);
        assert_eq!(TraceLevel::from_str_loose("verbose"), TraceLevel::Symbols);
        assert_eq!(TraceLevel::from_str_loose("bogus"), TraceLevel::Off);
    }

    #[test]
    fn default_is_off() {
        assert_eq!(TraceLevel::default(), TraceLevel::Off);
        assert!(!TraceLevel::Off.summary_enabled());
    }

    #[test]
    fn symbols_implies_summary() {
        assert!(TraceLevel::Symbols.summary_enabled());
        assert!(TraceLevel::Symbols.symbols_enabled());
        assert!(!TraceLevel::Summary.symbols_enabled());
    }

    #[test]
    fn override_wins_over_concurrent_first_reads() {
        let previous = OVERRIDE.swap(NO_OVERRIDE, Ordering::SeqCst);
        let readers: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    for _ in 0..1_000 {
                        let _ = trace_level();
                    }
                })
            })
            .collect();
        set_trace_level(TraceLevel::Symbols);
        for reader in readers {
            reader.join().expect("reader thread");
        }
        assert_eq!(trace_level(), TraceLevel::Symbols);

        set_trace_level(TraceLevel::Summary);
        assert_eq!(trace_level(), TraceLevel::Summary);
        OVERRIDE.store(previous, Ordering::SeqCst);
    }

    #[test]
    fn encoding_round_trips_every_level() {
        for level in [TraceLevel::Off, TraceLevel::Summary, TraceLevel::Symbols] {
            assert_eq!(decode(encode(level)), Some(level));
        }
        assert_eq!(decode(NO_OVERRIDE), None);
    }
}
