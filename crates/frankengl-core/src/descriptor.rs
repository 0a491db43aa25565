//! Entry Point Descriptors and the marshalling shape taxonomy.
//!
//! A descriptor is static data fixed by the targeted API version: the native
//! symbol name, the declared marshalling shape, and the host signature text.
//! The ABI crate derives every adapter from these rows.

use std::fmt;

/// How a single argument or result crosses the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// No value (`void` result).
    Void,
    /// Fixed-width integer or float, forwarded unchanged.
    Scalar,
    /// Host `bool`, one-byte enumerant on the wire.
    Boolean,
    /// Opaque native handle, forwarded by raw value.
    Handle,
    /// String copied into a NUL-terminated temporary buffer.
    Str,
    /// List of strings: an array of temporary buffers plus the array.
    StrList,
    /// Caller-owned memory region forwarded by address.
    Address,
    /// Native-owned string copied out into a host string.
    StrOut,
}

/// The reusable adapter shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Scalars and booleans in, scalar or boolean out. No temporaries.
    Scalar,
    /// At least one string or string-list argument staged in a temporary.
    StringIn,
    /// A native-owned string result copied into the host.
    StringOut,
    /// A caller-supplied region passed through by address.
    BufferOut,
    /// An opaque handle argument or result forwarded by raw value.
    Handle,
}

impl Shape {
    /// Every shape, in classification priority order.
    pub const ALL: [Shape; 5] = [
        Shape::StringIn,
        Shape::StringOut,
        Shape::Handle,
        Shape::BufferOut,
        Shape::Scalar,
    ];

    /// Stable lowercase name, used in reports and descriptor dumps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::StringIn => "string-in",
            Self::StringOut => "string-out",
            Self::BufferOut => "buffer-out",
            Self::Handle => "handle",
        }
    }

    /// Derive the shape from the argument and result kinds.
    ///
    /// Priority: string staging, string copy-out, handle, address, scalar.
    /// The first kind that requires extra work decides the shape.
    #[must_use]
    pub fn classify(args: &[ArgKind], ret: ArgKind) -> Shape {
        let any = |kind: ArgKind| args.contains(&kind) || ret == kind;
        if args.iter().any(|k| matches!(k, ArgKind::Str | ArgKind::StrList)) {
            Shape::StringIn
        } else if ret == ArgKind::StrOut {
            Shape::StringOut
        } else if any(ArgKind::Handle) {
            Shape::Handle
        } else if any(ArgKind::Address) {
            Shape::BufferOut
        } else {
            Shape::Scalar
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the entry point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    /// Native symbol name, e.g. `glDrawElements`.
    pub name: &'static str,
    /// Shape declared by the table row.
    pub shape: Shape,
    /// Host argument list and result as written in the table.
    pub signature: &'static str,
}

impl EntryPoint {
    #[must_use]
    pub const fn new(name: &'static str, shape: Shape, signature: &'static str) -> Self {
        Self {
            name,
            shape,
            signature,
        }
    }
}

/// Check a descriptor list for duplicate or empty symbol names.
///
/// Returns the offending names in table order.
#[must_use]
pub fn invalid_names(entries: &[EntryPoint]) -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter(|e| e.name.is_empty() || e.name.contains('\0') || !seen.insert(e.name))
        .map(|e| e.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_only_is_scalar() {
        let shape = Shape::classify(&[ArgKind::Scalar, ArgKind::Boolean], ArgKind::Void);
        assert_eq!(shape, Shape::Scalar);
        assert_eq!(Shape::classify(&[], ArgKind::Boolean), Shape::Scalar);
    }

    #[test]
    fn strings_win_over_addresses() {
        let args = [ArgKind::Scalar, ArgKind::Scalar, ArgKind::StrList, ArgKind::Address];
        assert_eq!(Shape::classify(&args, ArgKind::Void), Shape::StringIn);
    }

    #[test]
    fn string_result_is_string_out() {
        assert_eq!(Shape::classify(&[ArgKind::Scalar], ArgKind::StrOut), Shape::StringOut);
    }

    #[test]
    fn handle_result_or_argument() {
        assert_eq!(
            Shape::classify(&[ArgKind::Scalar, ArgKind::Scalar], ArgKind::Handle),
            Shape::Handle
        );
        assert_eq!(
            Shape::classify(&[ArgKind::Handle, ArgKind::Address], ArgKind::Void),
            Shape::Handle
        );
    }

    #[test]
    fn address_is_buffer_out() {
        assert_eq!(
            Shape::classify(&[ArgKind::Scalar, ArgKind::Address], ArgKind::Void),
            Shape::BufferOut
        );
        assert_eq!(Shape::classify(&[ArgKind::Scalar], ArgKind::Address), Shape::BufferOut);
    }

    #[test]
    fn shape_names_are_distinct() {
        let mut names: Vec<_> = Shape::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Shape::ALL.len());
    }

    #[test]
    fn invalid_names_flags_duplicates_and_empties() {
        let rows = [
            EntryPoint::new("glClear", Shape::Scalar, "(mask: GLbitfield)"),
            EntryPoint::new("glClear", Shape::Scalar, "(mask: GLbitfield)"),
            EntryPoint::new("", Shape::Scalar, "()"),
            EntryPoint::new("glFlush", Shape::Scalar, "()"),
        ];
        assert_eq!(invalid_names(&rows), vec!["glClear", ""]);
    }
}
