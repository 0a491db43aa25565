//! # frankengl-core
//!
//! Safe data layer for the FrankenGL dynamic OpenGL binding.
//!
//! Nothing in this crate touches a native library. It defines the vocabulary
//! the ABI crate marshals through:
//!
//! - [`types`]: GL scalar aliases, the one-byte boolean wire encoding and the
//!   opaque handle types that are forwarded but never interpreted.
//! - [`descriptor`]: the marshalling shape taxonomy and the static
//!   Entry Point Descriptor record.
//! - [`consts`]: the symbolic constant table, consumed as opaque arguments.
//! - [`report`]: the binding presence report and its column rendering.
//! - [`shader`]: pure helpers used when assembling shader programs.
//! - [`config`]: runtime trace configuration for the bind pass.

#![deny(unsafe_code)]

pub mod config;
pub mod consts;
pub mod descriptor;
pub mod report;
pub mod shader;
pub mod types;

pub use descriptor::{ArgKind, EntryPoint, Shape};
pub use report::{BindingReport, BindingStatus};
pub use types::{BufferOffset, DebugCallback, DebugProc, SyncHandle};
