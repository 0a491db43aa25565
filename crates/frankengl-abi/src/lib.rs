//! # frankengl-abi
//!
//! Native boundary of the FrankenGL dynamic OpenGL binding.
//!
//! Nothing here links against OpenGL at build time. At run time a
//! [`resolver::Resolver`] turns each entry point name into an address, a
//! [`table::BindingTable`] stores the results, and one thin adapter per entry
//! point marshals host values to their native form and calls through the
//! stored address.
//!
//! # Architecture
//!
//! ```text
//! host call -> adapter (gl.rs) -> Marshal/Staged -> slot address -> native fn
//!                                       |                              |
//!                            scoped temporaries dropped  <-  Unmarshal result
//! ```
//!
//! # Contract
//!
//! Every adapter is an `unsafe fn`. Callers guarantee that:
//! - a rendering context is current on the calling thread;
//! - the table was bound against that context's driver, and no rebind is
//!   running concurrently;
//! - address arguments point to regions large enough for what the native
//!   function reads or writes.
//!
//! Calling an adapter whose slot is unresolved panics with the symbol name.
//! Check [`table::BindingTable::report`] first for optional entry points.
#![allow(clippy::missing_safety_doc)]

#[macro_use]
mod macros;

pub mod call;
pub mod gl;
pub mod library;
pub mod marshal;
pub mod program;
pub mod resolver;
pub mod table;

pub use frankengl_core::{ArgKind, BindingReport, BindingStatus, EntryPoint, Shape};
pub use library::{LazyLibrary, LoadError, NativeLibrary};
pub use resolver::{Resolver, platform_resolver};
pub use table::{BindSummary, BindingTable, TableState};
