//! # Route Module
//!
//! A [`Route`] is the descriptor tying a compiled pattern to a controller
//! identity plus its matching guards (schema, methods, host) and default
//! argument bindings.
//!
//! Routes are built once at registration time and are read-only while
//! matching, so a route table can be shared across threads without
//! synchronization. The only post-construction mutation is explicit
//! configuration refinement (`set_requirements`, `set_arguments`), which
//! merges values for keys that already exist and never adds or removes a
//! placeholder.

mod core;

pub use core::Route;
