//! # Router Module
//!
//! Ordered route table with sequential matching and reverse URL lookup.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Holding registered routes in declaration order
//! - Matching incoming requests against each route in turn, first match
//!   winning
//! - Picking the right route for reverse generation when several routes are
//!   registered under the same controller (via [`Route::check`](crate::Route::check))
//!
//! Routes are read-only during matching, so a `Router` can be shared across
//! threads behind an `Arc` without further synchronization.

mod core;

pub use core::Router;
