//! # Matcher Module
//!
//! Applies a [`Route`](crate::Route) against an incoming request.
//!
//! ## Overview
//!
//! Matching evaluates three guards in order, short-circuiting on the first
//! failure, before the path regex is even attempted:
//!
//! 1. **Schema guard** - the request scheme must contain the route's schema
//!    substring (when one is set).
//! 2. **Method guard** - the request method must be in the route's method
//!    set (when one is set).
//! 3. **Host guard** - the request host must match the route's host literal,
//!    with `{basename}` as a wildcard.
//!
//! Path matching is full-match and case-insensitive. A successful match
//! produces an explicit [`RouteMatch`] carrying the captured bindings; the
//! route itself is never mutated, so one route table can serve concurrent
//! match attempts. A non-match is `None`, never an error: matching is tried
//! across many candidate routes in sequence and exceptions-as-control-flow
//! would be wrong here.

mod core;
#[cfg(test)]
mod tests;

pub use core::{BindingVec, RequestParts, RouteMatch, RouteRequest, MAX_INLINE_BINDINGS};
