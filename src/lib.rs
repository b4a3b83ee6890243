//! # retrace
//!
//! **retrace** is a bidirectional URL route compiler for Rust: one
//! declarative pattern syntax drives both request matching and canonical URL
//! generation.
//!
//! ## Overview
//!
//! A route pattern like `/{lang:[a-z]{2}}/({page:[a-z-]}.html)/` declares
//! named, typed placeholders and optional (conditional) path segments. The
//! pattern compiles once, at registration time, into a typed segment
//! representation from which the matcher builds its path regex and the
//! generator renders URLs - two views of one structure, so a URL generated
//! from a set of valid arguments always matches its own route.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`pattern`]** - pattern mini-syntax compiler producing the shared
//!   segment/requirement representation
//! - **[`route`]** - route descriptor: compiled pattern, controller
//!   identity, guards and default arguments
//! - **[`matcher`]** - schema/method/host guards plus path matching with
//!   explicit [`RouteMatch`] results
//! - **[`generator`]** - canonical URL rendering, the inverse of the matcher
//! - **[`router`]** - ordered route table: sequential matching and reverse
//!   lookup by controller
//! - **[`slug`]** - sanitizer for values rendered into path slots
//! - **[`errors`]** - definition-time and generation-time error types
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use http::Method;
//! use retrace::{RequestParts, Route, Router};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.add(
//!     Route::new("/{lang:[a-z]{2}}/({page:[a-z-]}.html)/", "Pages:show")?
//!         .methods([Method::GET]),
//! );
//!
//! let request = RequestParts::new(Method::GET, "/en/about.html/", "localhost", "http");
//! let (route, matched) = router.matched(&request).expect("route should match");
//! assert_eq!(route.controller(), "Pages:show");
//! assert_eq!(matched.get("lang"), Some("en"));
//! assert_eq!(matched.get("page"), Some("about"));
//!
//! let args = HashMap::from([("lang".to_string(), "en".to_string())]);
//! let url = router.url("Pages:show", "http://localhost", &args)?;
//! assert_eq!(url, "http://localhost/en/");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Routes are immutable while matching: captured bindings come back in an
//! explicit [`RouteMatch`] instead of being written into shared descriptor
//! state, so a route table can serve concurrent match attempts behind an
//! `Arc` without synchronization.

pub mod errors;
pub mod generator;
pub mod matcher;
pub mod pattern;
pub mod route;
pub mod router;
pub mod slug;

pub use errors::{RouteDefinitionError, RouteGenerationError};
pub use matcher::{BindingVec, RequestParts, RouteMatch, RouteRequest, MAX_INLINE_BINDINGS};
pub use pattern::{CompiledPattern, Segment, DEFAULT_FRAGMENT};
pub use route::Route;
pub use router::Router;
pub use slug::slugify;
