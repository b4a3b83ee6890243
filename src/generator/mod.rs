//! # Generator Module
//!
//! Renders canonical URLs from argument values - the inverse of the matcher,
//! operating on the same compiled segment representation.
//!
//! ## Overview
//!
//! Generation proceeds in three phases:
//!
//! 1. **Validation** - route defaults are merged under the caller arguments;
//!    absent conditional placeholders are treated as unset-but-optional. A
//!    mandatory placeholder with no value and no default fails with
//!    [`RouteGenerationError::MissingArgument`](crate::RouteGenerationError);
//!    a value failing its requirement fails with `InvalidArgument`.
//! 2. **Rendering** - placeholder slots are filled with sanitized values
//!    (see [`slugify`](crate::slugify)) plus their recorded suffix; unset
//!    conditional slots collapse entirely and doubled separators are folded.
//!    Caller arguments with no placeholder slot and no fixed route binding
//!    become a form-urlencoded query string, sorted by key so identical
//!    inputs always produce the identical URL.
//! 3. **Host composition** - a `scheme://` prefix is split off the caller
//!    host; when the route carries a host literal, the caller host is
//!    substituted into its `{basename}` wildcard unless it already
//!    satisfies it.

mod core;
