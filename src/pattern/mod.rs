//! # Pattern Module
//!
//! The pattern module compiles the route mini-syntax into a typed
//! intermediate representation shared by the matcher and the generator.
//!
//! ## Overview
//!
//! A route pattern is a path template with named, typed, optionally
//! conditional placeholders:
//!
//! - `{name}` - mandatory placeholder with the default requirement
//!   `[a-z0-9-._]`
//! - `{name:regex}` - mandatory placeholder with an author-supplied
//!   requirement fragment
//! - `({name:regex}suffix)` - conditional group: the placeholder plus its
//!   literal suffix become optional as a whole, in matching and generation
//!
//! ## Architecture
//!
//! Compilation is a single scan that produces a `CompiledPattern`:
//!
//! 1. **Segments**: an ordered list of literal and placeholder segments.
//!    This replaces string substitution against a quoted skeleton, so
//!    escaping stays correct and matcher and generator share one structural
//!    model.
//! 2. **Requirements**: ordered placeholder → regex-fragment table. The
//!    quantifier is appended internally (`+` mandatory, `*` conditional);
//!    author fragments carrying their own trailing quantifier are rejected.
//! 3. **Conditionals**: placeholder → literal suffix recorded for every
//!    placeholder written inside a conditional group.
//!
//! The match regex is assembled from the segments on demand
//! (`CompiledPattern::build_regex`) and rebuilt whenever requirements are
//! refined after construction.

mod core;

pub use core::{CompiledPattern, Segment, DEFAULT_FRAGMENT};
pub(crate) use core::{requirement_expr, requirement_value_regex};
