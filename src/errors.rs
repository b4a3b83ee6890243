//! Error types for route definition and URL generation.
//!
//! Matching deliberately has no error type: a route that does not match a
//! request is an expected outcome while scanning a route table, so the
//! matcher reports `Option`/`bool` instead of `Result`.

use std::fmt;

/// Route pattern definition error
///
/// Returned when a route pattern violates the placeholder mini-syntax or
/// when a configuration call (`set_requirements`, `set_arguments`) supplies
/// values that cannot be honored. Raised at registration time and fatal to
/// that route; it is never produced while serving requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDefinitionError {
    /// Author-supplied requirement fragment ends in `+`, `*` or `?`
    ///
    /// Quantifiers are appended internally (`+` for mandatory placeholders,
    /// `*` for conditional ones), so a fragment carrying its own trailing
    /// quantifier would compile into a double repetition.
    QuantifiedRequirement {
        /// Placeholder whose fragment carried the quantifier
        placeholder: String,
        /// The original pattern string as authored
        pattern: String,
    },
    /// A `{` placeholder opener with no closing `}`
    UnterminatedPlaceholder {
        /// The original pattern string as authored
        pattern: String,
    },
    /// A `(` conditional group opener with no closing `)`, or a nested `(`
    UnterminatedGroup {
        /// The original pattern string as authored
        pattern: String,
    },
    /// A placeholder with an empty name, `{}` or `{:regex}`
    EmptyPlaceholder {
        /// The original pattern string as authored
        pattern: String,
    },
    /// A requirement fragment that is not a valid regular expression
    InvalidRequirement {
        /// Placeholder the fragment belongs to
        placeholder: String,
        /// The rejected fragment
        fragment: String,
        /// The original pattern string as authored
        pattern: String,
    },
    /// A default argument value that fails its placeholder's requirement
    InvalidDefault {
        /// Placeholder the value was bound to
        placeholder: String,
        /// The rejected value
        value: String,
        /// The original pattern string as authored
        pattern: String,
    },
    /// The assembled route regex failed to compile
    InvalidPattern {
        /// The original pattern string as authored
        pattern: String,
        /// Compile error reported by the regex engine
        reason: String,
    },
}

impl fmt::Display for RouteDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDefinitionError::QuantifiedRequirement {
                placeholder,
                pattern,
            } => {
                write!(
                    f,
                    "Requirement for \"{}\" in route \"{}\" must not end with a quantification token",
                    placeholder, pattern
                )
            }
            RouteDefinitionError::UnterminatedPlaceholder { pattern } => {
                write!(f, "Unterminated placeholder in route \"{}\"", pattern)
            }
            RouteDefinitionError::UnterminatedGroup { pattern } => {
                write!(f, "Unterminated conditional group in route \"{}\"", pattern)
            }
            RouteDefinitionError::EmptyPlaceholder { pattern } => {
                write!(f, "Empty placeholder name in route \"{}\"", pattern)
            }
            RouteDefinitionError::InvalidRequirement {
                placeholder,
                fragment,
                pattern,
            } => {
                write!(
                    f,
                    "Invalid requirement \"{}\" for placeholder \"{}\" in route \"{}\"",
                    fragment, placeholder, pattern
                )
            }
            RouteDefinitionError::InvalidDefault {
                placeholder,
                value,
                pattern,
            } => {
                write!(
                    f,
                    "Invalid default value \"{}\" for argument \"{}\" in route \"{}\"",
                    value, placeholder, pattern
                )
            }
            RouteDefinitionError::InvalidPattern { pattern, reason } => {
                write!(f, "Route \"{}\" does not compile: {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for RouteDefinitionError {}

/// URL generation error
///
/// Returned by `Route::generate` and `Router::url`. Carries the placeholder
/// name, the offending value and the original pattern so misconfiguration is
/// diagnosable without a debugger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGenerationError {
    /// A mandatory placeholder has no caller value and no default
    MissingArgument {
        /// Placeholder with no value
        placeholder: String,
        /// The original pattern string as authored
        pattern: String,
    },
    /// A supplied value does not satisfy its placeholder's requirement
    InvalidArgument {
        /// Placeholder the value was supplied for
        placeholder: String,
        /// The rejected value
        value: String,
        /// The original pattern string as authored
        pattern: String,
    },
    /// No registered route answers for the requested controller
    NoRouteForController {
        /// The controller identity that was looked up
        controller: String,
    },
}

impl fmt::Display for RouteGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteGenerationError::MissingArgument {
                placeholder,
                pattern,
            } => {
                write!(
                    f,
                    "Missing value for argument \"{}\" in route \"{}\"",
                    placeholder, pattern
                )
            }
            RouteGenerationError::InvalidArgument {
                placeholder,
                value,
                pattern,
            } => {
                write!(
                    f,
                    "Invalid value \"{}\" for argument \"{}\" in route \"{}\"",
                    value, placeholder, pattern
                )
            }
            RouteGenerationError::NoRouteForController { controller } => {
                write!(f, "No route registered for controller \"{}\"", controller)
            }
        }
    }
}

impl std::error::Error for RouteGenerationError {}
