use crate::route::Route;
use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// Maximum number of captured bindings before heap allocation.
/// Most route patterns have well under 8 placeholders.
pub const MAX_INLINE_BINDINGS: usize = 8;

/// Stack-allocated binding storage for the match hot path.
pub type BindingVec = SmallVec<[(String, String); MAX_INLINE_BINDINGS]>;

/// The request abstraction consumed by the matcher.
///
/// Anything exposing a path, host, scheme and method can be matched; the
/// surrounding framework's request type implements this at its boundary.
pub trait RouteRequest {
    /// Request path, e.g. `/en/about.html/`
    fn path(&self) -> &str;
    /// Request host, e.g. `example.com`
    fn host(&self) -> &str;
    /// Request scheme, e.g. `http` or `https`
    fn schema(&self) -> &str;
    /// HTTP method
    fn method(&self) -> &Method;
}

/// Plain-data request carrier implementing [`RouteRequest`].
///
/// Handy for tests and for callers that already parsed a raw request into
/// its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    /// HTTP method
    pub method: Method,
    /// Request path
    pub path: String,
    /// Request host
    pub host: String,
    /// Request scheme
    pub schema: String,
}

impl RequestParts {
    /// Build a request from its parts.
    pub fn new(
        method: Method,
        path: impl Into<String>,
        host: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            host: host.into(),
            schema: schema.into(),
        }
    }
}

impl RouteRequest for RequestParts {
    fn path(&self) -> &str {
        &self.path
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn schema(&self) -> &str {
        &self.schema
    }

    fn method(&self) -> &Method {
        &self.method
    }
}

/// Result of successfully matching a request path against a route.
///
/// Bindings start from the route's default arguments and are overlaid with
/// every non-empty capture from the path. Returning them explicitly (rather
/// than writing into shared route state) keeps the route table safe to share
/// across concurrent match attempts.
#[derive(Debug, Clone, Default)]
pub struct RouteMatch {
    /// Captured argument bindings, in insertion order
    pub bindings: BindingVec,
}

impl RouteMatch {
    /// Get a binding by name.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert the bindings to a `HashMap`. This allocates; prefer
    /// [`RouteMatch::get`] in hot paths.
    #[must_use]
    pub fn bindings_map(&self) -> HashMap<String, String> {
        self.bindings.iter().cloned().collect()
    }

    fn insert(&mut self, name: &str, value: String) {
        if let Some(slot) = self.bindings.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.bindings.push((name.to_string(), value));
        }
    }
}

/// Strip `suffix` from the end of `value`, ignoring ASCII case to mirror the
/// case-insensitive path match.
fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || value.len() < suffix.len() {
        return value;
    }
    let split = value.len() - suffix.len();
    if !value.is_char_boundary(split) {
        return value;
    }
    let (head, tail) = value.split_at(split);
    if tail.eq_ignore_ascii_case(suffix) {
        head
    } else {
        value
    }
}

impl Route {
    /// Match this route against a request.
    ///
    /// Guards run first (schema, method, host) and short-circuit without
    /// touching the path regex, so a failed guard has no side effects and no
    /// regex cost. On success the returned [`RouteMatch`] holds the default
    /// arguments overlaid with every non-empty path capture.
    #[must_use]
    pub fn matches(&self, request: &impl RouteRequest) -> Option<RouteMatch> {
        if !self.matches_schema(request.schema())
            || !self.matches_method(request.method())
            || !self.matches_host(request.host())
        {
            return None;
        }

        let captures = self.regex.captures(request.path())?;

        let mut matched = RouteMatch::default();
        for (name, value) in &self.arguments {
            if let Some(value) = value {
                matched.insert(name, value.clone());
            }
        }
        for (group, name) in &self.groups {
            let Some(capture) = captures.name(group) else {
                continue;
            };
            // A greedy requirement class containing '.' can swallow the
            // conditional suffix into the capture; trim it back off.
            let mut value = capture.as_str();
            if let Some(suffix) = self.compiled.conditional_suffix(name) {
                value = strip_suffix_ignore_case(value, suffix);
            }
            if value.is_empty() {
                continue;
            }
            matched.insert(name, value.to_string());
        }

        debug!(
            controller = %self.controller,
            pattern = %self.compiled.pattern(),
            path = %request.path(),
            bindings = ?matched.bindings,
            "Route matched"
        );
        Some(matched)
    }

    fn matches_schema(&self, schema: &str) -> bool {
        match &self.schema {
            Some(required) => schema.contains(required.as_str()),
            None => true,
        }
    }

    fn matches_method(&self, method: &Method) -> bool {
        self.methods.is_empty() || self.methods.contains(method)
    }

    fn matches_host(&self, host: &str) -> bool {
        match &self.host_regex {
            Some(regex) => regex.is_match(host),
            None => true,
        }
    }
}
