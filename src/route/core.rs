use crate::errors::RouteDefinitionError;
use crate::pattern::{requirement_value_regex, CompiledPattern};
use http::Method;
use regex::Regex;
use std::collections::HashMap;

/// Route descriptor: compiled pattern, controller identity and guards.
///
/// The controller is an opaque identifier compared by equality only; this
/// crate never invokes it. Matching and generation live in their own
/// modules (`matcher`, `generator`) but operate on this one shared
/// representation.
#[derive(Debug, Clone)]
pub struct Route {
    pub(crate) controller: String,
    pub(crate) compiled: CompiledPattern,
    /// Full-match path regex, rebuilt when requirements are refined.
    pub(crate) regex: Regex,
    /// Internal capture group name → placeholder name, in pattern order.
    pub(crate) groups: Vec<(String, String)>,
    /// Precompiled full-match value checks, one per placeholder.
    pub(crate) value_checks: HashMap<String, Regex>,
    /// Default/fixed argument bindings. Mandatory placeholders with no
    /// default are present with `None`.
    pub(crate) arguments: HashMap<String, Option<String>>,
    pub(crate) host: Option<String>,
    pub(crate) host_regex: Option<Regex>,
    pub(crate) schema: Option<String>,
    pub(crate) methods: Vec<Method>,
}

/// Anchored host regex with the `{basename}` marker as a wildcard.
/// Case-sensitive, unlike path matching.
fn host_regex(host: &str) -> Result<Regex, RouteDefinitionError> {
    let quoted = regex::escape(host).replace(&regex::escape("{basename}"), ".*");
    Regex::new(&format!("^{}$", quoted)).map_err(|err| RouteDefinitionError::InvalidPattern {
        pattern: host.to_string(),
        reason: err.to_string(),
    })
}

impl Route {
    /// Compile a pattern and build a route descriptor for the given
    /// controller identity.
    ///
    /// Every mandatory placeholder starts out bound to `None` so generation
    /// can distinguish "no value and no default" from "unset but optional".
    ///
    /// # Example
    ///
    /// ```
    /// use retrace::Route;
    ///
    /// let route = Route::new("/{lang:[a-z]{2}}/({page:[a-z-]}.html)/", "Pages:show")
    ///     .expect("pattern should compile");
    /// assert_eq!(route.controller(), "Pages:show");
    /// ```
    pub fn new(
        pattern: &str,
        controller: impl Into<String>,
    ) -> Result<Self, RouteDefinitionError> {
        let compiled = CompiledPattern::compile(pattern)?;
        let (regex, groups) = compiled.build_regex()?;
        let value_checks = Self::compile_value_checks(&compiled)?;

        let mut arguments = HashMap::new();
        for (name, _) in compiled.requirements() {
            if !compiled.is_conditional(name) {
                arguments.insert(name.clone(), None);
            }
        }

        Ok(Self {
            controller: controller.into(),
            compiled,
            regex,
            groups,
            value_checks,
            arguments,
            host: None,
            host_regex: None,
            schema: None,
            methods: Vec::new(),
        })
    }

    fn compile_value_checks(
        compiled: &CompiledPattern,
    ) -> Result<HashMap<String, Regex>, RouteDefinitionError> {
        let mut checks = HashMap::with_capacity(compiled.requirements().len());
        for (name, fragment) in compiled.requirements() {
            let check = requirement_value_regex(fragment).map_err(|_| {
                RouteDefinitionError::InvalidRequirement {
                    placeholder: name.clone(),
                    fragment: fragment.clone(),
                    pattern: compiled.pattern().to_string(),
                }
            })?;
            checks.insert(name.clone(), check);
        }
        Ok(checks)
    }

    /// Restrict the route to the given HTTP methods. Empty means any method.
    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Require the request scheme to contain the given substring
    /// (e.g. `"https"`).
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        let schema = schema.into();
        self.schema = if schema.is_empty() { None } else { Some(schema) };
        self
    }

    /// Restrict the route to hosts matching the given literal, where the
    /// `{basename}` token is a wildcard.
    pub fn host(mut self, host: impl Into<String>) -> Result<Self, RouteDefinitionError> {
        let host = host.into();
        if host.is_empty() {
            self.host = None;
            self.host_regex = None;
        } else {
            self.host_regex = Some(host_regex(&host)?);
            self.host = Some(host);
        }
        Ok(self)
    }

    /// Seed default argument values, builder-style.
    ///
    /// Placeholder keys are validated against their requirement; other keys
    /// become fixed route arguments that are excluded from query-string
    /// overflow during generation.
    pub fn arguments<K, V>(
        mut self,
        arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, RouteDefinitionError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = arguments
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.set_arguments(&pairs)?;
        Ok(self)
    }

    /// Refine argument bindings in place. Same validation rules as
    /// [`Route::arguments`].
    pub fn set_arguments(
        &mut self,
        arguments: &[(String, String)],
    ) -> Result<(), RouteDefinitionError> {
        for (name, value) in arguments {
            if self.compiled.has_placeholder(name) && !self.value_matches(name, value) {
                return Err(RouteDefinitionError::InvalidDefault {
                    placeholder: name.clone(),
                    value: value.clone(),
                    pattern: self.compiled.pattern().to_string(),
                });
            }
            self.arguments.insert(name.clone(), Some(value.clone()));
        }
        Ok(())
    }

    /// Refine requirement fragments in place, merging only keys that
    /// already exist. Fragments must include their quantifier. The path
    /// regex and value checks are rebuilt on success.
    pub fn set_requirements(
        &mut self,
        requirements: &[(String, String)],
    ) -> Result<(), RouteDefinitionError> {
        let mut changed = false;
        for (name, fragment) in requirements {
            changed |= self.compiled.set_requirement(name, fragment)?;
        }
        if changed {
            let (regex, groups) = self.compiled.build_regex()?;
            self.regex = regex;
            self.groups = groups;
            self.value_checks = Self::compile_value_checks(&self.compiled)?;
        }
        Ok(())
    }

    /// The controller identity this route dispatches to.
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The original pattern string as authored.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.compiled.pattern()
    }

    /// The compiled pattern shared by matcher and generator.
    #[must_use]
    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// Default/fixed argument bindings.
    #[must_use]
    pub fn default_arguments(&self) -> &HashMap<String, Option<String>> {
        &self.arguments
    }

    pub(crate) fn value_matches(&self, name: &str, value: &str) -> bool {
        self.value_checks
            .get(name)
            .is_some_and(|check| check.is_match(value))
    }

    /// True if this route's controller identity matches and every supplied
    /// argument satisfies its requirement.
    ///
    /// Missing arguments are checked as the empty string, so a mandatory
    /// (`+`-quantified) placeholder with no supplied value fails while an
    /// unset conditional one passes. Used to pick the right route among
    /// several registered under the same controller for reverse generation.
    #[must_use]
    pub fn check(&self, controller: &str, arguments: &HashMap<String, String>) -> bool {
        if self.controller != controller {
            return false;
        }
        self.compiled.requirements().iter().all(|(name, _)| {
            let value = arguments.get(name).map(String::as_str).unwrap_or("");
            self.value_matches(name, value)
        })
    }
}
