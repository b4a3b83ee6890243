use crate::errors::RouteDefinitionError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use tracing::debug;

/// Requirement fragment used when a placeholder declares no regex of its own.
pub const DEFAULT_FRAGMENT: &str = "[a-z0-9-._]";

/// One structural piece of a compiled route pattern.
///
/// Patterns decompose into an ordered list of segments. Literals are copied
/// verbatim into generated URLs and regex-escaped for matching; placeholders
/// become named captures and value slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim pattern text between placeholders
    Literal(String),
    /// A named capture slot
    Placeholder {
        /// Placeholder name as authored
        name: String,
        /// True when the placeholder was written inside a `(...)` group
        conditional: bool,
    },
}

/// A route pattern compiled into its typed intermediate representation.
///
/// Built once at route registration and logically immutable afterwards,
/// except for requirement refinement which only replaces fragments for
/// placeholders that already exist.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    segments: Vec<Segment>,
    requirements: Vec<(String, String)>,
    conditionals: HashMap<String, Option<String>>,
}

/// Wrap a requirement fragment so its trailing quantifier applies to the
/// whole fragment (`[a-z]{2}` + `+` must compile as `(?:[a-z]{2})+`, never
/// as the double repetition `[a-z]{2}+`).
pub(crate) fn requirement_expr(fragment: &str) -> String {
    match fragment.chars().last() {
        Some(q @ ('+' | '*' | '?')) => {
            format!("(?:{}){}", &fragment[..fragment.len() - 1], q)
        }
        _ => format!("(?:{})", fragment),
    }
}

/// Full-match, case-insensitive regex validating a single argument value
/// against a requirement fragment.
pub(crate) fn requirement_value_regex(fragment: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^{}$", requirement_expr(fragment)))
        .case_insensitive(true)
        .build()
}

impl CompiledPattern {
    /// Compile a route pattern into segments and requirement tables.
    ///
    /// Scans the pattern once. Mandatory placeholders get their fragment
    /// quantified with `+`, conditional placeholders with `*` plus the
    /// recorded literal suffix. When the same placeholder name occurs more
    /// than once, the first occurrence's requirement and suffix win; later
    /// occurrences still produce segments.
    pub fn compile(pattern: &str) -> Result<Self, RouteDefinitionError> {
        let mut segments = Vec::new();
        let mut requirements: Vec<(String, String)> = Vec::new();
        let mut conditionals: HashMap<String, Option<String>> = HashMap::new();

        let mut literal = String::new();
        let mut rest = pattern;

        while !rest.is_empty() {
            if rest.starts_with("({") {
                Self::flush_literal(&mut literal, &mut segments);
                let close_brace = 1 + Self::closing_brace(&rest[1..]).ok_or_else(|| {
                    RouteDefinitionError::UnterminatedPlaceholder {
                        pattern: pattern.to_string(),
                    }
                })?;
                let (name, fragment) = Self::parse_placeholder(&rest[2..close_brace], pattern)?;
                let after = &rest[close_brace + 1..];
                let close_paren =
                    after
                        .find(')')
                        .ok_or_else(|| RouteDefinitionError::UnterminatedGroup {
                            pattern: pattern.to_string(),
                        })?;
                let suffix = &after[..close_paren];
                if suffix.contains('(') || suffix.contains('{') {
                    // only one group level is recognized
                    return Err(RouteDefinitionError::UnterminatedGroup {
                        pattern: pattern.to_string(),
                    });
                }
                Self::record(
                    &mut requirements,
                    &mut conditionals,
                    &name,
                    &format!("{}*", fragment),
                    Some(suffix.to_string()),
                    pattern,
                )?;
                segments.push(Segment::Placeholder {
                    name,
                    conditional: true,
                });
                rest = &after[close_paren + 1..];
            } else if rest.starts_with('{') {
                Self::flush_literal(&mut literal, &mut segments);
                let close_brace = Self::closing_brace(rest).ok_or_else(|| {
                    RouteDefinitionError::UnterminatedPlaceholder {
                        pattern: pattern.to_string(),
                    }
                })?;
                let (name, fragment) = Self::parse_placeholder(&rest[1..close_brace], pattern)?;
                Self::record(
                    &mut requirements,
                    &mut conditionals,
                    &name,
                    &format!("{}+", fragment),
                    None,
                    pattern,
                )?;
                segments.push(Segment::Placeholder {
                    name,
                    conditional: false,
                });
                rest = &rest[close_brace + 1..];
            } else if let Some(ch) = rest.chars().next() {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
        Self::flush_literal(&mut literal, &mut segments);

        debug!(
            pattern = %pattern,
            placeholders = requirements.len(),
            "Compiled route pattern"
        );

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            requirements,
            conditionals,
        })
    }

    /// Index of the `}` matching the `{` that `s` starts with. Counts
    /// nesting so requirement fragments may contain braced repetitions like
    /// `[a-z]{2}`.
    fn closing_brace(s: &str) -> Option<usize> {
        let mut depth = 0usize;
        for (i, ch) in s.char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(literal)));
        }
    }

    /// Split a placeholder body into its name and requirement fragment,
    /// rejecting empty names and author fragments that carry their own
    /// trailing quantifier.
    fn parse_placeholder(
        body: &str,
        pattern: &str,
    ) -> Result<(String, String), RouteDefinitionError> {
        let (name, fragment) = match body.split_once(':') {
            Some((name, fragment)) => {
                if matches!(fragment.chars().last(), Some('+' | '*' | '?')) {
                    return Err(RouteDefinitionError::QuantifiedRequirement {
                        placeholder: name.to_string(),
                        pattern: pattern.to_string(),
                    });
                }
                (name, fragment)
            }
            None => (body, DEFAULT_FRAGMENT),
        };
        if name.is_empty() {
            return Err(RouteDefinitionError::EmptyPlaceholder {
                pattern: pattern.to_string(),
            });
        }
        Ok((name.to_string(), fragment.to_string()))
    }

    /// Record a placeholder's requirement and conditional suffix, first
    /// occurrence winning, and verify the fragment actually compiles.
    fn record(
        requirements: &mut Vec<(String, String)>,
        conditionals: &mut HashMap<String, Option<String>>,
        name: &str,
        fragment: &str,
        suffix: Option<String>,
        pattern: &str,
    ) -> Result<(), RouteDefinitionError> {
        if requirements.iter().any(|(k, _)| k == name) {
            return Ok(());
        }
        requirement_value_regex(fragment).map_err(|_| {
            RouteDefinitionError::InvalidRequirement {
                placeholder: name.to_string(),
                fragment: fragment.to_string(),
                pattern: pattern.to_string(),
            }
        })?;
        requirements.push((name.to_string(), fragment.to_string()));
        conditionals.insert(name.to_string(), suffix);
        Ok(())
    }

    /// The original pattern string as authored.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Ordered literal/placeholder segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Ordered placeholder → requirement-fragment table. Fragments already
    /// include their quantifier.
    #[must_use]
    pub fn requirements(&self) -> &[(String, String)] {
        &self.requirements
    }

    /// Requirement fragment for one placeholder.
    #[must_use]
    pub fn requirement(&self, name: &str) -> Option<&str> {
        self.requirements
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// True when the pattern declares the given placeholder.
    #[must_use]
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.requirement(name).is_some()
    }

    /// True when the placeholder sits inside a conditional group.
    #[must_use]
    pub fn is_conditional(&self, name: &str) -> bool {
        matches!(self.conditionals.get(name), Some(Some(_)))
    }

    /// Literal suffix recorded for a conditional placeholder, `None` for
    /// mandatory placeholders.
    #[must_use]
    pub fn conditional_suffix(&self, name: &str) -> Option<&str> {
        self.conditionals
            .get(name)
            .and_then(|suffix| suffix.as_deref())
    }

    /// Replace the requirement fragment of an existing placeholder.
    ///
    /// Unknown names are ignored (no placeholder can be added after
    /// construction). The caller is responsible for rebuilding the match
    /// regex afterwards.
    pub(crate) fn set_requirement(
        &mut self,
        name: &str,
        fragment: &str,
    ) -> Result<bool, RouteDefinitionError> {
        let Some(slot) = self.requirements.iter_mut().find(|(k, _)| k == name) else {
            return Ok(false);
        };
        requirement_value_regex(fragment).map_err(|_| {
            RouteDefinitionError::InvalidRequirement {
                placeholder: name.to_string(),
                fragment: fragment.to_string(),
                pattern: self.pattern.clone(),
            }
        })?;
        slot.1 = fragment.to_string();
        Ok(true)
    }

    /// Assemble the full-match, case-insensitive path regex from the
    /// segments.
    ///
    /// Mandatory placeholders become named captures; conditional ones become
    /// an optional group whose quoted suffix is an optional tail outside the
    /// capture, with the literal character preceding the group made optional
    /// so `/a/` and `/a/b.json/` both satisfy `/a/({b}.json)/`. A trailing
    /// path separator is optional. Capture groups get unique internal names
    /// so duplicate placeholder occurrences never break compilation; the
    /// returned table maps each group back to its placeholder.
    pub(crate) fn build_regex(
        &self,
    ) -> Result<(Regex, Vec<(String, String)>), RouteDefinitionError> {
        let mut source = String::with_capacity(self.pattern.len() * 2);
        source.push('^');
        let mut groups: Vec<(String, String)> = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => {
                    let before_conditional = matches!(
                        self.segments.get(i + 1),
                        Some(Segment::Placeholder {
                            conditional: true,
                            ..
                        })
                    );
                    if before_conditional {
                        if let Some(last) = text.chars().next_back() {
                            let head = &text[..text.len() - last.len_utf8()];
                            source.push_str(&regex::escape(head));
                            source.push_str("(?:");
                            source.push_str(&regex::escape(&last.to_string()));
                            source.push_str(")?");
                        }
                    } else {
                        source.push_str(&regex::escape(text));
                    }
                }
                Segment::Placeholder { name, conditional } => {
                    let group = format!("g{}", groups.len());
                    let fragment = self.requirement(name).unwrap_or(DEFAULT_FRAGMENT);
                    let expr = requirement_expr(fragment);
                    if *conditional {
                        match self.conditional_suffix(name) {
                            Some(suffix) if !suffix.is_empty() => {
                                source.push_str(&format!(
                                    "(?:(?P<{}>{})(?:{})?)?",
                                    group,
                                    expr,
                                    regex::escape(suffix)
                                ));
                            }
                            _ => {
                                source.push_str(&format!("(?:(?P<{}>{}))?", group, expr));
                            }
                        }
                    } else {
                        source.push_str(&format!("(?P<{}>{})", group, expr));
                    }
                    groups.push((group, name.clone()));
                }
            }
        }

        if source.ends_with('/') {
            source.push('?');
        }
        source.push('$');

        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| RouteDefinitionError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: err.to_string(),
            })?;
        Ok((regex, groups))
    }
}
