use crate::errors::RouteGenerationError;
use crate::pattern::Segment;
use crate::route::Route;
use crate::slug::slugify;
use std::collections::HashMap;
use tracing::debug;
use url::form_urlencoded;

impl Route {
    /// Generate a canonical URL for this route.
    ///
    /// `host` may carry a scheme (`scheme://host`); `arguments` supplies
    /// placeholder values, with route defaults filling the gaps. Arguments
    /// that occupy no placeholder slot and are not fixed route bindings are
    /// appended as a form-urlencoded query string.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use retrace::Route;
    ///
    /// let route = Route::new("/{lang:[a-z]{2}}/({page:[a-z-]}.html)/", "Pages:show")
    ///     .expect("pattern should compile");
    ///
    /// let args = HashMap::from([("lang".to_string(), "en".to_string())]);
    /// let url = route.generate("http://localhost", &args).expect("should generate");
    /// assert_eq!(url, "http://localhost/en/");
    /// ```
    pub fn generate(
        &self,
        host: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<String, RouteGenerationError> {
        let pattern = self.compiled.pattern();

        // Route defaults first, caller arguments on top. Conditional
        // placeholders absent from both are unset-but-optional, never
        // missing.
        let mut values: HashMap<&str, Option<&str>> = HashMap::new();
        for (name, default) in &self.arguments {
            values.insert(name.as_str(), default.as_deref());
        }
        for (name, value) in arguments {
            values.insert(name.as_str(), Some(value.as_str()));
        }

        for (name, _) in self.compiled.requirements() {
            match values.get(name.as_str()).copied().flatten() {
                None if self.compiled.is_conditional(name) => {}
                None => {
                    return Err(RouteGenerationError::MissingArgument {
                        placeholder: name.clone(),
                        pattern: pattern.to_string(),
                    });
                }
                Some(value) => {
                    if !self.value_matches(name, value) {
                        return Err(RouteGenerationError::InvalidArgument {
                            placeholder: name.clone(),
                            value: value.to_string(),
                            pattern: pattern.to_string(),
                        });
                    }
                }
            }
        }

        // Arguments with no placeholder slot and no fixed binding overflow
        // into the query string. Sorted so generation is deterministic.
        let mut query: Vec<(&str, &str)> = arguments
            .iter()
            .filter(|(name, _)| {
                !self.compiled.has_placeholder(name) && !self.arguments.contains_key(name.as_str())
            })
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        query.sort_unstable();

        let mut path = String::new();
        for segment in self.compiled.segments() {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder { name, conditional } => {
                    let value = values.get(name.as_str()).copied().flatten().unwrap_or("");
                    if value.is_empty() {
                        // unset conditional: the whole optional segment
                        // collapses
                        continue;
                    }
                    path.push_str(&slugify(value));
                    if *conditional {
                        if let Some(suffix) = self.compiled.conditional_suffix(name) {
                            path.push_str(suffix);
                        }
                    }
                }
            }
        }
        while path.contains("//") {
            path = path.replace("//", "/");
        }
        let path = path.trim_start_matches(|c| c == '.' || c == '/');

        let trimmed = host.trim_end_matches('/');
        let (scheme, bare_host) = match trimmed.split_once("://") {
            Some((scheme, host)) => (Some(scheme), host),
            None => (None, trimmed),
        };
        let effective_host = match (&self.host, &self.host_regex) {
            (Some(route_host), Some(check)) if !check.is_match(bare_host) => {
                route_host.replace("{basename}", bare_host)
            }
            _ => bare_host.to_string(),
        };

        let mut rendered = String::new();
        if let Some(scheme) = scheme {
            rendered.push_str(scheme);
            rendered.push_str("://");
        }
        rendered.push_str(&effective_host);
        rendered.push('/');
        rendered.push_str(path);
        if !query.is_empty() {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (name, value) in &query {
                serializer.append_pair(name, value);
            }
            rendered.push('?');
            rendered.push_str(&serializer.finish());
        }

        debug!(
            controller = %self.controller,
            pattern = %pattern,
            url = %rendered,
            "Generated route URL"
        );
        Ok(rendered)
    }
}
