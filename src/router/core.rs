use crate::errors::RouteGenerationError;
use crate::matcher::{RouteMatch, RouteRequest};
use crate::route::Route;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Ordered route table.
///
/// Matching is a sequential scan in declaration order; the first route whose
/// guards and path regex accept the request wins. Reverse lookup scans the
/// same order and picks the first route whose controller identity and
/// requirement checks pass.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router from an already-built route list.
    #[must_use]
    pub fn with_routes(routes: Vec<Route>) -> Self {
        let patterns: Vec<&str> = routes.iter().take(10).map(Route::pattern).collect();
        info!(
            routes_count = routes.len(),
            routes_summary = ?patterns,
            "Routing table loaded"
        );
        Self { routes }
    }

    /// Register a route. Declaration order is match order.
    pub fn add(&mut self, route: Route) {
        debug!(
            controller = %route.controller(),
            pattern = %route.pattern(),
            "Route registered"
        );
        self.routes.push(route);
    }

    /// Registered routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// All registered pattern strings, useful for startup diagnostics.
    #[must_use]
    pub fn route_patterns(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|route| route.pattern().to_string())
            .collect()
    }

    /// Match a request against the table, first match winning.
    ///
    /// Returns the matched route together with its captured bindings, or
    /// `None` when no route accepts the request.
    #[must_use]
    pub fn matched(&self, request: &impl RouteRequest) -> Option<(&Route, RouteMatch)> {
        debug!(
            method = %request.method(),
            path = %request.path(),
            "Route match attempt"
        );
        for route in &self.routes {
            if let Some(matched) = route.matches(request) {
                return Some((route, matched));
            }
        }
        warn!(
            method = %request.method(),
            path = %request.path(),
            "No route matched"
        );
        None
    }

    /// Generate a URL for a controller identity.
    ///
    /// Scans the table for the first route whose [`Route::check`] accepts
    /// the controller and argument set, then delegates to
    /// [`Route::generate`].
    pub fn url(
        &self,
        controller: &str,
        host: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<String, RouteGenerationError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.check(controller, arguments))
            .ok_or_else(|| RouteGenerationError::NoRouteForController {
                controller: controller.to_string(),
            })?;
        route.generate(host, arguments)
    }
}
