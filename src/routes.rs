//! Declarative route table for the project: admin, API, PWA and the frontend catch-all.
//!
//! Routes are evaluated in order and the first match wins. The table only decides which
//! handler a path belongs to; serving the admin site or the PWA files is left to the
//! web framework hosting the project.

use regex::Regex;
use serde_json::{Value, json};

const SAMPLE_API_MESSAGE: &str = "This message is coming from the backend. \
The view is registered in the project route table and the redux code is in \
`react-app/src/js/welcome/(actions|reducers).js`. \
Please remove them when starting your project :]";

/// How a route decides whether a request path belongs to it.
#[derive(Debug, Clone)]
pub enum RouteMatcher {
    /// Path equals the value.
    Exact(String),
    /// Path equals the value or continues below it (`admin/` matches `admin/users/`).
    Prefix(String),
    /// Path matches the regular expression.
    Pattern(Regex),
}

impl RouteMatcher {
    /// Returns true when `path` (without its leading `/`) is handled by this matcher.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(value) => path == value,
            Self::Prefix(value) => path.starts_with(value.as_str()),
            Self::Pattern(pattern) => pattern.is_match(path),
        }
    }
}

/// JSON endpoints exposed under `api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// Demonstration endpoint returning a static message.
    SampleApiView,
}

impl ApiEndpoint {
    /// Response body returned by the endpoint.
    pub fn payload(&self) -> Value {
        match self {
            Self::SampleApiView => json!({ "message": SAMPLE_API_MESSAGE }),
        }
    }
}

/// Handler a request path is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Administrative interface.
    Admin,
    /// JSON API endpoint.
    Api(ApiEndpoint),
    /// Web app manifest, service worker and offline page.
    ProgressiveWebApp,
    /// Single-page frontend shell rendered with the bundle markup.
    Frontend,
}

/// A single matcher-to-handler mapping.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path matcher.
    pub matcher: RouteMatcher,
    /// Handler selected when the matcher accepts the path.
    pub target: RouteTarget,
}

/// Ordered routes evaluated first-match-wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes of the project.
    ///
    /// PWA routes are only mounted outside debug mode, ahead of the frontend catch-all so
    /// they are not swallowed by it.
    pub fn project(debug: bool) -> Self {
        let mut table = Self::new()
            .with(RouteMatcher::Prefix("admin/".into()), RouteTarget::Admin)
            .with(
                RouteMatcher::Exact("api/sample-api-view/".into()),
                RouteTarget::Api(ApiEndpoint::SampleApiView),
            );

        if !debug {
            for path in ["manifest.json", "serviceworker.js", "offline/"] {
                table.push(
                    RouteMatcher::Exact(path.into()),
                    RouteTarget::ProgressiveWebApp,
                );
            }
        }

        let catch_all = Regex::new(r"^.*$").expect("invalid catch-all regex");
        table.with(RouteMatcher::Pattern(catch_all), RouteTarget::Frontend)
    }

    /// Append a route after the existing ones.
    pub fn push(&mut self, matcher: RouteMatcher, target: RouteTarget) {
        self.routes.push(Route { matcher, target });
    }

    /// Builder form of [`RouteTable::push`].
    pub fn with(mut self, matcher: RouteMatcher, target: RouteTarget) -> Self {
        self.push(matcher, target);
        self
    }

    /// Routes in evaluation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Handler for a request path, or `None` when no route accepts it.
    pub fn resolve(&self, path: &str) -> Option<RouteTarget> {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map(|route| route.target)
    }
}
