//! Route patterns, metadata, and definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_path;

/// URL pattern a route is registered under.
///
/// Two forms are supported: an exact path, and a pattern ending in a single
/// dynamic rest-segment (`*`) that matches any remaining path under its
/// prefix. `/*` therefore matches every path and acts as the catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches exactly one normalized path.
    Exact(String),
    /// Matches `prefix` itself and any path below it.
    Rest {
        /// Normalized prefix preceding the rest-segment.
        prefix: String,
    },
}

impl RoutePattern {
    /// Parse a pattern string such as `/cart`, `/docs/*`, or `/*`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "*" {
            return Self::Rest {
                prefix: "/".to_string(),
            };
        }
        match raw.strip_suffix("/*") {
            Some(prefix) => Self::Rest {
                prefix: normalize_path(prefix),
            },
            None => Self::Exact(normalize_path(raw)),
        }
    }

    /// Whether this pattern matches a normalized path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => exact == path,
            Self::Rest { prefix } => {
                if prefix == "/" {
                    return true;
                }
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// Whether this is the catch-all pattern matching every path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::Rest { prefix } if prefix == "/")
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => write!(f, "{path}"),
            Self::Rest { prefix } if prefix == "/" => write!(f, "/*"),
            Self::Rest { prefix } => write!(f, "{prefix}/*"),
        }
    }
}

/// Metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Document title applied after a committed navigation, if declared.
    pub title: Option<String>,
    /// Whether the auth gate protects this route.
    pub requires_auth: bool,
}

/// Immutable mapping from a URL pattern to a loadable view and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    /// Pattern the route is registered under.
    pub pattern: RoutePattern,
    /// Route name, unique across a table.
    pub name: String,
    /// Identifier of the code chunk the view loader fetches.
    pub module: String,
    /// Title and auth metadata.
    pub meta: RouteMeta,
}

impl RouteDefinition {
    /// Create a public, untitled route.
    pub fn new(pattern: &str, name: &str, module: &str) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            name: name.to_string(),
            module: module.to_string(),
            meta: RouteMeta::default(),
        }
    }

    /// Declare the document title applied when this route commits.
    pub fn with_title(mut self, title: &str) -> Self {
        self.meta.title = Some(title.to_string());
        self
    }

    /// Require a session token for navigation to this route.
    pub fn protected(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    /// Declared title, if any.
    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    /// Whether the auth gate protects this route.
    pub fn requires_auth(&self) -> bool {
        self.meta.requires_auth
    }
}

impl fmt::Display for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pattern)
    }
}
