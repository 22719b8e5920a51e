//! Locations, viewport positions, and navigation kinds.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::route::RouteDefinition;
use crate::normalize::{encode_query, normalize_path, parse_query};

/// A position in the application's URL space.
///
/// Query parameters are kept ordered so that [`Location::full_path`] is
/// deterministic for the same set of parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Normalized path component, e.g. `/cart`.
    pub path: String,
    /// Parsed query parameters, ordered by key.
    pub query: BTreeMap<String, String>,
    /// The route definition this location resolved to, once matching ran.
    #[serde(skip)]
    pub matched: Option<RouteDefinition>,
}

impl Location {
    /// Parse a full path (`/cart?sku=42`) into a location.
    ///
    /// The path component is normalized and the query parsed into an
    /// ordered map. No route is matched yet.
    pub fn parse(full: &str) -> Self {
        let (path, query) = match full.split_once('?') {
            Some((path, raw)) => (path, parse_query(raw)),
            None => (full, BTreeMap::new()),
        };
        Self {
            path: normalize_path(path),
            query,
            matched: None,
        }
    }

    /// Add or replace a query parameter.
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// The full path: normalized path plus the encoded query string.
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, encode_query(&self.query))
        }
    }

    /// Name of the matched route, if matching has run.
    pub fn route_name(&self) -> Option<&str> {
        self.matched.as_ref().map(|route| route.name.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path())
    }
}

/// Viewport offset in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    /// Horizontal offset.
    pub x: u32,
    /// Vertical offset.
    pub y: u32,
}

impl ScrollPosition {
    /// Create a position from explicit offsets.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Top-of-page position `{0,0}`.
    pub const fn top() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How a navigation was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
    /// A fresh forward navigation.
    New,
    /// A back transition through history.
    Back,
}
