//! Ordered route registry.

use std::collections::BTreeSet;

use crate::normalize::normalize_path;
use crate::types::route::RouteDefinition;

/// Construction-time configuration errors for a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The same route name appears more than once.
    #[error("route name '{0}' is registered more than once")]
    DuplicateName(String),
    /// A catch-all entry is not the last entry.
    #[error("catch-all route '{0}' must be the last entry")]
    CatchAllNotLast(String),
}

/// Static, ordered registry mapping path patterns to route definitions.
///
/// Matching walks the declared order and returns the first hit, so a
/// catch-all entry, if present, must come last. Route names are unique.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Build a table, validating name uniqueness and catch-all placement.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, TableError> {
        let mut seen = BTreeSet::new();
        for route in &routes {
            if !seen.insert(route.name.as_str()) {
                return Err(TableError::DuplicateName(route.name.clone()));
            }
        }
        for (index, route) in routes.iter().enumerate() {
            if route.pattern.is_catch_all() && index + 1 != routes.len() {
                return Err(TableError::CatchAllNotLast(route.name.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// First definition (in declared order) whose pattern matches `path`.
    ///
    /// Returns `None` only when no entry matches and no catch-all is
    /// registered, which the table's owner is expected to prevent.
    pub fn match_path(&self, path: &str) -> Option<&RouteDefinition> {
        let path = normalize_path(path);
        self.routes.iter().find(|route| route.pattern.matches(&path))
    }

    /// Look up a definition by its unique name.
    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// All definitions in declared order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
