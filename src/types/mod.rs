//! Core types for the navigation kernel.

pub mod decision;
pub mod location;
pub mod route;

pub use decision::GuardDecision;
pub use location::{Location, NavigationKind, ScrollPosition};
pub use route::{RouteDefinition, RouteMeta, RoutePattern};
