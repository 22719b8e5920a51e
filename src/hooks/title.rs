//! Document title synchronization.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::route::RouteDefinition;

/// Sink for the document shell's visible title.
pub trait TitleSink: Send + Sync {
    /// Replace the visible title.
    fn set_title(&self, title: &str);

    /// The currently visible title.
    fn title(&self) -> String;
}

/// In-memory stand-in for `document.title`.
#[derive(Debug, Default)]
pub struct DocumentTitle {
    current: RwLock<String>,
}

impl DocumentTitle {
    /// Create a shell with an empty title.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TitleSink for DocumentTitle {
    fn set_title(&self, title: &str) {
        *self.current.write() = title.to_string();
    }

    fn title(&self) -> String {
        self.current.read().clone()
    }
}

/// Applies a committed route's declared title to the document shell.
///
/// Runs exactly once per committed navigation, after the commit. Routes
/// without a declared title leave the shell title unchanged.
pub struct TitleSynchronizer {
    sink: Arc<dyn TitleSink>,
}

impl TitleSynchronizer {
    /// Create a synchronizer writing to `sink`.
    pub fn new(sink: Arc<dyn TitleSink>) -> Self {
        Self { sink }
    }

    /// Set the title to the route's declared one; no-op if it has none.
    pub fn apply(&self, route: &RouteDefinition) {
        if let Some(title) = route.title() {
            self.sink.set_title(title);
        }
    }
}
