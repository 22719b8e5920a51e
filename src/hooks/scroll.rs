//! Viewport positioning after a committed navigation.

use crate::types::{NavigationKind, ScrollPosition};

/// Where the viewport should sit after a navigation commits.
///
/// Back navigations restore the offset saved when the target was last
/// current; anything else starts at the top of the page.
pub fn restore_position(kind: NavigationKind, saved: Option<ScrollPosition>) -> ScrollPosition {
    match (kind, saved) {
        (NavigationKind::Back, Some(position)) => position,
        _ => ScrollPosition::top(),
    }
}
