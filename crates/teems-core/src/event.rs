#![forbid(unsafe_code)]

//! Canonical host events.
//!
//! The embedding host (browser glue or a test) pushes these into the runner.
//! Geometry events feed viewport subscriptions; lifecycle events reach the
//! model through `From<Event>` on its message type.

use crate::geometry::Rect;
use crate::intersection::TargetId;

/// Canonical host event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Client-side code is running and durable storage is reachable.
    ///
    /// Fired once, after the server-rendered markup has been adopted.
    Hydrated,

    /// The current location changed (link activation or history traversal).
    RouteChanged(String),

    /// An observed region was laid out at `bounds` (document coordinates).
    Layout {
        /// Region name, as emitted in the markup's `data-observe` attribute.
        target: TargetId,
        /// New bounds.
        bounds: Rect,
    },

    /// The visible viewport moved or resized.
    Viewport(Rect),
}

impl Event {
    /// Whether this event only carries geometry for the subscription layer.
    #[must_use]
    pub const fn is_geometry(&self) -> bool {
        matches!(self, Event::Layout { .. } | Event::Viewport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_events_are_classified() {
        assert!(Event::Viewport(Rect::from_size(10.0, 10.0)).is_geometry());
        assert!(
            Event::Layout {
                target: "mission".into(),
                bounds: Rect::default(),
            }
            .is_geometry()
        );
        assert!(!Event::Hydrated.is_geometry());
        assert!(!Event::RouteChanged("/".into()).is_geometry());
    }
}
