#![forbid(unsafe_code)]

//! Last known viewport and element bounds.
//!
//! The host reports geometry through [`Event::Viewport`] and
//! [`Event::Layout`]; the runner folds those into a [`ViewportState`] that
//! subscriptions read when they are polled.

use std::collections::HashMap;

use teems_core::event::Event;
use teems_core::geometry::{Rect, Sides};
use teems_core::intersection::{IntersectionEntry, TargetId};

/// Viewport rectangle plus the bounds of every laid-out target.
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    viewport: Option<Rect>,
    bounds: HashMap<TargetId, Rect>,
}

impl ViewportState {
    /// Create an empty state (no viewport, no targets).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current viewport, if reported.
    #[must_use]
    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Record the viewport rectangle in document coordinates.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = Some(viewport);
    }

    /// Bounds of a target, if reported.
    #[must_use]
    pub fn bounds(&self, target: &TargetId) -> Option<Rect> {
        self.bounds.get(target).copied()
    }

    /// Record the bounds of a target.
    pub fn set_bounds(&mut self, target: TargetId, bounds: Rect) {
        self.bounds.insert(target, bounds);
    }

    /// Forget every target (the page was replaced).
    pub fn clear_bounds(&mut self) {
        self.bounds.clear();
    }

    /// Number of targets with known bounds.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.bounds.len()
    }

    /// Fold a geometry event into the state.
    ///
    /// Returns `false` for non-geometry events, which are left untouched.
    pub fn apply(&mut self, event: &Event) -> bool {
        match event {
            Event::Viewport(rect) => {
                self.set_viewport(*rect);
                true
            }
            Event::Layout { target, bounds } => {
                self.set_bounds(target.clone(), *bounds);
                true
            }
            _ => false,
        }
    }

    /// Intersection entry for `target` against the viewport grown by `margin`.
    ///
    /// `None` until both the viewport and the target bounds are known.
    #[must_use]
    pub fn entry(&self, target: &TargetId, margin: Sides) -> Option<IntersectionEntry> {
        let viewport = self.viewport?;
        let bounds = self.bounds(target)?;
        Some(IntersectionEntry::compute(
            target.clone(),
            bounds,
            viewport,
            margin,
        ))
    }
}
