#![forbid(unsafe_code)]

//! One-shot viewport-entry trigger.
//!
//! A [`RevealState`] starts hidden and flips to visible the first time an
//! intersection entry for its target satisfies its options. It never flips
//! back. While hidden it offers a subscription for the runner to keep alive;
//! once visible it offers none, so the runner releases the observation.

use teems_core::intersection::{IntersectionEntry, ObserveOptions, TargetId};
use teems_render::markup::Element;
use teems_runtime::subscription::{Subscription, ViewportEntry};

/// Visibility flag for one animated section.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    target: TargetId,
    options: ObserveOptions,
    visible: bool,
}

impl RevealState {
    /// A hidden section observed with `options`.
    #[must_use]
    pub fn new(target: impl Into<TargetId>, options: ObserveOptions) -> Self {
        Self {
            target: target.into(),
            options,
            visible: false,
        }
    }

    /// A section that is visible from the start (no observation).
    #[must_use]
    pub fn visible_now(target: impl Into<TargetId>) -> Self {
        Self {
            target: target.into(),
            options: ObserveOptions::default(),
            visible: true,
        }
    }

    /// Observed target.
    #[must_use]
    pub fn target(&self) -> &TargetId {
        &self.target
    }

    /// Observation options.
    #[must_use]
    pub fn options(&self) -> ObserveOptions {
        self.options
    }

    /// Whether the section has been revealed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark visible without an observation (client mount for above-the-fold
    /// sections).
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// Feed an intersection entry. Returns `true` only on the hidden to
    /// visible transition. Entries for other targets are ignored.
    pub fn observe(&mut self, entry: &IntersectionEntry) -> bool {
        if self.visible || entry.target != self.target {
            return false;
        }
        if self.options.is_satisfied_by(entry) {
            self.visible = true;
            tracing::debug!(target_id = %self.target, ratio = entry.ratio, "section revealed");
            return true;
        }
        false
    }

    /// Subscription to keep alive while hidden; `None` once visible.
    pub fn subscription<M: 'static>(
        &self,
        make_msg: impl Fn(IntersectionEntry) -> M + 'static,
    ) -> Option<Box<dyn Subscription<M>>> {
        if self.visible {
            return None;
        }
        Some(Box::new(ViewportEntry::new(
            self.target.clone(),
            self.options,
            make_msg,
        )))
    }

    /// Tag a section element with its observation target and reveal classes.
    #[must_use]
    pub fn decorate(&self, section: Element) -> Element {
        section
            .attr("data-observe", self.target.to_string())
            .class("reveal")
            .class_if(self.visible, "is-visible")
    }
}
