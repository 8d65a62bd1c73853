#![forbid(unsafe_code)]

//! Viewport intersection entries.
//!
//! Mirrors what a browser intersection observer reports for one target: the
//! fraction of the target inside the (margin-expanded) viewport, and whether
//! the two touch at all. Computation is pure so it can run natively in tests
//! and in the host-driven runner alike.

use std::borrow::Cow;
use std::fmt;

use crate::geometry::{Rect, Sides};

/// Stable name of an observed page region (e.g. `"mission"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(Cow<'static, str>);

impl TargetId {
    /// Create an id from a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TargetId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for TargetId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Observation parameters: visible-fraction threshold and root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Minimum visible fraction in `[0, 1]`.
    pub threshold: f64,
    /// Distance the trigger region extends beyond the viewport edges.
    pub root_margin: Sides,
}

impl ObserveOptions {
    /// Options with the given threshold and no margin.
    ///
    /// Out-of-range thresholds are clamped; NaN becomes `0`.
    #[must_use]
    pub fn threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            root_margin: Sides::ZERO,
        }
    }

    /// Set the root margin.
    #[must_use]
    pub fn with_root_margin(mut self, margin: Sides) -> Self {
        self.root_margin = margin;
        self
    }

    /// Whether an entry satisfies these options.
    #[must_use]
    pub fn is_satisfied_by(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio >= self.threshold
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::threshold(0.0)
    }
}

/// One intersection observation for a target.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: TargetId,
    /// Visible fraction of the target, in `[0, 1]`.
    pub ratio: f64,
    /// The target touches or overlaps the trigger region.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Compute the entry for `bounds` against `viewport` grown by `margin`.
    ///
    /// A zero-area target counts as fully visible when it touches the region.
    #[must_use]
    pub fn compute(target: TargetId, bounds: Rect, viewport: Rect, margin: Sides) -> Self {
        let root = viewport.outer(margin);
        match bounds.intersection_opt(&root) {
            None => Self {
                target,
                ratio: 0.0,
                is_intersecting: false,
            },
            Some(hit) => {
                let area = bounds.area();
                let ratio = if area > 0.0 {
                    (hit.area() / area).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                Self {
                    target,
                    ratio,
                    is_intersecting: true,
                }
            }
        }
    }
}
