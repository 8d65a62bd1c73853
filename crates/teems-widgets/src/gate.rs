#![forbid(unsafe_code)]

//! One-time acknowledgement gate.
//!
//! The gate reads a durable flag once, when client storage becomes
//! reachable, and shows a blocking notice until the visitor acknowledges it.
//!
//! # State machine
//!
//! ```text
//! Pending ──hydrate(flag present)──▶ Dismissed
//!    │
//!    └──hydrate(absent | empty | error)──▶ Visible ──acknowledge──▶ Dismissed
//! ```
//!
//! Only presence matters: any non-empty stored value counts as acknowledged,
//! and acknowledging writes [`ACK_VALUE`].
//!
//! `Pending` renders nothing so server-rendered markup never disagrees with
//! the client's eventual decision. Storage errors are logged and otherwise
//! ignored: an unreadable flag shows the notice, an unwritable flag only
//! dismisses it for the current page. A backend that reports itself
//! unavailable is not read or written at all.

use teems_render::markup::Element;
use teems_render::Node;
use teems_runtime::state_persistence::StorageBackend;

use crate::modal::Dialog;
use crate::{StatefulWidget, Widget};

/// Storage key of the acknowledgement flag.
pub const ACK_STORAGE_KEY: &str = "natcap-teems-disclaimer-acknowledged";

/// Value written on acknowledgement.
pub const ACK_VALUE: &str = "true";

/// Action string carried by the acknowledge button.
pub const ACKNOWLEDGE_ACTION: &str = "acknowledge";

/// Whether a stored flag value means "acknowledged".
///
/// Presence is what counts; the empty string reads as absent.
#[must_use]
pub fn is_acknowledged(stored: Option<&str>) -> bool {
    stored.is_some_and(|value| !value.is_empty())
}

/// Lifecycle of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    /// Client storage not read yet; nothing is rendered.
    #[default]
    Pending,
    /// The notice is showing.
    Visible,
    /// Acknowledged now or on an earlier visit.
    Dismissed,
}

/// State of the acknowledgement gate.
#[derive(Debug, Clone, Default)]
pub struct AcknowledgementGate {
    phase: GatePhase,
}

impl AcknowledgementGate {
    /// A gate that has not read storage yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Whether the notice is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == GatePhase::Visible
    }

    /// Read the flag and decide. Only the first call reads storage.
    pub fn hydrate(&mut self, storage: &dyn StorageBackend) {
        if self.phase != GatePhase::Pending {
            return;
        }
        let acknowledged = if !storage.is_available() {
            tracing::warn!(
                backend = storage.name(),
                "client storage unavailable; showing notice"
            );
            false
        } else {
            match storage.get(ACK_STORAGE_KEY) {
                Ok(value) => is_acknowledged(value.as_deref()),
                Err(err) => {
                    tracing::warn!(
                        backend = storage.name(),
                        error = %err,
                        "could not read acknowledgement flag; showing notice"
                    );
                    false
                }
            }
        };
        self.phase = if acknowledged {
            GatePhase::Dismissed
        } else {
            GatePhase::Visible
        };
        tracing::debug!(phase = ?self.phase, "acknowledgement gate hydrated");
    }

    /// Record the acknowledgement and close the notice.
    ///
    /// Does nothing unless the notice is showing.
    pub fn acknowledge(&mut self, storage: &dyn StorageBackend) {
        if self.phase != GatePhase::Visible {
            tracing::trace!(phase = ?self.phase, "acknowledge ignored");
            return;
        }
        if !storage.is_available() {
            tracing::warn!(
                backend = storage.name(),
                "client storage unavailable; notice will return on reload"
            );
        } else if let Err(err) = storage.set(ACK_STORAGE_KEY, ACK_VALUE) {
            tracing::warn!(
                backend = storage.name(),
                error = %err,
                "could not persist acknowledgement; notice will return on reload"
            );
        }
        self.phase = GatePhase::Dismissed;
    }
}

/// Copy shown by the gate.
#[derive(Debug, Clone, Copy)]
pub struct GateNotice {
    pub title: &'static str,
    /// Paragraphs of body text.
    pub body: &'static [&'static str],
    pub button_label: &'static str,
}

impl StatefulWidget for GateNotice {
    type State = AcknowledgementGate;

    fn render(&self, state: &AcknowledgementGate) -> Node {
        if !state.is_visible() {
            return Node::empty();
        }
        let body = Element::new("div")
            .class("notice")
            .child(Element::new("div").class("notice-icon").attr("aria-hidden", "true"))
            .child(
                Element::new("h2")
                    .attr("id", "notice-title")
                    .class("notice-title")
                    .text(self.title),
            )
            .children_from(
                self.body
                    .iter()
                    .map(|p| Element::new("p").class("notice-body").text(*p)),
            )
            .child(
                Element::new("button")
                    .attr("type", "button")
                    .class("notice-acknowledge")
                    .attr("data-action", ACKNOWLEDGE_ACTION)
                    .text(self.button_label),
            );
        Dialog::new("notice-title", body)
            .class("notice-dialog")
            .render()
    }
}
