#![forbid(unsafe_code)]

//! Host-driven program runner.
//!
//! [`StepProgram`] drives a [`Model`] through init / event / update / view
//! cycles without threads or blocking. The host (browser glue or a test)
//! controls the loop:
//!
//! 1. Push events via [`StepProgram::push_event`] or messages via [`StepProgram::send`].
//! 2. Call [`StepProgram::step`] to process everything pending and render.
//! 3. Read markup, navigations and log lines via [`StepProgram::take_outputs`].
//!
//! # Example
//!
//! ```ignore
//! use teems_runtime::step_program::StepProgram;
//! use teems_core::event::Event;
//!
//! let mut prog = StepProgram::new(MyModel::default());
//! prog.init();
//! prog.push_event(Event::Hydrated);
//! let result = prog.step();
//! if result.rendered {
//!     let outputs = prog.take_outputs();
//!     // Patch outputs.html into the page...
//! }
//! ```
//!
//! # Settling
//!
//! After each batch of updates the runner reconciles the model's declared
//! subscriptions and polls them against the current [`ViewportState`].
//! Messages they produce are applied, which may change the declaration
//! again, so the cycle repeats until nothing new is produced (bounded by
//! [`MAX_SETTLE_ROUNDS`]).

use std::collections::VecDeque;

use teems_core::event::Event;

use crate::program::{Cmd, Model};
use crate::subscription::{SubId, SubscriptionManager};
use crate::viewport::ViewportState;

/// Upper bound on reconcile/poll rounds per step.
pub const MAX_SETTLE_ROUNDS: usize = 32;

/// Result of a single [`StepProgram::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether a frame was rendered during this step.
    pub rendered: bool,
    /// Number of host events processed during this step.
    pub events_processed: u32,
    /// Number of model updates applied during this step.
    pub updates: u32,
    /// Current frame index (monotonically increasing).
    pub frame_idx: u64,
}

/// Everything the host needs to act on after a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostOutputs {
    /// Markup of the most recent frame, if one was rendered since the last take.
    pub html: Option<String>,
    /// Paths the host should push onto its history, in order.
    pub navigations: Vec<String>,
    /// Lines emitted by `Cmd::Log`.
    pub logs: Vec<String>,
}

impl HostOutputs {
    /// Whether there is nothing for the host to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.navigations.is_empty() && self.logs.is_empty()
    }
}

/// Host-driven, non-blocking program runner.
///
/// # Lifecycle
///
/// 1. [`StepProgram::new`]: wrap the model.
/// 2. [`StepProgram::init`]: call once to initialize the model and render the first frame.
/// 3. [`StepProgram::step`]: call whenever the host has pushed events.
/// 4. Read outputs after each step via [`StepProgram::take_outputs`].
pub struct StepProgram<M: Model> {
    model: M,
    subscriptions: SubscriptionManager<M::Message>,
    viewport: ViewportState,
    events: VecDeque<Event>,
    messages: VecDeque<M::Message>,
    outputs: HostOutputs,
    location: Option<String>,
    initialized: bool,
    dirty: bool,
    updates: u32,
    frame_idx: u64,
}

impl<M: Model> StepProgram<M> {
    /// Create a new step program around `model`.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            subscriptions: SubscriptionManager::new(),
            viewport: ViewportState::new(),
            events: VecDeque::new(),
            messages: VecDeque::new(),
            outputs: HostOutputs::default(),
            location: None,
            initialized: false,
            dirty: true,
            updates: 0,
            frame_idx: 0,
        }
    }

    /// Initialize the model and render the first frame.
    ///
    /// Must be called exactly once before [`step`](Self::step).
    pub fn init(&mut self) {
        assert!(!self.initialized, "StepProgram::init() called twice");
        self.initialized = true;
        let cmd = self.model.init();
        self.execute_cmd(cmd);
        self.settle();
        self.render_frame();
    }

    /// Process every pending event and message, settle subscriptions, and
    /// render if anything changed.
    pub fn step(&mut self) -> StepResult {
        assert!(self.initialized, "StepProgram::step() called before init()");
        self.updates = 0;

        let mut events_processed: u32 = 0;
        loop {
            while let Some(event) = self.events.pop_front() {
                events_processed += 1;
                self.handle_event(event);
            }
            while let Some(msg) = self.messages.pop_front() {
                self.apply(msg);
            }
            self.settle();
            if self.events.is_empty() && self.messages.is_empty() {
                break;
            }
        }

        let rendered = if self.dirty {
            self.render_frame();
            true
        } else {
            false
        };

        tracing::trace!(
            events_processed,
            updates = self.updates,
            rendered,
            frame_idx = self.frame_idx,
            "step complete"
        );

        StepResult {
            rendered,
            events_processed,
            updates: self.updates,
            frame_idx: self.frame_idx,
        }
    }

    /// Queue a host event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queue a model message for the next [`step`](Self::step).
    pub fn send(&mut self, msg: M::Message) {
        self.messages.push_back(msg);
    }

    /// Take accumulated outputs, leaving them empty.
    pub fn take_outputs(&mut self) -> HostOutputs {
        std::mem::take(&mut self.outputs)
    }

    /// Accumulated outputs.
    #[must_use]
    pub fn outputs(&self) -> &HostOutputs {
        &self.outputs
    }

    /// The wrapped model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Last location set by navigation or a route change.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Current viewport geometry.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Ids of running subscriptions.
    #[must_use]
    pub fn active_subscriptions(&self) -> Vec<SubId> {
        self.subscriptions.active_ids()
    }

    /// Whether [`init`](Self::init) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current frame index.
    #[must_use]
    pub fn frame_idx(&self) -> u64 {
        self.frame_idx
    }

    // --- internals ---

    fn handle_event(&mut self, event: Event) {
        if self.viewport.apply(&event) {
            // Geometry is consumed by subscriptions during settle.
            return;
        }
        if let Event::RouteChanged(path) = &event {
            // The old page's regions are gone.
            self.viewport.clear_bounds();
            self.location = Some(path.clone());
        }
        self.apply(M::Message::from(event));
    }

    fn apply(&mut self, msg: M::Message) {
        self.updates += 1;
        self.dirty = true;
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    fn settle(&mut self) {
        for round in 0..MAX_SETTLE_ROUNDS {
            self.subscriptions.reconcile(self.model.subscriptions());
            let produced = self.subscriptions.poll_all(&self.viewport);
            if produced.is_empty() {
                return;
            }
            tracing::trace!(round, produced = produced.len(), "subscriptions produced messages");
            for msg in produced {
                self.apply(msg);
            }
        }
        tracing::warn!(
            rounds = MAX_SETTLE_ROUNDS,
            "subscriptions did not settle; deferring to next step"
        );
    }

    fn render_frame(&mut self) {
        let html = self.model.view().to_html();
        self.outputs.html = Some(html);
        self.dirty = false;
        self.frame_idx += 1;
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Msg(m) => self.apply(m),
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Navigate(path) => {
                tracing::debug!(path = %path, "navigate");
                self.outputs.navigations.push(path.clone());
                self.events.push_back(Event::RouteChanged(path));
            }
            Cmd::Log(text) => {
                tracing::info!(target: "teems_runtime::host_log", "{text}");
                self.outputs.logs.push(text);
            }
        }
    }
}
