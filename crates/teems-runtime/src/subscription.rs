#![forbid(unsafe_code)]

//! Declarative viewport subscriptions.
//!
//! A model declares which targets it wants observed; the runner keeps the
//! running set in line with the declaration.
//!
//! # How it works
//!
//! 1. `Model::subscriptions()` returns the set of wanted subscriptions.
//! 2. After each `update()`, the runner compares wanted vs running ids.
//! 3. New subscriptions are started and polled right away; removed ones are released.
//! 4. Geometry changes re-poll every running subscription; produced messages
//!    are routed through `Model::update()`.

use std::collections::HashSet;
use std::fmt;

use teems_core::intersection::{IntersectionEntry, ObserveOptions, TargetId};

use crate::viewport::ViewportState;

/// A unique identifier for a subscription.
///
/// Used by the runner to track which subscriptions are active and to
/// deduplicate them across update cycles.
pub type SubId = u64;

/// A subscription produces messages from viewport state.
pub trait Subscription<M> {
    /// Unique identifier for deduplication.
    ///
    /// Subscriptions with the same id are considered identical; an unchanged
    /// id keeps the running instance (and its memory of past polls).
    fn id(&self) -> SubId;

    /// Inspect the current viewport and optionally produce a message.
    fn poll(&mut self, viewport: &ViewportState) -> Option<M>;
}

const VIEWPORT_ENTRY_SALT: u64 = 0x7465_656d_735f_7670;

/// FNV-1a over a target name, salted per subscription kind.
fn target_sub_id(target: &TargetId, salt: u64) -> SubId {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in target.as_str().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash ^ salt
}

/// Observes one target and reports whenever it starts or stops satisfying
/// its [`ObserveOptions`].
///
/// The first poll with known geometry always reports, the way an
/// intersection observer delivers an initial entry on `observe()`.
pub struct ViewportEntry<M> {
    id: SubId,
    target: TargetId,
    options: ObserveOptions,
    last_satisfied: Option<bool>,
    make_msg: Box<dyn Fn(IntersectionEntry) -> M>,
}

impl<M> ViewportEntry<M> {
    /// Observe `target` with `options`, mapping entries through `make_msg`.
    pub fn new(
        target: impl Into<TargetId>,
        options: ObserveOptions,
        make_msg: impl Fn(IntersectionEntry) -> M + 'static,
    ) -> Self {
        let target = target.into();
        Self {
            id: target_sub_id(&target, VIEWPORT_ENTRY_SALT),
            target,
            options,
            last_satisfied: None,
            make_msg: Box::new(make_msg),
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
}

impl<M> fmt::Debug for ViewportEntry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportEntry")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("options", &self.options)
            .field("last_satisfied", &self.last_satisfied)
            .finish()
    }
}

impl<M> Subscription<M> for ViewportEntry<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn poll(&mut self, viewport: &ViewportState) -> Option<M> {
        let entry = viewport.entry(&self.target, self.options.root_margin)?;
        let satisfied = self.options.is_satisfied_by(&entry);
        if self.last_satisfied == Some(satisfied) {
            return None;
        }
        self.last_satisfied = Some(satisfied);
        tracing::trace!(
            target_id = %self.target,
            ratio = entry.ratio,
            satisfied,
            "viewport entry changed"
        );
        Some((self.make_msg)(entry))
    }
}

/// Manages the lifecycle of subscriptions for a program.
pub struct SubscriptionManager<M> {
    active: Vec<RunningSubscription<M>>,
}

struct RunningSubscription<M> {
    id: SubId,
    sub: Box<dyn Subscription<M>>,
}

impl<M> Default for SubscriptionManager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> SubscriptionManager<M> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Update the running set against the declared one.
    ///
    /// Subscriptions whose id is no longer declared are released. Declared
    /// ids that are not running yet are started. Ids already running keep
    /// their existing instance; the freshly declared duplicate is dropped.
    ///
    /// Returns the ids that were started by this call.
    pub fn reconcile(&mut self, subscriptions: Vec<Box<dyn Subscription<M>>>) -> Vec<SubId> {
        let new_ids: HashSet<SubId> = subscriptions.iter().map(|s| s.id()).collect();
        let active_count_before = self.active.len();

        tracing::trace!(
            new_id_count = new_ids.len(),
            active_before = active_count_before,
            "subscription reconcile starting"
        );

        self.active.retain(|running| {
            let keep = new_ids.contains(&running.id);
            if !keep {
                tracing::debug!(sub_id = running.id, "Stopping subscription");
            }
            keep
        });

        let mut active_ids: HashSet<SubId> = self.active.iter().map(|r| r.id).collect();
        let mut started = Vec::new();
        for sub in subscriptions {
            let id = sub.id();
            if !active_ids.insert(id) {
                continue;
            }
            tracing::debug!(sub_id = id, "Starting subscription");
            self.active.push(RunningSubscription { id, sub });
            started.push(id);
        }

        tracing::trace!(
            active_before = active_count_before,
            active_after = self.active.len(),
            started = started.len(),
            "subscription reconcile complete"
        );
        started
    }

    /// Poll every running subscription, in start order.
    pub fn poll_all(&mut self, viewport: &ViewportState) -> Vec<M> {
        self.active
            .iter_mut()
            .filter_map(|running| running.sub.poll(viewport))
            .collect()
    }

    /// Release every running subscription.
    pub fn stop_all(&mut self) {
        for running in self.active.drain(..) {
            tracing::debug!(sub_id = running.id, "Stopping subscription");
        }
    }

    /// Number of running subscriptions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Ids of running subscriptions, in start order.
    #[must_use]
    pub fn active_ids(&self) -> Vec<SubId> {
        self.active.iter().map(|r| r.id).collect()
    }
}

/// A scripted subscription for tests: yields queued messages one per poll.
pub struct MockSubscription<M> {
    id: SubId,
    queued: std::collections::VecDeque<M>,
}

impl<M> MockSubscription<M> {
    /// Create a mock with a fixed id and queued messages.
    pub fn new(id: SubId, messages: Vec<M>) -> Self {
        Self {
            id,
            queued: messages.into(),
        }
    }
}

impl<M> Subscription<M> for MockSubscription<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn poll(&mut self, _viewport: &ViewportState) -> Option<M> {
        self.queued.pop_front()
    }
}
