#![forbid(unsafe_code)]

//! Elm-style program contract.
//!
//! A [`Model`] owns its state, turns messages into state transitions in
//! [`Model::update`], renders a markup tree in [`Model::view`], and declares
//! viewport observations in [`Model::subscriptions`]. Side effects are
//! described by [`Cmd`] values and carried out by the runner.

use teems_core::event::Event;
use teems_render::Node;

use crate::subscription::Subscription;

/// Application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Must be convertible from host events.
    type Message: From<Event> + 'static;

    /// Called once when the program starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Apply one message. Returns commands for any side effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self) -> Node;

    /// Declare active subscriptions.
    ///
    /// Called after each `update()`. The runner compares the returned set
    /// (by `SubId`) against running subscriptions, starts new ones and
    /// releases the rest. Returning an empty vec releases everything.
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        vec![]
    }
}

/// Side effects executed by the runner.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Change the current route. The host is told to update its location and
    /// the model receives `Event::RouteChanged`.
    Navigate(String),
    /// Emit a line to the host log.
    Log(String),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Navigate(path) => f.debug_tuple("Navigate").field(path).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a navigation command.
    #[inline]
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate(path.into())
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch of commands, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// Whether this is [`Cmd::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Return a stable name for tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Batch(_) => "Batch",
            Self::Msg(_) => "Msg",
            Self::Navigate(_) => "Navigate",
            Self::Log(_) => "Log",
        }
    }

    /// Transform the message type.
    pub fn map<N>(self, f: &impl Fn(M) -> N) -> Cmd<N> {
        match self {
            Self::None => Cmd::None,
            Self::Batch(cmds) => Cmd::Batch(cmds.into_iter().map(|c| c.map(f)).collect()),
            Self::Msg(m) => Cmd::Msg(f(m)),
            Self::Navigate(path) => Cmd::Navigate(path),
            Self::Log(s) => Cmd::Log(s),
        }
    }
}
