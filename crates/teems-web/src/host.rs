#![forbid(unsafe_code)]

//! Platform-independent bridge between the page script and the site model.
//!
//! [`SiteHost`] owns a [`StepProgram<SiteModel>`]. Each call feeds one
//! [`HostInput`], steps the runner to quiescence, and returns the
//! [`FrameOutput`] the script should apply. The wasm export wraps this type;
//! native tests drive it directly.

use std::fmt;
use std::rc::Rc;

use teems_runtime::{StepProgram, StorageBackend};
use teems_site::SiteModel;
use teems_site::action::ActionParseError;
use teems_site::pages::canonical_path;

use crate::input::{Dispatch, FrameOutput, HostInput};

/// Errors from handling one host input.
#[derive(Debug)]
pub enum HostError {
    /// The input (or the output) was not valid JSON for the schema.
    Json(serde_json::Error),
    /// An action string named no known action.
    Action(ActionParseError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid host input: {e}"),
            Self::Action(e) => write!(f, "invalid action: {e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Action(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ActionParseError> for HostError {
    fn from(e: ActionParseError) -> Self {
        Self::Action(e)
    }
}

/// The site running inside one page.
pub struct SiteHost {
    program: StepProgram<SiteModel>,
}

impl fmt::Debug for SiteHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteHost")
            .field("model", self.program.model())
            .field("frame_idx", &self.program.frame_idx())
            .finish()
    }
}

impl SiteHost {
    /// Adopt the server-rendered page at `path`.
    ///
    /// The first frame matches the exported markup, so it is discarded; the
    /// script sends [`HostInput::Hydrated`] once it has wired up listeners.
    /// Directory-index paths (`/people/`) resolve to their page.
    pub fn new(path: &str, storage: Rc<dyn StorageBackend>, copyright_year: i32) -> Self {
        let path = canonical_path(path);
        let mut program = StepProgram::new(SiteModel::new(path, storage, copyright_year));
        program.init();
        let _ = program.take_outputs();
        tracing::debug!(path, "site host created");
        Self { program }
    }

    /// Apply one input and return what changed.
    ///
    /// An invalid action leaves the model untouched.
    pub fn handle(&mut self, input: HostInput) -> Result<FrameOutput, HostError> {
        match input.into_dispatch() {
            Ok(Dispatch::Event(event)) => self.program.push_event(event),
            Ok(Dispatch::Message(msg)) => self.program.send(msg),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring host action");
                return Err(e.into());
            }
        }
        self.program.step();
        Ok(self.program.take_outputs().into())
    }

    /// [`handle`](Self::handle) over JSON strings.
    pub fn handle_json(&mut self, input: &str) -> Result<String, HostError> {
        let input = HostInput::from_json_str(input)?;
        let output = self.handle(input)?;
        Ok(output.to_json_string()?)
    }

    /// The site model.
    #[must_use]
    pub fn model(&self) -> &SiteModel {
        self.program.model()
    }

    /// Last location pushed by navigation or history.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.program.location()
    }
}
