#![forbid(unsafe_code)]

//! Program runtime for the TEEMs site.
//!
//! - [`program`]: the [`Model`](program::Model) contract and [`Cmd`](program::Cmd) side effects.
//! - [`subscription`]: declarative viewport observations reconciled after each update.
//! - [`viewport`]: the last known viewport and element bounds.
//! - [`state_persistence`]: key/value storage backends for the durable acknowledgement flag.
//! - [`step_program`]: a host-driven runner with no threads and no blocking.

pub mod program;
pub mod state_persistence;
pub mod step_program;
pub mod subscription;
pub mod viewport;

pub use program::{Cmd, Model};
pub use state_persistence::{MemoryStorage, StorageBackend, StorageError, StorageResult};
pub use step_program::{HostOutputs, StepProgram, StepResult};
pub use subscription::{SubId, Subscription, ViewportEntry};
pub use viewport::ViewportState;
