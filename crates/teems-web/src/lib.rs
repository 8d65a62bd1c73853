#![forbid(unsafe_code)]

//! Browser bridge for the NatCap TEEMs site.
//!
//! The exported pages load a small script that instantiates `TeemsWeb`
//! (wasm32 only) and forwards:
//! - clicks on `[data-action]` elements,
//! - Escape inside a `[data-escape-action]` dialog, as that action,
//! - `popstate` locations,
//! - layout and scroll geometry for `[data-observe]` regions.
//!
//! Everything except the wasm-bindgen surface and `localStorage` access is
//! platform-independent and tested natively through [`SiteHost`].

pub mod host;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use host::{HostError, SiteHost};
pub use input::{Dispatch, FrameOutput, HostInput};

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use wasm::TeemsWeb;
