#![forbid(unsafe_code)]

//! Core: host events, viewport geometry, intersection entries, and logging setup.

pub mod event;
pub mod geometry;
pub mod intersection;
pub mod logging;
