//! Quoridor rules: sessions, requests and observers.
//!
//! `Session` is the only thing that mutates game state. Hosts issue
//! move/wall requests against it and get back an `ActionOutcome`; displays
//! subscribe as `Observer`s and render from the `Snapshot` they receive.

pub mod action;
pub mod observer;
pub mod session;

pub use action::{ActionOutcome, MoveTarget, Transition};
pub use observer::{Observer, Snapshot};
pub use session::Session;
