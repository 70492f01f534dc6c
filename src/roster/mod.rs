//! Roster building.
//!
//! `RosterBuilder` turns an add trigger into a rolled character, checks the
//! team container has room for it, and renders it at the back of the team.
//! Rejections are logged and returned, never raised.

mod builder;

pub use builder::{RosterBuilder, RosterRejection};
