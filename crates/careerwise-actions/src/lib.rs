//! Counselor and Realist actions.
//!
//! Each action follows the host handler contract: it receives a message,
//! runs extraction, matching and formatting, and invokes its callback
//! exactly once with an [`ActionResponse`] tagged with its own
//! [`ActionKind`]. Lookup misses and internal errors become plain-language
//! replies; nothing propagates to the caller.

pub mod action;
pub mod counselor;
pub mod format;
pub mod plugin;
pub mod realist;
pub mod types;

pub use action::Action;
pub use plugin::{counselor_plugin, realist_plugin, Character, Plugin, PluginDescriptor, Route};
pub use types::*;
