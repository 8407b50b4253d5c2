//! # actfile
//!
//! A pure-Rust library for the ACT sprite-animation container format used by
//! 2D game clients alongside SPR sprite sheets.
//!
//! An ACT file is a tree: actions hold frames, frames composite sprite layers
//! and optionally carry anchor points and an event reference. Six format
//! revisions (0x200-0x205) are supported for reading; writing always targets
//! the newest revision.
//!
//! ## Quick Start
//!
//! ```no_run
//! use actfile::formats::act::{read_act, write_act};
//!
//! // Load an animation
//! let mut act = read_act("idle.act")?;
//! println!("{} actions, {} events", act.actions.len(), act.events.len());
//!
//! // Tag a frame with an event and save (upgrades the file to 0x205)
//! act.set_event(0, 0, "footstep")?;
//! write_act(&act, "idle_tagged.act")?;
//! # Ok::<(), actfile::Error>(())
//! ```
//!
//! Working from an in-memory buffer:
//!
//! ```no_run
//! use actfile::formats::act::{parse_act_bytes, serialize_act};
//!
//! let data = std::fs::read("walk.act")?;
//! let act = parse_act_bytes(&data)?;
//! let bytes = serialize_act(&act)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `act-tool` command-line binary

pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::act::{ActFile, Action, AnchorPoint, Frame, Layer};
    pub use crate::formats::act::{parse_act_bytes, read_act, serialize_act, write_act};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
