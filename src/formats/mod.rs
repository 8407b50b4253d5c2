//! File format handlers

pub mod act;

// Re-export main document types
pub use act::{ActFile, Action, AnchorPoint, Frame, Layer};
pub use act::{parse_act_bytes, read_act, serialize_act, write_act};
