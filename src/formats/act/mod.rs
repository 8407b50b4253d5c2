//! ACT sprite-animation binary format module
//!
//! Versioned container for 2D animations: actions holding frames, frames
//! compositing sprite layers and carrying event/anchor data. Six format
//! revisions (0x200-0x205) extend the layout additively; the reader gates
//! each added field on the header version, the writer always emits 0x205.

mod document;
mod reader;
mod writer;

// Public API
pub use document::{ActFile, Action, AnchorPoint, Frame, Layer};
pub use reader::{parse_act_bytes, read_act};
pub use writer::{serialize_act, write_act};

/// "AC" magic at the start of every ACT file
pub const ACT_MAGIC: [u8; 2] = *b"AC";

// Version thresholds. Each revision adds fields on top of the previous one.
/// Oldest supported revision; also where the frame event-id field appears
pub const ACT_VER_MIN: u16 = 0x200;
/// Event-name table after the action records
pub const ACT_VER_EVENTS: u16 = 0x201;
/// Per-action playback intervals at the end of the file
pub const ACT_VER_INTERVALS: u16 = 0x202;
/// Anchor-point block per frame
pub const ACT_VER_ANCHORS: u16 = 0x203;
/// Independently stored vertical layer scale
pub const ACT_VER_SPLIT_SCALE: u16 = 0x204;
/// Layer width/height fields; newest revision and the writer's target
pub const ACT_VER_LAYER_DIMS: u16 = 0x205;
/// Newest supported revision
pub const ACT_VER_MAX: u16 = ACT_VER_LAYER_DIMS;

/// Size of a fixed event-name slot (NUL-padded UTF-8)
pub const EVENT_NAME_SIZE: usize = 40;

/// Stored interval values are scaled by 25 to get milliseconds
pub const INTERVAL_SCALE: f32 = 25.0;

/// Interval synthesized for files older than 0x202 (6 x 25 ms)
pub const DEFAULT_INTERVAL_MS: f32 = 6.0 * INTERVAL_SCALE;

/// Palette-indexed sprite ([`Layer::sprite_type`])
pub const SPRITE_TYPE_PALETTE: i32 = 0;
/// RGBA sprite ([`Layer::sprite_type`])
pub const SPRITE_TYPE_RGBA: i32 = 1;

/// Vertical-mirror bit in [`Layer::flags`]
pub const LAYER_FLAG_MIRROR: i32 = 0x1;
