//! In-memory representation of an ACT animation
//!
//! The tree is `ActFile` → `Action` → `Frame` → `Layer`/`AnchorPoint`, owned
//! top-down with no parent pointers. Anything that needs to walk upward (the
//! event registry) lives on [`ActFile`] and addresses frames by index.

use super::{ACT_VER_MAX, EVENT_NAME_SIZE, LAYER_FLAG_MIRROR};
use crate::error::{Error, Result};

/// A decoded ACT animation file.
#[derive(Debug, Clone, PartialEq)]
pub struct ActFile {
    /// Format version from the file header (0x200-0x205).
    ///
    /// Informational after decode; the writer always emits 0x205.
    pub version: u16,
    /// Animation actions, in file order.
    pub actions: Vec<Action>,
    /// Event name registry. Frames reference entries by index via
    /// [`Frame::event_id`]. Each name fits a 40-byte on-disk slot.
    pub events: Vec<String>,
    /// Per-action playback interval in milliseconds, one entry per action.
    pub intervals: Vec<f32>,
}

/// A single action: an ordered run of frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Action {
    pub frames: Vec<Frame>,
}

/// One frame of an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// First collision/bounding quadruple. Opaque to the codec.
    pub range1: [i32; 4],
    /// Second collision/bounding quadruple. Opaque to the codec.
    pub range2: [i32; 4],
    /// Sprite layers composited for this frame, in draw order.
    pub layers: Vec<Layer>,
    /// Index into [`ActFile::events`], or -1 for no event.
    pub event_id: i32,
    /// Anchor points (version >= 0x203, otherwise empty).
    pub anchor_points: Vec<AnchorPoint>,
}

/// A sprite layer within a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub x: i32,
    pub y: i32,
    /// Ordinal of the sprite in the companion sprite resource.
    pub sprite_id: i32,
    /// Bit flags; bit 0 mirrors the layer vertically, the rest are reserved.
    pub flags: i32,
    /// RGBA tint, one byte per channel.
    pub color: [u8; 4],
    /// Horizontal scale factor.
    pub x_scale: f32,
    /// Vertical scale factor. Equals `x_scale` for files below 0x204.
    pub y_scale: f32,
    /// Rotation around the layer center, in degrees.
    pub rotation: f32,
    /// Sprite kind: 0 = palette-indexed, 1 = RGBA.
    pub sprite_type: i32,
    /// Layer width in pixels (version >= 0x205, otherwise 0).
    pub width: i32,
    /// Layer height in pixels (version >= 0x205, otherwise 0).
    pub height: i32,
}

/// An anchor point attached to a frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnchorPoint {
    pub x: i32,
    pub y: i32,
    /// Opaque attribute tag.
    pub attr: i32,
}

impl Default for ActFile {
    fn default() -> Self {
        Self {
            version: ACT_VER_MAX,
            actions: Vec::new(),
            events: Vec::new(),
            intervals: Vec::new(),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            range1: [0; 4],
            range2: [0; 4],
            layers: Vec::new(),
            event_id: -1,
            anchor_points: Vec::new(),
        }
    }
}

impl ActFile {
    /// Create an empty animation at the current format version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the event name a frame refers to.
    ///
    /// Returns `None` for the -1 "no event" sentinel, and also for an
    /// `event_id` outside the registry (corrupt or hand-edited files carry
    /// these; the lookup tolerates them rather than failing).
    pub fn event_name(&self, frame: &Frame) -> Option<&str> {
        if frame.event_id < 0 {
            return None;
        }
        self.events.get(frame.event_id as usize).map(String::as_str)
    }

    /// Attach an event to a frame, addressed by `(action, frame)` index.
    ///
    /// Insertion is de-duplicated: if `name` is already registered its index
    /// is reused, otherwise it is appended. Returns the event id stored into
    /// the frame.
    ///
    /// # Errors
    /// Returns [`Error::EventNameTooLong`] if `name` exceeds the 40-byte slot,
    /// or [`Error::FrameNotFound`] if the indices do not address a frame.
    pub fn set_event(&mut self, action: usize, frame: usize, name: &str) -> Result<i32> {
        if name.len() > EVENT_NAME_SIZE {
            return Err(Error::EventNameTooLong { len: name.len() });
        }

        let event_id = match self.events.iter().position(|e| e == name) {
            Some(idx) => idx as i32,
            None => {
                self.events.push(name.to_owned());
                (self.events.len() - 1) as i32
            }
        };

        let target = self
            .actions
            .get_mut(action)
            .and_then(|a| a.frames.get_mut(frame))
            .ok_or(Error::FrameNotFound { action, frame })?;
        target.event_id = event_id;

        Ok(event_id)
    }
}

impl Layer {
    /// Whether bit 0 of `flags` is set (vertical mirror).
    pub fn is_mirrored(&self) -> bool {
        self.flags & LAYER_FLAG_MIRROR != 0
    }
}
