//! ACT file writing and serialization
//!
//! The writer is single-target: it always emits the newest revision (0x205)
//! regardless of the version a tree was decoded from, making every save a
//! format upgrade. Field values are written as-is with no range validation,
//! matching the format's own lack of bounds checks.

use super::document::{ActFile, Action, AnchorPoint, Frame, Layer};
use super::{ACT_MAGIC, ACT_VER_LAYER_DIMS, EVENT_NAME_SIZE, INTERVAL_SCALE};
use crate::error::Result;
use byteorder::{LittleEndian, WriteBytesExt};
use std::path::Path;

/// Write an animation to disk as a 0x205 ACT file
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_act<P: AsRef<Path>>(act: &ActFile, path: P) -> Result<()> {
    let bytes = serialize_act(act)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Serialize an animation to 0x205 ACT bytes
pub fn serialize_act(act: &ActFile) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    // Header
    output.extend_from_slice(&ACT_MAGIC);
    output.write_u16::<LittleEndian>(ACT_VER_LAYER_DIMS)?;
    output.write_u16::<LittleEndian>(act.actions.len() as u16)?;
    output.extend_from_slice(&[0u8; 10]); // Reserved

    for action in &act.actions {
        write_action(&mut output, action)?;
    }

    output.write_u32::<LittleEndian>(act.events.len() as u32)?;
    for event in &act.events {
        write_event_name(&mut output, event);
    }

    for &interval in &act.intervals {
        output.write_f32::<LittleEndian>(interval / INTERVAL_SCALE)?;
    }

    tracing::debug!(
        "serialized ACT: {} actions, {} events, {} bytes",
        act.actions.len(),
        act.events.len(),
        output.len()
    );

    Ok(output)
}

fn write_action(output: &mut Vec<u8>, action: &Action) -> Result<()> {
    output.write_u32::<LittleEndian>(action.frames.len() as u32)?;
    for frame in &action.frames {
        write_frame(output, frame)?;
    }
    Ok(())
}

fn write_frame(output: &mut Vec<u8>, frame: &Frame) -> Result<()> {
    for value in frame.range1 {
        output.write_i32::<LittleEndian>(value)?;
    }
    for value in frame.range2 {
        output.write_i32::<LittleEndian>(value)?;
    }

    output.write_u32::<LittleEndian>(frame.layers.len() as u32)?;
    for layer in &frame.layers {
        write_layer(output, layer)?;
    }

    output.write_i32::<LittleEndian>(frame.event_id)?;

    output.write_u32::<LittleEndian>(frame.anchor_points.len() as u32)?;
    for anchor in &frame.anchor_points {
        write_anchor_point(output, anchor)?;
    }

    Ok(())
}

// Always the full 0x205 field set, even for trees decoded from older files
fn write_layer(output: &mut Vec<u8>, layer: &Layer) -> Result<()> {
    output.write_i32::<LittleEndian>(layer.x)?;
    output.write_i32::<LittleEndian>(layer.y)?;
    output.write_i32::<LittleEndian>(layer.sprite_id)?;
    output.write_i32::<LittleEndian>(layer.flags)?;
    output.extend_from_slice(&layer.color);
    output.write_f32::<LittleEndian>(layer.x_scale)?;
    output.write_f32::<LittleEndian>(layer.y_scale)?;
    output.write_f32::<LittleEndian>(layer.rotation)?;
    output.write_i32::<LittleEndian>(layer.sprite_type)?;
    output.write_i32::<LittleEndian>(layer.width)?;
    output.write_i32::<LittleEndian>(layer.height)?;
    Ok(())
}

fn write_anchor_point(output: &mut Vec<u8>, anchor: &AnchorPoint) -> Result<()> {
    output.write_u32::<LittleEndian>(0)?; // Unknown/reserved
    output.write_i32::<LittleEndian>(anchor.x)?;
    output.write_i32::<LittleEndian>(anchor.y)?;
    output.write_i32::<LittleEndian>(anchor.attr)?;
    Ok(())
}

fn write_event_name(output: &mut Vec<u8>, name: &str) {
    // Fixed 40-byte slot, NUL-padded, oversize names truncated
    let bytes = name.as_bytes();
    let mut slot = [0u8; EVENT_NAME_SIZE];
    let copy_len = bytes.len().min(EVENT_NAME_SIZE);
    slot[..copy_len].copy_from_slice(&bytes[..copy_len]);
    output.extend_from_slice(&slot);
}
