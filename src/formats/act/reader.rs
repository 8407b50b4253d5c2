//! ACT file reading and parsing

#![allow(clippy::cast_possible_truncation)]

use super::document::{ActFile, Action, AnchorPoint, Frame, Layer};
use super::{
    ACT_MAGIC, ACT_VER_ANCHORS, ACT_VER_EVENTS, ACT_VER_INTERVALS, ACT_VER_LAYER_DIMS,
    ACT_VER_MIN, ACT_VER_SPLIT_SCALE, DEFAULT_INTERVAL_MS, EVENT_NAME_SIZE, INTERVAL_SCALE,
};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Read an ACT file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::InvalidActMagic`] if the file does not start with "AC".
/// Returns [`Error::UnsupportedActVersion`] for versions outside 0x200-0x205.
/// Returns [`Error::ActDecodeFailed`] if the versioned body is truncated.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InvalidActMagic`]: crate::Error::InvalidActMagic
/// [`Error::UnsupportedActVersion`]: crate::Error::UnsupportedActVersion
/// [`Error::ActDecodeFailed`]: crate::Error::ActDecodeFailed
pub fn read_act<P: AsRef<Path>>(path: P) -> Result<ActFile> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_act_bytes(&buffer)
}

/// Parse ACT data from bytes
///
/// # Errors
/// Returns an error if the data has an invalid ACT format. Decode never
/// returns a partial tree: any failure aborts the whole call.
pub fn parse_act_bytes(data: &[u8]) -> Result<ActFile> {
    let mut cursor = Cursor::new(data);

    // Header: magic, version, action count, 10 reserved bytes
    let mut magic = [0u8; 2];
    cursor.read_exact(&mut magic)?;
    if magic != ACT_MAGIC {
        return Err(Error::InvalidActMagic(magic));
    }

    let version = cursor.read_u16::<LittleEndian>()?;
    if !(ACT_VER_MIN..=ACT_VER_LAYER_DIMS).contains(&version) {
        return Err(Error::UnsupportedActVersion { version });
    }

    let num_actions = cursor.read_u16::<LittleEndian>()? as usize;

    let mut reserved = [0u8; 10];
    cursor.read_exact(&mut reserved)?;

    tracing::debug!("ACT header: version {version:#06x}, {num_actions} actions");

    // Everything past the header is version-gated; attach the detected
    // version to any failure so malformed files can be diagnosed.
    parse_body(&mut cursor, version, num_actions)
        .map_err(|source| Error::ActDecodeFailed { version, source })
}

fn parse_body(
    cursor: &mut Cursor<&[u8]>,
    version: u16,
    num_actions: usize,
) -> std::io::Result<ActFile> {
    let mut actions = Vec::with_capacity(num_actions);
    for _ in 0..num_actions {
        actions.push(parse_action(cursor, version)?);
    }

    // Event-name table, fixed 40-byte NUL-padded slots
    let mut events = Vec::new();
    if version >= ACT_VER_EVENTS {
        let num_events = cursor.read_u32::<LittleEndian>()? as usize;
        for _ in 0..num_events {
            events.push(parse_event_name(cursor)?);
        }
    }

    // One interval per action, stored /25; older files get the default
    let mut intervals = Vec::with_capacity(num_actions);
    for _ in 0..num_actions {
        if version >= ACT_VER_INTERVALS {
            intervals.push(cursor.read_f32::<LittleEndian>()? * INTERVAL_SCALE);
        } else {
            intervals.push(DEFAULT_INTERVAL_MS);
        }
    }

    Ok(ActFile {
        version,
        actions,
        events,
        intervals,
    })
}

fn parse_action(cursor: &mut Cursor<&[u8]>, version: u16) -> std::io::Result<Action> {
    let num_frames = cursor.read_u32::<LittleEndian>()? as usize;

    let mut frames = Vec::with_capacity(num_frames);
    for _ in 0..num_frames {
        frames.push(parse_frame(cursor, version)?);
    }

    Ok(Action { frames })
}

fn parse_frame(cursor: &mut Cursor<&[u8]>, version: u16) -> std::io::Result<Frame> {
    let mut range1 = [0i32; 4];
    for value in &mut range1 {
        *value = cursor.read_i32::<LittleEndian>()?;
    }

    let mut range2 = [0i32; 4];
    for value in &mut range2 {
        *value = cursor.read_i32::<LittleEndian>()?;
    }

    let num_layers = cursor.read_u32::<LittleEndian>()? as usize;
    let mut layers = Vec::with_capacity(num_layers);
    for _ in 0..num_layers {
        layers.push(parse_layer(cursor, version)?);
    }

    // Present since 0x200, which is also the version floor
    let event_id = cursor.read_i32::<LittleEndian>()?;

    let mut anchor_points = Vec::new();
    if version >= ACT_VER_ANCHORS {
        let num_anchors = cursor.read_u32::<LittleEndian>()? as usize;
        for _ in 0..num_anchors {
            anchor_points.push(parse_anchor_point(cursor)?);
        }
    }

    Ok(Frame {
        range1,
        range2,
        layers,
        event_id,
        anchor_points,
    })
}

fn parse_layer(cursor: &mut Cursor<&[u8]>, version: u16) -> std::io::Result<Layer> {
    let x = cursor.read_i32::<LittleEndian>()?;
    let y = cursor.read_i32::<LittleEndian>()?;
    let sprite_id = cursor.read_i32::<LittleEndian>()?;
    let flags = cursor.read_i32::<LittleEndian>()?;

    let mut color = [0u8; 4]; // RGBA
    cursor.read_exact(&mut color)?;

    let x_scale = cursor.read_f32::<LittleEndian>()?;
    let y_scale = if version >= ACT_VER_SPLIT_SCALE {
        cursor.read_f32::<LittleEndian>()?
    } else {
        x_scale
    };

    let rotation = cursor.read_f32::<LittleEndian>()?;
    let sprite_type = cursor.read_i32::<LittleEndian>()?;

    let (width, height) = if version >= ACT_VER_LAYER_DIMS {
        (
            cursor.read_i32::<LittleEndian>()?,
            cursor.read_i32::<LittleEndian>()?,
        )
    } else {
        (0, 0)
    };

    Ok(Layer {
        x,
        y,
        sprite_id,
        flags,
        color,
        x_scale,
        y_scale,
        rotation,
        sprite_type,
        width,
        height,
    })
}

fn parse_anchor_point(cursor: &mut Cursor<&[u8]>) -> std::io::Result<AnchorPoint> {
    // 4 unknown/reserved bytes precede each anchor record
    cursor.read_u32::<LittleEndian>()?;

    let x = cursor.read_i32::<LittleEndian>()?;
    let y = cursor.read_i32::<LittleEndian>()?;
    let attr = cursor.read_i32::<LittleEndian>()?;

    Ok(AnchorPoint { x, y, attr })
}

fn parse_event_name(cursor: &mut Cursor<&[u8]>) -> std::io::Result<String> {
    let mut slot = [0u8; EVENT_NAME_SIZE];
    cursor.read_exact(&mut slot)?;

    let len = slot.iter().position(|&b| b == 0).unwrap_or(EVENT_NAME_SIZE);
    Ok(String::from_utf8_lossy(&slot[..len]).into_owned())
}
