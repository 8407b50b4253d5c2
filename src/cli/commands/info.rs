//! CLI command: summarize an ACT file

use std::path::Path;

use anyhow::Context;

use crate::formats::act::read_act;

/// Decode an ACT file and print a summary
pub fn execute(file: &Path, verbose: bool) -> anyhow::Result<()> {
    let act = read_act(file)
        .with_context(|| format!("unsupported or corrupt ACT file: {}", file.display()))?;

    let frame_count: usize = act.actions.iter().map(|a| a.frames.len()).sum();
    let layer_count: usize = act
        .actions
        .iter()
        .flat_map(|a| &a.frames)
        .map(|f| f.layers.len())
        .sum();

    println!("File: {}", file.display());
    println!("Version: {:#06x}", act.version);
    println!("Actions: {}", act.actions.len());
    println!("Frames: {frame_count}");
    println!("Layers: {layer_count}");
    println!("Events: {}", act.events.len());
    for (i, event) in act.events.iter().enumerate() {
        println!("  [{i}] {event}");
    }

    if verbose {
        for (ai, action) in act.actions.iter().enumerate() {
            println!(
                "Action {ai}: {} frames, interval {} ms",
                action.frames.len(),
                act.intervals[ai]
            );
            for (fi, frame) in action.frames.iter().enumerate() {
                let event = act.event_name(frame).unwrap_or("-");
                println!(
                    "  Frame {fi}: {} layers, {} anchors, event {event}",
                    frame.layers.len(),
                    frame.anchor_points.len()
                );
            }
        }
    }

    Ok(())
}
