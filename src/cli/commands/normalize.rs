//! CLI command: rewrite an ACT file at the newest format version

use std::path::Path;

use anyhow::Context;

use crate::formats::act::{ACT_VER_LAYER_DIMS, read_act, write_act};

/// Decode and re-encode an ACT file, upgrading it to 0x205
pub fn execute(source: &Path, destination: &Path, quiet: bool) -> anyhow::Result<()> {
    let act = read_act(source)
        .with_context(|| format!("unsupported or corrupt ACT file: {}", source.display()))?;

    write_act(&act, destination)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    if !quiet {
        println!(
            "{} ({:#06x}) -> {} ({ACT_VER_LAYER_DIMS:#06x})",
            source.display(),
            act.version,
            destination.display(),
        );
    }

    Ok(())
}
