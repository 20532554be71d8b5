//! Loading sprite art from text files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::Sprite;

/// File names of the ship's two animation frames.
pub const ROCKET_FRAMES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Read one sprite file. Empty art is rejected.
pub fn load_sprite(path: &Path) -> Result<Sprite> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read sprite {}", path.display()))?;
    let sprite = Sprite::from_text(&text);
    if sprite.is_empty() {
        bail!("sprite {} is empty", path.display());
    }
    tracing::debug!(
        path = %path.display(),
        height = sprite.height(),
        width = sprite.width(),
        "sprite loaded"
    );
    Ok(sprite)
}

/// Load both ship frames from `dir`.
pub fn load_rocket_frames(dir: &Path) -> Result<[Sprite; 2]> {
    let [a, b] = ROCKET_FRAMES.map(|name| dir.join(name));
    Ok([load_sprite(&a)?, load_sprite(&b)?])
}
