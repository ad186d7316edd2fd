// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

/// RGB byte triple.
pub type Rgb = [u8; 3];

/// RGBA byte quadruple.
pub type Rgba = [u8; 4];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE_RGBA: Rgba = [255, 255, 255, 255];

// Enumeration for the two halves of the modified Lambert projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

/// Convert a [0, 1] channel triple into saturated bytes.
pub fn to_rgb(channels: [f64; 3]) -> Rgb {
    let mut out = [0u8; 3];
    for (o, c) in out.iter_mut().zip(channels.iter()) {
        *o = (c * 255.0).clamp(0.0, 255.0) as u8;
    }
    out
}
