//! Decorative cloud layer.
//!
//! Clouds live in screen space and never interact with the world.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One cloud rectangle, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

/// Placement ranges for the cloud layer. All ranges are inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Number of clouds.
    pub count: usize,
    /// Horizontal placement range.
    pub x_range: (i32, i32),
    /// Vertical placement range.
    pub y_range: (i32, i32),
    /// Width range.
    pub width_range: (i32, i32),
    /// Height range.
    pub height_range: (i32, i32),
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 5,
            x_range: (0, 800),
            y_range: (0, 100),
            width_range: (100, 200),
            height_range: (40, 70),
        }
    }
}

/// Draws the cloud layer from `rng`.
///
/// Reversed ranges are normalised instead of panicking.
pub fn generate_clouds<R: Rng>(config: &CloudConfig, rng: &mut R) -> Vec<Cloud> {
    let mut draw = |(a, b): (i32, i32)| rng.gen_range(a.min(b)..=a.max(b));
    (0..config.count)
        .map(|_| Cloud {
            x: draw(config.x_range),
            y: draw(config.y_range),
            w: draw(config.width_range),
            h: draw(config.height_range),
        })
        .collect()
}
