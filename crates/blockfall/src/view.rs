//! # View Window
//!
//! The square of tiles around the player that the renderer draws, and the
//! camera that maps between world pixels and screen pixels.
//!
//! ```text
//! screen = world - camera.offset
//! offset = body.center - viewport / 2
//! ```

use blockfall_core::{Rect, Tile, TileCoord, TileStore};
use serde::{Deserialize, Serialize};

/// Default render radius in tiles.
pub const DEFAULT_RENDER_DISTANCE: i32 = 25;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// View tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Render radius in tiles.
    pub render_distance: i32,
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            render_distance: DEFAULT_RENDER_DISTANCE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Inclusive square of tile coordinates around a center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewWindow {
    center: TileCoord,
    radius: i32,
}

impl ViewWindow {
    /// The window `[center - radius, center + radius]` on both axes.
    ///
    /// A negative radius is treated as zero.
    #[must_use]
    pub const fn around(center: TileCoord, radius: i32) -> Self {
        Self {
            center,
            radius: if radius < 0 { 0 } else { radius },
        }
    }

    /// Center tile.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> TileCoord {
        self.center
    }

    /// Top-left corner (inclusive).
    #[inline]
    #[must_use]
    pub const fn min(&self) -> TileCoord {
        self.center.offset(-self.radius, -self.radius)
    }

    /// Bottom-right corner (inclusive).
    #[inline]
    #[must_use]
    pub const fn max(&self) -> TileCoord {
        self.center.offset(self.radius, self.radius)
    }

    /// Tiles per side.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> i32 {
        2 * self.radius + 1
    }

    /// Returns true if `coord` is inside the window.
    #[must_use]
    pub const fn contains(&self, coord: TileCoord) -> bool {
        let min = self.min();
        let max = self.max();
        coord.x >= min.x && coord.x <= max.x && coord.y >= min.y && coord.y <= max.y
    }

    /// Every coordinate in the window, row by row.
    pub fn coords(&self) -> impl Iterator<Item = TileCoord> {
        let min = self.min();
        let max = self.max();
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| TileCoord::new(x, y)))
    }

    /// The occupied cells of the window, row by row.
    pub fn visible_tiles<'a>(&self, store: &'a TileStore) -> impl Iterator<Item = &'a Tile> + 'a {
        self.coords().filter_map(move |coord| store.get(coord))
    }
}

/// Screen-space camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    offset: [f32; 2],
    viewport: [u32; 2],
}

impl Camera {
    /// A camera at the origin.
    #[must_use]
    pub const fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            offset: [0.0, 0.0],
            viewport: [viewport_width, viewport_height],
        }
    }

    /// World pixel shown at the screen's top-left corner.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> [f32; 2] {
        self.offset
    }

    /// Viewport size `[width, height]`.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> [u32; 2] {
        self.viewport
    }

    /// Centers the viewport on `target`.
    pub fn follow(&mut self, target: &Rect) {
        let [cx, cy] = target.center();
        self.offset = [
            cx - (self.viewport[0] / 2) as f32,
            cy - (self.viewport[1] / 2) as f32,
        ];
    }

    /// World pixel to screen pixel.
    #[inline]
    #[must_use]
    pub fn world_to_screen(&self, world: [f32; 2]) -> [f32; 2] {
        [world[0] - self.offset[0], world[1] - self.offset[1]]
    }

    /// Screen pixel to world pixel.
    #[inline]
    #[must_use]
    pub fn screen_to_world(&self, screen: [f32; 2]) -> [f32; 2] {
        [screen[0] + self.offset[0], screen[1] + self.offset[1]]
    }

    /// Screen pixel to the tile under it.
    #[must_use]
    pub fn screen_to_tile(&self, screen: [f32; 2], tile_size: u32) -> TileCoord {
        let [wx, wy] = self.screen_to_world(screen);
        TileCoord::from_pixel(wx, wy, tile_size)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::BlockType;

    #[test]
    fn test_window_size_and_order() {
        let window = ViewWindow::around(TileCoord::new(10, -4), 25);
        assert_eq!(window.side(), 51);
        assert_eq!(window.coords().count(), 51 * 51);

        let first: Vec<_> = window.coords().take(2).collect();
        assert_eq!(first, vec![TileCoord::new(-15, -29), TileCoord::new(-14, -29)]);
        assert_eq!(window.coords().last(), Some(TileCoord::new(35, 21)));
    }

    #[test]
    fn test_visible_tiles_skip_empty_cells() {
        let store: TileStore = [
            Tile::new(TileCoord::new(0, 0), BlockType::Dirt),
            Tile::new(TileCoord::new(2, 1), BlockType::Gem),
            Tile::new(TileCoord::new(3, 0), BlockType::Wood),
        ]
        .into_iter()
        .collect();

        let window = ViewWindow::around(TileCoord::new(1, 1), 1);
        let seen: Vec<_> = window.visible_tiles(&store).map(|t| t.coord).collect();
        assert_eq!(seen, vec![TileCoord::new(0, 0), TileCoord::new(2, 1)]);
        assert!(!window.contains(TileCoord::new(3, 0)));
    }

    #[test]
    fn test_camera_follow_and_click_mapping() {
        let mut camera = Camera::default();
        camera.follow(&Rect::new(100.0, 200.0, 32.0, 32.0));
        assert_eq!(camera.offset(), [116.0 - 400.0, 216.0 - 300.0]);

        // The body's center is drawn at the screen center.
        assert_eq!(camera.world_to_screen([116.0, 216.0]), [400.0, 300.0]);
        assert_eq!(camera.screen_to_tile([400.0, 300.0], 32), TileCoord::new(3, 6));
        assert_eq!(camera.screen_to_tile([0.0, 0.0], 32), TileCoord::new(-9, -3));
    }

    #[test]
    fn test_odd_viewport_halves_down() {
        let mut camera = Camera::new(801, 601);
        camera.follow(&Rect::new(0.0, 0.0, 32.0, 32.0));
        assert_eq!(camera.offset(), [16.0 - 400.0, 16.0 - 300.0]);
    }
}
