//! Viewport placement: from geographic coordinates to on-screen pixels.
//!
//! A [`Viewport`] is a fixed panel (the map widget on the mirror) centered
//! on a home location. [`to_viewport_pixel`] places any geographic point on
//! that panel, and [`Viewport::visible_tiles`] enumerates the base-map
//! tiles needed to paint it. Both go through the same projection with the
//! same continuous center, so tiles, radar frames and aircraft markers
//! cannot drift apart.

use crate::constants::{EARTH_RADIUS, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
use crate::geo::{GeoBounds, GeoPoint};
use crate::mercator;
use crate::tile::{TileCoordinate, TileId};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// A position on the viewport, in pixels from the top-left corner.
/// `x` grows rightwards, `y` grows downwards. Values outside
/// `[0, width) x [0, height)` are meaningful: they describe points beyond
/// the panel edge, which overlays use to decide what to cull.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportPixel {
    pub x: f64,
    pub y: f64,
}

impl ViewportPixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other` in pixels.
    pub fn distance_to(&self, other: &ViewportPixel) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for ViewportPixel {
    type Output = ViewportPixel;

    fn add(self, other: ViewportPixel) -> ViewportPixel {
        ViewportPixel::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for ViewportPixel {
    type Output = ViewportPixel;

    fn sub(self, other: ViewportPixel) -> ViewportPixel {
        ViewportPixel::new(self.x - other.x, self.y - other.y)
    }
}

/// A base-map tile and the viewport position of its north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub id: TileId,
    pub origin: ViewportPixel,
}

/// Places a geographic point on a viewport of `width` x `height` pixels
/// whose middle shows the location `center` was derived from.
///
/// `center` must be the continuous tile coordinate of the viewport center
/// (see [`TileCoordinate::from_geo`]), never a floored one: flooring
/// shifts every placement by the center's sub-tile remainder. The point
/// is projected at `center.zoom` through the same implementation as tile
/// addressing, so a point equal to the center lands exactly at
/// `(width / 2, height / 2)`.
pub fn to_viewport_pixel(
    point: GeoPoint,
    center: TileCoordinate,
    width: f64,
    height: f64,
) -> ViewportPixel {
    let tile_size = f64::from(TILE_SIZE);
    let coord = TileCoordinate::from_geo(point, center.zoom);
    ViewportPixel {
        x: (coord.x - center.x) * tile_size + width / 2.0,
        y: (coord.y - center.y) * tile_size + height / 2.0,
    }
}

/// A fixed map panel: a center location, a zoom level and pixel
/// dimensions. Mirrors configure one per dashboard widget and keep it for
/// the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    #[serde(deserialize_with = "clamp_zoom")]
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

/// Settings files go through the same zoom clamp as [`Viewport::new`].
fn clamp_zoom<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let zoom = u8::deserialize(deserializer)?;
    Ok(zoom.clamp(MIN_ZOOM, MAX_ZOOM))
}

impl Viewport {
    /// Creates a viewport. `zoom` is clamped into
    /// [[`MIN_ZOOM`], [`MAX_ZOOM`]].
    pub fn new(center: GeoPoint, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
        }
    }

    /// Continuous tile coordinate of the viewport center.
    pub fn center_tile(&self) -> TileCoordinate {
        TileCoordinate::from_geo(self.center, self.zoom)
    }

    /// Places a geographic point on this viewport.
    pub fn locate(&self, point: GeoPoint) -> ViewportPixel {
        to_viewport_pixel(point, self.center_tile(), self.width, self.height)
    }

    /// Geographic location under a viewport pixel. Pixels outside the
    /// projected world resolve to its edge.
    pub fn geo_at(&self, pixel: ViewportPixel) -> GeoPoint {
        let tile_size = f64::from(TILE_SIZE);
        let center = self.center_tile();
        TileCoordinate::new(
            center.x + (pixel.x - self.width / 2.0) / tile_size,
            center.y + (pixel.y - self.height / 2.0) / tile_size,
            center.zoom,
        )
        .to_geo()
    }

    /// Geographic rectangle currently on screen. Panels spanning the
    /// antimeridian saturate at ±180 rather than wrapping.
    pub fn geo_bounds(&self) -> GeoBounds {
        let nw = self.geo_at(ViewportPixel::new(0.0, 0.0));
        let se = self.geo_at(ViewportPixel::new(self.width, self.height));
        GeoBounds::new(GeoPoint::new(se.lat, nw.lon), GeoPoint::new(nw.lat, se.lon))
    }

    /// Whether a placed pixel is actually on the panel.
    pub fn contains(&self, pixel: ViewportPixel) -> bool {
        pixel.x >= 0.0 && pixel.x < self.width && pixel.y >= 0.0 && pixel.y < self.height
    }

    /// Ground distance covered by one pixel at the viewport center, in
    /// meters. Web Mercator stretches with latitude, hence the cosine.
    pub fn meters_per_pixel(&self) -> f64 {
        let lat = mercator::clamp_lat(self.center.lat).to_radians();
        let world_px = f64::from(TILE_SIZE) * 2_f64.powi(i32::from(self.zoom));
        2.0 * PI * EARTH_RADIUS * lat.cos() / world_px
    }

    /// The tiles needed to paint this viewport, each with the viewport
    /// position of its north-west corner.
    ///
    /// Exactly the tiles intersecting the panel, row-major. Rows beyond
    /// the poles are skipped; columns wrap across the antimeridian. A
    /// wrapped tile keeps its unwrapped screen position, so the seam
    /// stays continuous on screen while `id` stays a real tile address.
    pub fn visible_tiles(&self) -> Vec<PlacedTile> {
        let tile_size = f64::from(TILE_SIZE);
        let center = self.center_tile();

        // World-pixel position of the panel's top-left corner.
        let origin_x = center.x * tile_size - self.width / 2.0;
        let origin_y = center.y * tile_size - self.height / 2.0;

        let min_col = (origin_x / tile_size).floor() as i64;
        let max_col = ((origin_x + self.width) / tile_size).ceil() as i64 - 1;
        let min_row = (origin_y / tile_size).floor() as i64;
        let max_row = ((origin_y + self.height) / tile_size).ceil() as i64 - 1;

        let grid = 2_f64.powi(i32::from(self.zoom)) as i64;

        let mut tiles = Vec::new();
        for row in min_row..=max_row {
            if row < 0 || row >= grid {
                continue;
            }
            for col in min_col..=max_col {
                let id = TileId::new(col.rem_euclid(grid) as u32, row as u32, self.zoom);
                let origin = ViewportPixel::new(
                    col as f64 * tile_size - origin_x,
                    row as f64 * tile_size - origin_y,
                );
                tiles.push(PlacedTile { id, origin });
            }
        }

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "viewport {}x{} zoom {} covers {} tiles (cols {}..={}, rows {}..={})",
                self.width,
                self.height,
                self.zoom,
                tiles.len(),
                min_col,
                max_col,
                min_row,
                max_row
            );
        }

        tiles
    }
}
