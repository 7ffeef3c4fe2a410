//! Slippy-map tile addressing.
//!
//! [`TileCoordinate`] is the continuous position of a geographic point in
//! the tile grid at some zoom level; [`TileId`] is the discrete tile that
//! position falls in. Keeping the two apart matters: viewport placement
//! needs the continuous coordinate of the center, and flooring it too
//! early shifts every marker by the center's sub-tile remainder.

use crate::geo::{GeoBounds, GeoPoint};
use crate::mercator;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A continuous position in the tile grid at a fixed zoom level.
///
/// One unit along either axis is one tile width. At zoom `z` the world
/// spans `[0, 2^z)` on both axes, `(0, 0)` at the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileCoordinate {
    pub x: f64,
    pub y: f64,
    pub zoom: u8,
}

impl TileCoordinate {
    pub fn new(x: f64, y: f64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Projects a geographic point into the tile grid at `zoom`.
    ///
    /// Latitude is clamped to ±85.0511°, longitude wrapped into
    /// [-180, 180), and non-finite components treated as `0.0`, so this
    /// never fails. Both axes land in `[0, 2^zoom)`.
    pub fn from_geo(point: GeoPoint, zoom: u8) -> Self {
        let (x, y) = mercator::project(point);
        let scale = 2_f64.powi(zoom as i32);
        Self {
            x: x * scale,
            y: y * scale,
            zoom,
        }
    }

    /// The tile this position falls in.
    pub fn tile(&self) -> TileId {
        TileId {
            x: self.x.floor() as u32,
            y: self.y.floor() as u32,
            zoom: self.zoom,
        }
    }

    /// Position within [`tile`](Self::tile), each component in `[0, 1)`.
    pub fn frac(&self) -> (f64, f64) {
        (self.x - self.x.floor(), self.y - self.y.floor())
    }

    /// Geographic location of this exact grid position.
    pub fn to_geo(&self) -> GeoPoint {
        let scale = 2_f64.powi(self.zoom as i32);
        mercator::unproject(self.x / scale, self.y / scale)
    }
}

impl fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:.4}/{:.4}", self.zoom, self.x, self.y)
    }
}

impl From<TileCoordinate> for TileId {
    fn from(coord: TileCoordinate) -> Self {
        coord.tile()
    }
}

/// A discrete slippy-map tile address.
///
/// Displays and parses as `"zoom/x/y"`, the path layout tile servers use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TileId {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl TileId {
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Whether both indices exist at this zoom level (below `2^zoom`).
    pub fn is_valid(&self) -> bool {
        let n = 1u64 << u32::from(self.zoom).min(63);
        u64::from(self.x) < n && u64::from(self.y) < n
    }

    /// Geographic location of the tile's north-west corner.
    pub fn nw_corner(&self) -> GeoPoint {
        let scale = 2_f64.powi(self.zoom as i32);
        mercator::unproject(f64::from(self.x) / scale, f64::from(self.y) / scale)
    }

    /// Geographic rectangle this tile covers.
    pub fn bounds(&self) -> GeoBounds {
        // The south-east corner is computed in f64: the x + 1 of the
        // far-corner tile has no u32 representation at zoom >= 32.
        let scale = 2_f64.powi(i32::from(self.zoom));
        let nw = self.nw_corner();
        let se = mercator::unproject(
            (f64::from(self.x) + 1.0) / scale,
            (f64::from(self.y) + 1.0) / scale,
        );
        GeoBounds::new(GeoPoint::new(se.lat, nw.lon), GeoPoint::new(nw.lat, se.lon))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Parses `"zoom/x/y"`, validating the indices against the zoom level.
impl FromStr for TileId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 {
            return Err(Error::ParseTile(s.to_string()));
        }
        let zoom = parts[0]
            .trim()
            .parse::<u8>()
            .map_err(|_| Error::ParseTile(s.to_string()))?;
        let x = parts[1]
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::ParseTile(s.to_string()))?;
        let y = parts[2]
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::ParseTile(s.to_string()))?;

        let id = TileId::new(x, y, zoom);
        if !id.is_valid() {
            return Err(Error::TileOutOfRange { x, y, zoom });
        }
        Ok(id)
    }
}
