//! Web Mercator projection (EPSG:3857) onto the unit square.
//!
//! This is the single projection implementation in the crate. Tile
//! addressing ([`TileCoordinate::from_geo`](crate::tile::TileCoordinate::from_geo))
//! and viewport placement ([`to_viewport_pixel`](crate::viewport::to_viewport_pixel))
//! both route through [`project`], which is what keeps base-map tiles and
//! overlay markers aligned on screen.

use crate::constants::MAX_LATITUDE;
use crate::geo::GeoPoint;
use std::f64::consts::PI;

/// Largest representable unit coordinate. Projected values are clamped
/// strictly below `1.0` so that tile indices derived from them stay below
/// `2^zoom` even for inputs at the south clamp edge.
const UNIT_MAX: f64 = 1.0 - f64::EPSILON;

/// Clamps a latitude to the range the projection is defined on.
pub fn clamp_lat(lat: f64) -> f64 {
    finite_or_zero(lat).clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

/// Wraps a longitude into `[-180, 180)`. `180.0` itself wraps to
/// `-180.0`; the two meridians are the same line on the globe.
pub fn wrap_lon(lon: f64) -> f64 {
    let wrapped = (finite_or_zero(lon) + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to the modulus itself for tiny negative
    // inputs, which would leave 180.0 unwrapped.
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// Projects a geographic point onto the unit square.
///
/// Both components land in `[0, 1)`, with `(0, 0)` at the north-west
/// corner of the projected world (lat 85.0511°, lon -180°) and values
/// growing east and south. Latitude is clamped, longitude wrapped, and
/// non-finite inputs default to `0.0`: malformed telemetry degrades to a
/// drawable position instead of an error.
pub fn project(point: GeoPoint) -> (f64, f64) {
    let lat = clamp_lat(point.lat);
    let lon = wrap_lon(point.lon);

    let lat_rad = lat.to_radians();
    let x = (lon + 180.0) / 360.0;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    (x.clamp(0.0, UNIT_MAX), y.clamp(0.0, UNIT_MAX))
}

/// Inverse of [`project`]: unit-square coordinates back to degrees.
/// Inputs are clamped into the unit square first.
pub fn unproject(x: f64, y: f64) -> GeoPoint {
    let x = finite_or_zero(x).clamp(0.0, UNIT_MAX);
    let y = finite_or_zero(y).clamp(0.0, UNIT_MAX);

    let lon = x * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees();

    GeoPoint::new(lat, lon)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
