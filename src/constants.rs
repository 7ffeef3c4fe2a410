//! Shared constants for the slippy-map grid and the Web Mercator
//! projection. Keeping them in a single place is what lets the two call
//! sites (base-map tiles and overlay markers) agree pixel-for-pixel.

/// Square tile edge length in pixels, the slippy-map standard.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the Web Mercator projection, in degrees
/// (`atan(sinh(π))`). Latitudes beyond it are clamped, not rejected.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Lowest zoom level: the whole world in a single tile.
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom level a [`Viewport`](crate::viewport::Viewport) will
/// accept (OpenStreetMap's customary ceiling).
pub const MAX_ZOOM: u8 = 19;

/// WGS 84 equatorial radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;
