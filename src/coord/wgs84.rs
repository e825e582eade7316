//! Spherical Web-Mercator projection of WGS84 coordinates.
//!
//! Every function takes a `map_size`: the pixel span of the whole world at
//! the zoom level the planar coordinates are expressed in. X grows eastwards
//! from the antimeridian, Y grows southwards from the top edge of the map.
//! Inputs are never clamped.

use std::f64::consts::{FRAC_PI_4, PI};

/// Projects a longitude in degrees onto the X axis.
pub fn lon2merc(lon: f64, map_size: f64) -> f64 {
    (lon + 180.0) / 360.0 * map_size
}

/// Projects a latitude in degrees onto the Y axis.
///
/// Latitudes beyond roughly ±85.0511° land outside `[0, map_size]`; the poles
/// themselves give huge or non-finite values.
pub fn lat2merc(lat: f64, map_size: f64) -> f64 {
    let y = (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (1.0 - y / PI) / 2.0 * map_size
}

/// Inverse of [`lon2merc`].
pub fn merc2lon(x: f64, map_size: f64) -> f64 {
    x / map_size * 360.0 - 180.0
}

/// Inverse of [`lat2merc`].
pub fn merc2lat(y: f64, map_size: f64) -> f64 {
    (PI * (1.0 - 2.0 * y / map_size)).sinh().atan().to_degrees()
}
