use crate::coord::wgs84::{lat2merc, lon2merc, merc2lat, merc2lon};
use crate::core::constants::{MAX_LATITUDE, MERCATOR_SIZE};

/// Rounds to nearest with ties toward +inf, computed as `floor(v + 0.5)`,
/// then saturates into `i32`.
///
/// The addition itself can round, so `0.49999999999999994` yields `1`.
/// NaN becomes `0`, infinities become `i32::MIN` / `i32::MAX`.
fn round_to_storage(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Projects a longitude in degrees to a storage-space X coordinate.
///
/// # Example
/// ```
/// use mercator_coords::{MERCATOR_SIZE, mercator_from_longitude};
///
/// assert_eq!(mercator_from_longitude(0.0), MERCATOR_SIZE / 2);
/// assert_eq!(mercator_from_longitude(-180.0), 0);
/// ```
pub fn mercator_from_longitude(lon: f64) -> i32 {
    round_to_storage(lon2merc(lon, f64::from(MERCATOR_SIZE)))
}

/// Projects a latitude in degrees to a storage-space Y coordinate.
///
/// Latitudes beyond [`MAX_LATITUDE`] are not clamped and land outside
/// `[0, MERCATOR_SIZE)`.
///
/// # Example
/// ```
/// use mercator_coords::{MERCATOR_SIZE, mercator_from_latitude};
///
/// assert_eq!(mercator_from_latitude(0.0), MERCATOR_SIZE / 2);
/// assert!(mercator_from_latitude(53.481) < MERCATOR_SIZE / 2);
/// ```
pub fn mercator_from_latitude(lat: f64) -> i32 {
    round_to_storage(lat2merc(lat, f64::from(MERCATOR_SIZE)))
}

/// Converts a storage-space X coordinate back to a longitude in degrees.
///
/// `mx` need not be integral, e.g. `mx + 0.5` yields the pixel centre.
pub fn mercator_to_longitude(mx: f64) -> f64 {
    merc2lon(mx, f64::from(MERCATOR_SIZE))
}

/// Converts a storage-space Y coordinate back to a latitude in degrees.
pub fn mercator_to_latitude(my: f64) -> f64 {
    merc2lat(my, f64::from(MERCATOR_SIZE))
}

/// Whether `lat` lies inside the square projection's latitude range.
pub fn is_valid_latitude(lat: f64) -> bool {
    (-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 360.0 / MERCATOR_SIZE as f64;

    #[test]
    fn test_origin_maps_to_centre() {
        assert_eq!(mercator_from_longitude(0.0), 33554432);
        assert_eq!(mercator_from_latitude(0.0), 33554432);
    }

    #[test]
    fn test_longitude_roundtrip() {
        let mut lon = -179.99;
        while lon < 180.0 {
            let back = mercator_to_longitude(f64::from(mercator_from_longitude(lon)));
            assert!((back - lon).abs() <= TOLERANCE, "lon {lon} came back as {back}");
            lon += 7.31;
        }
    }

    #[test]
    fn test_latitude_roundtrip() {
        let mut lat = -84.99;
        while lat < 85.0 {
            let back = mercator_to_latitude(f64::from(mercator_from_latitude(lat)));
            assert!((back - lat).abs() <= TOLERANCE, "lat {lat} came back as {back}");
            lat += 3.17;
        }
    }

    #[test]
    fn test_inverse_of_map_edges() {
        assert_eq!(mercator_to_longitude(0.0), -180.0);
        assert_eq!(mercator_to_longitude(f64::from(MERCATOR_SIZE)), 180.0);
        assert!((mercator_to_latitude(0.0) - MAX_LATITUDE).abs() < 1e-9);
        assert!((mercator_to_latitude(f64::from(MERCATOR_SIZE)) + MAX_LATITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_ties_go_up() {
        assert_eq!(round_to_storage(2.5), 3);
        assert_eq!(round_to_storage(-2.5), -2);
        assert_eq!(round_to_storage(-2.51), -3);
        assert_eq!(round_to_storage(0.49999999999999994), 1);
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        assert_eq!(mercator_from_longitude(f64::NAN), 0);
        assert_eq!(mercator_from_longitude(f64::INFINITY), i32::MAX);
        assert_eq!(mercator_from_latitude(f64::NAN), 0);
        assert!(mercator_to_latitude(f64::NAN).is_nan());
    }

    #[test]
    fn test_out_of_range_longitude_is_not_wrapped() {
        assert!(mercator_from_longitude(190.0) > MERCATOR_SIZE);
        assert!(mercator_from_longitude(-190.0) < 0);
    }

    #[test]
    fn test_is_valid_latitude() {
        assert!(is_valid_latitude(0.0));
        assert!(is_valid_latitude(-85.0));
        assert!(!is_valid_latitude(86.0));
        assert!(!is_valid_latitude(f64::NAN));
    }
}
