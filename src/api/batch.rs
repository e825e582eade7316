use crate::api::point::MercatorPoint;
use crate::coord::Coordinate;
use geo_types::{Coord, LineString, Point};
use rayon::prelude::*;

/// Projects collections of WGS84 coordinates into storage space.
///
/// Implemented for slices of anything that is [`Coordinate`], so `Vec<(f64, f64)>`,
/// `Vec<Point<f64>>` and `Vec<Coord<f64>>` all work. Output order follows input order.
///
/// # Example
/// ```
/// use mercator_coords::{MercatorPoint, ToMercatorPoints};
///
/// let stops = vec![(-2.248, 53.481), (-1.548, 53.801)];
/// let points = stops.to_mercator_points();
/// assert_eq!(points[1], MercatorPoint::from_lon_lat(-1.548, 53.801));
/// ```
pub trait ToMercatorPoints {
    fn to_mercator_points(&self) -> Vec<MercatorPoint>;
}

impl<C: Coordinate + Sync> ToMercatorPoints for [C] {
    fn to_mercator_points(&self) -> Vec<MercatorPoint> {
        log::debug!("projecting {} coordinates to storage space", self.len());
        self.par_iter().map(MercatorPoint::from_wgs84).collect()
    }
}

/// Trait for converting collections of [`MercatorPoint`]s.
///
/// Implemented for `[MercatorPoint]` and therefore `Vec<MercatorPoint>`.
pub trait MercatorPointsToWgs84 {
    /// Converts every point back to WGS84.
    fn to_wgs84_points(&self) -> Vec<Point<f64>>;
    /// Rescales every point to pixel space at `zoom`.
    fn to_zoom(&self, zoom: i32) -> Vec<(i32, i32)>;
}

impl MercatorPointsToWgs84 for [MercatorPoint] {
    fn to_wgs84_points(&self) -> Vec<Point<f64>> {
        log::debug!("unprojecting {} storage points", self.len());
        self.par_iter().map(MercatorPoint::to_wgs84).collect()
    }

    fn to_zoom(&self, zoom: i32) -> Vec<(i32, i32)> {
        self.par_iter().map(|p| p.at_zoom(zoom)).collect()
    }
}

/// Projects a WGS84 line into an integer line in storage space.
pub fn wgs84_line_to_mercator(line: &LineString<f64>) -> LineString<i32> {
    let coords: Vec<Coord<i32>> = line
        .0
        .par_iter()
        .map(|c| MercatorPoint::from_wgs84(c).into())
        .collect();
    LineString::new(coords)
}

/// Inverse of [`wgs84_line_to_mercator`].
pub fn mercator_line_to_wgs84(line: &LineString<i32>) -> LineString<f64> {
    let coords: Vec<Coord<f64>> = line
        .0
        .par_iter()
        .map(|&c| MercatorPoint::from(c).to_wgs84().into())
        .collect();
    LineString::new(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    fn sample() -> Vec<(f64, f64)> {
        (0..500)
            .map(|i| {
                let t = f64::from(i) / 500.0;
                (-170.0 + 340.0 * t, -80.0 + 160.0 * t)
            })
            .collect()
    }

    #[test_log::test]
    fn test_batch_matches_elementwise() {
        let coords = sample();
        let points = coords.to_mercator_points();
        assert_eq!(points.len(), coords.len());
        for (c, p) in coords.iter().zip(&points) {
            assert_eq!(*p, MercatorPoint::from_wgs84(c));
        }
    }

    #[test_log::test]
    fn test_batch_from_points() {
        let points: Vec<Point<f64>> = sample().into_iter().map(Point::from).collect();
        let from_points = points.to_mercator_points();
        assert_eq!(from_points, sample().to_mercator_points());
    }

    #[test_log::test]
    fn test_batch_roundtrip() {
        let coords = sample();
        let back = coords.to_mercator_points().to_wgs84_points();
        for ((lon, lat), p) in coords.iter().zip(&back) {
            assert!((p.x() - lon).abs() < 1e-5);
            assert!((p.y() - lat).abs() < 1e-5);
        }
    }

    #[test]
    fn test_to_zoom() {
        let points = vec![MercatorPoint::new(1 << 20, 1 << 24), MercatorPoint::new(-1, 0)];
        assert_eq!(points.to_zoom(0), vec![(4, 64), (-1, 0)]);
        assert_eq!(points.to_zoom(18), vec![(1 << 20, 1 << 24), (-1, 0)]);
    }

    #[test]
    fn test_empty_slice() {
        let empty: Vec<(f64, f64)> = Vec::new();
        assert!(empty.to_mercator_points().is_empty());
    }

    #[test]
    fn test_line_conversion() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 13.4, y: 52.5), (x: -2.248, y: 53.481)];
        let merc = wgs84_line_to_mercator(&line);
        assert_eq!(merc.0.len(), 3);
        assert_eq!(merc.0[0], Coord { x: 1 << 25, y: 1 << 25 });

        let back = mercator_line_to_wgs84(&merc);
        for (a, b) in line.coords().zip(back.coords()) {
            assert!((a.x - b.x).abs() < 1e-5);
            assert!((a.y - b.y).abs() < 1e-5);
        }
    }
}
