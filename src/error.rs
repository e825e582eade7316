/// Error type for the checked mercator-coords operations.
///
/// The plain conversions never fail; only the `checked_*` functions and the
/// validating constructors return this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MercatorError {
    /// The target zoom level is outside the supported range (0-23).
    InvalidZoomLevel(i32),
    /// Rescaling the value to the target zoom does not fit in an `i32`.
    Overflow { value: i32, target_zoom: i32 },
    /// The longitude is NaN or outside [-180, 180].
    InvalidLongitude(f64),
    /// The latitude is NaN or beyond the projection's latitude bound.
    InvalidLatitude(f64),
}

impl std::fmt::Display for MercatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MercatorError::InvalidZoomLevel(z) => write!(f, "Invalid zoom level: {}", z),
            MercatorError::Overflow { value, target_zoom } => write!(
                f,
                "Overflow: {} does not fit in 32 bits at zoom {}",
                value, target_zoom
            ),
            MercatorError::InvalidLongitude(lon) => write!(f, "Invalid longitude: {}", lon),
            MercatorError::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
        }
    }
}

impl std::error::Error for MercatorError {}
