/// Zoom level at which the integer storage coordinate space is defined.
pub const MERCATOR_SHIFT: i32 = 26;

/// Pixel width/height of the whole world at the storage zoom (`2^26`).
pub const MERCATOR_SIZE: i32 = 1 << MERCATOR_SHIFT;

/// Bits per tile edge; one integer unit at a target zoom is one tile pixel.
pub const TILE_SHIFT: i32 = 8;

/// Pixel width/height of a single map tile.
pub const TILE_SIZE: i32 = 1 << TILE_SHIFT;

/// Latitude bound of the square Web-Mercator projection, in degrees.
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Largest target zoom at which every storage coordinate still fits in an `i32`.
pub const MAX_TARGET_ZOOM: i32 = 31 - TILE_SHIFT;
