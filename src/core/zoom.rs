use crate::core::constants::{MAX_TARGET_ZOOM, MERCATOR_SHIFT, TILE_SHIFT};
use crate::error::MercatorError;

/// Bits separating storage space from `target_zoom` pixel space.
///
/// Positive when the target is coarser than storage (right shift), negative
/// when it is finer (left shift), zero at zoom 18.
pub fn zoom_shift(target_zoom: i32) -> i32 {
    MERCATOR_SHIFT.wrapping_sub(target_zoom).wrapping_sub(TILE_SHIFT)
}

/// Shifts right for non-negative `shift`, left otherwise.
///
/// Shift amounts are taken modulo 32 and left shifts wrap, matching the
/// machine's two's-complement behaviour instead of panicking.
fn shift_by(value: i32, shift: i32) -> i32 {
    if shift >= 0 {
        value.wrapping_shr(shift.unsigned_abs())
    } else {
        value.wrapping_shl(shift.unsigned_abs())
    }
}

/// Converts a storage-space X coordinate to pixel space at `target_zoom`.
///
/// One unit of the result is one pixel of a 256-pixel tile. Coarser zooms
/// use an arithmetic right shift (negative values stay negative), finer zooms
/// a left shift that is not overflow checked; see [`checked_get_x`].
///
/// # Example
/// ```
/// use mercator_coords::get_x;
///
/// assert_eq!(get_x(1 << 20, 18), 1 << 20);
/// assert_eq!(get_x(1 << 20, 0), 4);
/// assert_eq!(get_x(1 << 20, 19), 1 << 21);
/// assert_eq!(get_x(-1, 0), -1);
/// ```
pub fn get_x(mx: i32, target_zoom: i32) -> i32 {
    shift_by(mx, zoom_shift(target_zoom))
}

/// Converts a storage-space Y coordinate to pixel space at `target_zoom`.
///
/// Same arithmetic as [`get_x`].
pub fn get_y(my: i32, target_zoom: i32) -> i32 {
    shift_by(my, zoom_shift(target_zoom))
}

fn checked_rescale(value: i32, target_zoom: i32) -> Result<i32, MercatorError> {
    if !(0..=MAX_TARGET_ZOOM).contains(&target_zoom) {
        return Err(MercatorError::InvalidZoomLevel(target_zoom));
    }

    let shift = zoom_shift(target_zoom);
    let scaled = shift_by(value, shift);
    if shift < 0 && shift_by(scaled, -shift) != value {
        return Err(MercatorError::Overflow { value, target_zoom });
    }
    Ok(scaled)
}

/// Like [`get_x`], but rejects zoom levels outside `0..=MAX_TARGET_ZOOM` and
/// left shifts that would lose bits.
///
/// # Errors
///
/// - [`MercatorError::InvalidZoomLevel`] - `target_zoom` is out of range
/// - [`MercatorError::Overflow`] - the rescaled value does not fit in `i32`
pub fn checked_get_x(mx: i32, target_zoom: i32) -> Result<i32, MercatorError> {
    checked_rescale(mx, target_zoom)
}

/// Y-axis counterpart of [`checked_get_x`].
pub fn checked_get_y(my: i32, target_zoom: i32) -> Result<i32, MercatorError> {
    checked_rescale(my, target_zoom)
}

/// Index of the tile containing a storage coordinate at `target_zoom`.
///
/// Works for either axis.
pub fn tile_index(value: i32, target_zoom: i32) -> i32 {
    get_x(value, target_zoom) >> TILE_SHIFT
}

/// Maps a pixel coordinate at `target_zoom` back into storage space.
///
/// Returns the storage coordinate of the pixel's top-left corner, so for
/// zooms coarser than 18 the bits dropped by [`get_x`] come back as zeros.
pub fn zoom_to_storage(value: i32, target_zoom: i32) -> i32 {
    shift_by(value, zoom_shift(target_zoom).wrapping_neg())
}
