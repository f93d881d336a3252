use num_traits::Float;

use crate::error::Error;

/// Affine interpolation of `value` from range [in_min, in_max]
/// to range [out_min, out_max]. The input is never clamped: values
/// outside [in_min, in_max] extrapolate linearly, which keeps an
/// off-scale signal average moving past the visible meter band
/// instead of sticking to its edge.
///
/// A collapsed input range (in_min == in_max) returns
/// [Error::DegenerateRange].
pub fn map_to_range<T: Float>(
    value: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> Result<T, Error> {
    if in_max == in_min {
        return Err(Error::DegenerateRange);
    }

    Ok(out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min))
}
