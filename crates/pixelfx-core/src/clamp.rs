//! Range-safe conversion from wide arithmetic back to 8-bit channels.
//!
//! Every algorithm that produces a channel value from integer or float math
//! goes through [`to_channel`], so boundary behaviour is identical everywhere:
//! values below 0 become 0, values above 255 become 255, anything in between
//! is rounded to the nearest integer (ties to even).

/// Smallest representable channel value.
pub const MIN_CHANNEL: u8 = u8::MIN;

/// Largest representable channel value.
pub const MAX_CHANNEL: u8 = u8::MAX;

/// Clamp a computed value into `0..=255` and convert it to a channel byte.
///
/// Accepts anything losslessly convertible to `f64` (`i32`, `u8`, `f32`, ...).
/// NaN maps to 0.
#[inline]
pub fn to_channel<T: Into<f64>>(value: T) -> u8 {
    let value: f64 = value.into();
    if value.is_nan() || value < MIN_CHANNEL as f64 {
        return MIN_CHANNEL;
    }
    if value > MAX_CHANNEL as f64 {
        return MAX_CHANNEL;
    }
    value.round_ties_even() as u8
}

/// Check whether `value` lies within `min..=max`.
#[inline]
pub fn is_between<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}
