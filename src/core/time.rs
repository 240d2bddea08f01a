//! Timestamp arithmetic helpers.
//!
//! Absolute timestamps are `u64` microseconds since epoch. Per-point times
//! inside a cloud are fractional seconds relative to the cloud's last point.

/// Microseconds per second.
pub const US_PER_SEC: f64 = 1_000_000.0;

/// Shift an absolute microsecond timestamp by a signed fractional-second
/// offset, saturating at zero.
#[inline]
pub fn shift_us(base_us: u64, offset_sec: f64) -> u64 {
    let offset_us = (offset_sec * US_PER_SEC).round() as i64;
    if offset_us < 0 {
        base_us.saturating_sub(offset_us.unsigned_abs())
    } else {
        base_us.saturating_add(offset_us as u64)
    }
}

/// Convert a microsecond timestamp difference to seconds.
#[inline]
pub fn us_to_sec(us: u64) -> f64 {
    us as f64 / US_PER_SEC
}
