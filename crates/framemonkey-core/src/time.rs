//! Clock-style time formatting.
//!
//! Both formatters truncate toward zero; nothing is rounded to the
//! nearest unit. `format_timestamp` is parsed by the external compression
//! script, so its layout must not change.

/// Coerce a host-supplied seconds value into a usable one.
///
/// Negative, NaN and infinite values all become `0.0`.
#[inline]
pub fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

fn clock_fields(seconds: f64) -> (u64, u64, u64) {
    let seconds = sanitize_seconds(seconds);
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    (hours, minutes, secs)
}

/// Format seconds as `HH:MM:SS`.
///
/// Hours are not wrapped, so a 100 hour value renders as `100:00:00`.
pub fn format_time(seconds: f64) -> String {
    let (hours, minutes, secs) = clock_fields(seconds);
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format seconds as `HH:MM:SS.mmm` for the compression script.
pub fn format_timestamp(seconds: f64) -> String {
    let clean = sanitize_seconds(seconds);
    let millis = ((clean % 1.0) * 1000.0).floor() as u64;
    format!("{}.{millis:03}", format_time(clean))
}
