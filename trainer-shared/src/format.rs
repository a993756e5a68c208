//! Display helpers shared by the clients.

/// Format a playback position as `M:SS`.
///
/// Zero, negative and non-finite inputs render as `0:00`. Minutes are not
/// wrapped into hours.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Format an optional playback position; `None` renders as `0:00`.
#[must_use]
pub fn format_optional_time(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| format_time(0.0), format_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_missing() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_optional_time(None), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_optional_time(Some(3725.2)), "62:05");
    }
}
