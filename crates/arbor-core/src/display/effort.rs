//! Effort display as hours and minutes.

use std::fmt;

/// Formats an effort in hours as `1 h 30 min`, `2 h` or `45 min`.
///
/// Leftover minutes are truncated, not rounded; an effort below one minute
/// prints as `0 min`.
///
/// # Examples
///
/// ```rust
/// use arbor_core::display::EffortDuration;
///
/// assert_eq!(EffortDuration(1.5).to_string(), "1 h 30 min");
/// assert_eq!(EffortDuration(0.0).to_string(), "0 min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffortDuration(pub f64);

impl fmt::Display for EffortDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0.trunc();
        let hours = whole as u64;
        let minutes = ((self.0 - whole) * 60.0) as u64;

        match (hours, minutes) {
            (0, minutes) => write!(f, "{minutes} min"),
            (hours, 0) => write!(f, "{hours} h"),
            (hours, minutes) => write!(f, "{hours} h {minutes} min"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_effort() {
        assert_eq!(EffortDuration(0.0).to_string(), "0 min");
        assert_eq!(EffortDuration(-0.0).to_string(), "0 min");
    }

    #[test]
    fn test_whole_hours() {
        assert_eq!(EffortDuration(1.0).to_string(), "1 h");
        assert_eq!(EffortDuration(12.0).to_string(), "12 h");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(EffortDuration(1.5).to_string(), "1 h 30 min");
        assert_eq!(EffortDuration(2.25).to_string(), "2 h 15 min");
    }

    #[test]
    fn test_below_one_hour() {
        assert_eq!(EffortDuration(0.75).to_string(), "45 min");
        assert_eq!(EffortDuration(0.5).to_string(), "30 min");
    }

    #[test]
    fn test_partial_minutes_are_truncated() {
        // 0.01 h is 36 seconds
        assert_eq!(EffortDuration(0.01).to_string(), "0 min");
        // 1.999 h is 1 h 59.94 min
        assert_eq!(EffortDuration(1.999).to_string(), "1 h 59 min");
    }
}
