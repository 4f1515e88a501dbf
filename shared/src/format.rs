//! Display formatting for numeric values coming off the wire.

/// Render a `[0, 1]` fraction as a percentage with one decimal,
/// e.g. `0.957` -> `"95.7%"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Render a duration in seconds with two decimals, e.g. `1.234` -> `"1.23s"`.
pub fn seconds(secs: f64) -> String {
    format!("{:.2}s", secs)
}

/// Render a byte count in megabytes with two decimals.
pub fn megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(percent(0.957), "95.7%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(1.0), "100.0%");
    }

    #[test]
    fn test_seconds_two_decimals() {
        assert_eq!(seconds(1.234), "1.23s");
        assert_eq!(seconds(0.0), "0.00s");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(megabytes(2 * 1024 * 1024), "2.00 MB");
        assert_eq!(megabytes(1_572_864), "1.50 MB");
    }
}
