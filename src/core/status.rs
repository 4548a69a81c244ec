use serde::{Deserialize, Serialize};

/// Severity classification for a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    Good,
    Warning,
    Danger,
}

impl StatusLevel {
    /// CSS-style class name, kept for parity with web front ends consuming
    /// the same conventions.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Good => "good",
            StatusLevel::Warning => "warning",
            StatusLevel::Danger => "danger",
        }
    }
}

/// Classify a percentage value for a given metric kind.
///
/// CPU and memory share one threshold pair, disk is more lenient on the
/// warning side and stricter on the danger side. Unknown kinds classify as
/// Good rather than erroring, so a new metric never breaks the display.
pub fn status_level(value: f64, kind: &str) -> StatusLevel {
    match kind {
        "cpu" | "memory" => {
            if value < 70.0 {
                StatusLevel::Good
            } else if value < 90.0 {
                StatusLevel::Warning
            } else {
                StatusLevel::Danger
            }
        }
        "disk" => {
            if value < 80.0 {
                StatusLevel::Good
            } else if value < 95.0 {
                StatusLevel::Warning
            } else {
                StatusLevel::Danger
            }
        }
        _ => StatusLevel::Good,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_thresholds() {
        assert_eq!(status_level(65.0, "cpu"), StatusLevel::Good);
        assert_eq!(status_level(75.0, "cpu"), StatusLevel::Warning);
        assert_eq!(status_level(95.0, "cpu"), StatusLevel::Danger);
    }

    #[test]
    fn test_memory_matches_cpu_thresholds() {
        assert_eq!(status_level(69.9, "memory"), StatusLevel::Good);
        assert_eq!(status_level(70.0, "memory"), StatusLevel::Warning);
        assert_eq!(status_level(90.0, "memory"), StatusLevel::Danger);
    }

    #[test]
    fn test_disk_thresholds() {
        // 75% disk is fine where 75% cpu already warns
        assert_eq!(status_level(75.0, "disk"), StatusLevel::Good);
        assert_eq!(status_level(85.0, "disk"), StatusLevel::Warning);
        assert_eq!(status_level(95.0, "disk"), StatusLevel::Danger);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_good() {
        assert_eq!(status_level(85.0, "gpu"), StatusLevel::Good);
        assert_eq!(status_level(99.0, ""), StatusLevel::Good);
    }
}
