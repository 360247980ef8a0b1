use std::fmt;

use reachmap_core::{Point, Range};

/// Errors reported by [`Algorithm::analyze`](crate::Algorithm::analyze).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The start point lies outside the grid.
    StartOutOfBounds { start: Point, bounds: Range },
    /// The start point references a blocked tile.
    StartBlocked(Point),
    /// The algorithm's buffers were sized for a different grid.
    SizeMismatch { expected: Point, found: Point },
    /// The run needed more cell visits than the configured budget allows.
    /// Buffers hold partial results until the next `analyze`.
    ResourceExhausted { limit: u64 },
}

impl AnalyzeError {
    /// Whether the error is caused by an unusable start point.
    pub fn is_invalid_start(&self) -> bool {
        matches!(self, Self::StartOutOfBounds { .. } | Self::StartBlocked(_))
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { start, bounds } => {
                write!(f, "start {start} is outside grid bounds {bounds}")
            }
            Self::StartBlocked(start) => write!(f, "start {start} is a blocked tile"),
            Self::SizeMismatch { expected, found } => write!(
                f,
                "algorithm sized for {}x{} grid, got {}x{}",
                expected.x, expected.y, found.x, found.y
            ),
            Self::ResourceExhausted { limit } => {
                write!(f, "traversal exceeded visit budget of {limit}")
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_start_grouping() {
        assert!(AnalyzeError::StartBlocked(Point::new(1, 1)).is_invalid_start());
        assert!(
            AnalyzeError::StartOutOfBounds {
                start: Point::new(9, 0),
                bounds: Range::new(0, 0, 3, 3),
            }
            .is_invalid_start()
        );
        assert!(!AnalyzeError::ResourceExhausted { limit: 10 }.is_invalid_start());
    }

    #[test]
    fn display_messages() {
        let e = AnalyzeError::StartOutOfBounds {
            start: Point::new(5, -1),
            bounds: Range::new(0, 0, 3, 3),
        };
        assert_eq!(
            e.to_string(),
            "start (5, -1) is outside grid bounds [(0, 0)-(3, 3))"
        );
        let e = AnalyzeError::SizeMismatch {
            expected: Point::new(4, 4),
            found: Point::new(2, 3),
        };
        assert_eq!(e.to_string(), "algorithm sized for 4x4 grid, got 2x3");
    }
}
