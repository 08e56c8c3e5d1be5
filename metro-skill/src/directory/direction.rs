//! Travel direction along the line.

use std::fmt;

/// Direction of travel on the Green Line.
///
/// NexTrip addresses the two platforms of a station through separate
/// direction-coded requests, so every query is made once per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
}

impl Direction {
    /// The NexTrip path segment for this direction.
    ///
    /// These integers are the upstream API's own convention (2 = east,
    /// 3 = west) and must be sent exactly as-is.
    pub fn path_code(self) -> u8 {
        match self {
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Human-readable label used in spoken responses.
    pub fn label(self) -> &'static str {
        match self {
            Direction::East => "eastbound",
            Direction::West => "westbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_codes_match_upstream_convention() {
        assert_eq!(Direction::East.path_code(), 2);
        assert_eq!(Direction::West.path_code(), 3);
    }

    #[test]
    fn labels() {
        assert_eq!(Direction::East.label(), "eastbound");
        assert_eq!(Direction::West.label(), "westbound");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", Direction::East), "eastbound");
        assert_eq!(format!("{}", Direction::West), "westbound");
    }
}
