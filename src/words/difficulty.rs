use serde::{Deserialize, Serialize};

/// Seconds of play granted per row of the grid
pub const SECONDS_PER_ROW: u32 = 15;

/// Play time for a `size`x`size` grid, saturating instead of overflowing
pub fn time_limit_for_size(size: usize) -> u32 {
    u32::try_from(size)
        .unwrap_or(u32::MAX)
        .saturating_mul(SECONDS_PER_ROW)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 12,
            Difficulty::Hard => 15,
        }
    }

    pub fn word_count(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 10,
            Difficulty::Hard => 12,
        }
    }

    pub fn time_limit_secs(self) -> u32 {
        time_limit_for_size(self.grid_size())
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Easy.grid_size(), 8);
        assert_eq!(Difficulty::Medium.word_count(), 10);
        assert_eq!(Difficulty::Hard.grid_size(), 15);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 225);
    }

    #[test]
    fn test_time_limit_saturates() {
        assert_eq!(time_limit_for_size(20), 300);
        assert_eq!(time_limit_for_size(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_serde_names() {
        let parsed: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Difficulty::Medium);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                serde_json::to_value(difficulty).unwrap(),
                serde_json::json!(difficulty.name())
            );
        }
    }
}
