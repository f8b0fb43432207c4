//! Egg hardness options and their fixed boiling times

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the user likes their eggs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HardnessOption {
    Soft,
    Medium,
    Hard,
}

impl HardnessOption {
    /// Every option, in the order they are offered to the user
    pub const ALL: [HardnessOption; 3] = [Self::Soft, Self::Medium, Self::Hard];

    /// Boiling time in whole seconds
    pub fn total_seconds(self) -> u64 {
        match self {
            Self::Soft => 300,
            Self::Medium => 420,
            Self::Hard => 720,
        }
    }

    /// Upper-case display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Soft => "SOFT",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for HardnessOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when text does not name one of the hardness options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHardnessError(pub String);

impl fmt::Display for ParseHardnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hardness '{}', expected soft, medium or hard", self.0)
    }
}

impl std::error::Error for ParseHardnessError {}

impl FromStr for HardnessOption {
    type Err = ParseHardnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseHardnessError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_match_the_table() {
        assert_eq!(HardnessOption::Soft.total_seconds(), 300);
        assert_eq!(HardnessOption::Medium.total_seconds(), 420);
        assert_eq!(HardnessOption::Hard.total_seconds(), 720);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("soft".parse::<HardnessOption>(), Ok(HardnessOption::Soft));
        assert_eq!("MEDIUM".parse::<HardnessOption>(), Ok(HardnessOption::Medium));
        assert_eq!(" Hard ".parse::<HardnessOption>(), Ok(HardnessOption::Hard));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "runny".parse::<HardnessOption>().unwrap_err();
        assert_eq!(err, ParseHardnessError("runny".to_string()));
        assert!(err.to_string().contains("runny"));
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&HardnessOption::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        for option in HardnessOption::ALL {
            assert_eq!(option.to_string(), option.name());
        }
    }
}
