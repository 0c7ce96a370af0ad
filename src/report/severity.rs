use owo_colors::OwoColorize;
use std::fmt;

/// Scores at or above this are at least a warning.
pub const WARNING_THRESHOLD: i64 = 1000;
/// Scores at or above this are dangerous.
pub const DANGER_THRESHOLD: i64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

/// Maps a RugCheck risk score onto a severity band. Lower bounds are inclusive.
pub fn classify(score: i64) -> Severity {
    if score < WARNING_THRESHOLD {
        Severity::Good
    } else if score < DANGER_THRESHOLD {
        Severity::Warning
    } else {
        Severity::Danger
    }
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Warning => "Warning",
            Severity::Danger => "Danger",
        }
    }

    pub fn paint(self, colored: bool) -> String {
        if !colored {
            return self.label().to_string();
        }
        match self {
            Severity::Good => self.label().green().to_string(),
            Severity::Warning => self.label().yellow().to_string(),
            Severity::Danger => self.label().red().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
