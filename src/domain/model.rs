use crate::utils::error::{AocError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A puzzle day, 1 through 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 25;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AocError::InvalidDay {
                value: u32::from(value),
            })
        }
    }

    /// Builds a day from a constant; out-of-range values fail const evaluation.
    pub(crate) const fn of(value: u8) -> Self {
        assert!(value >= Self::FIRST && value <= Self::LAST, "day out of range");
        Self(value)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Day {
    type Error = AocError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = AocError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(AocError::InvalidPart {
                value: u32::from(other),
            }),
        }
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        part.number()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PartOutcome {
    Solved { answer: u64 },
    Failed { error: String },
}

impl PartOutcome {
    pub fn answer(&self) -> Option<u64> {
        match self {
            PartOutcome::Solved { answer } => Some(*answer),
            PartOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PartOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartReport {
    pub part: Part,
    #[serde(flatten)]
    pub outcome: PartOutcome,
    pub elapsed_us: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayReport {
    pub day: Day,
    pub title: String,
    pub parts: Vec<PartReport>,
}

impl DayReport {
    pub fn answer(&self, part: Part) -> Option<u64> {
        self.parts
            .iter()
            .find(|report| report.part == part)
            .and_then(|report| report.outcome.answer())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub days: Vec<DayReport>,
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub fn day(&self, day: Day) -> Option<&DayReport> {
        self.days.iter().find(|report| report.day == day)
    }

    pub fn failures(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| day.parts.iter())
            .filter(|part| part.outcome.is_failed())
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

/// Output format of a run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
