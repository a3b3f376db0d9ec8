use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PacePilotError, Result, ValidationError};

/// One of the four quantities a run-walk plan is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RunDuration,
    WalkDuration,
    WalkPace,
    TargetPace,
}

impl Field {
    /// Validation order used when reporting invalid input
    pub const ALL: [Field; 4] = [
        Field::RunDuration,
        Field::WalkDuration,
        Field::WalkPace,
        Field::TargetPace,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::RunDuration => "Running segment duration",
            Field::WalkDuration => "Walking segment duration",
            Field::WalkPace => "Walking pace",
            Field::TargetPace => "Target average pace",
        }
    }

    /// Message shown when this field is zero or negative
    pub fn invalid_message(&self) -> &'static str {
        match self {
            Field::RunDuration => "Running segment duration must be positive.",
            Field::WalkDuration => "Walking segment duration must be positive.",
            Field::WalkPace => {
                "Walking pace must be a positive value (cannot be 0'00\" or less)."
            }
            Field::TargetPace => {
                "Target average pace must be a positive value (cannot be 0'00\" or less)."
            }
        }
    }

    pub fn is_pace(&self) -> bool {
        matches!(self, Field::WalkPace | Field::TargetPace)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A (minutes, seconds) pair as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinSec {
    pub minutes: u32,
    pub seconds: u32,
}

impl MinSec {
    pub fn new(minutes: u32, seconds: u32) -> Result<Self> {
        if seconds > 59 {
            return Err(ValidationError::SecondsOutOfRange { seconds }.into());
        }
        Ok(Self { minutes, seconds })
    }

    /// Convert to decimal minutes (`minutes + seconds / 60`)
    pub fn to_decimal_minutes(&self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }

    /// Nearest whole-second pair for a decimal-minutes value; negatives clamp to zero
    pub fn from_decimal_minutes(value: f64) -> Self {
        let total_seconds = (value.max(0.0) * 60.0).round() as u32;
        Self {
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
        }
    }
}

impl fmt::Display for MinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl FromStr for MinSec {
    type Err = PacePilotError;

    /// Accepts `7:30`, `7'30"`, `7'30` or a bare `7`
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let parse_err = |reason: &str| PacePilotError::Parse {
            token: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = token.strip_suffix('"').unwrap_or(token);
        let (min_part, sec_part) = match trimmed.split_once([':', '\'']) {
            Some((m, sec)) => (m, Some(sec)),
            None if trimmed.len() == token.len() => (trimmed, None),
            None => return Err(parse_err("seconds marker without minutes separator")),
        };

        let minutes =
            parse_digits(min_part).ok_or_else(|| parse_err("minutes must be a whole number"))?;
        let seconds = match sec_part {
            Some(sec) => {
                parse_digits(sec).ok_or_else(|| parse_err("seconds must be a whole number"))?
            }
            None => 0,
        };

        MinSec::new(minutes, seconds)
    }
}

/// Plain ASCII digits only; `u32::from_str` alone would also take a leading `+`
fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// The four inputs of one calculation, in decimal minutes
///
/// Durations are minutes per segment; paces are minutes per kilometre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunWalkPlan {
    /// Duration of each running segment (min)
    pub run_duration: f64,
    /// Duration of each walking break (min)
    pub walk_duration: f64,
    /// Brisk walking pace (min/km)
    pub walk_pace: f64,
    /// Desired overall average pace (min/km)
    pub target_pace: f64,
}

impl Default for RunWalkPlan {
    fn default() -> Self {
        Self {
            run_duration: 4.0,
            walk_duration: 1.0,
            walk_pace: 10.0,
            target_pace: 7.5,
        }
    }
}

impl RunWalkPlan {
    pub fn new(run_duration: f64, walk_duration: f64, walk_pace: f64, target_pace: f64) -> Self {
        Self {
            run_duration,
            walk_duration,
            walk_pace,
            target_pace,
        }
    }

    pub fn from_min_sec(run: MinSec, walk: MinSec, walk_pace: MinSec, target_pace: MinSec) -> Self {
        Self::new(
            run.to_decimal_minutes(),
            walk.to_decimal_minutes(),
            walk_pace.to_decimal_minutes(),
            target_pace.to_decimal_minutes(),
        )
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::RunDuration => self.run_duration,
            Field::WalkDuration => self.walk_duration,
            Field::WalkPace => self.walk_pace,
            Field::TargetPace => self.target_pace,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::RunDuration => self.run_duration = value,
            Field::WalkDuration => self.walk_duration = value,
            Field::WalkPace => self.walk_pace = value,
            Field::TargetPace => self.target_pace = value,
        }
    }

    /// Duration of one run segment plus one walk segment
    pub fn cycle_duration(&self) -> f64 {
        self.run_duration + self.walk_duration
    }

    /// Every field that is zero, negative or NaN, in validation order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| !is_positive(self.get(field)))
            .collect()
    }

    /// Fail on the first field that is not strictly positive
    pub fn validate(&self) -> Result<()> {
        match self.invalid_fields().first() {
            Some(&field) => Err(ValidationError::NotPositive {
                field,
                value: self.get(field),
            }
            .into()),
            None => Ok(()),
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
